use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BoolLiteral, FunctionCall, Identifier, IntLiteral, ListLiteral, PrefixExpr,
            StringLiteral,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::escape, tokens::TokenKind},
};

use super::parser::Parser;

/// Parses the expression starting at the peek token.
///
/// Every call site has just consumed the token in front of the expression
/// (`=`, `(`, `,`, a keyword), so the decision is made on the peek token.
/// On success the cursor is left one past the expression. `context` describes
/// the slot being filled, for the error when the peek cannot start one.
pub fn parse_expr(parser: &mut Parser, context: &str) -> Option<Expr> {
    if parser.error_if(!parser.peek().kind.starts_expression(), |p| {
        Error::at(
            p.peek(),
            ErrorImpl::NotAnExpression {
                token: p.peek().literal(),
                context: context.to_string(),
            },
        )
    }) {
        return None;
    }

    parser.advance();
    parse_operand(parser)
}

/// Parses the expression starting at the current token.
pub fn parse_operand(parser: &mut Parser) -> Option<Expr> {
    if !parser.descend() {
        return None;
    }

    let kind = parser.current_token_kind();
    let expr = match parser.get_nud_lookup().get(&kind).copied() {
        Some(nud_fn) => nud_fn(parser),
        None => {
            parser.error_if(true, |p| {
                Error::at(
                    p.current_token(),
                    ErrorImpl::NotAnExpression {
                        token: p.current_token().literal(),
                        context: String::from("expression"),
                    },
                )
            });
            None
        }
    };

    parser.ascend();
    expr
}

pub fn parse_string_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.advance().clone();

    Some(Expr::String(StringLiteral {
        value: token.value.clone(),
        raw: escape(&token.value),
        token,
    }))
}

pub fn parse_int_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    let value = match token.value.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            parser.error_if(true, |p| {
                Error::at(
                    p.current_token(),
                    ErrorImpl::NumberParseError {
                        token: p.current_token().value.clone(),
                    },
                )
            });
            return None;
        }
    };

    parser.advance();
    Some(Expr::Int(IntLiteral { value, token }))
}

pub fn parse_bool_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.advance().clone();

    Some(Expr::Bool(BoolLiteral {
        value: token.value == "true",
        token,
    }))
}

/// A bare identifier, or a call when followed by `(` or `::`.
pub fn parse_identifier_expr(parser: &mut Parser) -> Option<Expr> {
    match parser.peek().kind {
        TokenKind::OpenParen => parse_function_call(parser, None).map(Expr::Call),
        TokenKind::DoubleColon => parse_namespaced_call(parser).map(Expr::Call),
        _ => {
            let token = parser.advance().clone();
            Some(Expr::Identifier(Identifier::from_token(&token)))
        }
    }
}

pub fn parse_list_expr(parser: &mut Parser) -> Option<Expr> {
    parse_list_literal(parser).map(Expr::List)
}

/// `[a, b, c]`, entered on the opening bracket.
pub fn parse_list_literal(parser: &mut Parser) -> Option<ListLiteral> {
    let token = parser.current_token().clone();
    let elements = parse_delimited(parser, TokenKind::CloseBracket, "list element", "list literal")?;

    Some(ListLiteral { elements, token })
}

/// `name(args)`, entered on the name.
///
/// `namespace` is set when called through [`parse_namespaced_call`]; it is
/// only used to name the function in errors and to fill in the node.
pub fn parse_function_call(
    parser: &mut Parser,
    namespace: Option<Identifier>,
) -> Option<FunctionCall> {
    let name = Identifier::from_token(parser.current_token());
    let qualified = match &namespace {
        Some(namespace) => format!("{}::{}", namespace.name, name.name),
        None => name.name.clone(),
    };

    parser.advance();
    if parser.error_if(!parser.current_is(TokenKind::OpenParen), |p| {
        Error::at(
            p.current_token(),
            ErrorImpl::ExpectedToken {
                token: p.current_token().literal(),
                expected: format!("'(' in function call '{}'", qualified),
            },
        )
    }) {
        return None;
    }

    let context = format!("function call '{}'", qualified);
    let args = parse_delimited(
        parser,
        TokenKind::CloseParen,
        &format!("argument to {}", context),
        &context,
    )?;

    Some(FunctionCall {
        name,
        args,
        namespace,
    })
}

/// `Namespace::name(args)`, entered on the namespace.
pub fn parse_namespaced_call(parser: &mut Parser) -> Option<FunctionCall> {
    let namespace = Identifier::from_token(parser.current_token());

    parser.expect_error(TokenKind::DoubleColon, "'::'")?;
    parser.expect_error(TokenKind::Identifier, "a function name")?;

    parse_function_call(parser, Some(namespace))
}

/// Comma separated expressions up to `closer`, entered on the opening token.
///
/// Newlines may appear around the items, a trailing comma before the closer
/// is accepted, and an empty list is allowed. A comma with no item in front
/// of it is an error.
fn parse_delimited(
    parser: &mut Parser,
    closer: TokenKind,
    element: &str,
    context: &str,
) -> Option<Vec<Expr>> {
    let mut items = vec![];

    loop {
        parser.eat_peek(TokenKind::Newline);

        if parser.peek_is(closer) {
            parser.advance();
            parser.advance();
            return Some(items);
        }

        if parser.error_if(parser.peek_is(TokenKind::EOF), |p| {
            Error::at(
                p.peek(),
                ErrorImpl::UnexpectedEof {
                    context: format!("unclosed {}", context),
                },
            )
        }) {
            return None;
        }

        if parser.error_if(parser.peek_is(TokenKind::Comma), |p| {
            Error::at(
                p.peek(),
                ErrorImpl::RedundantComma {
                    context: context.to_string(),
                },
            )
        }) {
            return None;
        }

        items.push(parse_expr(parser, element)?);
        parser.eat(TokenKind::Newline);

        if parser.error_if(parser.current_is(TokenKind::EOF), |p| {
            Error::at(
                p.current_token(),
                ErrorImpl::UnexpectedEof {
                    context: format!("unclosed {}", context),
                },
            )
        }) {
            return None;
        }

        if parser.current_is(closer) {
            parser.advance();
            return Some(items);
        }

        if parser.error_if(!parser.current_is(TokenKind::Comma), |p| {
            Error::at(
                p.current_token(),
                ErrorImpl::MissingComma {
                    token: p.current_token().literal(),
                    context: context.to_string(),
                },
            )
        }) {
            return None;
        }
    }
}

/// `(op arg arg ...)`, entered on the opening parenthesis.
///
/// Any number of arguments is accepted for every operator, including none.
pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    if parser.error_if(parser.peek_is(TokenKind::EOF), |p| {
        Error::at(
            p.current_token(),
            ErrorImpl::UnexpectedEof {
                context: String::from("expected an operator after '('"),
            },
        )
    }) {
        return None;
    }

    if parser.error_if(parser.peek_is(TokenKind::CloseParen), |p| {
        Error::at(p.current_token(), ErrorImpl::MissingOperator)
    }) {
        return None;
    }

    if parser.error_if(!parser.peek().kind.is_operator(), |p| {
        Error::at(
            p.peek(),
            ErrorImpl::UnknownOperator {
                operator: p.peek().literal(),
            },
        )
    }) {
        return None;
    }

    parser.advance();
    let operator = parser.advance().clone();

    let mut args = vec![];
    loop {
        parser.eat(TokenKind::Newline);

        if parser.current_is(TokenKind::CloseParen) {
            break;
        }

        if parser.error_if(parser.current_is(TokenKind::EOF), |p| {
            Error::at(
                p.current_token(),
                ErrorImpl::UnexpectedEof {
                    context: String::from("expected a closing ')'"),
                },
            )
        }) {
            return None;
        }

        if parser.error_if(!parser.current_token_kind().starts_expression(), |p| {
            Error::at(
                p.current_token(),
                ErrorImpl::NotAnExpression {
                    token: p.current_token().literal(),
                    context: format!("argument to operator '{}'", operator.value),
                },
            )
        }) {
            return None;
        }

        args.push(parse_operand(parser)?);
    }

    // ')'
    parser.advance();

    Some(Expr::Prefix(PrefixExpr {
        operator,
        args,
        token,
    }))
}
