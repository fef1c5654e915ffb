use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::Identifier,
        statements::{
            BlockStatement, BreakStatement, ContinueStatement, DatatypeDeclaration, DatatypeField,
            ElseStatement, FunctionDeclaration, FunctionParam, IfStatement, ListVariableDecl,
            LoopStatement, ReassignmentStatement, ReturnStatement, VariableDeclaration,
        },
        types::DataType,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    expr::{parse_expr, parse_list_literal, parse_operand},
    parser::Parser,
    types::parse_type,
};

/// Parses one statement starting at the current token.
///
/// Blank lines are consumed here and yield no statement. Tokens that cannot
/// start a statement are reported once for a whole run of them.
pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    let kind = parser.current_token_kind();
    match kind {
        TokenKind::EOF => return None,
        TokenKind::Newline => {
            parser.advance();
            return None;
        }
        _ => {}
    }

    let stmt_fn = match parser.get_stmt_lookup().get(&kind).copied() {
        Some(stmt_fn) => stmt_fn,
        None => {
            let error = Error::at(
                parser.current_token(),
                ErrorImpl::UnexpectedToken {
                    token: parser.current_token().literal(),
                },
            );
            parser.record(error);
            parser.eat(kind);
            return None;
        }
    };

    if !parser.descend() {
        return None;
    }
    let stmt = stmt_fn(parser);
    parser.ascend();

    stmt
}

/// Requires the current token to be the terminating dot and moves past it.
fn end_of_statement(parser: &mut Parser, construct: &str) -> Option<()> {
    if parser.error_if(!parser.current_is(TokenKind::Dot), |p| {
        Error::at(
            p.current_token(),
            ErrorImpl::MissingDot {
                token: p.current_token().literal(),
                construct: construct.to_string(),
            },
        )
    }) {
        return None;
    }

    parser.advance();
    Some(())
}

/// Statements up to `closer`, entered on the first token after the opener.
/// The closer is consumed.
fn parse_body(parser: &mut Parser, closer: TokenKind, construct: &str) -> Option<Vec<Stmt>> {
    let mut body = vec![];

    loop {
        parser.eat(TokenKind::Newline);

        if parser.current_is(closer) {
            parser.advance();
            return Some(body);
        }

        if parser.error_if(parser.current_is(TokenKind::EOF), |p| {
            Error::at(
                p.current_token(),
                ErrorImpl::UnexpectedEof {
                    context: format!("unclosed {}", construct),
                },
            )
        }) {
            return None;
        }

        if let Some(stmt) = parse_stmt(parser) {
            body.push(stmt);
        }
    }
}

/// Requires the current token to be `{` and moves past it.
fn open_curly(parser: &mut Parser, construct: &str) -> Option<()> {
    if parser.error_if(!parser.current_is(TokenKind::OpenCurly), |p| {
        Error::at(
            p.current_token(),
            ErrorImpl::ExpectedToken {
                token: p.current_token().literal(),
                expected: format!("'{{' in {}", construct),
            },
        )
    }) {
        return None;
    }

    parser.advance();
    Some(())
}

// EXPRESSION STATEMENTS

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Stmt> {
    let expr = parse_operand(parser)?;

    let construct = match &expr {
        Expr::Prefix(_) => String::from("prefix expression"),
        Expr::Call(call) => format!("function call '{}'", call.qualified_name()),
        _ => String::from("a statement"),
    };
    end_of_statement(parser, &construct)?;

    Some(Stmt::Expression(expr))
}

/// An identifier starts a reassignment (`x = ...`), a declaration with a user
/// type (`User u = ...`) or an expression statement (`x.`, `f(x).`,
/// `Math::pow(x).`); the peek token decides.
pub fn parse_identifier_stmt(parser: &mut Parser) -> Option<Stmt> {
    match parser.peek().kind {
        TokenKind::Equal => parse_reassignment_stmt(parser),
        TokenKind::Identifier => parse_var_decl_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

// DECLARATIONS

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Option<Stmt> {
    let data_type = parse_type(parser, "variable declaration")?;
    let identifier = Identifier::from_token(&parser.expect_error(TokenKind::Identifier, "an identifier")?);
    parser.expect_error(TokenKind::Equal, "an equal sign")?;

    if parser.error_if(parser.peek_is(TokenKind::Dot), |p| {
        Error::at(
            p.peek(),
            ErrorImpl::MissingValue {
                context: String::from("variable declaration"),
            },
        )
    }) {
        return None;
    }

    let value = parse_expr(parser, "value in variable declaration")?;
    end_of_statement(parser, "a statement")?;

    Some(Stmt::VariableDeclaration(VariableDeclaration {
        data_type,
        identifier,
        value,
    }))
}

pub fn parse_list_decl_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();

    if parser.error_if(!parser.peek().kind.starts_type(), |p| {
        Error::at(
            p.peek(),
            ErrorImpl::NotAType {
                token: p.peek().literal(),
                context: String::from("list"),
            },
        )
    }) {
        return None;
    }
    parser.advance();

    let element_type = parse_type(parser, "list")?;
    let identifier = Identifier::from_token(
        &parser.expect_error(TokenKind::Identifier, "an identifier in list declaration")?,
    );
    parser.expect_error(TokenKind::Equal, "an equal sign")?;
    parser.expect_error(TokenKind::OpenBracket, "'['")?;

    let list = parse_list_literal(parser)?;
    end_of_statement(parser, "a list declaration")?;

    Some(Stmt::ListVariableDecl(ListVariableDecl {
        element_type,
        identifier,
        list,
        token,
    }))
}

pub fn parse_reassignment_stmt(parser: &mut Parser) -> Option<Stmt> {
    let identifier = Identifier::from_token(parser.current_token());
    // '='
    parser.advance();

    if parser.error_if(parser.peek_is(TokenKind::Dot), |p| {
        Error::at(
            p.peek(),
            ErrorImpl::MissingValue {
                context: String::from("reassignment"),
            },
        )
    }) {
        return None;
    }

    let new_value = parse_expr(parser, "new value in reassignment")?;
    end_of_statement(parser, "a reassignment")?;

    Some(Stmt::Reassignment(ReassignmentStatement {
        identifier,
        new_value,
    }))
}

/// ```text
/// datatype City {
///     string name
///     listof Street streets
/// }
/// ```
pub fn parse_datatype_decl_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();
    let name = Identifier::from_token(&parser.expect_error(TokenKind::Identifier, "a datatype name")?);
    parser.expect_error(TokenKind::OpenCurly, "'{' in datatype declaration")?;
    parser.advance();
    parser.eat(TokenKind::Newline);

    let mut fields = vec![];
    loop {
        if parser.error_if(parser.current_is(TokenKind::EOF), |p| {
            Error::at(
                p.current_token(),
                ErrorImpl::UnexpectedEof {
                    context: String::from("unclosed datatype declaration"),
                },
            )
        }) {
            return None;
        }

        if parser.current_is(TokenKind::CloseCurly) {
            parser.advance();
            break;
        }

        fields.push(parse_datatype_field(parser)?);
        parser.eat(TokenKind::Newline);
    }

    Some(Stmt::DatatypeDeclaration(DatatypeDeclaration {
        name,
        fields,
        token,
    }))
}

/// One `type name` line; the line break after it is required and consumed.
fn parse_datatype_field(parser: &mut Parser) -> Option<DatatypeField> {
    let data_type = parse_type(parser, "datatype field")?;
    let identifier = Identifier::from_token(&parser.expect_error(TokenKind::Identifier, "a field name")?);
    parser.advance();

    if parser.error_if(!parser.current_is(TokenKind::Newline), |p| {
        Error::at(
            p.current_token(),
            ErrorImpl::ExpectedToken {
                token: p.current_token().literal(),
                expected: String::from("a newline after datatype field"),
            },
        )
    }) {
        return None;
    }
    parser.advance();

    Some(DatatypeField {
        data_type,
        identifier,
    })
}

/// `fun name(int a, User b) -> int, string { ... }`
pub fn parse_fun_decl_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();
    let name = Identifier::from_token(&parser.expect_error(TokenKind::Identifier, "a function name")?);
    parser.expect_error(TokenKind::OpenParen, "'(' after function name")?;

    let params = parse_fun_params(parser)?;

    if parser.error_if(!parser.current_is(TokenKind::Arrow), |p| {
        Error::at(
            p.current_token(),
            ErrorImpl::ExpectedToken {
                token: p.current_token().literal(),
                expected: String::from("'->' before return types"),
            },
        )
    }) {
        return None;
    }

    let return_types = parse_return_types(parser)?;
    open_curly(parser, "function declaration")?;
    let body = parse_body(parser, TokenKind::CloseCurly, "function declaration")?;

    Some(Stmt::FunctionDeclaration(FunctionDeclaration {
        name,
        params,
        return_types,
        body,
        token,
    }))
}

/// Entered on `(`, leaves the cursor one past `)`.
fn parse_fun_params(parser: &mut Parser) -> Option<Vec<FunctionParam>> {
    let mut params = vec![];

    loop {
        parser.eat_peek(TokenKind::Newline);

        if parser.peek_is(TokenKind::CloseParen) {
            parser.advance();
            parser.advance();
            return Some(params);
        }

        if parser.error_if(parser.peek_is(TokenKind::EOF), |p| {
            Error::at(
                p.peek(),
                ErrorImpl::UnexpectedEof {
                    context: String::from("unclosed parameter list"),
                },
            )
        }) {
            return None;
        }

        if parser.error_if(parser.peek_is(TokenKind::Comma), |p| {
            Error::at(
                p.peek(),
                ErrorImpl::RedundantComma {
                    context: String::from("parameter list"),
                },
            )
        }) {
            return None;
        }

        if parser.error_if(!parser.peek().kind.starts_type(), |p| {
            Error::at(
                p.peek(),
                ErrorImpl::NotAType {
                    token: p.peek().literal(),
                    context: String::from("function parameter"),
                },
            )
        }) {
            return None;
        }
        parser.advance();

        let data_type = parse_type(parser, "function parameter")?;
        let identifier = Identifier::from_token(&parser.expect_error(TokenKind::Identifier, "a parameter name")?);
        params.push(FunctionParam {
            data_type,
            identifier,
        });

        parser.advance();
        parser.eat(TokenKind::Newline);

        if parser.error_if(parser.current_is(TokenKind::EOF), |p| {
            Error::at(
                p.current_token(),
                ErrorImpl::UnexpectedEof {
                    context: String::from("unclosed parameter list"),
                },
            )
        }) {
            return None;
        }

        if parser.current_is(TokenKind::CloseParen) {
            parser.advance();
            return Some(params);
        }

        if parser.error_if(!parser.current_is(TokenKind::Comma), |p| {
            Error::at(
                p.current_token(),
                ErrorImpl::MissingComma {
                    token: p.current_token().literal(),
                    context: String::from("parameter list"),
                },
            )
        }) {
            return None;
        }
    }
}

/// Entered on `->`, leaves the cursor on the token after the last type.
/// `-> {` declares no return values.
fn parse_return_types(parser: &mut Parser) -> Option<Vec<DataType>> {
    let mut types = vec![];

    if parser.peek_is(TokenKind::OpenCurly) {
        parser.advance();
        return Some(types);
    }

    loop {
        let trailing_comma = !types.is_empty() && parser.peek_is(TokenKind::OpenCurly);
        if parser.error_if(!parser.peek().kind.starts_type(), |p| {
            let error = if trailing_comma {
                ErrorImpl::RedundantComma {
                    context: String::from("return types"),
                }
            } else {
                ErrorImpl::NotAType {
                    token: p.peek().literal(),
                    context: String::from("function return"),
                }
            };
            Error::at(p.peek(), error)
        }) {
            return None;
        }
        parser.advance();

        types.push(parse_type(parser, "function return")?);
        parser.advance();

        if !parser.current_is(TokenKind::Comma) {
            return Some(types);
        }
        parser.eat_peek(TokenKind::Newline);
    }
}

// CONTROL FLOW

pub fn parse_block_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.advance().clone();
    let body = parse_body(parser, TokenKind::End, "block statement")?;

    Some(Stmt::Block(BlockStatement { body, token }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Option<Stmt> {
    parse_if(parser, "if").map(Stmt::If)
}

/// `if`/`elseif` with its body and whatever follows it in the chain.
///
/// The chain may continue on a later line. A fault anywhere in the chain
/// drops the whole statement.
fn parse_if(parser: &mut Parser, keyword: &str) -> Option<IfStatement> {
    let token = parser.current_token().clone();
    let construct = format!("{} statement", keyword);

    if parser.error_if(parser.peek_is(TokenKind::OpenCurly), |p| {
        Error::at(
            p.peek(),
            ErrorImpl::MissingCondition {
                context: construct.clone(),
            },
        )
    }) {
        return None;
    }

    let condition = parse_expr(parser, &format!("condition to {}", construct))?;
    open_curly(parser, &construct)?;
    let body = parse_body(parser, TokenKind::CloseCurly, &construct)?;

    parser.eat(TokenKind::Newline);

    let mut alternative = None;
    let mut default = None;
    match parser.current_token_kind() {
        TokenKind::Elseif => {
            if !parser.descend() {
                return None;
            }
            let elseif = parse_if(parser, "elseif");
            parser.ascend();
            alternative = Some(Box::new(elseif?));
        }
        TokenKind::Else => default = Some(parse_else(parser)?),
        _ => {}
    }

    Some(IfStatement {
        condition,
        body,
        alternative,
        default,
        token,
    })
}

fn parse_else(parser: &mut Parser) -> Option<ElseStatement> {
    let token = parser.current_token().clone();
    parser.expect_error(TokenKind::OpenCurly, "'{' in else statement")?;
    parser.advance();
    let body = parse_body(parser, TokenKind::CloseCurly, "else statement")?;

    Some(ElseStatement { body, token })
}

pub fn parse_loop_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();

    if parser.error_if(parser.peek_is(TokenKind::OpenCurly), |p| {
        Error::at(
            p.peek(),
            ErrorImpl::MissingCondition {
                context: String::from("loop statement"),
            },
        )
    }) {
        return None;
    }

    let condition = parse_expr(parser, "condition to loop statement")?;
    open_curly(parser, "loop statement")?;
    let body = parse_body(parser, TokenKind::CloseCurly, "loop statement")?;

    Some(Stmt::Loop(LoopStatement {
        condition,
        body,
        token,
    }))
}

/// `return a.` or, for several values, `return a, b.`
pub fn parse_return_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();

    if parser.error_if(parser.peek_is(TokenKind::Dot), |p| {
        Error::at(
            p.peek(),
            ErrorImpl::MissingValue {
                context: String::from("return statement"),
            },
        )
    }) {
        return None;
    }

    let mut values = vec![parse_expr(parser, "return value")?];
    while parser.current_is(TokenKind::Comma) {
        values.push(parse_expr(parser, "return value")?);
    }
    end_of_statement(parser, "a return statement")?;

    Some(Stmt::Return(ReturnStatement { values, token }))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = bare_keyword(parser, "a break statement")?;
    Some(Stmt::Break(BreakStatement { token }))
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = bare_keyword(parser, "a continue statement")?;
    Some(Stmt::Continue(ContinueStatement { token }))
}

/// A keyword that must be followed directly by a dot.
fn bare_keyword(parser: &mut Parser, construct: &str) -> Option<Token> {
    let token = parser.current_token().clone();

    if parser.error_if(!parser.peek_is(TokenKind::Dot), |p| {
        Error::at(
            p.peek(),
            ErrorImpl::MissingDot {
                token: p.peek().literal(),
                construct: construct.to_string(),
            },
        )
    }) {
        return None;
    }

    parser.advance();
    parser.advance();
    Some(token)
}

// ERRORS

pub fn parse_dangling_else_stmt(parser: &mut Parser) -> Option<Stmt> {
    parser.error_if(true, |p| Error::at(p.current_token(), ErrorImpl::DanglingElse));
    None
}

pub fn parse_illegal_stmt(parser: &mut Parser) -> Option<Stmt> {
    parser.error_if(true, |p| {
        Error::at(
            p.current_token(),
            ErrorImpl::IllegalToken {
                token: p.current_token().literal(),
            },
        )
    });
    None
}
