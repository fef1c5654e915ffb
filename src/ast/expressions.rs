use crate::lexer::tokens::Token;

use super::ast::Expr;

// LITERALS

/// String Literal
/// `value` holds the unescaped contents of a `"..."` token; `raw` is that
/// content escaped again, the text to write between quotes to get it back.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
    pub raw: String,
    pub token: Token,
}

/// Int Literal
#[derive(Debug, Clone, PartialEq)]
pub struct IntLiteral {
    pub value: i64,
    pub token: Token,
}

/// Bool Literal
#[derive(Debug, Clone, PartialEq)]
pub struct BoolLiteral {
    pub value: bool,
    pub token: Token,
}

/// Identifier
/// A bare name; also used for callee, namespace and declared names.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub token: Token,
}

impl Identifier {
    pub fn from_token(token: &Token) -> Self {
        Identifier {
            name: token.value.clone(),
            token: token.clone(),
        }
    }
}

// COMPLEX

/// List Literal
/// `[a, b, c]`; `token` is the opening bracket.
#[derive(Debug, Clone, PartialEq)]
pub struct ListLiteral {
    pub elements: Vec<Expr>,
    pub token: Token,
}

/// Prefix Expression
/// Fully parenthesised `(op arg arg ...)`. The number of arguments is not
/// checked against the operator here.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: Token,
    pub args: Vec<Expr>,
    /// The opening parenthesis.
    pub token: Token,
}

/// Function Call
/// `name(args)` or, with a namespace, `Namespace::name(args)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: Identifier,
    pub args: Vec<Expr>,
    pub namespace: Option<Identifier>,
}

impl FunctionCall {
    /// Name as written at the call site, `Math::pow` or `pow`.
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}::{}", namespace.name, self.name.name),
            None => self.name.name.clone(),
        }
    }
}
