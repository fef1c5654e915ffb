//! Type annotations as written in declarations.
//!
//! Types are recorded exactly as they appear in the source. Nothing here
//! checks that a named datatype exists; that belongs to a later stage.

use crate::lexer::tokens::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq)]
pub enum DataType {
    /// `int`, `string` or `bool`.
    Primitive(Token),
    /// A user datatype such as `User`.
    Named(Token),
    /// `listof T`; the token is the `listof` keyword.
    List(Token, Box<DataType>),
}

impl DataType {
    /// The first token of the annotation.
    pub fn token(&self) -> &Token {
        match self {
            DataType::Primitive(token) | DataType::Named(token) | DataType::List(token, _) => token,
        }
    }

    /// Innermost element type, `int` for `listof listof int`.
    pub fn element(&self) -> &DataType {
        match self {
            DataType::List(_, inner) => inner.element(),
            _ => self,
        }
    }

    pub fn is_primitive(&self, kind: TokenKind) -> bool {
        matches!(self, DataType::Primitive(token) if token.kind == kind)
    }
}
