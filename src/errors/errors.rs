use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::Token, Position};

/// A scanner or parser diagnostic: what went wrong and where.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{position}: {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Creates an error positioned at the first character of `token`.
    pub fn at(token: &Token, error_impl: ErrorImpl) -> Self {
        Error::new(error_impl, token.position)
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::IllegalToken { .. } => "IllegalToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::MissingDot { .. } => "MissingDot",
            ErrorImpl::NotAnExpression { .. } => "NotAnExpression",
            ErrorImpl::NotAType { .. } => "NotAType",
            ErrorImpl::MissingValue { .. } => "MissingValue",
            ErrorImpl::MissingCondition { .. } => "MissingCondition",
            ErrorImpl::MissingOperator => "MissingOperator",
            ErrorImpl::UnknownOperator { .. } => "UnknownOperator",
            ErrorImpl::UnexpectedEof { .. } => "UnexpectedEof",
            ErrorImpl::RedundantComma { .. } => "RedundantComma",
            ErrorImpl::MissingComma { .. } => "MissingComma",
            ErrorImpl::DanglingElse => "DanglingElse",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { .. } => ErrorTip::Suggestion(String::from(
                "close the string with a '\"' on the same line",
            )),
            ErrorImpl::MissingDot { .. } => {
                ErrorTip::Suggestion(String::from("statements end with a dot"))
            }
            ErrorImpl::UnknownOperator { .. } => ErrorTip::Suggestion(String::from(
                "operators are + - * / ' = lt lte gt gte and or not",
            )),
            ErrorImpl::RedundantComma { .. } => {
                ErrorTip::Suggestion(String::from("remove the extra comma"))
            }
            ErrorImpl::MissingComma { .. } => {
                ErrorTip::Suggestion(String::from("separate items with a comma"))
            }
            ErrorImpl::DanglingElse => ErrorTip::Suggestion(String::from(
                "an elseif/else must directly follow the closing brace of an if",
            )),
            ErrorImpl::NumberParseError { .. } => ErrorTip::Suggestion(String::from(
                "integers must fit in 64 bits",
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "split the construct into smaller pieces",
            )),
            _ => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Scanner
    #[error("unterminated string literal {literal}")]
    UnterminatedString { literal: String },
    #[error("unrecognised character '{character}'")]
    UnrecognisedCharacter { character: char },

    // Parser
    #[error("illegal token '{token}'")]
    IllegalToken { token: String },
    #[error("unexpected token '{token}'")]
    UnexpectedToken { token: String },
    #[error("unexpected token '{token}', expected {expected}")]
    ExpectedToken { token: String, expected: String },
    #[error("unexpected token '{token}', need a dot at the end of {construct}")]
    MissingDot { token: String, construct: String },
    #[error("unexpected token '{token}' as {context}")]
    NotAnExpression { token: String, context: String },
    #[error("unexpected token '{token}' as type for {context}")]
    NotAType { token: String, context: String },
    #[error("missing value in {context}")]
    MissingValue { context: String },
    #[error("missing condition in {context}")]
    MissingCondition { context: String },
    #[error("missing operator in prefix expression")]
    MissingOperator,
    #[error("unknown operator '{operator}' in prefix expression")]
    UnknownOperator { operator: String },
    #[error("unexpected end-of-file: {context}")]
    UnexpectedEof { context: String },
    #[error("redundant comma in {context}")]
    RedundantComma { context: String },
    #[error("unexpected token '{token}', missing comma in {context}")]
    MissingComma { token: String, context: String },
    #[error("elseif/else statement without a preceding if statement")]
    DanglingElse,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("nesting exceeds the maximum depth of {limit}")]
    NestingTooDeep { limit: usize },
}
