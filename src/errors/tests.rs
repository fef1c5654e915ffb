//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::{Token, TokenKind};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Position::new(3, 10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.message(), "unrecognised character '@'");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        Position::new(42, 7),
    );

    assert_eq!(error.line(), 42);
    assert_eq!(error.column(), 7);
    assert_eq!(*error.get_position(), Position::new(42, 7));
}

#[test]
fn test_error_at_token() {
    let token = Token {
        kind: TokenKind::Identifier,
        value: "x".to_string(),
        position: Position::new(2, 5),
    };
    let error = Error::at(
        &token,
        ErrorImpl::MissingDot {
            token: token.value.clone(),
            construct: "a statement".to_string(),
        },
    );

    assert_eq!(error.line(), 2);
    assert_eq!(error.column(), 5);
    assert_eq!(error.message(), "unexpected token 'x', need a dot at the end of a statement");
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(ErrorImpl::DanglingElse, Position::new(1, 1));

    assert_eq!(
        error.to_string(),
        "1:1: elseif/else statement without a preceding if statement"
    );
}

#[test]
fn test_unexpected_eof_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedEof {
            context: "unclosed block statement".to_string(),
        },
        Position::start(),
    );

    assert_eq!(error.get_error_name(), "UnexpectedEof");
    assert_eq!(error.message(), "unexpected end-of-file: unclosed block statement");
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 8 }, Position::start());

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.message(), "nesting exceeds the maximum depth of 8");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '#' },
        Position::start(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::RedundantComma {
            context: "list literal".to_string(),
        },
        Position::start(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "remove the extra comma"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_unknown_operator_error() {
    let error = Error::new(
        ErrorImpl::UnknownOperator {
            operator: "m".to_string(),
        },
        Position::start(),
    );

    assert_eq!(error.get_error_name(), "UnknownOperator");
    assert_eq!(error.message(), "unknown operator 'm' in prefix expression");
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        Position::start(),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert!(matches!(error.kind(), ErrorImpl::NumberParseError { .. }));
}
