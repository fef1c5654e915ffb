//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer, string and bool literals
//! - Punctuation and greedy matching
//! - Comments, newlines and positions
//! - Error cases

use super::{
    lexer::{escape, tokenize, Lexer},
    tokens::{dump_tokens, TokenKind},
};
use crate::{errors::errors::ErrorImpl, Position};

fn kinds(source: &str) -> Vec<TokenKind> {
    let (tokens, errors) = tokenize(source);
    assert!(errors.is_empty(), "unexpected scanner errors: {:?}", errors);
    tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "int string bool listof datatype fun block end if elseif else loop return break continue";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::IntKw,
            TokenKind::StringKw,
            TokenKind::BoolKw,
            TokenKind::Listof,
            TokenKind::Datatype,
            TokenKind::Fun,
            TokenKind::Block,
            TokenKind::End,
            TokenKind::If,
            TokenKind::Elseif,
            TokenKind::Else,
            TokenKind::Loop,
            TokenKind::Return,
            TokenKind::Break,
            TokenKind::Continue,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let (tokens, _) = tokenize("foo baz_123 _underscore CamelCase iff");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "baz_123");
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].value, "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "iff");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let (tokens, _) = tokenize("42 -5471 0");

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].value, "-5471");
    assert_eq!(tokens[2].value, "0");
}

#[test]
fn test_minus_without_digits_is_an_operator() {
    assert_eq!(
        kinds("(- 5 -3)"),
        vec![
            TokenKind::OpenParen,
            TokenKind::Minus,
            TokenKind::Int,
            TokenKind::Int,
            TokenKind::CloseParen,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_bools() {
    let (tokens, _) = tokenize("true false");

    assert_eq!(tokens[0].kind, TokenKind::Bool);
    assert_eq!(tokens[0].value, "true");
    assert_eq!(tokens[1].kind, TokenKind::Bool);
    assert_eq!(tokens[1].value, "false");
}

#[test]
fn test_tokenize_strings() {
    let (tokens, errors) = tokenize(r#""hello" "multiple words" "Ayşe""#);

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "multiple words");
    assert_eq!(tokens[2].value, "Ayşe");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let (tokens, _) = tokenize(r#""hello\nworld" "tab\there" "backslash\\" "hex\x41" "quote\"test" "odd\q""#);

    assert_eq!(tokens[0].value, "hello\nworld");
    assert_eq!(tokens[1].value, "tab\there");
    assert_eq!(tokens[2].value, "backslash\\");
    assert_eq!(tokens[3].value, "hexA");
    assert_eq!(tokens[4].value, "quote\"test");
    assert_eq!(tokens[5].value, "odd\\q");
}

#[test]
fn test_hex_escapes_are_ascii_only() {
    let (tokens, errors) = tokenize(r#""\x7e" "\x80" "\xff" "\x4" "\xg1""#);

    assert!(errors.is_empty());
    assert_eq!(tokens[0].value, "~");
    assert_eq!(tokens[1].value, "\\x80");
    assert_eq!(tokens[2].value, "\\xff");
    assert_eq!(tokens[3].value, "\\x4");
    assert_eq!(tokens[4].value, "\\xg1");
}

#[test]
fn test_escape_rescans_to_same_value() {
    for value in ["plain", "a\"b\tc", "line\nbreak\r\0", "back\\slash \\x80", "bell\u{7}", "Ayşe"] {
        let source = format!("\"{}\"", escape(value));
        let (tokens, errors) = tokenize(&source);

        assert!(errors.is_empty(), "{}: {:?}", source, errors);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].value, value);
    }
    assert_eq!(escape("a\"b\tc"), r#"a\"b\tc"#);
    assert_eq!(escape("\u{7}"), r#"\x07"#);
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) [ ] { } , . :: = -> + * / '"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::DoubleColon,
            TokenKind::Equal,
            TokenKind::Arrow,
            TokenKind::Plus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Apostrophe,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_word_operators() {
    assert_eq!(
        kinds("lt lte gt gte and or not"),
        vec![
            TokenKind::Lt,
            TokenKind::Lte,
            TokenKind::Gt,
            TokenKind::Gte,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_double_colon_is_greedy() {
    let (tokens, _) = tokenize("Math::pow");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::DoubleColon);
    assert_eq!(tokens[1].value, "::");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_comments_produce_no_tokens() {
    assert_eq!(
        kinds("; a comment\n5. ; trailing\n"),
        vec![
            TokenKind::Newline,
            TokenKind::Int,
            TokenKind::Dot,
            TokenKind::Newline,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_positions_track_lines_and_columns() {
    let (tokens, _) = tokenize("int a\n  \"x\" b");

    assert_eq!(tokens[0].position, Position::new(1, 1));
    assert_eq!(tokens[1].position, Position::new(1, 5));
    assert_eq!(tokens[2].kind, TokenKind::Newline);
    assert_eq!(tokens[2].position, Position::new(1, 6));
    assert_eq!(tokens[3].position, Position::new(2, 3));
    assert_eq!(tokens[4].position, Position::new(2, 7));
    assert_eq!(tokens[5].position, Position::new(2, 8));
}

#[test]
fn test_columns_count_characters() {
    let (tokens, _) = tokenize("\"ş\" x");

    assert_eq!(tokens[1].position, Position::new(1, 5));
}

#[test]
fn test_end_marker_is_idempotent() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next().kind, TokenKind::Identifier);
    for _ in 0..5 {
        let token = lexer.next();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.position, Position::new(1, 2));
    }
    assert!(lexer.errors().is_empty());
}

#[test]
fn test_empty_source_yields_only_end_marker() {
    let (tokens, errors) = tokenize("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert!(errors.is_empty());
}

#[test]
fn test_unterminated_string() {
    let (tokens, errors) = tokenize("string s = \"open\nx.");

    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0].kind(), ErrorImpl::UnterminatedString { .. }));
    assert_eq!(errors[0].line(), 1);
    assert_eq!(errors[0].column(), 12);

    let illegal = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Illegal)
        .collect::<Vec<_>>();
    assert_eq!(illegal.len(), 1);
    assert_eq!(illegal[0].value, "\"open");

    // Scanning carries on past the fault.
    assert_eq!(tokens[tokens.len() - 3].kind, TokenKind::Identifier);
    assert_eq!(tokens[tokens.len() - 2].kind, TokenKind::Dot);
    assert_eq!(tokens[tokens.len() - 1].kind, TokenKind::EOF);
}

#[test]
fn test_unrecognised_characters() {
    let (tokens, errors) = tokenize("a # b : c");

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].message(), "unrecognised character '#'");
    assert_eq!(errors[0].column(), 3);
    assert_eq!(errors[1].message(), "unrecognised character ':'");
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "#");
    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EOF));
}

#[test]
fn test_dump_tokens() {
    let (tokens, _) = tokenize("int n = 4.\nStdout::println(n).\n");

    assert_eq!(
        dump_tokens(&tokens),
        "(INTKW, int)\n\
         (IDENT, n)\n\
         (EQUAL, =)\n\
         (INT, 4)\n\
         (DOT, .)\n\
         (IDENT, Stdout)\n\
         (DOUBLE_COLON, ::)\n\
         (IDENT, println)\n\
         (OPENING_PAREN, ()\n\
         (IDENT, n)\n\
         (CLOSING_PAREN, ))\n\
         (DOT, .)\n"
    );
}
