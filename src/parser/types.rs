//! Type annotation parsing.
//!
//! Annotations are `int`, `string`, `bool`, a user datatype name, or
//! `listof` followed by another annotation. Handlers are entered with the
//! first token of the annotation as the current token and leave the cursor
//! on its last token, so callers can `expect` whatever follows.

use std::collections::HashMap;

use crate::{
    ast::types::DataType,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub type TypeHandler = fn(&mut Parser) -> Option<DataType>;

pub type TypeLookup = HashMap<TokenKind, TypeHandler>;

pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::IntKw, parse_primitive_type);
    parser.type_nud(TokenKind::StringKw, parse_primitive_type);
    parser.type_nud(TokenKind::BoolKw, parse_primitive_type);
    parser.type_nud(TokenKind::Identifier, parse_named_type);
    parser.type_nud(TokenKind::Listof, parse_list_type);
}

/// Parses the annotation starting at the current token.
///
/// `context` names the construct in the error when the token cannot start a
/// type.
pub fn parse_type(parser: &mut Parser, context: &str) -> Option<DataType> {
    let kind = parser.current_token_kind();
    match parser.get_type_lookup().get(&kind).copied() {
        Some(handler) => handler(parser),
        None => {
            parser.error_if(true, |p| {
                Error::at(
                    p.current_token(),
                    ErrorImpl::NotAType {
                        token: p.current_token().literal(),
                        context: context.to_string(),
                    },
                )
            });
            None
        }
    }
}

fn parse_primitive_type(parser: &mut Parser) -> Option<DataType> {
    Some(DataType::Primitive(parser.current_token().clone()))
}

fn parse_named_type(parser: &mut Parser) -> Option<DataType> {
    Some(DataType::Named(parser.current_token().clone()))
}

/// `listof T`, where `T` may itself be a list.
fn parse_list_type(parser: &mut Parser) -> Option<DataType> {
    let listof = parser.current_token().clone();

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

    if !parser.descend() {
        return None;
    }
    let inner = parse_type(parser, "list");
    parser.ascend();

    Some(DataType::List(listof, Box::new(inner?)))
}
