use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// A statement production. `None` means the production already recorded an
/// error and resynchronised.
pub type StmtHandler = fn(&mut Parser) -> Option<Stmt>;
/// An expression production, entered with the first token of the expression
/// as the current token.
pub type NUDHandler = fn(&mut Parser) -> Option<Expr>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Literals and symbols
    parser.nud(TokenKind::String, parse_string_expr);
    parser.nud(TokenKind::Int, parse_int_expr);
    parser.nud(TokenKind::Bool, parse_bool_expr);
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::OpenBracket, parse_list_expr);
    parser.nud(TokenKind::OpenParen, parse_prefix_expr);

    // Expression statements
    parser.stmt(TokenKind::String, parse_expression_stmt);
    parser.stmt(TokenKind::Int, parse_expression_stmt);
    parser.stmt(TokenKind::Bool, parse_expression_stmt);
    parser.stmt(TokenKind::OpenBracket, parse_expression_stmt);
    parser.stmt(TokenKind::OpenParen, parse_expression_stmt);
    parser.stmt(TokenKind::Identifier, parse_identifier_stmt);

    // Declarations
    parser.stmt(TokenKind::IntKw, parse_var_decl_stmt);
    parser.stmt(TokenKind::StringKw, parse_var_decl_stmt);
    parser.stmt(TokenKind::BoolKw, parse_var_decl_stmt);
    parser.stmt(TokenKind::Listof, parse_list_decl_stmt);
    parser.stmt(TokenKind::Datatype, parse_datatype_decl_stmt);
    parser.stmt(TokenKind::Fun, parse_fun_decl_stmt);

    // Control flow
    parser.stmt(TokenKind::Block, parse_block_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::Loop, parse_loop_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::Break, parse_break_stmt);
    parser.stmt(TokenKind::Continue, parse_continue_stmt);

    // Always errors
    parser.stmt(TokenKind::Elseif, parse_dangling_else_stmt);
    parser.stmt(TokenKind::Else, parse_dangling_else_stmt);
    parser.stmt(TokenKind::Illegal, parse_illegal_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
