//! Parser core: the token cursor and the recovery machinery.
//!
//! The grammar routines in `stmt.rs` and `expr.rs` are free functions over a
//! `&mut Parser`. They only move through the token stream via the primitives
//! here and report faults through [`Parser::error_if`], which records the
//! error and resynchronises at the next statement keyword. A routine that
//! returns `None` has therefore already reported and recovered; callers just
//! propagate the `None`.
//!
//! Statements are dispatched through lookup tables keyed by the current
//! token kind, expressions through tables keyed by the kind the expression
//! starts with, and type annotations the same way.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{create_token_lookups, NUDHandler, NUDLookup, StmtHandler, StmtLookup},
    stmt::parse_stmt,
    types::{create_token_type_lookups, TypeHandler, TypeLookup},
};

pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

/// Tunables for a parsing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest allowed nesting of statements and expressions.
    pub max_nesting_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl ParserConfig {
    pub fn with_max_nesting_depth(mut self, max_nesting_depth: usize) -> Self {
        self.max_nesting_depth = max_nesting_depth;
        self
    }
}

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The token stream; always ends with exactly one EOF
    tokens: Vec<Token>,
    /// Index of the current token
    pos: usize,
    /// Diagnostics collected so far
    errors: Vec<Error>,
    /// Current statement/expression nesting
    depth: usize,
    /// Set once the nesting limit is hit; silences everything after it
    aborted: bool,
    config: ParserConfig,
    stmt_lookup: StmtLookup,
    nud_lookup: NUDLookup,
    type_lookup: TypeLookup,
}

impl Parser {
    /// Creates a parser over `tokens`.
    ///
    /// A stream that is empty or lacks a trailing end marker gets one
    /// appended, so the cursor always has a sticky last token to rest on.
    pub fn new(mut tokens: Vec<Token>, config: ParserConfig) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::EOF) {
            let position = tokens.last().map(|t| t.position).unwrap_or(Position::start());
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                position,
            });
        }

        let mut parser = Parser {
            tokens,
            pos: 0,
            errors: vec![],
            depth: 0,
            aborted: false,
            config,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            type_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        create_token_type_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    /// Index of the current token in the stream.
    pub fn cursor(&self) -> usize {
        self.pos
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Advances to the next token and returns the previous one.
    ///
    /// The end marker is sticky: advancing from it is a no-op.
    pub fn advance(&mut self) -> &Token {
        let previous = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[previous]
    }

    /// The token after the current one, or the current token when already at
    /// the end of the stream.
    pub fn peek(&self) -> &Token {
        self.tokens.get(self.pos + 1).unwrap_or(&self.tokens[self.pos])
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Moves onto the peek token iff it has the given kind.
    pub fn expect(&mut self, kind: TokenKind) -> bool {
        if !self.peek_is(kind) {
            return false;
        }
        self.advance();
        true
    }

    /// Like [`Parser::expect`], but a mismatch is reported against the peek
    /// token and recovered from. On success returns the token moved onto.
    pub fn expect_error(&mut self, kind: TokenKind, expected: &str) -> Option<Token> {
        if self.expect(kind) {
            return Some(self.current_token().clone());
        }

        self.error_if(true, |p| {
            Error::at(
                p.peek(),
                ErrorImpl::ExpectedToken {
                    token: p.peek().literal(),
                    expected: expected.to_string(),
                },
            )
        });
        None
    }

    /// Advances past a run of tokens of `kind` starting at the current token.
    pub fn eat(&mut self, kind: TokenKind) {
        while self.current_is(kind) && !self.current_is(TokenKind::EOF) {
            self.advance();
        }
    }

    /// Advances while the peek token has `kind`, leaving the last of the run
    /// as the current token.
    pub fn eat_peek(&mut self, kind: TokenKind) {
        while self.peek_is(kind) && self.pos + 1 < self.tokens.len() {
            self.advance();
        }
    }

    /// Resynchronises at the next statement keyword or the end marker.
    ///
    /// Standing on a statement keyword means the fault was found while looking
    /// at the token after it, so that keyword is stepped over first. Every call
    /// either advances the cursor or finds it already at the end marker.
    pub fn skip(&mut self) {
        if self.current_token_kind().starts_statement() {
            self.advance();
        }

        while !self.current_token_kind().starts_statement() && !self.current_is(TokenKind::EOF) {
            self.advance();
        }
    }

    /// Appends an error without moving.
    pub fn record(&mut self, error: Error) {
        if !self.aborted {
            self.errors.push(error);
        }
    }

    /// If `cond`, records the error built by `make` and skips to the next
    /// statement. Returns `cond`.
    pub fn error_if(&mut self, cond: bool, make: impl FnOnce(&Parser) -> Error) -> bool {
        if cond {
            let error = make(self);
            self.record(error);
            self.skip();
        }
        cond
    }

    /// Enters one level of nesting. Returns false, after reporting, when the
    /// configured limit is exceeded.
    pub fn descend(&mut self) -> bool {
        if self.aborted {
            return false;
        }

        if self.depth >= self.config.max_nesting_depth {
            let error = Error::at(
                self.current_token(),
                ErrorImpl::NestingTooDeep {
                    limit: self.config.max_nesting_depth,
                },
            );
            self.record(error);
            self.aborted = true;
            self.pos = self.tokens.len() - 1;
            return false;
        }

        self.depth += 1;
        true
    }

    pub fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (expression start) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the type annotation lookup table.
    pub fn get_type_lookup(&self) -> &TypeLookup {
        &self.type_lookup
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers an expression handler for the token an expression starts with.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a type annotation handler.
    pub fn type_nud(&mut self, kind: TokenKind, type_fn: TypeHandler) {
        self.type_lookup.insert(kind, type_fn);
    }

    /// Parses statements until the end marker.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                program.push_stmt(stmt);
            }
        }

        program
    }
}

/// Parses a token stream into a [`Program`].
///
/// `scanner_errors` are the faults recorded while producing `tokens`. When
/// there are any, the token boundaries cannot be trusted and the grammar is
/// not run: they are handed back as `Err`. Otherwise the program is returned
/// with every parse error found; parsing never stops early.
pub fn parse(
    tokens: Vec<Token>,
    scanner_errors: Vec<Error>,
    config: ParserConfig,
) -> Result<(Program, Vec<Error>), Vec<Error>> {
    if !scanner_errors.is_empty() {
        return Err(scanner_errors);
    }

    let mut parser = Parser::new(tokens, config);
    let program = parser.parse_program();

    Ok((program, parser.into_errors()))
}
