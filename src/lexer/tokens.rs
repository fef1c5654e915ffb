use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::IntKw);
        map.insert("string", TokenKind::StringKw);
        map.insert("bool", TokenKind::BoolKw);
        map.insert("listof", TokenKind::Listof);
        map.insert("datatype", TokenKind::Datatype);
        map.insert("fun", TokenKind::Fun);
        map.insert("block", TokenKind::Block);
        map.insert("end", TokenKind::End);
        map.insert("if", TokenKind::If);
        map.insert("elseif", TokenKind::Elseif);
        map.insert("else", TokenKind::Else);
        map.insert("loop", TokenKind::Loop);
        map.insert("return", TokenKind::Return);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("lt", TokenKind::Lt);
        map.insert("lte", TokenKind::Lte);
        map.insert("gt", TokenKind::Gt);
        map.insert("gte", TokenKind::Gte);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("not", TokenKind::Not);
        map.insert("true", TokenKind::Bool);
        map.insert("false", TokenKind::Bool);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,
    Newline,

    // Literals
    String,
    Int,
    Bool,
    Identifier,

    // Reserved
    IntKw,
    StringKw,
    BoolKw,
    Listof,
    Datatype,
    Fun,
    Block,
    End,
    If,
    Elseif,
    Else,
    Loop,
    Return,
    Break,
    Continue,

    // Word operators
    Lt,
    Lte,
    Gt,
    Gte,
    And,
    Or,
    Not,

    Plus,
    Minus,
    Asterisk,
    Slash,
    Apostrophe,
    Equal,

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,

    Comma,
    Dot,
    DoubleColon,
    Arrow,
}

impl TokenKind {
    /// Stable upper-case name used in token dumps.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Newline => "NEWLINE",
            TokenKind::String => "STRING",
            TokenKind::Int => "INT",
            TokenKind::Bool => "BOOL",
            TokenKind::Identifier => "IDENT",
            TokenKind::IntKw => "INTKW",
            TokenKind::StringKw => "STRINGKW",
            TokenKind::BoolKw => "BOOLKW",
            TokenKind::Listof => "LISTOF",
            TokenKind::Datatype => "DATATYPE",
            TokenKind::Fun => "FUN",
            TokenKind::Block => "BLOCK",
            TokenKind::End => "END",
            TokenKind::If => "IF",
            TokenKind::Elseif => "ELSEIF",
            TokenKind::Else => "ELSE",
            TokenKind::Loop => "LOOP",
            TokenKind::Return => "RETURN",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Lt => "LT",
            TokenKind::Lte => "LTE",
            TokenKind::Gt => "GT",
            TokenKind::Gte => "GTE",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Apostrophe => "APOSTROPHE",
            TokenKind::Equal => "EQUAL",
            TokenKind::OpenParen => "OPENING_PAREN",
            TokenKind::CloseParen => "CLOSING_PAREN",
            TokenKind::OpenBracket => "OPENING_SQUARE_BRACKET",
            TokenKind::CloseBracket => "CLOSING_SQUARE_BRACKET",
            TokenKind::OpenCurly => "OPENING_CURLY",
            TokenKind::CloseCurly => "CLOSING_CURLY",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::DoubleColon => "DOUBLE_COLON",
            TokenKind::Arrow => "ARROW",
        }
    }

    /// Keywords that begin a statement; recovery resynchronises on these.
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            TokenKind::IntKw
                | TokenKind::StringKw
                | TokenKind::BoolKw
                | TokenKind::Datatype
                | TokenKind::Fun
                | TokenKind::Block
                | TokenKind::End
                | TokenKind::If
                | TokenKind::Elseif
                | TokenKind::Else
                | TokenKind::Loop
                | TokenKind::Return
                | TokenKind::Listof
                | TokenKind::Continue
                | TokenKind::Break
        )
    }

    /// Kinds an expression may start with.
    pub fn starts_expression(&self) -> bool {
        matches!(
            self,
            TokenKind::String
                | TokenKind::Int
                | TokenKind::Bool
                | TokenKind::Identifier
                | TokenKind::OpenParen
                | TokenKind::OpenBracket
        )
    }

    /// Kinds an annotated type may start with.
    pub fn starts_type(&self) -> bool {
        matches!(
            self,
            TokenKind::IntKw
                | TokenKind::StringKw
                | TokenKind::BoolKw
                | TokenKind::Identifier
                | TokenKind::Listof
        )
    }

    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Apostrophe
                | TokenKind::Equal
                | TokenKind::Lt
                | TokenKind::Lte
                | TokenKind::Gt
                | TokenKind::Gte
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Not
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token_{}(Lit: {}, Line:Col({}:{}))",
            self.kind, self.value, self.position.line, self.position.column
        )
    }
}

impl Token {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Literal text as quoted in diagnostics; a line break reads `\n`.
    pub fn literal(&self) -> String {
        match self.kind {
            TokenKind::Newline => String::from("\\n"),
            _ => self.value.clone(),
        }
    }

    /// `(KIND, literal)` form compared against recorded token dumps.
    pub fn repr(&self) -> String {
        format!("({}, {})", self.kind, self.value)
    }
}

/// Flattens `tokens` into one `(KIND, literal)` line per token, leaving out
/// newline tokens and the end marker.
pub fn dump_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        if token.is(TokenKind::Newline) || token.is(TokenKind::EOF) {
            continue;
        }
        out.push_str(&token.repr());
        out.push('\n');
    }
    out
}
