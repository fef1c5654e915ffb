use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Handles one match of a pattern. Returns `None` for text that produces no
/// token (whitespace, comments).
pub type RegexHandler = fn(&mut Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).expect("invalid lexer pattern"),
            handler,
        }
    }
}

lazy_static! {
    // Tried in order; the first pattern matching at the cursor wins, so longer
    // punctuation must precede its prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("^[ \t\r]+", skip_handler),
        RegexPattern::new("^\n", newline_handler),
        RegexPattern::new("^;[^\n]*", skip_handler),
        RegexPattern::new("^\"(?:[^\"\\\\\n]|\\\\.)*\"", string_handler),
        RegexPattern::new("^\"[^\n]*", unterminated_string_handler),
        RegexPattern::new("^-?[0-9]+", MK_DEFAULT_HANDLER!(TokenKind::Int)),
        RegexPattern::new("^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new("^::", MK_DEFAULT_HANDLER!(TokenKind::DoubleColon)),
        RegexPattern::new("^->", MK_DEFAULT_HANDLER!(TokenKind::Arrow)),
        RegexPattern::new("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen)),
        RegexPattern::new("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen)),
        RegexPattern::new("^\\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket)),
        RegexPattern::new("^\\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket)),
        RegexPattern::new("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly)),
        RegexPattern::new("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly)),
        RegexPattern::new("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        RegexPattern::new("^\\.", MK_DEFAULT_HANDLER!(TokenKind::Dot)),
        RegexPattern::new("^=", MK_DEFAULT_HANDLER!(TokenKind::Equal)),
        RegexPattern::new("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)),
        RegexPattern::new("^-", MK_DEFAULT_HANDLER!(TokenKind::Minus)),
        RegexPattern::new("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Asterisk)),
        RegexPattern::new("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash)),
        RegexPattern::new("^'", MK_DEFAULT_HANDLER!(TokenKind::Apostrophe)),
    ];
}

/// Pull-based scanner over a source string.
///
/// Every call to [`Lexer::next`] yields one token; faults are recorded in the
/// lexer's error list and surface as `Illegal` tokens so scanning never stops
/// early. Once the input is exhausted every call yields the end marker.
pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    errors: Vec<Error>,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: String::from(source),
            pos: 0,
            line: 1,
            column: 1,
            errors: vec![],
        }
    }

    /// Position of the next unread character.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Moves past `matched`, keeping line and column in step.
    pub fn advance_n(&mut self, matched: &str) {
        self.pos += matched.len();
        for c in matched.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    fn push_error(&mut self, error: Error) {
        self.errors.push(error);
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return MK_TOKEN!(TokenKind::EOF, String::from("EOF"), self.position());
            }

            let remaining = self.remainder();
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remaining)
                    .map(|m| (pattern.handler, m.as_str().to_string()))
            });

            match matched {
                Some((handler, text)) => {
                    if let Some(token) = handler(self, &text) {
                        return token;
                    }
                }
                None => return self.unrecognised_character(),
            }
        }
    }

    fn unrecognised_character(&mut self) -> Token {
        let position = self.position();
        let character = self.remainder().chars().next().unwrap_or('\0');
        let text = character.to_string();

        self.push_error(Error::new(
            ErrorImpl::UnrecognisedCharacter { character },
            position,
        ));
        self.advance_n(&text);

        MK_TOKEN!(TokenKind::Illegal, text, position)
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.advance_n(matched);
    None
}

fn newline_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let token = MK_TOKEN!(TokenKind::Newline, String::from(matched), lexer.position());
    lexer.advance_n(matched);
    Some(token)
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let position = lexer.position();
    let string_literal = unescape(&matched[1..matched.len() - 1]);

    lexer.advance_n(matched);
    Some(MK_TOKEN!(TokenKind::String, string_literal, position))
}

fn unterminated_string_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let position = lexer.position();

    lexer.push_error(Error::new(
        ErrorImpl::UnterminatedString {
            literal: String::from(matched),
        },
        position,
    ));
    lexer.advance_n(matched);

    Some(MK_TOKEN!(TokenKind::Illegal, String::from(matched), position))
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let kind = match RESERVED_LOOKUP.get(matched) {
        Some(kind) => *kind,
        None => TokenKind::Identifier,
    };

    let token = MK_TOKEN!(kind, String::from(matched), lexer.position());
    lexer.advance_n(matched);
    Some(token)
}

fn unescape(raw: &str) -> String {
    let mut result = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            Some('n') => {
                result.push('\n');
                chars.next();
            }
            Some('t') => {
                result.push('\t');
                chars.next();
            }
            Some('r') => {
                result.push('\r');
                chars.next();
            }
            Some('\\') => {
                result.push('\\');
                chars.next();
            }
            Some('"') => {
                result.push('"');
                chars.next();
            }
            Some('0') => {
                result.push('\0');
                chars.next();
            }
            Some('x') => {
                chars.next();
                let mut hex = String::new();
                while hex.len() < 2 {
                    match chars.peek() {
                        Some(c) if c.is_ascii_hexdigit() => {
                            hex.push(*c);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) if hex.len() == 2 && byte.is_ascii() => result.push(byte as char),
                    _ => {
                        // Short, malformed or above 0x7f; keep the text as written.
                        result.push_str("\\x");
                        result.push_str(&hex);
                    }
                }
            }
            // Unknown escapes and a trailing backslash are kept verbatim.
            _ => result.push(ch),
        }
    }

    result
}

/// Inverse of the string unescaping: quotes `value` back into the body of a
/// `"..."` literal that scans to the same content.
pub fn escape(value: &str) -> String {
    let mut result = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\0' => result.push_str("\\0"),
            c if c.is_ascii_control() => result.push_str(&format!("\\x{:02x}", c as u8)),
            c => result.push(c),
        }
    }

    result
}

/// Runs the scanner to completion.
///
/// The returned stream always ends with exactly one `EOF` token.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            break;
        }
    }

    (tokens, lex.into_errors())
}
