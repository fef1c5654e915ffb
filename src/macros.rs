//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for fixed punctuation
//!
//! These macros reduce boilerplate in the pattern table of the lexer.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's literal text
/// * `$position` - Line and column of the first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), Position::new(1, 1));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Creates a lexer handler for a pattern that always maps to one token kind.
///
/// The generated handler emits a token carrying the matched text and moves
/// the lexer past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\(").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, matched: &str| {
            let token = MK_TOKEN!($kind, String::from(matched), lexer.position());
            lexer.advance_n(matched);
            Some(token)
        }
    };
}
