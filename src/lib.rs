#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::{parse, ParserConfig},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// 1-based line and column of a token in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Scans and parses `source` with the default configuration.
///
/// Scanner errors are fatal: when any are found the parser never runs and
/// they are returned as `Err`. Otherwise the program is returned together
/// with every parse error collected along the way.
pub fn parse_source(source: &str) -> Result<(Program, Vec<Error>), Vec<Error>> {
    parse_source_with(source, ParserConfig::default())
}

pub fn parse_source_with(
    source: &str,
    config: ParserConfig,
) -> Result<(Program, Vec<Error>), Vec<Error>> {
    let (tokens, scanner_errors) = tokenize(source);
    parse(tokens, scanner_errors, config)
}

/// Returns the text of the 1-based `line` of `source`, without its line break.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.trim_end_matches('\r'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nint a = 1.\n\nTesting { }\n";

        assert_eq!(get_line_at_position(source, 1), Some("Hello, world!"));
        assert_eq!(get_line_at_position(source, 4), Some("Testing { }"));
        assert_eq!(get_line_at_position(source, 3), Some(""));
        assert_eq!(get_line_at_position(source, 0), None);
        assert_eq!(get_line_at_position(source, 9), None);
    }

    #[test]
    fn test_render_error_points_at_column() {
        let source = "block\n  int a = 1\nend\n";
        let (_, errors) = parse_source(source).unwrap();
        assert_eq!(errors.len(), 1);

        let rendered = render_error(&errors[0], source, "main.quoi");
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "Error: MissingDot (statements end with a dot)");
        assert_eq!(lines[2], "-> main.quoi");
        assert_eq!(lines[3], "  |");
        assert_eq!(lines[4], "2 | int a = 1");
        assert_eq!(lines[5], "  | ---------^");
    }

    #[test]
    fn test_remove_starting_whitespace() {
        assert_eq!(remove_starting_whitespace("\t  x = 1."), ("x = 1.".to_string(), 3));
        assert_eq!(remove_starting_whitespace("x"), ("x".to_string(), 0));
    }
}

/// Renders an error with the offending source line and a caret under its column.
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: MissingDot (statements end with a dot)
        -> main.quoi
          |
        3 | int a = 1
          | ---------^
    */

    let position = error.get_position();
    let line_text = get_line_at_position(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("   {}\n", error.message()));
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    eprint!("{}", render_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
