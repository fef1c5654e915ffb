//! Lexical analysis module for the front-end.
//!
//! This module contains the scanner that converts source text into a
//! stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using an ordered regex pattern table
//! - Recognition of keywords, identifiers, literals, and punctuation
//! - Line and column tracking for error reporting
//! - Comments and whitespace handling (newlines are kept as tokens)

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
