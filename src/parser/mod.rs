//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive descent parser that transforms a
//! stream of tokens into a [`Program`](crate::ast::ast::Program). It handles:
//!
//! - Statement parsing (declarations, datatypes, functions, control flow)
//! - Expression parsing (literals, lists, calls, prefix expressions)
//! - Type parsing for annotations
//! - Error recovery and reporting
//!
//! Statements, expressions and types are dispatched through lookup tables
//! keyed by token kind. On a fault the parser records one error, skips to the
//! next statement keyword and carries on, so a single run reports every
//! independent mistake in the source.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
