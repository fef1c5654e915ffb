//! Error types and error handling for the front-end.
//!
//! This module defines the diagnostics produced while scanning and parsing:
//!
//! - Error structures with line and column information
//! - Variants for scanner faults and for parser faults
//! - Stable error names and suggestions used when rendering

pub mod errors;

#[cfg(test)]
mod tests;
