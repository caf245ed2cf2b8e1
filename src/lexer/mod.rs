//! Lexical analysis module for the language.
//!
//! This module contains the scanner that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line and column tracking for error reporting
//! - Comments, whitespace, and significant newlines

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
