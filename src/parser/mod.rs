//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive descent parser that transforms a
//! stream of tokens into top-level statements. It handles:
//!
//! - Declarations (variables and functions), told apart from expression
//!   statements by a speculative parse that backtracks on failure
//! - Expression parsing (binary ops, calls, member access, `if`)
//! - Type parsing for type annotations and specifiers
//! - Error recovery and reporting

pub mod expr;
pub mod parser;
pub mod stmt;
pub mod types;
