//! Error types and error handling for the language front end.
//!
//! This module defines the errors produced while scanning, parsing and
//! interpreting. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants grouped by kind (syntax, runtime, internal)
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
