//! Utility macros for the scanner.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for simple tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The source text of the token
/// * `$literal` - The literal payload (`Option<Value>`)
/// * `$position` - Line and column of the first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Plus, String::from("+"), None, position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $literal:expr, $position:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: $literal,
            position: $position,
        }
    };
}

/// Creates a default lexer handler for simple single-token patterns.
///
/// Generates a handler function that creates a token with the given kind
/// at the current position and advances the lexer past the token's text.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal string value (used for the lexeme and length)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            let position = lexer.position();
            lexer.push(MK_TOKEN!($kind, String::from($value), None, position));
            lexer.advance_str($value);
        }
    };
}
