#![allow(clippy::module_inception)]

use std::path::Path;

use crate::{ast::ast::Stmt, errors::errors::{Error, ErrorTip}, lexer::lexer::tokenize, parser::parser::parse};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod value;

extern crate regex;

/// A 1-based line and column in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }

    pub fn is_null(&self) -> bool {
        self.line == 0
    }
}

/// Scans and parses `source`, returning every diagnostic on failure.
///
/// Scan errors do not stop parsing, so a single call reports problems from both phases.
pub fn parse_source(source: &str) -> Result<Vec<Stmt>, Vec<Error>> {
    let (tokens, mut errors) = tokenize(source);
    let (statements, parse_errors) = parse(tokens);
    errors.extend(parse_errors);

    if errors.is_empty() {
        Ok(statements)
    } else {
        Err(errors)
    }
}

/// Returns the text of the 1-based `line` in `source`, without its line break.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

pub fn format_diagnostic(error: &Error, source: &str, file: &Path) -> String {
    /*
        Error: name (tip)
        -> final.verse
           |
        20 | x := #
           | -----^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file.as_os_str().to_string_lossy()));

    let position = error.get_position();
    let line_text = match get_line_at_position(source, position.line) {
        Some(text) => text,
        None => {
            out.push_str(&format!("{}\n", error));
            return out;
        }
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches(|c: char| c == ' ' || c == '\t');
    (trimmed, string.len() - trimmed.len())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\r\n\nTesting { }\n";

        assert_eq!(super::get_line_at_position(source, 1), Some("Hello, world!"));
        assert_eq!(super::get_line_at_position(source, 2), Some("second"));
        assert_eq!(super::get_line_at_position(source, 3), Some(""));
        assert_eq!(super::get_line_at_position(source, 4), Some("Testing { }"));
        assert_eq!(super::get_line_at_position(source, 0), None);
        assert_eq!(super::get_line_at_position(source, 9), None);
    }

    #[test]
    fn test_format_diagnostic_points_at_column() {
        let source = "x := 1\n  y := @\n";
        let error = Error::new(
            ErrorImpl::UnexpectedCharacter { character: '@' },
            Position::new(2, 8),
        );

        let rendered = super::format_diagnostic(&error, source, &PathBuf::from("main.verse"));

        assert_eq!(
            rendered,
            "Error: UnexpectedCharacter\n-> main.verse\n  |\n2 | y := @\n  | -----^\n"
        );
    }

    #[test]
    fn test_format_diagnostic_without_position() {
        let error = Error::new(ErrorImpl::NotCallable, Position::null())
            .with_context(String::from("5(1)"));

        let rendered = super::format_diagnostic(&error, "", &PathBuf::from("main.verse"));

        assert_eq!(
            rendered,
            "Error: NotCallable\n-> main.verse\nRuntime error at 5(1): Can only call functions\n"
        );
    }

    #[test]
    fn test_parse_source_collects_scan_and_parse_errors() {
        let errors = super::parse_source("x := 1 @ 2\ny := )\n").unwrap_err();

        // `@` is dropped by the scanner, leaving `1 2` without a statement end
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].get_error_name(), "UnexpectedCharacter");
    }
}
