//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and floats)
//! - String literals, including multi-line ones
//! - Operators, punctuation, and newlines
//! - Comments
//! - Error cases

use pretty_assertions::assert_eq;

use crate::{
    value::{number::Number, value::Value},
    Position,
};

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    let (tokens, errors) = tokenize(source);
    assert!(errors.is_empty(), "unexpected scan errors: {:?}", errors);
    tokens.iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "and or not true false var return self if else for while break class module block spawn";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Var,
            TokenKind::Return,
            TokenKind::SelfKw,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::For,
            TokenKind::While,
            TokenKind::Break,
            TokenKind::Class,
            TokenKind::Module,
            TokenKind::Block,
            TokenKind::Spawn,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let (tokens, _) = tokenize("foo bar baz_123 _underscore CamelCase native iffy");

    let lexemes: Vec<&str> = tokens.iter().map(|token| token.lexeme.as_str()).collect();
    assert_eq!(
        lexemes,
        vec!["foo", "bar", "baz_123", "_underscore", "CamelCase", "native", "iffy", ""]
    );
    assert!(tokens[..7].iter().all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let (tokens, errors) = tokenize("42 3.14 0 100.5");

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].literal, Some(Value::Number(Number::Int(42))));
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].lexeme, "3.14");
    assert_eq!(tokens[1].literal, Some(Value::Number(Number::Float(3.14))));
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[3].kind, TokenKind::Float);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_trailing_dot_is_not_part_of_number() {
    assert_eq!(
        kinds("5.foo 7."),
        vec![
            TokenKind::Int,
            TokenKind::Dot,
            TokenKind::Identifier,
            TokenKind::Int,
            TokenKind::Dot,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_integer_out_of_range() {
    let (tokens, errors) = tokenize("99999999999");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "NumberParseError");
    assert_eq!(tokens.len(), 1);
}

#[test]
fn test_tokenize_strings() {
    let (tokens, errors) = tokenize(r#""hello" "multiple words""#);

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "\"hello\"");
    assert_eq!(tokens[0].literal, Some(Value::String(String::from("hello"))));
    assert_eq!(tokens[1].literal, Some(Value::String(String::from("multiple words"))));
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_multiline_string_tracks_lines() {
    let (tokens, errors) = tokenize("\"a\nb\" x");

    assert!(errors.is_empty());
    assert_eq!(tokens[0].position, Position::new(1, 1));
    assert_eq!(tokens[1].lexeme, "x");
    assert_eq!(tokens[1].position, Position::new(2, 4));
}

#[test]
fn test_unterminated_string() {
    let (tokens, errors) = tokenize("x := \"never closed");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "UnterminatedString");
    assert_eq!(*errors[0].get_position(), Position::new(1, 6));
    assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 3);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / = > >= < <= := : ? , . ; ( ) { } [ ]"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Equals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::InferredDecl,
            TokenKind::Colon,
            TokenKind::Question,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Semicolon,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_newlines_are_tokens_and_comments_are_skipped() {
    assert_eq!(
        kinds("x # a comment := ignored\ny\n"),
        vec![
            TokenKind::Identifier,
            TokenKind::NewLine,
            TokenKind::Identifier,
            TokenKind::NewLine,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_positions() {
    let (tokens, _) = tokenize("ab := 1\n  cd");

    assert_eq!(tokens[0].position, Position::new(1, 1));
    assert_eq!(tokens[1].position, Position::new(1, 4));
    assert_eq!(tokens[2].position, Position::new(1, 7));
    assert_eq!(tokens[3].position, Position::new(1, 8));
    assert_eq!(tokens[4].position, Position::new(2, 3));
}

#[test]
fn test_unexpected_character_continues() {
    let (tokens, errors) = tokenize("a @ b $");

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].get_position(), &Position::new(1, 3));
    assert_eq!(errors[0].to_string(), "[line 1, column 3] Syntax Error: Unexpected character: '@'");
    assert_eq!(tokens.len(), 3);
}

#[test]
fn test_lexemes_rebuild_source_without_whitespace() {
    let source = "foo(x: Int): Int = { x + 1 } # done\nbar := \"s\"";
    let (tokens, _) = tokenize(source);

    let rebuilt: String = tokens
        .iter()
        .filter(|token| token.kind != TokenKind::NewLine)
        .map(|token| token.lexeme.as_str())
        .collect();
    let expected: String = "foo(x: Int): Int = { x + 1 }bar := \"s\""
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    assert_eq!(rebuilt, expected);
}

#[test]
fn test_token_descriptions() {
    let (tokens, _) = tokenize("foo ( var 12 \"s\" \n");

    assert_eq!(tokens[0].describe(), "identifier `foo`");
    assert_eq!(tokens[1].describe(), "`(`");
    assert_eq!(tokens[2].describe(), "var");
    assert_eq!(tokens[3].describe(), "integer `12`");
    assert_eq!(tokens[4].describe(), "string `\"s\"`");
    assert_eq!(tokens[5].describe(), "`\\n`");
    assert_eq!(tokens[6].describe(), "end of file");
}
