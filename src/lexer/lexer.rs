use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    value::{number::Number, value::Value},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored; the first one matching at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \t\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\n").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NewLine, "\n") },
        RegexPattern { regex: Regex::new("^#[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\"[^\"]*\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^\"[^\"]*").unwrap(), handler: unterminated_string_handler },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^[\\p{Alphabetic}_][\\p{Alphabetic}\\p{Nd}_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new("^\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
        RegexPattern { regex: Regex::new("^\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^:=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::InferredDecl, ":=") },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new("^\\?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Question, "?") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "=") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    errors: Vec<Error>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            tokens: vec![],
            errors: vec![],
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Moves the cursor over `text`, keeping line and column in step.
    pub fn advance_str(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.pos += text.len();
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn error(&mut self, error_impl: ErrorImpl, position: Position) {
        self.errors.push(Error::new(error_impl, position));
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The text matched by an anchored pattern at the cursor.
    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|found| found.as_str().to_string())
            .unwrap_or_default()
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    lexer.advance_str(&matched);
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) {
    let position = lexer.position();
    let matched = lexer.matched(regex);
    let value = matched[1..matched.len() - 1].to_string();

    lexer.advance_str(&matched);
    lexer.push(MK_TOKEN!(TokenKind::String, matched, Some(Value::String(value)), position));
}

fn unterminated_string_handler(lexer: &mut Lexer, regex: &Regex) {
    let position = lexer.position();
    let matched = lexer.matched(regex);
    lexer.advance_str(&matched);

    lexer.error(ErrorImpl::UnterminatedString, position);
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let position = lexer.position();
    let matched = lexer.matched(regex);
    lexer.advance_str(&matched);

    if matched.contains('.') {
        match matched.parse::<f32>() {
            Ok(value) => lexer.push(MK_TOKEN!(TokenKind::Float, matched, Some(Value::Number(Number::Float(value))), position)),
            Err(_) => lexer.error(ErrorImpl::NumberParseError { token: matched }, position),
        }
    } else {
        match matched.parse::<i32>() {
            Ok(value) => lexer.push(MK_TOKEN!(TokenKind::Int, matched, Some(Value::Number(Number::Int(value))), position)),
            Err(_) => lexer.error(ErrorImpl::NumberParseError { token: matched }, position),
        }
    }
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let position = lexer.position();
    let value = lexer.matched(regex);
    lexer.advance_str(&value);

    let kind = RESERVED_LOOKUP.get(value.as_str()).copied().unwrap_or(TokenKind::Identifier);
    lexer.push(MK_TOKEN!(kind, value, None, position));
}

/// Converts source text into tokens, always ending with a single `EOF`.
///
/// Never fails outright: unexpected characters and unterminated strings are
/// collected as diagnostics and scanning carries on after them.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(source.to_string());

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None => {
                let position = lex.position();
                let character = lex.remainder().chars().next().unwrap_or_default();
                lex.error(ErrorImpl::UnexpectedCharacter { character }, position);
                lex.advance_str(&character.to_string());
            }
        }
    }

    let position = lex.position();
    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), None, position));

    debug!("Scanned {} tokens with {} errors", lex.tokens.len(), lex.errors.len());
    (lex.tokens, lex.errors)
}
