use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{value::value::Value, Position};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("not", TokenKind::Not);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("var", TokenKind::Var);
        map.insert("return", TokenKind::Return);
        map.insert("self", TokenKind::SelfKw);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("break", TokenKind::Break);
        map.insert("class", TokenKind::Class);
        map.insert("module", TokenKind::Module);
        map.insert("block", TokenKind::Block);
        map.insert("spawn", TokenKind::Spawn);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    String,
    Int,
    Float,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,

    Comma,
    Dot,
    Semicolon,
    Colon,
    Question,
    NewLine,

    Equals, // `=` is both assignment and equality
    Plus,
    Dash,
    Star,
    Slash,
    InferredDecl, // :=
    Greater,
    GreaterEquals,
    Less,
    LessEquals,

    // Reserved
    And,
    Or,
    Not,
    True,
    False,
    Var,
    Return,
    SelfKw,
    If,
    Else,
    For,
    While,
    Break,
    Class,
    Module,
    Block,
    Spawn,
}

impl TokenKind {
    /// Printable symbol of a punctuation or operator kind.
    pub fn symbol(&self) -> Option<&'static str> {
        Some(match self {
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Question => "?",
            TokenKind::NewLine => "\\n",
            TokenKind::Equals => "=",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::InferredDecl => ":=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            _ => return None,
        })
    }

    pub fn keyword(&self) -> Option<&'static str> {
        RESERVED_LOOKUP
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(keyword, _)| *keyword)
    }

    /// Kinds whose rendering does not depend on the lexeme.
    pub fn is_self_describing(&self) -> bool {
        !matches!(
            self,
            TokenKind::Identifier | TokenKind::String | TokenKind::Int | TokenKind::Float
        )
    }

    /// Rendering used in diagnostics when no lexeme is at hand.
    pub fn describe(&self) -> String {
        if let Some(symbol) = self.symbol() {
            return format!("`{}`", symbol);
        }

        if let Some(keyword) = self.keyword() {
            return keyword.to_string();
        }

        match self {
            TokenKind::EOF => String::from("end of file"),
            TokenKind::Identifier => String::from("identifier"),
            TokenKind::String => String::from("string"),
            TokenKind::Int => String::from("integer"),
            TokenKind::Float => String::from("float"),
            _ => format!("{:?}", self),
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Value>,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Renders the token for diagnostics: symbols and keywords as themselves,
    /// everything else as ``<kind> `<lexeme>` ``.
    pub fn describe(&self) -> String {
        if self.kind.is_self_describing() {
            self.kind.describe()
        } else {
            format!("{} `{}`", self.kind.describe(), self.lexeme)
        }
    }
}
