//! Type annotations in the AST.
//!
//! Types are purely syntactic here: `[]T` arrays, `[K]T` maps and a trailing
//! `?` for optionals. Nothing resolves or checks them.

use std::fmt::Display;

use crate::lexer::tokens::Token;

#[derive(Debug, Clone, PartialEq)]
pub struct TypeExpr {
    pub name: Token,
    pub is_array: bool,
    pub is_map: bool,
    /// Present iff `is_map`.
    pub key_type: Option<Box<TypeExpr>>,
    pub is_optional: bool,
}

impl TypeExpr {
    pub fn named(name: Token) -> Self {
        TypeExpr {
            name,
            is_array: false,
            is_map: false,
            key_type: None,
            is_optional: false,
        }
    }

    pub fn array(name: Token) -> Self {
        TypeExpr {
            is_array: true,
            ..TypeExpr::named(name)
        }
    }

    pub fn map(key_type: TypeExpr, name: Token) -> Self {
        TypeExpr {
            is_map: true,
            key_type: Some(Box::new(key_type)),
            ..TypeExpr::named(name)
        }
    }

    pub fn optional(self) -> Self {
        TypeExpr {
            is_optional: true,
            ..self
        }
    }
}

impl Display for TypeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_array {
            write!(f, "[]")?;
        }
        if let Some(key_type) = &self.key_type {
            write!(f, "[{}]", key_type)?;
        }
        write!(f, "{}", self.name.lexeme)?;
        if self.is_optional {
            write!(f, "?")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: Token,
    pub type_: Option<TypeExpr>,
}

impl Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.type_ {
            Some(type_) => write!(f, "{} : {}", self.name.lexeme, type_),
            None => write!(f, "{}", self.name.lexeme),
        }
    }
}
