use std::fmt::Display;

use super::number::Number;

/// A runtime value produced by the interpreter.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    String(String),
    Number(Number),
    /// Reference to a top-level function declaration, by name.
    Function(String),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "Bool",
            Value::String(_) => "String",
            Value::Number(number) => number.type_name(),
            Value::Function(_) => "Function",
        }
    }

    /// Only an actual `true` is truthy; numbers, strings and functions are all false.
    pub fn is_truthy(&self) -> bool {
        matches!(self, Value::Boolean(true))
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(number) => Some(number),
            _ => None,
        }
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        Value::Number(number)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Boolean(value) => write!(f, "{}", value),
            Value::String(value) => write!(f, "{}", value),
            Value::Number(number) => write!(f, "{}", number),
            Value::Function(name) => write!(f, "<fn {}>", name),
        }
    }
}
