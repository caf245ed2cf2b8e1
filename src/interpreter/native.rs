//! Host functions callable from the language.
//!
//! A function declared with the `native` specifier, such as
//!
//! ```text
//! Print<native>(message : String) : void
//! ```
//!
//! is dispatched here by name. Each registered function carries its
//! parameter types, which are checked before the host code runs.

use std::{collections::HashMap, fmt::Display};

use lazy_static::lazy_static;
use log::trace;
use thiserror::Error;

lazy_static! {
    /// The standard native set, built once and shared by every interpreter.
    pub static ref NATIVES: NativeRegistry = NativeRegistry::standard();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeType {
    Int,
    Float,
    Bool,
    Char,
    String,
    Array(Box<NativeType>),
    Function,
}

impl Display for NativeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NativeType::Int => write!(f, "Int"),
            NativeType::Float => write!(f, "Float"),
            NativeType::Bool => write!(f, "Bool"),
            NativeType::Char => write!(f, "Char"),
            NativeType::String => write!(f, "String"),
            NativeType::Array(element) => write!(f, "[]{}", element),
            NativeType::Function => write!(f, "Function"),
        }
    }
}

/// A value as seen by host code.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    Int(i32),
    Float(f32),
    Bool(bool),
    Char(char),
    String(String),
    Array(Vec<NativeValue>),
    Function(String),
    Void,
}

impl NativeValue {
    pub fn type_name(&self) -> String {
        match self {
            NativeValue::Int(_) => String::from("Int"),
            NativeValue::Float(_) => String::from("Float"),
            NativeValue::Bool(_) => String::from("Bool"),
            NativeValue::Char(_) => String::from("Char"),
            NativeValue::String(_) => String::from("String"),
            NativeValue::Array(items) => match items.first() {
                Some(item) => format!("[]{}", item.type_name()),
                None => String::from("[]"),
            },
            NativeValue::Function(_) => String::from("Function"),
            NativeValue::Void => String::from("void"),
        }
    }

    /// Whether this value can be passed where `expected` is declared.
    /// An empty array fits any array type.
    pub fn matches(&self, expected: &NativeType) -> bool {
        match (self, expected) {
            (NativeValue::Int(_), NativeType::Int)
            | (NativeValue::Float(_), NativeType::Float)
            | (NativeValue::Bool(_), NativeType::Bool)
            | (NativeValue::Char(_), NativeType::Char)
            | (NativeValue::String(_), NativeType::String)
            | (NativeValue::Function(_), NativeType::Function) => true,
            (NativeValue::Array(items), NativeType::Array(element)) => {
                items.iter().all(|item| item.matches(element))
            }
            _ => false,
        }
    }
}

pub type HostFunction = fn(&[NativeValue]) -> Result<NativeValue, String>;

#[derive(Clone)]
pub struct NativeFunction {
    pub name: &'static str,
    pub parameters: Vec<NativeType>,
    /// `None` for functions returning nothing.
    pub return_type: Option<NativeType>,
    pub function: HostFunction,
}

impl std::fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("return_type", &self.return_type)
            .finish()
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NativeError {
    #[error("Native method {name} not found")]
    NotFound { name: String },
    #[error("Native method {name} requires {expected} arguments")]
    ArityMismatch {
        name: String,
        expected: usize,
        received: usize,
    },
    #[error("Native method {name} requires argument {index} to be of type {expected}, but got {actual}")]
    ArgumentType {
        name: String,
        index: usize,
        expected: NativeType,
        actual: String,
    },
    #[error("Calling native method {name} failed: {message}")]
    InvocationFailed { name: String, message: String },
}

#[derive(Debug, Default)]
pub struct NativeRegistry {
    functions: HashMap<String, NativeFunction>,
}

impl NativeRegistry {
    pub fn new() -> Self {
        NativeRegistry::default()
    }

    /// Print, Sqrt, Join and ToString.
    pub fn standard() -> Self {
        let mut registry = NativeRegistry::new();

        registry.register(NativeFunction {
            name: "Print",
            parameters: vec![NativeType::String],
            return_type: None,
            function: native_print,
        });
        registry.register(NativeFunction {
            name: "Sqrt",
            parameters: vec![NativeType::Float],
            return_type: Some(NativeType::Float),
            function: native_sqrt,
        });
        registry.register(NativeFunction {
            name: "Join",
            parameters: vec![
                NativeType::Array(Box::new(NativeType::String)),
                NativeType::String,
            ],
            return_type: Some(NativeType::String),
            function: native_join,
        });
        registry.register(NativeFunction {
            name: "ToString",
            parameters: vec![NativeType::Char],
            return_type: Some(NativeType::String),
            function: native_to_string,
        });

        registry
    }

    /// Adds `function`, replacing any earlier one with the same name.
    pub fn register(&mut self, function: NativeFunction) {
        self.functions.insert(function.name.to_string(), function);
    }

    pub fn get(&self, name: &str) -> Option<&NativeFunction> {
        self.functions.get(name)
    }

    pub fn call(&self, name: &str, arguments: Vec<NativeValue>) -> Result<NativeValue, NativeError> {
        let native = self.get(name).ok_or_else(|| NativeError::NotFound {
            name: name.to_string(),
        })?;

        if native.parameters.len() != arguments.len() {
            return Err(NativeError::ArityMismatch {
                name: name.to_string(),
                expected: native.parameters.len(),
                received: arguments.len(),
            });
        }

        for (index, (argument, expected)) in arguments.iter().zip(&native.parameters).enumerate() {
            if !argument.matches(expected) {
                return Err(NativeError::ArgumentType {
                    name: name.to_string(),
                    index,
                    expected: expected.clone(),
                    actual: argument.type_name(),
                });
            }
        }

        trace!("Calling native {} with {} arguments", name, arguments.len());
        (native.function)(&arguments).map_err(|message| NativeError::InvocationFailed {
            name: name.to_string(),
            message,
        })
    }
}

fn native_print(arguments: &[NativeValue]) -> Result<NativeValue, String> {
    match arguments {
        [NativeValue::String(message)] => {
            println!("{}", message);
            Ok(NativeValue::Void)
        }
        _ => Err(String::from("expected a single string")),
    }
}

fn native_sqrt(arguments: &[NativeValue]) -> Result<NativeValue, String> {
    match arguments {
        [NativeValue::Float(value)] => Ok(NativeValue::Float(value.sqrt())),
        _ => Err(String::from("expected a single float")),
    }
}

fn native_join(arguments: &[NativeValue]) -> Result<NativeValue, String> {
    match arguments {
        [NativeValue::Array(items), NativeValue::String(separator)] => {
            let parts = items
                .iter()
                .map(|item| match item {
                    NativeValue::String(part) => Ok(part.as_str()),
                    other => Err(format!("cannot join a {}", other.type_name())),
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(NativeValue::String(parts.join(separator)))
        }
        _ => Err(String::from("expected a string array and a separator")),
    }
}

fn native_to_string(arguments: &[NativeValue]) -> Result<NativeValue, String> {
    match arguments {
        [NativeValue::Char(character)] => Ok(NativeValue::String(character.to_string())),
        _ => Err(String::from("expected a single character")),
    }
}
