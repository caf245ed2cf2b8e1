use std::fmt::Display;

use thiserror::Error;

use crate::{interpreter::native::NativeError, Position};

/// The three failure categories of a run.
///
/// Syntax errors are collected and reported; runtime errors abort the current
/// interpretation; internal errors mean the front end broke one of its own invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Runtime,
    Internal,
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    context: Option<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            context: None,
        }
    }

    /// Attaches the printed form of the expression being evaluated.
    pub fn with_context(mut self, context: String) -> Self {
        if self.context.is_none() {
            self.context = Some(context);
        }
        self
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::MissingMutableType
            | ErrorImpl::TooManyArguments => ErrorKind::Syntax,
            ErrorImpl::ExpectedNumber
            | ErrorImpl::MismatchedNumberTypes
            | ErrorImpl::DivisionByZero
            | ErrorImpl::ExpectedValue
            | ErrorImpl::VariableNotDeclared { .. }
            | ErrorImpl::AssignToImmutable { .. }
            | ErrorImpl::UndefinedFunction { .. }
            | ErrorImpl::NotCallable
            | ErrorImpl::UndefinedMember { .. }
            | ErrorImpl::NativeCall(_)
            | ErrorImpl::NotImplementedError { .. } => ErrorKind::Runtime,
            ErrorImpl::VariableAlreadyDeclared { .. }
            | ErrorImpl::UnknownOperator { .. }
            | ErrorImpl::NestedCheckpoint => ErrorKind::Internal,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MissingMutableType => "MissingMutableType",
            ErrorImpl::TooManyArguments => "TooManyArguments",
            ErrorImpl::ExpectedNumber => "ExpectedNumber",
            ErrorImpl::MismatchedNumberTypes => "MismatchedNumberTypes",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::ExpectedValue => "ExpectedValue",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::AssignToImmutable { .. } => "AssignToImmutable",
            ErrorImpl::UndefinedFunction { .. } => "UndefinedFunction",
            ErrorImpl::NotCallable => "NotCallable",
            ErrorImpl::UndefinedMember { .. } => "UndefinedMember",
            ErrorImpl::NativeCall(_) => "NativeCall",
            ErrorImpl::NotImplementedError { .. } => "NotImplementedError",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::UnknownOperator { .. } => "UnknownOperator",
            ErrorImpl::NestedCheckpoint => "NestedCheckpoint",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String is missing its closing `\"`"))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnexpectedToken { message } => ErrorTip::Suggestion(message.clone()),
            ErrorImpl::MissingMutableType => ErrorTip::Suggestion(String::from(
                "Mutable variables need an explicit type, e.g. `var x : Int = 0`",
            )),
            ErrorImpl::TooManyArguments => {
                ErrorTip::Suggestion(String::from("Calls are limited to 255 arguments"))
            }
            ErrorImpl::MismatchedNumberTypes => ErrorTip::Suggestion(String::from(
                "Integers and floats are never converted implicitly",
            )),
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::AssignToImmutable { variable } => ErrorTip::Suggestion(format!(
                "Declare `{}` with `var` to make it mutable",
                variable
            )),
            ErrorImpl::UndefinedFunction { function } => {
                ErrorTip::Suggestion(format!("Function `{}` not declared", function))
            }
            ErrorImpl::NotImplementedError { .. } => ErrorTip::Suggestion(String::from(
                "This feature is expected to be handled, but has not yet been implemented",
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            _ => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let context = self.context.as_deref().unwrap_or("<unknown>");
        match self.kind() {
            ErrorKind::Syntax => write!(
                f,
                "[line {}, column {}] Syntax Error: {}",
                self.position.line, self.position.column, self.internal_error
            ),
            ErrorKind::Runtime => write!(f, "Runtime error at {}: {}", context, self.internal_error),
            ErrorKind::Internal => write!(
                f,
                "Internal error interpreting {}: {}",
                context, self.internal_error
            ),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    // Syntax
    #[error("Unexpected character: '{character}'")]
    UnexpectedCharacter { character: char },
    #[error("Unterminated string")]
    UnterminatedString,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("{message}")]
    UnexpectedToken { message: String },
    #[error("Missing type for `var` definition")]
    MissingMutableType,
    #[error("Cannot have more than 255 arguments")]
    TooManyArguments,

    // Runtime
    #[error("Expected numbers")]
    ExpectedNumber,
    #[error("Cannot operate on different types")]
    MismatchedNumberTypes,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Expression does not produce a value")]
    ExpectedValue,
    #[error("Undefined variable '{variable}'.")]
    VariableNotDeclared { variable: String },
    #[error("Cannot assign to immutable variable '{variable}'.")]
    AssignToImmutable { variable: String },
    #[error("Undefined function '{function}'.")]
    UndefinedFunction { function: String },
    #[error("Can only call functions")]
    NotCallable,
    #[error("Undefined member '{member}' on {target}")]
    UndefinedMember { member: String, target: String },
    #[error(transparent)]
    NativeCall(#[from] NativeError),
    #[error("{feature} is not implemented")]
    NotImplementedError { feature: String },

    // Internal
    #[error("Variable '{variable}' already defined.")]
    VariableAlreadyDeclared { variable: String },
    #[error("Unknown operator: {operator}")]
    UnknownOperator { operator: String },
    #[error("only one backtrack checkpoint may be live at a time")]
    NestedCheckpoint,
}
