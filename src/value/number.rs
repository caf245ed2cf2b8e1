//! Typed numeric values.
//!
//! Integers and floats never mix in arithmetic: every operation checks both
//! operands are the same concrete kind first. Equality is the exception and
//! compares raw values across kinds, so `5 = 5.0` holds while `5 + 5.0` fails.

use std::{cmp::Ordering, fmt::Display};

use crate::{errors::errors::ErrorImpl, lexer::tokens::TokenKind};

#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i32),
    Float(f32),
}

impl Number {
    pub fn type_name(&self) -> &'static str {
        match self {
            Number::Int(_) => "Int",
            Number::Float(_) => "Float",
        }
    }

    /// Widened raw value, used only for cross-kind equality.
    pub fn raw(&self) -> f64 {
        match self {
            Number::Int(value) => *value as f64,
            Number::Float(value) => *value as f64,
        }
    }

    pub fn negate(&self) -> Number {
        match self {
            Number::Int(value) => Number::Int(value.wrapping_neg()),
            Number::Float(value) => Number::Float(-value),
        }
    }

    pub fn add(&self, other: &Number) -> Result<Number, ErrorImpl> {
        match (self, other) {
            (Number::Int(left), Number::Int(right)) => Ok(Number::Int(left.wrapping_add(*right))),
            (Number::Float(left), Number::Float(right)) => Ok(Number::Float(left + right)),
            _ => Err(ErrorImpl::MismatchedNumberTypes),
        }
    }

    pub fn subtract(&self, other: &Number) -> Result<Number, ErrorImpl> {
        match (self, other) {
            (Number::Int(left), Number::Int(right)) => Ok(Number::Int(left.wrapping_sub(*right))),
            (Number::Float(left), Number::Float(right)) => Ok(Number::Float(left - right)),
            _ => Err(ErrorImpl::MismatchedNumberTypes),
        }
    }

    pub fn multiply(&self, other: &Number) -> Result<Number, ErrorImpl> {
        match (self, other) {
            (Number::Int(left), Number::Int(right)) => Ok(Number::Int(left.wrapping_mul(*right))),
            (Number::Float(left), Number::Float(right)) => Ok(Number::Float(left * right)),
            _ => Err(ErrorImpl::MismatchedNumberTypes),
        }
    }

    pub fn divide(&self, other: &Number) -> Result<Number, ErrorImpl> {
        match (self, other) {
            (Number::Int(_), Number::Int(0)) => Err(ErrorImpl::DivisionByZero),
            (Number::Int(left), Number::Int(right)) => Ok(Number::Int(left.wrapping_div(*right))),
            (Number::Float(left), Number::Float(right)) => Ok(Number::Float(left / right)),
            _ => Err(ErrorImpl::MismatchedNumberTypes),
        }
    }

    /// Orders two numbers of the same kind. `None` for NaN operands.
    pub fn compare(&self, other: &Number) -> Result<Option<Ordering>, ErrorImpl> {
        match (self, other) {
            (Number::Int(left), Number::Int(right)) => Ok(Some(left.cmp(right))),
            (Number::Float(left), Number::Float(right)) => Ok(left.partial_cmp(right)),
            _ => Err(ErrorImpl::MismatchedNumberTypes),
        }
    }

    /// Applies a relational operator token (`>`, `>=`, `<`, `<=`).
    pub fn relational(&self, operator: TokenKind, other: &Number) -> Result<bool, ErrorImpl> {
        let ordering = self.compare(other)?;

        Ok(match (operator, ordering) {
            (_, None) => false,
            (TokenKind::Greater, Some(ordering)) => ordering == Ordering::Greater,
            (TokenKind::GreaterEquals, Some(ordering)) => ordering != Ordering::Less,
            (TokenKind::Less, Some(ordering)) => ordering == Ordering::Less,
            (TokenKind::LessEquals, Some(ordering)) => ordering != Ordering::Greater,
            (operator, _) => {
                return Err(ErrorImpl::UnknownOperator {
                    operator: operator.describe(),
                })
            }
        })
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.raw() == other.raw()
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{}", value),
            Number::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{:.1}", value)
            }
            Number::Float(value) => write!(f, "{}", value),
        }
    }
}
