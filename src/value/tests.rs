//! Unit tests for the numeric value model and runtime values.

use crate::{errors::errors::ErrorImpl, lexer::tokens::TokenKind};

use super::{number::Number, value::Value};

#[test]
fn test_same_kind_arithmetic() {
    assert_eq!(Number::Int(2).add(&Number::Int(3)).unwrap(), Number::Int(5));
    assert_eq!(Number::Int(2).subtract(&Number::Int(3)).unwrap(), Number::Int(-1));
    assert_eq!(Number::Int(4).multiply(&Number::Int(3)).unwrap(), Number::Int(12));
    assert_eq!(Number::Int(7).divide(&Number::Int(2)).unwrap(), Number::Int(3));
    assert_eq!(Number::Float(1.5).add(&Number::Float(1.0)).unwrap(), Number::Float(2.5));
    assert_eq!(Number::Float(1.0).divide(&Number::Float(4.0)).unwrap(), Number::Float(0.25));
}

#[test]
fn test_mixed_kind_arithmetic_is_rejected() {
    let int = Number::Int(5);
    let float = Number::Float(5.0);

    assert!(matches!(int.add(&float), Err(ErrorImpl::MismatchedNumberTypes)));
    assert!(matches!(float.subtract(&int), Err(ErrorImpl::MismatchedNumberTypes)));
    assert!(matches!(int.multiply(&float), Err(ErrorImpl::MismatchedNumberTypes)));
    assert!(matches!(float.divide(&int), Err(ErrorImpl::MismatchedNumberTypes)));
    assert!(matches!(int.compare(&float), Err(ErrorImpl::MismatchedNumberTypes)));
}

#[test]
fn test_equality_crosses_kinds() {
    assert_eq!(Number::Int(5), Number::Float(5.0));
    assert_ne!(Number::Int(5), Number::Float(5.5));
    assert_eq!(
        Value::Number(Number::Int(5)),
        Value::Number(Number::Float(5.0))
    );
}

#[test]
fn test_integer_division_by_zero() {
    assert!(matches!(
        Number::Int(1).divide(&Number::Int(0)),
        Err(ErrorImpl::DivisionByZero)
    ));

    let Number::Float(result) = Number::Float(1.0).divide(&Number::Float(0.0)).unwrap() else {
        panic!("expected a float");
    };
    assert!(result.is_infinite());
}

#[test]
fn test_integer_overflow_wraps() {
    assert_eq!(
        Number::Int(i32::MAX).add(&Number::Int(1)).unwrap(),
        Number::Int(i32::MIN)
    );
    assert_eq!(Number::Int(i32::MIN).negate(), Number::Int(i32::MIN));
}

#[test]
fn test_relational_operators() {
    let two = Number::Int(2);
    let three = Number::Int(3);

    assert!(three.relational(TokenKind::Greater, &two).unwrap());
    assert!(three.relational(TokenKind::GreaterEquals, &three).unwrap());
    assert!(two.relational(TokenKind::Less, &three).unwrap());
    assert!(!three.relational(TokenKind::LessEquals, &two).unwrap());
    assert!(!Number::Float(f32::NAN)
        .relational(TokenKind::Less, &Number::Float(1.0))
        .unwrap());
    assert!(matches!(
        two.relational(TokenKind::Plus, &three),
        Err(ErrorImpl::UnknownOperator { .. })
    ));
}

#[test]
fn test_display() {
    assert_eq!(Number::Int(-4).to_string(), "-4");
    assert_eq!(Number::Float(5.0).to_string(), "5.0");
    assert_eq!(Number::Float(3.25).to_string(), "3.25");
    assert_eq!(Value::String(String::from("hi")).to_string(), "hi");
    assert_eq!(Value::Boolean(false).to_string(), "false");
    assert_eq!(Value::Function(String::from("Print")).to_string(), "<fn Print>");
}

#[test]
fn test_truthiness() {
    assert!(Value::Boolean(true).is_truthy());
    assert!(!Value::Boolean(false).is_truthy());
    assert!(!Value::Number(Number::Int(1)).is_truthy());
    assert!(!Value::String(String::from("true")).is_truthy());
}
