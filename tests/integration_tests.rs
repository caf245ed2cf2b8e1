//! End-to-end tests for the public pipeline.
//!
//! These run source text through scanning, parsing and interpretation the
//! way the `verse` binary does, and check what a user would observe.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use verse::{
    ast::printer::print_stmt,
    errors::errors::ErrorKind,
    format_diagnostic,
    interpreter::interpreter::Interpreter,
    parse_source,
    value::{number::Number, value::Value},
};

const PROGRAM: &str = r#"Sqrt<native>(value : Float) : Float
Print<native>(message : String) : void

var total : Int = 1
base := 16.0
root := Sqrt
side := root(base)

block {
    step := 4
    total = total + step * 2
}

label := "verse"
size := label.length
same := 5 = 5.0
bigger := if (total > 5) { "big" } else { "small" }
"#;

#[test]
fn test_run_program() {
    let statements = parse_source(PROGRAM).unwrap();
    let mut interpreter = Interpreter::new(&statements);

    interpreter.interpret().unwrap();

    assert_eq!(
        interpreter.get_variable("total"),
        Some(&Value::Number(Number::Int(9)))
    );
    assert_eq!(
        interpreter.get_variable("side"),
        Some(&Value::Number(Number::Float(4.0)))
    );
    assert_eq!(
        interpreter.get_variable("size"),
        Some(&Value::Number(Number::Int(5)))
    );
    assert_eq!(interpreter.get_variable("same"), Some(&Value::Boolean(true)));
    assert_eq!(
        interpreter.get_variable("bigger"),
        Some(&Value::String(String::from("big")))
    );
    assert_eq!(interpreter.get_variable("step"), None);
}

#[test]
fn test_print_program() {
    let statements = parse_source("x : Int = (1 + 2) * 3\nshow<native>(v : []Int?) : void\n").unwrap();
    let printed = statements.iter().map(print_stmt).collect::<Vec<_>>();

    assert_eq!(
        printed,
        vec![
            "x : Int = ((group (1 + 2)) * 3)",
            "show<native>(v : []Int?) : void",
        ]
    );
}

#[test]
fn test_declaration_and_call_share_a_prefix() {
    let program = "Sqrt<native>(value : Float) : Float\nroot(value : Float) : Float = { value }\nroot(2.0)\n";
    let statements = parse_source(program).unwrap();

    assert_eq!(statements.len(), 3);
    assert_eq!(print_stmt(&statements[1]), "root(value : Float) : Float {\nvalue\n}");
    assert_eq!(print_stmt(&statements[2]), "root(2.0)");

    let error = Interpreter::new(&statements).interpret().unwrap_err();
    assert_eq!(error.get_error_name(), "NotImplementedError");
}

#[test]
fn test_mixed_number_kinds_fail_at_runtime() {
    let statements = parse_source("x := 1\ny := x * 2.5\n").unwrap();
    let error = Interpreter::new(&statements).interpret().unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Runtime);
    assert_eq!(
        error.to_string(),
        "Runtime error at (x * 2.5): Cannot operate on different types"
    );
}

#[test]
fn test_native_type_mismatch_names_the_argument() {
    let statements = parse_source("Sqrt<native>(value : Float) : Float\nSqrt(9)\n").unwrap();
    let error = Interpreter::new(&statements).interpret().unwrap_err();

    assert_eq!(
        error.to_string(),
        "Runtime error at Sqrt(9): Native method Sqrt requires argument 0 to be of type Float, but got Int"
    );
}

#[test]
fn test_every_syntax_error_is_reported() {
    let errors = parse_source("x := )\ny := 2\nz := (\n").unwrap_err();

    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|error| error.kind() == ErrorKind::Syntax));
    assert_eq!(errors[0].get_position().line, 1);
    assert_eq!(errors[1].get_position().line, 3);
}

#[test]
fn test_syntax_diagnostic_rendering() {
    let source = "x := 1\ny := )\n";
    let errors = parse_source(source).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(
        format_diagnostic(&errors[0], source, &PathBuf::from("main.verse")),
        "Error: UnexpectedToken (Expected expression, instead got `)`)\n-> main.verse\n  |\n2 | y := )\n  | -----^\n"
    );
}
