use pretty_assertions::assert_eq;

use crate::{
    ast::{
        ast::{find_function, Expr, Stmt},
        expressions::{BinaryExpr, GroupingExpr, LiteralExpr, VariableExpr},
        printer::{print_expr, print_stmt},
        types::{Parameter, TypeExpr},
    },
    lexer::tokens::{Token, TokenKind},
    parse_source,
    value::{number::Number, value::Value},
    Position, MK_TOKEN,
};

fn identifier(name: &str) -> Token {
    MK_TOKEN!(
        TokenKind::Identifier,
        String::from(name),
        None,
        Position::new(1, 1)
    )
}

fn int(value: i32) -> Expr {
    Expr::Literal(LiteralExpr {
        value: Value::Number(Number::Int(value)),
        position: Position::new(1, 1),
    })
}

#[test]
fn test_type_display() {
    assert_eq!(TypeExpr::named(identifier("Int")).to_string(), "Int");
    assert_eq!(TypeExpr::array(identifier("String")).to_string(), "[]String");
    assert_eq!(
        TypeExpr::map(TypeExpr::named(identifier("String")), identifier("Int")).to_string(),
        "[String]Int"
    );
    assert_eq!(
        TypeExpr::array(identifier("Int")).optional().to_string(),
        "[]Int?"
    );
}

#[test]
fn test_parameter_display() {
    let typed = Parameter {
        name: identifier("x"),
        type_: Some(TypeExpr::named(identifier("Float"))),
    };
    let untyped = Parameter {
        name: identifier("y"),
        type_: None,
    };

    assert_eq!(typed.to_string(), "x : Float");
    assert_eq!(untyped.to_string(), "y");
}

#[test]
fn test_print_hand_built_expression() {
    let expr = Expr::Binary(BinaryExpr {
        left: Box::new(Expr::Grouping(GroupingExpr {
            inner: Box::new(Expr::Binary(BinaryExpr {
                left: Box::new(int(1)),
                operator: MK_TOKEN!(TokenKind::Plus, String::from("+"), None, Position::new(1, 3)),
                right: Box::new(int(2)),
            })),
        })),
        operator: MK_TOKEN!(TokenKind::Star, String::from("*"), None, Position::new(1, 8)),
        right: Box::new(Expr::Variable(VariableExpr {
            name: identifier("n"),
        })),
    });

    assert_eq!(print_expr(&expr), "((group (1 + 2)) * n)");
}

#[test]
fn test_print_parsed_program() {
    let statements = parse_source(
        "x : Int = (1 + 2) * 3\nvar name : String = \"verse\"\nratio := 2.0 / 4.5\n",
    )
    .unwrap();

    let printed = statements.iter().map(print_stmt).collect::<Vec<_>>();

    assert_eq!(
        printed,
        vec![
            "x : Int = ((group (1 + 2)) * 3)",
            "var name : String = \"verse\"",
            "ratio := (2.0 / 4.5)",
        ]
    );
}

#[test]
fn test_print_function_with_body() {
    let statements = parse_source("square(n : Int) : Int = {\n    n * n\n}\n").unwrap();

    assert_eq!(
        print_stmt(&statements[0]),
        "square(n : Int) : Int {\n(n * n)\n}"
    );
}

#[test]
fn test_print_if_else() {
    let statements = parse_source("if (a < b) { a } else { b }").unwrap();

    assert_eq!(
        print_stmt(&statements[0]),
        "if ((a < b)) {\na\n} else {\nb\n}"
    );
}

#[test]
fn test_find_function() {
    let statements =
        parse_source("x := 1\nPrint<native>(s : String) : void\nadd(a : Int, b : Int) : Int\n")
            .unwrap();

    let print = find_function(&statements, "Print").unwrap();
    assert!(print.has_specifier("native"));
    assert!(print.body.is_none());

    let add = find_function(&statements, "add").unwrap();
    assert!(!add.has_specifier("native"));
    assert_eq!(add.parameters.len(), 2);

    assert!(find_function(&statements, "x").is_none());
    assert!(find_function(&statements, "missing").is_none());
}

#[test]
fn test_expression_position() {
    let statements = parse_source("  total + 1").unwrap();

    match &statements[0] {
        Stmt::Expression(stmt) => {
            assert_eq!(stmt.expression.position(), Position::new(1, 3));
        }
        other => panic!("expected an expression statement, got {:?}", other),
    }
}
