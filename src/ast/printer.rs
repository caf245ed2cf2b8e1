//! Canonical text rendering of the AST.
//!
//! Used by `--print-ast` and to name the offending expression in runtime
//! errors. The output format is stable and pinned by golden tests.

use crate::value::value::Value;

use super::{
    ast::{Expr, Stmt, Visitor},
    expressions::{
        AssignExpr, BinaryExpr, CallExpr, GetExpr, GroupingExpr, IfExpr, LiteralExpr, UnaryExpr,
        VariableExpr,
    },
    statements::{BlockStmt, ExpressionStmt, FunctionDecl, VariableDecl},
    types::TypeExpr,
};

pub struct AstPrinter;

impl AstPrinter {
    fn statements(&mut self, statements: &[Stmt]) -> String {
        let mut out = String::new();
        for stmt in statements {
            out.push_str(&stmt.accept(self));
            out.push('\n');
        }
        out
    }

    fn block(&mut self, statements: &[Stmt]) -> String {
        format!("{{\n{}}}", self.statements(statements))
    }
}

fn specifier_list(specifiers: &[TypeExpr]) -> String {
    specifiers
        .iter()
        .map(|specifier| format!("<{}>", specifier))
        .collect()
}

impl Visitor for AstPrinter {
    type Output = String;

    fn visit_function_decl(&mut self, stmt: &FunctionDecl) -> String {
        let parameters = stmt
            .parameters
            .iter()
            .map(|parameter| parameter.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let mut out = format!(
            "{}{}({}){} : {}",
            stmt.name.lexeme,
            specifier_list(&stmt.specifiers),
            parameters,
            specifier_list(&stmt.effects),
            stmt.return_type
        );

        if let Some(body) = &stmt.body {
            out.push(' ');
            out.push_str(&self.block(body));
        }

        out
    }

    fn visit_variable_decl(&mut self, stmt: &VariableDecl) -> String {
        let prefix = if stmt.mutable { "var " } else { "" };
        let initializer = stmt.initializer.accept(self);

        match &stmt.explicit_type {
            Some(type_) => format!(
                "{}{}{} : {} = {}",
                prefix,
                stmt.name.lexeme,
                specifier_list(&stmt.specifiers),
                type_,
                initializer
            ),
            None => format!(
                "{}{}{} := {}",
                prefix,
                stmt.name.lexeme,
                specifier_list(&stmt.specifiers),
                initializer
            ),
        }
    }

    fn visit_block(&mut self, stmt: &BlockStmt) -> String {
        self.block(&stmt.body)
    }

    fn visit_expression_stmt(&mut self, stmt: &ExpressionStmt) -> String {
        stmt.expression.accept(self)
    }

    fn visit_if(&mut self, expr: &IfExpr) -> String {
        let mut out = format!(
            "if ({}) {}",
            expr.condition.accept(self),
            self.block(&expr.then_branch)
        );

        if !expr.else_branch.is_empty() {
            out.push_str(" else ");
            out.push_str(&self.block(&expr.else_branch));
        }

        out
    }

    fn visit_assign(&mut self, expr: &AssignExpr) -> String {
        format!("{} = {}", expr.target.lexeme, expr.value.accept(self))
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> String {
        format!(
            "({} {} {})",
            expr.left.accept(self),
            expr.operator.lexeme,
            expr.right.accept(self)
        )
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) -> String {
        format!("{}{}", expr.operator.lexeme, expr.operand.accept(self))
    }

    fn visit_grouping(&mut self, expr: &GroupingExpr) -> String {
        format!("(group {})", expr.inner.accept(self))
    }

    fn visit_literal(&mut self, expr: &LiteralExpr) -> String {
        match &expr.value {
            Value::String(text) => format!("\"{}\"", text),
            value => value.to_string(),
        }
    }

    fn visit_variable(&mut self, expr: &VariableExpr) -> String {
        expr.name.lexeme.clone()
    }

    fn visit_call(&mut self, expr: &CallExpr) -> String {
        let arguments = expr
            .arguments
            .iter()
            .map(|argument| argument.accept(self))
            .collect::<Vec<_>>()
            .join(", ");

        format!("{}({})", expr.callee.accept(self), arguments)
    }

    fn visit_get(&mut self, expr: &GetExpr) -> String {
        format!("{}.{}", expr.target.accept(self), expr.member.lexeme)
    }
}

pub fn print_stmt(stmt: &Stmt) -> String {
    stmt.accept(&mut AstPrinter)
}

pub fn print_expr(expr: &Expr) -> String {
    expr.accept(&mut AstPrinter)
}
