use crate::{lexer::tokens::Token, value::value::Value, Position};

use super::ast::{Expr, Stmt};

/// `if (condition) { ... } else { ... }`, usable anywhere an expression is.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub then_branch: Vec<Stmt>,
    /// Empty when there is no `else`.
    pub else_branch: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub target: Token,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: Token,
    pub operand: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupingExpr {
    pub inner: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Value,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

/// Member access, `target.member`.
#[derive(Debug, Clone, PartialEq)]
pub struct GetExpr {
    pub target: Box<Expr>,
    pub member: Token,
}
