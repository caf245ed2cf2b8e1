use crate::Position;

use super::{
    expressions::{
        AssignExpr, BinaryExpr, CallExpr, GetExpr, GroupingExpr, IfExpr, LiteralExpr, UnaryExpr,
        VariableExpr,
    },
    statements::{BlockStmt, ExpressionStmt, FunctionDecl, VariableDecl},
};

/// Statement
///
/// Every statement form the parser can produce. The set is closed: consumers
/// either match on it directly or implement [`Visitor`].
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    FunctionDecl(FunctionDecl),
    VariableDecl(VariableDecl),
    Block(BlockStmt),
    Expression(ExpressionStmt),
}

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    If(IfExpr),
    Assign(AssignExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Grouping(GroupingExpr),
    Literal(LiteralExpr),
    Variable(VariableExpr),
    Call(CallExpr),
    Get(GetExpr),
}

/// One method per node kind. Adding a node kind means adding a method here,
/// so every visitor is forced to handle it.
pub trait Visitor {
    type Output;

    fn visit_function_decl(&mut self, stmt: &FunctionDecl) -> Self::Output;
    fn visit_variable_decl(&mut self, stmt: &VariableDecl) -> Self::Output;
    fn visit_block(&mut self, stmt: &BlockStmt) -> Self::Output;
    fn visit_expression_stmt(&mut self, stmt: &ExpressionStmt) -> Self::Output;

    fn visit_if(&mut self, expr: &IfExpr) -> Self::Output;
    fn visit_assign(&mut self, expr: &AssignExpr) -> Self::Output;
    fn visit_binary(&mut self, expr: &BinaryExpr) -> Self::Output;
    fn visit_unary(&mut self, expr: &UnaryExpr) -> Self::Output;
    fn visit_grouping(&mut self, expr: &GroupingExpr) -> Self::Output;
    fn visit_literal(&mut self, expr: &LiteralExpr) -> Self::Output;
    fn visit_variable(&mut self, expr: &VariableExpr) -> Self::Output;
    fn visit_call(&mut self, expr: &CallExpr) -> Self::Output;
    fn visit_get(&mut self, expr: &GetExpr) -> Self::Output;
}

impl Stmt {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Stmt::FunctionDecl(stmt) => visitor.visit_function_decl(stmt),
            Stmt::VariableDecl(stmt) => visitor.visit_variable_decl(stmt),
            Stmt::Block(stmt) => visitor.visit_block(stmt),
            Stmt::Expression(stmt) => visitor.visit_expression_stmt(stmt),
        }
    }
}

impl Expr {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::If(expr) => visitor.visit_if(expr),
            Expr::Assign(expr) => visitor.visit_assign(expr),
            Expr::Binary(expr) => visitor.visit_binary(expr),
            Expr::Unary(expr) => visitor.visit_unary(expr),
            Expr::Grouping(expr) => visitor.visit_grouping(expr),
            Expr::Literal(expr) => visitor.visit_literal(expr),
            Expr::Variable(expr) => visitor.visit_variable(expr),
            Expr::Call(expr) => visitor.visit_call(expr),
            Expr::Get(expr) => visitor.visit_get(expr),
        }
    }

    /// Where the expression starts in the source, used to place runtime errors.
    pub fn position(&self) -> Position {
        match self {
            Expr::If(expr) => expr.condition.position(),
            Expr::Assign(expr) => expr.target.position,
            Expr::Binary(expr) => expr.left.position(),
            Expr::Unary(expr) => expr.operator.position,
            Expr::Grouping(expr) => expr.inner.position(),
            Expr::Literal(expr) => expr.position,
            Expr::Variable(expr) => expr.name.position,
            Expr::Call(expr) => expr.callee.position(),
            Expr::Get(expr) => expr.target.position(),
        }
    }
}

/// Finds the first top-level function declaration named `name`.
pub fn find_function<'a>(statements: &'a [Stmt], name: &str) -> Option<&'a FunctionDecl> {
    statements.iter().find_map(|stmt| match stmt {
        Stmt::FunctionDecl(decl) if decl.name.lexeme == name => Some(decl),
        _ => None,
    })
}
