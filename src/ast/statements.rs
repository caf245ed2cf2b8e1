use crate::lexer::tokens::Token;

use super::{ast::{Expr, Stmt}, types::{Parameter, TypeExpr}};

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: Token,
    pub specifiers: Vec<TypeExpr>,
    pub effects: Vec<TypeExpr>,
    pub parameters: Vec<Parameter>,
    pub return_type: TypeExpr,
    /// `None` for a forward declaration.
    pub body: Option<Vec<Stmt>>,
}

impl FunctionDecl {
    pub fn has_specifier(&self, specifier: &str) -> bool {
        self.specifiers
            .iter()
            .any(|type_| type_.name.lexeme == specifier)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    pub name: Token,
    pub specifiers: Vec<TypeExpr>,
    /// `None` when declared with `:=`, the type then comes from the initializer.
    pub explicit_type: Option<TypeExpr>,
    pub initializer: Expr,
    pub mutable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}
