use log::{debug, trace};

use crate::{
    ast::{
        ast::{find_function, Expr, Stmt, Visitor},
        expressions::{
            AssignExpr, BinaryExpr, CallExpr, GetExpr, GroupingExpr, IfExpr, LiteralExpr,
            UnaryExpr, VariableExpr,
        },
        printer::{print_expr, print_stmt},
        statements::{BlockStmt, ExpressionStmt, FunctionDecl, VariableDecl},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    value::{number::Number, value::Value},
};

use super::{
    environment::Environment,
    native::{NativeRegistry, NativeValue, NATIVES},
};

/// What evaluating a node yields: a value, or nothing for pure statements
/// and calls to functions returning `void`.
pub type Evaluation = Result<Option<Value>, Error>;

/// Tree-walking evaluator over a parsed program.
///
/// Functions are resolved by name against the top-level statements the
/// interpreter was created with, variables through the scope chain.
pub struct Interpreter<'a> {
    statements: &'a [Stmt],
    natives: &'a NativeRegistry,
    environment: Environment,
}

impl<'a> Interpreter<'a> {
    pub fn new(statements: &'a [Stmt]) -> Self {
        Interpreter::with_natives(statements, &NATIVES)
    }

    pub fn with_natives(statements: &'a [Stmt], natives: &'a NativeRegistry) -> Self {
        Interpreter {
            statements,
            natives,
            environment: Environment::new(),
        }
    }

    /// Runs every top-level statement in order, stopping at the first error.
    pub fn interpret(&mut self) -> Result<(), Error> {
        let statements = self.statements;
        debug!("Interpreting {} statements", statements.len());

        for stmt in statements {
            trace!("Executing {}", print_stmt(stmt));
            self.execute(stmt)?;
        }

        debug!("Interpretation finished");
        Ok(())
    }

    pub fn execute(&mut self, stmt: &Stmt) -> Evaluation {
        stmt.accept(self)
            .map_err(|error| error.with_context(print_stmt(stmt)))
    }

    /// Evaluates an expression that must produce a value.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, Error> {
        self.evaluate_optional(expr)?.ok_or_else(|| {
            Error::new(ErrorImpl::ExpectedValue, expr.position()).with_context(print_expr(expr))
        })
    }

    fn evaluate_optional(&mut self, expr: &Expr) -> Evaluation {
        expr.accept(self)
            .map_err(|error| error.with_context(print_expr(expr)))
    }

    /// Current value of a variable visible from the innermost scope.
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.environment.get_variable(name).map(|(_, value)| value)
    }

    /// Runs `statements` in a fresh child scope, yielding the last statement's value.
    fn execute_block(&mut self, statements: &[Stmt]) -> Evaluation {
        let parent = std::mem::take(&mut self.environment);
        self.environment = Environment::with_parent(parent);

        let mut result = Ok(None);
        for stmt in statements {
            result = self.execute(stmt);
            if result.is_err() {
                break;
            }
        }

        if let Some(parent) = self.environment.take_parent() {
            self.environment = parent;
        }

        result
    }

    fn call_native(&mut self, decl: &FunctionDecl, expr: &CallExpr) -> Evaluation {
        let mut arguments = Vec::with_capacity(expr.arguments.len());
        for argument in &expr.arguments {
            arguments.push(to_native(self.evaluate(argument)?));
        }

        let result = self
            .natives
            .call(&decl.name.lexeme, arguments)
            .map_err(|error| Error::new(ErrorImpl::from(error), expr.callee.position()))?;

        from_native(result).map_err(|error| Error::new(error, expr.callee.position()))
    }
}

fn to_native(value: Value) -> NativeValue {
    match value {
        Value::Boolean(value) => NativeValue::Bool(value),
        Value::String(value) => NativeValue::String(value),
        Value::Number(Number::Int(value)) => NativeValue::Int(value),
        Value::Number(Number::Float(value)) => NativeValue::Float(value),
        Value::Function(name) => NativeValue::Function(name),
    }
}

fn from_native(value: NativeValue) -> Result<Option<Value>, ErrorImpl> {
    match value {
        NativeValue::Int(value) => Ok(Some(Value::Number(Number::Int(value)))),
        NativeValue::Float(value) => Ok(Some(Value::Number(Number::Float(value)))),
        NativeValue::Bool(value) => Ok(Some(Value::Boolean(value))),
        NativeValue::Char(value) => Ok(Some(Value::String(value.to_string()))),
        NativeValue::String(value) => Ok(Some(Value::String(value))),
        NativeValue::Function(name) => Ok(Some(Value::Function(name))),
        NativeValue::Void => Ok(None),
        NativeValue::Array(_) => Err(ErrorImpl::NotImplementedError {
            feature: String::from("Array values"),
        }),
    }
}

impl Visitor for Interpreter<'_> {
    type Output = Evaluation;

    fn visit_function_decl(&mut self, _stmt: &FunctionDecl) -> Evaluation {
        // Resolved by name at call time.
        Ok(None)
    }

    fn visit_variable_decl(&mut self, stmt: &VariableDecl) -> Evaluation {
        let value = self.evaluate(&stmt.initializer)?;
        self.environment.declare_variable(
            stmt.name.lexeme.clone(),
            value,
            stmt.mutable,
            stmt.name.position,
        )?;
        Ok(None)
    }

    fn visit_block(&mut self, stmt: &BlockStmt) -> Evaluation {
        self.execute_block(&stmt.body)?;
        Ok(None)
    }

    fn visit_expression_stmt(&mut self, stmt: &ExpressionStmt) -> Evaluation {
        self.evaluate_optional(&stmt.expression)
    }

    fn visit_if(&mut self, expr: &IfExpr) -> Evaluation {
        let condition = self.evaluate(&expr.condition)?;

        if condition.is_truthy() {
            self.execute_block(&expr.then_branch)
        } else {
            self.execute_block(&expr.else_branch)
        }
    }

    fn visit_assign(&mut self, expr: &AssignExpr) -> Evaluation {
        let value = self.evaluate(&expr.value)?;
        self.environment
            .assign_variable(&expr.target.lexeme, value.clone(), expr.target.position)?;
        Ok(Some(value))
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> Evaluation {
        let left = self.evaluate(&expr.left)?;
        let right = self.evaluate(&expr.right)?;
        let operator = expr.operator.kind;
        let position = expr.operator.position;

        let numeric = matches!(
            operator,
            TokenKind::Plus
                | TokenKind::Dash
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Greater
                | TokenKind::GreaterEquals
                | TokenKind::Less
                | TokenKind::LessEquals
        );

        if operator == TokenKind::Equals {
            return Ok(Some(Value::Boolean(left == right)));
        }

        if !numeric {
            return Err(Error::new(
                ErrorImpl::UnknownOperator {
                    operator: expr.operator.lexeme.clone(),
                },
                position,
            ));
        }

        let (left, right) = match (left.as_number(), right.as_number()) {
            (Some(left), Some(right)) => (left, right),
            _ => return Err(Error::new(ErrorImpl::ExpectedNumber, position)),
        };

        let result = match operator {
            TokenKind::Plus => left.add(right).map(Value::from),
            TokenKind::Dash => left.subtract(right).map(Value::from),
            TokenKind::Star => left.multiply(right).map(Value::from),
            TokenKind::Slash => left.divide(right).map(Value::from),
            _ => left.relational(operator, right).map(Value::Boolean),
        };

        result
            .map(Some)
            .map_err(|error| Error::new(error, position))
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) -> Evaluation {
        let operand = self.evaluate(&expr.operand)?;
        let position = expr.operator.position;

        match expr.operator.kind {
            TokenKind::Dash => match operand.as_number() {
                Some(number) => Ok(Some(Value::Number(number.negate()))),
                None => Err(Error::new(ErrorImpl::ExpectedNumber, position)),
            },
            TokenKind::Not => Ok(Some(Value::Boolean(!operand.is_truthy()))),
            _ => Err(Error::new(
                ErrorImpl::UnknownOperator {
                    operator: expr.operator.lexeme.clone(),
                },
                position,
            )),
        }
    }

    fn visit_grouping(&mut self, expr: &GroupingExpr) -> Evaluation {
        self.evaluate_optional(&expr.inner)
    }

    fn visit_literal(&mut self, expr: &LiteralExpr) -> Evaluation {
        Ok(Some(expr.value.clone()))
    }

    fn visit_variable(&mut self, expr: &VariableExpr) -> Evaluation {
        let name = &expr.name.lexeme;

        if let Some(value) = self.get_variable(name) {
            return Ok(Some(value.clone()));
        }

        if find_function(self.statements, name).is_some() {
            return Ok(Some(Value::Function(name.clone())));
        }

        Err(Error::new(
            ErrorImpl::VariableNotDeclared {
                variable: name.clone(),
            },
            expr.name.position,
        ))
    }

    fn visit_call(&mut self, expr: &CallExpr) -> Evaluation {
        let callee = match expr.callee.as_ref() {
            Expr::Variable(variable) => &variable.name,
            _ => return Err(Error::new(ErrorImpl::NotCallable, expr.callee.position())),
        };

        // A variable holding a function reference calls that function.
        let function_name = match self.get_variable(&callee.lexeme) {
            Some(Value::Function(target)) => target.clone(),
            Some(_) => return Err(Error::new(ErrorImpl::NotCallable, callee.position)),
            None => callee.lexeme.clone(),
        };

        let statements = self.statements;
        let decl = find_function(statements, &function_name).ok_or_else(|| {
            Error::new(
                ErrorImpl::UndefinedFunction {
                    function: function_name.clone(),
                },
                callee.position,
            )
        })?;

        if !decl.has_specifier("native") {
            return Err(Error::new(
                ErrorImpl::NotImplementedError {
                    feature: format!("Calling non-native function '{}'", function_name),
                },
                callee.position,
            ));
        }

        self.call_native(decl, expr)
    }

    fn visit_get(&mut self, expr: &GetExpr) -> Evaluation {
        let target = self.evaluate(&expr.target)?;

        match (&target, expr.member.lexeme.as_str()) {
            (Value::String(text), "length") => Ok(Some(Value::Number(Number::Int(
                text.chars().count() as i32,
            )))),
            _ => Err(Error::new(
                ErrorImpl::UndefinedMember {
                    member: expr.member.lexeme.clone(),
                    target: target.type_name().to_string(),
                },
                expr.member.position,
            )),
        }
    }
}
