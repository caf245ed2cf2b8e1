//! Expression grammar, lowest precedence first:
//!
//! assignment -> if -> equality -> comparison -> addition -> multiplication
//! -> unary -> call -> primary

use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AssignExpr, BinaryExpr, CallExpr, GetExpr, GroupingExpr, IfExpr, LiteralExpr,
            UnaryExpr, VariableExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    value::value::Value,
};

use super::{parser::Parser, stmt::parse_block_body};

const MAX_ARGUMENTS: usize = 255;

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_if_expr(parser)
}

/// `name = value`, only recognised when the statement starts with it.
/// Anywhere else `=` compares.
pub fn parse_assignment(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.current_token_kind() == TokenKind::Identifier
        && parser.next_token_kind() == Some(TokenKind::Equals)
    {
        let target = parser.advance().clone();
        parser.advance();
        let value = parse_assignment(parser)?;

        return Ok(Expr::Assign(AssignExpr {
            target,
            value: Box::new(value),
        }));
    }

    parse_expr(parser)
}

fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if !parser.advance_if(&[TokenKind::If]) {
        return parse_equality(parser);
    }

    parser.expect(TokenKind::OpenParen, "in if expression")?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen, "in if expression")?;

    parser.expect(TokenKind::OpenCurly, "in if expression")?;
    let then_branch = parse_block_body(parser)?;

    let else_branch = if parser.advance_if(&[TokenKind::Else]) {
        parser.expect(TokenKind::OpenCurly, "in else branch")?;
        parse_block_body(parser)?
    } else {
        vec![]
    };

    Ok(Expr::If(IfExpr {
        condition: Box::new(condition),
        then_branch,
        else_branch,
    }))
}

/// Parses a left-associative chain of binary operators from `operators`.
fn parse_binary(
    parser: &mut Parser,
    operators: &[TokenKind],
    operand: fn(&mut Parser) -> Result<Expr, Error>,
) -> Result<Expr, Error> {
    let mut expr = operand(parser)?;

    while parser.current_token().is_one_of_many(operators) {
        let operator = parser.advance().clone();
        let right = operand(parser)?;

        expr = Expr::Binary(BinaryExpr {
            left: Box::new(expr),
            operator,
            right: Box::new(right),
        });
    }

    Ok(expr)
}

fn parse_equality(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary(parser, &[TokenKind::Equals], parse_comparison)
}

fn parse_comparison(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary(
        parser,
        &[
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::Less,
            TokenKind::LessEquals,
        ],
        parse_addition,
    )
}

fn parse_addition(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary(parser, &[TokenKind::Plus, TokenKind::Dash], parse_multiplication)
}

fn parse_multiplication(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary(parser, &[TokenKind::Star, TokenKind::Slash], parse_unary)
}

fn parse_unary(parser: &mut Parser) -> Result<Expr, Error> {
    if parser
        .current_token()
        .is_one_of_many(&[TokenKind::Dash, TokenKind::Not])
    {
        let operator = parser.advance().clone();
        let operand = parse_unary(parser)?;

        return Ok(Expr::Unary(UnaryExpr {
            operator,
            operand: Box::new(operand),
        }));
    }

    parse_call(parser)
}

fn parse_call(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_primary(parser)?;

    loop {
        if parser.advance_if(&[TokenKind::OpenParen]) {
            expr = finish_call(parser, expr)?;
        } else if parser.advance_if(&[TokenKind::Dot]) {
            let member = parser.expect(TokenKind::Identifier, "after `.`")?;
            expr = Expr::Get(GetExpr {
                target: Box::new(expr),
                member,
            });
        } else {
            break;
        }
    }

    Ok(expr)
}

fn finish_call(parser: &mut Parser, callee: Expr) -> Result<Expr, Error> {
    let mut arguments = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            if arguments.len() >= MAX_ARGUMENTS {
                return Err(parser.error_impl(ErrorImpl::TooManyArguments));
            }

            arguments.push(parse_expr(parser)?);

            if !parser.advance_if(&[TokenKind::Comma]) {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen, "after function arguments")?;

    Ok(Expr::Call(CallExpr {
        callee: Box::new(callee),
        arguments,
    }))
}

fn parse_primary(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::True | TokenKind::False => {
            parser.advance();
            Ok(Expr::Literal(LiteralExpr {
                value: Value::Boolean(token.kind == TokenKind::True),
                position: token.position,
            }))
        }
        TokenKind::Int | TokenKind::Float | TokenKind::String => match token.literal {
            Some(value) => {
                parser.advance();
                Ok(Expr::Literal(LiteralExpr {
                    value,
                    position: token.position,
                }))
            }
            None => Err(parser.error("Expected expression, instead got {peek}")),
        },
        TokenKind::Identifier => {
            parser.advance();
            Ok(Expr::Variable(VariableExpr { name: token }))
        }
        TokenKind::OpenParen => {
            parser.advance();
            let inner = parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen, "after expression")?;
            Ok(Expr::Grouping(GroupingExpr {
                inner: Box::new(inner),
            }))
        }
        _ => Err(parser.error("Expected expression, instead got {peek}")),
    }
}
