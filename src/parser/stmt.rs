use log::trace;

use crate::{
    ast::{
        ast::Stmt,
        statements::{BlockStmt, ExpressionStmt, FunctionDecl, VariableDecl},
        types::{Parameter, TypeExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    expr::{parse_assignment, parse_expr},
    parser::Parser,
    types::{parse_specifiers, parse_type},
};

/// Tokens that may follow the name of a declaration.
const DECLARATION_FOLLOWERS: [TokenKind; 4] = [
    TokenKind::Colon,
    TokenKind::Less,
    TokenKind::OpenParen,
    TokenKind::InferredDecl,
];

/// Parses statements until end of input, or until `}` when `in_block` is set.
///
/// Failed statements are reported on the parser and skipped, so the result
/// holds every statement that could be recovered.
pub fn parse_statement_list(parser: &mut Parser, in_block: bool) -> Vec<Stmt> {
    let mut statements = vec![];

    while !parser.eat_blank_lines() {
        if in_block && parser.current_token_kind() == TokenKind::CloseCurly {
            break;
        }

        match parse_declaration(parser) {
            Ok(stmt) => {
                trace!("Parsed statement {:?}", stmt);
                statements.push(stmt);
                if let Err(error) = parse_statement_end(parser) {
                    parser.recover(error, in_block);
                }
            }
            Err(error) => parser.recover(error, in_block),
        }
    }

    statements
}

/// Parses the statements of a block whose `{` was already consumed, then the closing `}`.
pub fn parse_block_body(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let body = parse_statement_list(parser, true);
    parser.expect(TokenKind::CloseCurly, "after block")?;
    Ok(body)
}

/// A statement ends with `;`, a newline or end of input. A `}` also ends it
/// but is left for the enclosing block.
pub fn parse_statement_end(parser: &mut Parser) -> Result<(), Error> {
    if parser.current_token_kind() == TokenKind::CloseCurly {
        return Ok(());
    }

    if parser.advance_if(&[TokenKind::Semicolon, TokenKind::NewLine, TokenKind::EOF]) {
        Ok(())
    } else {
        Err(parser.error("Unexpected {peek} following expression"))
    }
}

pub fn parse_declaration(parser: &mut Parser) -> Result<Stmt, Error> {
    let mutable = parser.advance_if(&[TokenKind::Var]);

    if mutable {
        let name = parser.expect(TokenKind::Identifier, "in variable declaration")?;
        let specifiers = parse_specifiers(parser, "in declaration")?;
        return parse_variable_decl(parser, name, specifiers, true);
    }

    let looks_like_declaration = parser.current_token_kind() == TokenKind::Identifier
        && parser
            .next_token()
            .is_some_and(|token| token.is_one_of_many(&DECLARATION_FOLLOWERS));

    if looks_like_declaration {
        parser.checkpoint()?;

        match parse_speculative_declaration(parser) {
            Ok(stmt) => return Ok(stmt),
            // Committed, so this really is a malformed declaration.
            Err(error) if !parser.has_checkpoint() => return Err(error),
            Err(error) => {
                trace!("Not a declaration: {}", error);
                parser.restore();
            }
        }
    }

    parse_statement(parser)
}

fn parse_speculative_declaration(parser: &mut Parser) -> Result<Stmt, Error> {
    let name = parser.expect(TokenKind::Identifier, "in declaration")?;
    let specifiers = parse_specifiers(parser, "in declaration")?;

    if parser
        .current_token()
        .is_one_of_many(&[TokenKind::Colon, TokenKind::InferredDecl])
    {
        parser.commit();
        return parse_variable_decl(parser, name, specifiers, false);
    }

    if parser.current_token_kind() != TokenKind::OpenParen {
        return Err(parser.error("Expected definition but found {peek}"));
    }

    parse_function_decl(parser, name, specifiers)
}

fn parse_variable_decl(
    parser: &mut Parser,
    name: Token,
    specifiers: Vec<TypeExpr>,
    mutable: bool,
) -> Result<Stmt, Error> {
    if mutable && parser.current_token_kind() == TokenKind::InferredDecl {
        return Err(parser.error_impl(ErrorImpl::MissingMutableType));
    }

    let explicit_type = if parser.advance_if(&[TokenKind::InferredDecl]) {
        None
    } else {
        parser.expect(TokenKind::Colon, "in variable definition")?;
        let type_ = parse_type(parser, "in variable definition")?;
        parser.expect(TokenKind::Equals, "in variable definition")?;
        Some(type_)
    };

    let initializer = parse_expr(parser)?;

    Ok(Stmt::VariableDecl(VariableDecl {
        name,
        specifiers,
        explicit_type,
        initializer,
        mutable,
    }))
}

fn parse_function_decl(
    parser: &mut Parser,
    name: Token,
    specifiers: Vec<TypeExpr>,
) -> Result<Stmt, Error> {
    parser.expect(TokenKind::OpenParen, "in function declaration")?;

    let mut parameters = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            let parameter_name = parser.expect(TokenKind::Identifier, "in parameter declaration")?;
            parser.expect(TokenKind::Colon, "in parameter declaration")?;
            let parameter_type = parse_type(parser, "in parameter declaration")?;

            parameters.push(Parameter {
                name: parameter_name,
                type_: Some(parameter_type),
            });

            if !parser.advance_if(&[TokenKind::Comma]) {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen, "in function declaration")?;
    let effects = parse_specifiers(parser, "in function declaration")?;
    parser.expect(TokenKind::Colon, "in function declaration")?;

    // `name(params) :` cannot be anything but a function declaration.
    parser.commit();

    let return_type = parse_type(parser, "in function declaration")?;

    let body = if parser.advance_if(&[TokenKind::Equals]) {
        parser.expect(TokenKind::OpenCurly, "in function declaration")?;
        Some(parse_block_body(parser)?)
    } else {
        None
    };

    Ok(Stmt::FunctionDecl(FunctionDecl {
        name,
        specifiers,
        effects,
        parameters,
        return_type,
        body,
    }))
}

pub fn parse_statement(parser: &mut Parser) -> Result<Stmt, Error> {
    if parser.current_token_kind() == TokenKind::Block
        && parser.next_token_kind() == Some(TokenKind::OpenCurly)
    {
        parser.advance();
        parser.advance();
        let body = parse_block_body(parser)?;
        return Ok(Stmt::Block(BlockStmt { body }));
    }

    let expression = parse_assignment(parser)?;
    Ok(Stmt::Expression(ExpressionStmt { expression }))
}
