use crate::{
    ast::types::TypeExpr,
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses `[]T`, `[K]T` or `T`, each optionally followed by `?`.
pub fn parse_type(parser: &mut Parser, context: &str) -> Result<TypeExpr, Error> {
    let mut is_array = false;
    let mut key_type = None;

    if parser.advance_if(&[TokenKind::OpenBracket]) {
        if parser.current_token_kind() == TokenKind::CloseBracket {
            is_array = true;
        } else {
            key_type = Some(parse_type(parser, "in map key type")?);
        }

        parser.expect(TokenKind::CloseBracket, "in type declaration")?;
    }

    let name = parser.expect(TokenKind::Identifier, context)?;
    let type_ = match key_type {
        Some(key_type) => TypeExpr::map(key_type, name),
        None if is_array => TypeExpr::array(name),
        None => TypeExpr::named(name),
    };

    if parser.advance_if(&[TokenKind::Question]) {
        Ok(type_.optional())
    } else {
        Ok(type_)
    }
}

/// Parses zero or more specifier lists, accepting both `<a, b>` and `<a><b>`.
pub fn parse_specifiers(parser: &mut Parser, context: &str) -> Result<Vec<TypeExpr>, Error> {
    let mut specifiers = vec![];

    while parser.advance_if(&[TokenKind::Less]) {
        loop {
            specifiers.push(parse_type(parser, context)?);

            if !parser.advance_if(&[TokenKind::Comma]) {
                break;
            }
        }

        parser.expect(TokenKind::Greater, "after specifier type")?;
    }

    Ok(specifiers)
}
