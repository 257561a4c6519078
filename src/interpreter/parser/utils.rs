use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Builds the error for a token the grammar does not allow.
///
/// A missing token is reported as `EOF` at column 0; this only happens when
/// the caller passed a slice that was not produced by `tokenize`.
pub(in crate::interpreter::parser) fn unexpected(found: Option<&(Token, usize)>,
                                                 expected: &[&'static str])
                                                 -> ParseError {
    let (found, column) = found.map_or(("EOF", 0), |(tok, col)| (tok.kind(), *col));
    ParseError::UnexpectedToken { expected: expected.to_vec(),
                                  found,
                                  column }
}

/// Consumes the next token if it has the same kind as `wanted`.
///
/// # Errors
/// `UnexpectedToken` naming the kind of `wanted` otherwise.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    wanted: &Token)
                                                    -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, _)) if tok.kind() == wanted.kind() => Ok(()),
        found => Err(unexpected(found, &[wanted.kind()])),
    }
}

/// Parses a call's argument list after the opening parenthesis.
///
/// Grammar: `arguments := expression ("," expression)* ")"`
///
/// An empty list is rejected; every function takes at least one argument.
///
/// # Returns
/// The argument expressions in source order.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an argument fails to parse,
/// - something other than `,` or `)` follows an argument.
pub(in crate::interpreter::parser) fn parse_arguments<'a, I>(tokens: &mut Peekable<I>,
                                                             depth: usize)
                                                             -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut arguments = Vec::new();
    loop {
        arguments.push(parse_expression(tokens, depth)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => return Ok(arguments),
            found => return Err(unexpected(found, &["comma", "rparen"])),
        }
    }
}
