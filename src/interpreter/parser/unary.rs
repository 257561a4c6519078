use std::iter::Peekable;

use crate::{
    ast::{Factor, FactorKind, VariableRef},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{MAX_NESTING, ParseResult, parse_expression},
            utils::{expect, parse_arguments, unexpected},
        },
    },
};

/// Token kinds that can begin an operand.
const OPERAND: [&str; 8] = ["num", "func", "dmvar", "dsvar", "damvar", "mvar", "svar", "lparen"];

/// Parses a factor.
///
/// Grammar:
/// ```text
///     factor  := "-"? operand
///     operand := NUM
///              | FUNC "(" expression ("," expression)* ")"
///              | DMVAR | DSVAR | DAMVAR | MVAR | SVAR
///              | "(" expression ")"
/// ```
/// At most one minus is accepted; `--2` is rejected.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Nesting level of the enclosing expression. A group or call
///   opened here must stay within [`MAX_NESTING`].
///
/// # Returns
/// A [`Factor`] with its negation flag set when a minus was consumed.
///
/// # Errors
/// `TooDeep` when a group or call would nest past [`MAX_NESTING`].
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Factor>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let negated = matches!(tokens.peek(), Some((Token::Minus, _)));
    if negated {
        tokens.next();
    }

    let kind = match tokens.next() {
        Some((Token::Number(n), _)) => FactorKind::Number(*n),
        Some((Token::Function(name), column)) => {
            let inner = nested(depth, *column)?;
            expect(tokens, &Token::LParen)?;
            FactorKind::Call { name:      name.clone(),
                               arguments: parse_arguments(tokens, inner)?, }
        },
        Some((Token::DefineMatrix(c), _)) => FactorKind::Variable(VariableRef::DefineMatrix(*c)),
        Some((Token::DefineScalar(c), _)) => FactorKind::Variable(VariableRef::DefineScalar(*c)),
        Some((Token::DefineAnonymousMatrix, _)) => {
            FactorKind::Variable(VariableRef::DefineAnonymousMatrix)
        },
        Some((Token::MatrixVariable(c), _)) => FactorKind::Variable(VariableRef::Matrix(*c)),
        Some((Token::ScalarVariable(c), _)) => FactorKind::Variable(VariableRef::Scalar(*c)),
        Some((Token::LParen, column)) => parse_grouping(tokens, nested(depth, *column)?)?,
        found if negated => return Err(unexpected(found, &OPERAND)),
        found => {
            let mut expected = vec!["minus"];
            expected.extend(OPERAND);
            return Err(unexpected(found, &expected));
        },
    };

    Ok(Factor { negated, kind })
}

/// Parses the inside of `( ... )` after the opening parenthesis.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<FactorKind>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let inner = parse_expression(tokens, depth)?;
    expect(tokens, &Token::RParen)?;
    Ok(FactorKind::Grouping(Box::new(inner)))
}

/// The depth inside a group or call opened at `column`.
fn nested(depth: usize, column: usize) -> ParseResult<usize> {
    if depth >= MAX_NESTING {
        return Err(ParseError::TooDeep { column });
    }
    Ok(depth + 1)
}
