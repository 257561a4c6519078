use std::iter::Peekable;

use crate::{
    ast::{MultiplicativeOperator, Term},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_factor},
    },
};

/// Parses a product chain.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// The chain is kept flat rather than folded into a left-leaning tree. The
/// evaluator groups consecutive multiplications into runs before dividing,
/// which a binary tree could not express without rebalancing.
///
/// # Parameters
/// - `tokens`: Token stream with column information.
/// - `depth`: Nesting level of the enclosing expression.
///
/// # Returns
/// The leading factor with every following `(operator, factor)` pair.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Term>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut term = Term::from_factor(parse_factor(tokens, depth)?);
    loop {
        let op = match tokens.peek() {
            Some((Token::Star, _)) => MultiplicativeOperator::Multiply,
            Some((Token::Slash, _)) => MultiplicativeOperator::Divide,
            _ => break,
        };
        tokens.next();
        term.rest.push((op, parse_factor(tokens, depth)?));
    }
    Ok(term)
}
