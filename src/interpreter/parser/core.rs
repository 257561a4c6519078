use std::iter::Peekable;

use crate::{
    ast::{AdditiveOperator, Expr, Target},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_term, utils::unexpected},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of groups and calls a line may use.
pub const MAX_NESTING: usize = 64;

/// Token kinds that may follow a complete sum at the top level.
const AFTER_EXPRESSION: [&str; 6] = ["plus", "minus", "mult", "div", "arrow", "EOF"];

/// Parses one tokenized line.
///
/// Grammar: `line := expression ("->" (MVAR | SVAR))? EOF`
///
/// # Parameters
/// - `tokens`: The output of [`tokenize`](crate::interpreter::lexer::tokenize),
///   ending in `EndOfInput`.
///
/// # Returns
/// The root expression, carrying the assignment target if one was written.
///
/// # Errors
/// - `UnexpectedToken` on the first token the grammar does not allow,
///   including anything left over after the target.
/// - `TooDeep` when groups and calls nest past [`MAX_NESTING`].
///
/// ## Example
/// ```
/// use rowsmith::{
///     ast::Target,
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let expr = parse(&tokenize("A + B -> C").unwrap()).unwrap();
/// assert_eq!(expr.rest.len(), 1);
/// assert_eq!(expr.target, Some(Target::Matrix('C')));
///
/// let err = parse(&tokenize("A -> B C").unwrap()).unwrap_err();
/// assert_eq!(err.to_string(), "Error at column 8: Expected EOF but found mvar.");
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let mut expr = parse_expression(&mut iter, 0)?;

    if let Some((Token::Arrow, _)) = iter.peek() {
        iter.next();
        expr.target = Some(parse_target(&mut iter)?);
        return match iter.next() {
            Some((Token::EndOfInput, _)) => Ok(expr),
            found => Err(unexpected(found, &["EOF"])),
        };
    }

    match iter.next() {
        Some((Token::EndOfInput, _)) => Ok(expr),
        found => Err(unexpected(found, &AFTER_EXPRESSION)),
    }
}

/// Parses a sum of terms.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// Stops at the first token that is not an additive operator and leaves it
/// for the caller, so this rule serves both the top level and nested
/// contexts such as `( ... )` and argument lists.
///
/// `depth` counts the groups and calls enclosing this expression; the top
/// level is 0.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut expr = Expr::from_term(parse_term(tokens, depth)?);
    loop {
        let op = match tokens.peek() {
            Some((Token::Plus, _)) => AdditiveOperator::Add,
            Some((Token::Minus, _)) => AdditiveOperator::Subtract,
            _ => break,
        };
        tokens.next();
        expr.rest.push((op, parse_term(tokens, depth)?));
    }
    Ok(expr)
}

fn parse_target<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Target>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::MatrixVariable(c), _)) => Ok(Target::Matrix(*c)),
        Some((Token::ScalarVariable(c), _)) => Ok(Target::Scalar(*c)),
        found => Err(unexpected(found, &["mvar", "svar"])),
    }
}
