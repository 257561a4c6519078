//! # rowsmith
//!
//! rowsmith is an interactive evaluator for exact rational arithmetic on
//! scalars and matrices, written in Rust.
//! It tokenizes, parses and evaluates one line at a time against a fixed set
//! of 52 single-letter variables, with row reduction, inversion and
//! augmentation available as functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::{Environment, Evaluation},
        lexer::tokenize,
        parser::parse,
    },
};

/// Defines the structure of parsed lines.
///
/// This module declares the `Expr`, `Term` and `Factor` nodes that represent
/// one line as a three-level precedence tree. The tree is built by the parser
/// and walked by the evaluator.
///
/// # Responsibilities
/// - Defines the expression, term and factor node types.
/// - Names assignment targets and the five kinds of variable reference.
/// - Renders trees structurally for inspection and tests.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while handling a line.
/// Every documented failure is a value of one of these types; none of them
/// aborts the process.
///
/// # Responsibilities
/// - Defines error enums for each phase and for the algebra primitives.
/// - Attaches columns to lexing and parsing errors.
/// - Converts algebra failures into evaluation errors.
pub mod error;
/// Collects definitions from a person typing at a terminal.
///
/// This module provides the line-oriented [`Definer`] used by the binary and
/// the always-cancelling default used by a fresh environment.
///
/// # Responsibilities
/// - Reads matrices row by row and scalars from a single line.
/// - Reports malformed rows and asks for them again.
/// - Treats end of input and `cancel` as cancellation.
///
/// [`Definer`]: crate::interpreter::evaluator::definer::Definer
pub mod input;
/// Orchestrates the evaluation of a line.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and value types.
/// - Provides entry points for each phase.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for integer helpers.
///
/// # Responsibilities
/// - Compute greatest common divisors without overflow.
/// - Safely convert between `i64` and `usize`.
pub mod util;

/// Tokenizes, parses and evaluates one line.
///
/// Slot writes made by the line, including the implicit `Z`/`z` result, are
/// applied to `env`.
///
/// # Errors
/// Returns the first lexing, parsing or evaluation error.
///
/// # Examples
/// ```
/// use rowsmith::{evaluate_line, interpreter::evaluator::core::Environment};
///
/// let mut env = Environment::new();
///
/// let result = evaluate_line("1/2 + 1/3 -> h", &mut env).unwrap();
/// assert_eq!(result.value.to_string(), "5/6");
///
/// // The result is also the last scalar.
/// assert_eq!(evaluate_line("z * 6", &mut env).unwrap().value.to_string(), "5");
///
/// // Assigning a matrix to a scalar slot is a type error.
/// let err = evaluate_line("A -> a", &mut env).unwrap_err();
/// assert_eq!(err.kind(), "TypeMismatch");
/// ```
pub fn evaluate_line(line: &str, env: &mut Environment) -> Result<Evaluation, Error> {
    tracing::debug!(line, "evaluating line");
    let tokens = tokenize(line)?;
    let expr = parse(&tokens)?;
    tracing::trace!(tree = %expr, "parsed line");
    Ok(env.evaluate(&expr)?)
}
