/// Entry points of the parser.
///
/// Holds the line-level rule with its optional `-> target` and end-of-input
/// check, and the expression rule shared by groupings and call arguments.
pub mod core;

/// Binary operator chains.
///
/// Parses the `*` and `/` chain of a term into a flat factor list so the
/// evaluator can group multiplicative runs.
pub mod binary;

/// Factor parsing.
///
/// Handles the optional leading minus and every operand form: literals,
/// variables, definitions, calls and parenthesized expressions.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides argument list parsing and the construction of
/// `UnexpectedToken` errors.
pub mod utils;

pub use self::core::parse;
