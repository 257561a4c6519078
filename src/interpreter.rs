/// The evaluator module walks expression trees and computes results.
///
/// The evaluator resolves variables through the environment, applies the
/// scalar and matrix rules of each operator, calls built-in functions and
/// stores results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates expressions, terms and factors, grouping products into runs.
/// - Handles variables, definitions through a definer, and function calls.
/// - Reports runtime errors such as division by zero or kind mismatches.
pub mod evaluator;
/// The lexer module tokenizes a line for further parsing.
///
/// The lexer reads the raw text and produces tokens for operators, numbers,
/// function names and the four variable forms. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input characters into tokens with their columns.
/// - Distinguishes function names from single-letter variables.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser processes the token stream produced by the lexer with one
/// token of lookahead and constructs the tree evaluated by the evaluator.
///
/// # Responsibilities
/// - Converts tokens into expression, term and factor nodes.
/// - Validates the grammar, reporting the expected token kinds and column.
/// - Reads the optional `-> target` at the end of a line.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares exact fractions, dense matrices of fractions and the
/// value type that holds either. Arithmetic never rounds and reports overflow
/// instead of wrapping.
///
/// # Responsibilities
/// - Defines `Rational`, `Matrix` and the `Value` enum.
/// - Implements fraction arithmetic, matrix algebra and row reduction.
/// - Renders values for display.
pub mod value;
