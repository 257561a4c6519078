/// Binary operator evaluation logic.
///
/// Handles the sum chain of an expression and the run-grouped product chain
/// of a term, together with the scalar and matrix rules for each operator.
pub mod binary;

/// Factor evaluation logic.
///
/// Resolves literals, variables, definitions and groupings, then applies the
/// optional negation.
pub mod unary;

/// Core evaluation logic and environment management.
///
/// Contains the variable environment, the top-level entry point and the
/// assignment rules.
pub mod core;

/// Definition-on-use support.
///
/// Declares the capability the environment calls when an expression asks the
/// user for a value with `$A`, `$a` or `$$`.
pub mod definer;

/// Function evaluation.
///
/// Handles built-in function calls, signature checking, and return value
/// computation.
pub mod function;
