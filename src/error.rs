/// Algebra errors.
///
/// Failures raised by the rational and matrix primitives themselves, before
/// the evaluator has attached any meaning to them: zero denominators,
/// fixed-width overflow, incompatible shapes and singular matrices.
pub mod algebra_error;
/// Lexing and parsing errors.
///
/// Defines the errors produced while turning a line of text into tokens and
/// tokens into an expression tree.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as kind
/// mismatches between scalars and matrices, bad function calls, division by
/// zero or a cancelled definition.
pub mod runtime_error;

pub use algebra_error::{ArithmeticError, MatrixError};
pub use parse_error::{LexError, ParseError};
pub use runtime_error::RuntimeError;

/// Any failure of a single line, tagged by the phase that produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The line contained a character no token starts with.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens did not form a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression was well formed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Short name of the error category, stable enough for scripted tests.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::{error::Error, interpreter::evaluator::core::Environment};
    ///
    /// let mut env = Environment::new();
    /// let err = rowsmith::evaluate_line("1 / 0", &mut env).unwrap_err();
    /// assert_eq!(err.kind(), "DivisionByZero");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Lex(_) => "LexError",
            Self::Parse(_) => "ParseError",
            Self::Runtime(e) => e.kind(),
        }
    }
}
