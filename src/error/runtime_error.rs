use crate::error::{ArithmeticError, MatrixError};

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A scalar met a matrix where both sides must share a kind.
    #[error("Type error: {details}.")]
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
    },
    /// Matrix operands had incompatible row or column counts.
    #[error("Dimension error: {details}.")]
    Dimension {
        /// Details about the shapes involved.
        details: String,
    },
    /// The matrix has no inverse.
    #[error("Matrix has no inverse.")]
    SingularMatrix,
    /// Attempted to take the reciprocal of zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// A numerator or denominator outgrew 64 bits.
    #[error("Integer overflow while trying to compute result.")]
    Overflow,
    /// A variable name outside `A`-`Z` and `a`-`z`.
    #[error("Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name as written.
        name: String,
    },
    /// Called a function that is not in the registry.
    #[error("'{name}' is not a valid function.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// Called a function with the wrong number of arguments.
    #[error("Call to {name} takes {expected} arguments, but was supplied {found}.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Number of parameters in the signature.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
    },
    /// Called a function with arguments of the wrong kinds.
    #[error("Call to {name} expects arguments ({expected}) but was supplied ({supplied}).")]
    SignatureMismatch {
        /// The name of the function.
        name:     String,
        /// Expected kinds, comma separated.
        expected: String,
        /// Supplied kinds, comma separated.
        supplied: String,
    },
    /// An argument had the right kind but an unusable value.
    #[error("Invalid argument: {details}.")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// The operator is not defined for these operand kinds.
    #[error("Invalid operation: {details}.")]
    InvalidOperation {
        /// Details about the operation.
        details: String,
    },
    /// A definer reported that the user abandoned input.
    #[error("User cancelled {what} input.")]
    Cancelled {
        /// `matrix` or `scalar`.
        what: &'static str,
    },
}

impl RuntimeError {
    /// Short name of the error category.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "TypeMismatch",
            Self::Dimension { .. } => "Dimension",
            Self::SingularMatrix => "SingularMatrix",
            Self::DivisionByZero => "DivisionByZero",
            Self::Overflow => "Overflow",
            Self::UnknownVariable { .. } => "UnknownVariable",
            Self::UnknownFunction { .. } => "UnknownFunction",
            Self::ArgumentCountMismatch { .. } | Self::SignatureMismatch { .. } => "Signature",
            Self::InvalidArgument { .. } => "InvalidArgument",
            Self::InvalidOperation { .. } => "InvalidOperation",
            Self::Cancelled { .. } => "Cancelled",
        }
    }
}

impl From<ArithmeticError> for RuntimeError {
    fn from(error: ArithmeticError) -> Self {
        match error {
            ArithmeticError::DivisionByZero => Self::DivisionByZero,
            ArithmeticError::Overflow => Self::Overflow,
            ArithmeticError::Malformed(text) => {
                Self::InvalidArgument { details: format!("'{text}' is not a valid fraction") }
            },
        }
    }
}

impl From<MatrixError> for RuntimeError {
    fn from(error: MatrixError) -> Self {
        match error {
            MatrixError::Singular => Self::SingularMatrix,
            MatrixError::Arithmetic(inner) => inner.into(),
            MatrixError::NotSquare => {
                Self::Dimension { details: "non-square matrices have no inverse".to_string() }
            },
            other @ (MatrixError::DimensionMismatch { .. }
            | MatrixError::TooLarge { .. }
            | MatrixError::EntryCount { .. }
            | MatrixError::OutOfBounds { .. }) => Self::Dimension { details: other.to_string() },
        }
    }
}
