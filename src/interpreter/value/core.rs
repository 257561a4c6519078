use std::fmt;

use crate::interpreter::value::{matrix::Matrix, rational::Rational};

/// The two kinds of value an expression can produce.
///
/// Kinds are checked at every combination site during evaluation; the grammar
/// itself is untyped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// An exact fraction.
    Scalar,
    /// A matrix of exact fractions.
    Matrix,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Matrix => write!(f, "matrix"),
        }
    }
}

/// Represents the result of evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A scalar value.
    Scalar(Rational),
    /// A matrix value.
    Matrix(Matrix),
}

impl From<Rational> for Value {
    fn from(value: Rational) -> Self {
        Self::Scalar(value)
    }
}

impl From<Matrix> for Value {
    fn from(value: Matrix) -> Self {
        Self::Matrix(value)
    }
}

impl Value {
    /// The kind of this value.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::interpreter::value::{
    ///     core::{Value, ValueKind},
    ///     matrix::Matrix,
    ///     rational::Rational,
    /// };
    ///
    /// assert_eq!(Value::from(Rational::ONE).kind(), ValueKind::Scalar);
    /// assert_eq!(Value::from(Matrix::identity(2).unwrap()).kind(), ValueKind::Matrix);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Scalar(_) => ValueKind::Scalar,
            Self::Matrix(_) => ValueKind::Matrix,
        }
    }

    /// The scalar, if this is one.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<Rational> {
        match self {
            Self::Scalar(s) => Some(*s),
            Self::Matrix(_) => None,
        }
    }

    /// The matrix, if this is one.
    #[must_use]
    pub const fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Self::Matrix(m) => Some(m),
            Self::Scalar(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{s}"),
            Self::Matrix(m) => write!(f, "{m}"),
        }
    }
}
