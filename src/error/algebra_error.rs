/// Failures of exact rational arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// A zero denominator was requested, either directly or through the
    /// reciprocal of zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A numerator or denominator left the range of a 64-bit integer.
    #[error("integer overflow while computing a fraction")]
    Overflow,
    /// Text could not be read as `n` or `n/d`.
    #[error("'{0}' is not a valid fraction")]
    Malformed(String),
}

/// Failures of dense matrix algebra.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Two operands do not have compatible shapes for `operation`.
    #[error("cannot {operation} a {left_rows}x{left_columns} matrix and a {right_rows}x{right_columns} matrix")]
    DimensionMismatch {
        /// Human readable verb, such as `add` or `multiply`.
        operation:     &'static str,
        /// Rows of the left operand.
        left_rows:     usize,
        /// Columns of the left operand.
        left_columns:  usize,
        /// Rows of the right operand.
        right_rows:    usize,
        /// Columns of the right operand.
        right_columns: usize,
    },
    /// Only square matrices can be inverted.
    #[error("non-square matrices have no inverse")]
    NotSquare,
    /// Row reduction did not reach the identity.
    #[error("matrix has no inverse")]
    Singular,
    /// A value sequence did not contain exactly `rows * columns` entries.
    #[error("expected {expected} entries but found {found}")]
    EntryCount {
        /// `rows * columns`.
        expected: usize,
        /// Number of entries supplied.
        found:    usize,
    },
    /// A shape holds more entries than a matrix may have.
    #[error("a {rows}x{columns} matrix exceeds the limit of {} entries", crate::interpreter::value::matrix::MAX_ENTRIES)]
    TooLarge {
        /// Requested rows.
        rows:    usize,
        /// Requested columns.
        columns: usize,
    },
    /// A 1-based row or column index fell outside the matrix.
    #[error("position ({row}, {column}) is outside a {rows}x{columns} matrix")]
    OutOfBounds {
        /// Requested row.
        row:     usize,
        /// Requested column.
        column:  usize,
        /// Row count of the matrix.
        rows:    usize,
        /// Column count of the matrix.
        columns: usize,
    },
    /// An entry computation failed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
