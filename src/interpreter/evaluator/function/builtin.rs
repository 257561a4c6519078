use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, matrix::Matrix, rational::Rational},
    },
    util::num::i64_to_usize_checked,
};

/// The `n`-by-`n` identity matrix.
///
/// # Errors
/// `InvalidArgument` if the size is not a whole number, is negative, or
/// would give more entries than a matrix may hold.
///
/// # Example
/// ```
/// use rowsmith::interpreter::{
///     evaluator::function::builtin::identity,
///     value::{core::Value, matrix::Matrix, rational::Rational},
/// };
///
/// let three = Value::Scalar(Rational::from(3));
/// assert_eq!(identity(&[three]).unwrap(), Value::Matrix(Matrix::identity(3).unwrap()));
///
/// let half = Value::Scalar(Rational::new(1, 2).unwrap());
/// assert!(identity(&[half]).is_err());
///
/// let huge = Value::Scalar(Rational::from(1_i64 << 32));
/// assert!(identity(&[huge]).is_err());
/// ```
pub fn identity(args: &[Value]) -> EvalResult<Value> {
    let size = scalar_arg(args, 0)?;
    let size = size.to_integer().ok_or_else(|| RuntimeError::InvalidArgument {
                                    details: "size must be an integer".to_string(),
                                })?;
    let size = i64_to_usize_checked(size, RuntimeError::InvalidArgument {
        details: "size must be positive".to_string(),
    })?;
    let matrix = Matrix::identity(size).map_err(|_| RuntimeError::InvalidArgument {
                                            details: "size is too large".to_string(),
                                        })?;
    Ok(Value::Matrix(matrix))
}

/// Row echelon form of the argument.
pub fn row_echelon(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Matrix(matrix_arg(args, 0)?.row_echelon()?))
}

/// Reduced row echelon form of the argument.
pub fn reduced_row_echelon(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Matrix(matrix_arg(args, 0)?.reduced_row_echelon()?))
}

/// Inverse of the argument.
///
/// # Errors
/// - `Dimension` if the matrix is not square.
/// - `SingularMatrix` if it has no inverse.
pub fn invert(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Matrix(matrix_arg(args, 0)?.inverse()?))
}

/// The first argument with the columns of the second appended.
///
/// # Errors
/// `Dimension` if the row counts differ.
pub fn augment(args: &[Value]) -> EvalResult<Value> {
    let left = matrix_arg(args, 0)?;
    let right = matrix_arg(args, 1)?;
    Ok(Value::Matrix(left.augment(right)?))
}

/// The argument with rows and columns swapped.
pub fn transpose(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Matrix(matrix_arg(args, 0)?.transpose()))
}

fn matrix_arg(args: &[Value], index: usize) -> EvalResult<&Matrix> {
    args.get(index)
        .and_then(Value::as_matrix)
        .ok_or_else(|| argument_kind_error(index, "matrix"))
}

fn scalar_arg(args: &[Value], index: usize) -> EvalResult<Rational> {
    args.get(index)
        .and_then(Value::as_scalar)
        .ok_or_else(|| argument_kind_error(index, "scalar"))
}

fn argument_kind_error(index: usize, kind: &str) -> RuntimeError {
    RuntimeError::InvalidArgument { details: format!("argument {} must be a {kind}", index + 1) }
}
