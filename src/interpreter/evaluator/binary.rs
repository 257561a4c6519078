use crate::{
    ast::{AdditiveOperator, MultiplicativeOperator, Term},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Environment},
        value::{core::Value, rational::Rational},
    },
};

impl Environment {
    /// Evaluates a product chain by multiplicative runs.
    ///
    /// Factors joined by `*` are multiplied into one run. Each `/` closes the
    /// current run and starts a new one at the factor after it. Once every
    /// factor has been evaluated, the runs are divided left to right, so
    /// `2*3/4*6/10` is `(2*3) / (4*6) / 10 = 1/40` rather than the usual
    /// left-associative reading.
    ///
    /// Within a run, factors are multiplied in source order, which matters
    /// for matrix products.
    ///
    /// # Parameters
    /// - `term`: The factor chain to evaluate.
    ///
    /// # Returns
    /// The quotient of all runs.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::{evaluate_line, interpreter::evaluator::core::Environment};
    ///
    /// let mut env = Environment::new();
    /// assert_eq!(evaluate_line("2*3/4*6/10", &mut env).unwrap().value.to_string(), "1/40");
    /// assert_eq!(evaluate_line("5/4*10", &mut env).unwrap().value.to_string(), "1/8");
    /// ```
    pub(crate) fn eval_term(&mut self, term: &Term) -> EvalResult<Value> {
        let mut run = self.eval_factor(&term.first)?;
        let mut dividend = None;
        let mut divisors = Vec::new();

        for (op, factor) in &term.rest {
            let next = self.eval_factor(factor)?;
            match op {
                MultiplicativeOperator::Multiply => {
                    run = eval_multiplication(MultiplicativeOperator::Multiply, run, next)?;
                },
                MultiplicativeOperator::Divide => {
                    let closed = std::mem::replace(&mut run, next);
                    if dividend.is_none() {
                        dividend = Some(closed);
                    } else {
                        divisors.push(closed);
                    }
                },
            }
        }

        let Some(dividend) = dividend else {
            return Ok(run);
        };
        divisors.push(run);

        divisors.into_iter().try_fold(dividend, |quotient, divisor| {
                                eval_multiplication(MultiplicativeOperator::Divide, quotient, divisor)
                            })
    }

    /// Combines two terms with `+` or `-`.
    ///
    /// Both sides must be of the same kind. Subtraction negates the right side
    /// first, and matrices must have equal shapes. Scalar sums are reduced.
    pub(crate) fn eval_addition(op: AdditiveOperator,
                                left: Value,
                                right: Value)
                                -> EvalResult<Value> {
        let subtract = op == AdditiveOperator::Subtract;
        match (left, right) {
            (Value::Scalar(a), Value::Scalar(b)) => {
                let sum = if subtract { a.checked_sub(b)? } else { a.checked_add(b)? };
                Ok(Value::Scalar(sum.reduce()))
            },
            (Value::Matrix(a), Value::Matrix(b)) => {
                let b = if subtract { b.scale(Rational::MINUS_ONE)? } else { b };
                Ok(Value::Matrix(a.add(&b)?))
            },
            _ => {
                let details = "cannot perform addition or subtraction with a scalar and a matrix";
                Err(RuntimeError::TypeMismatch { details: details.to_string() })
            },
        }
    }
}

/// Applies `*` or `/` to two values.
///
/// - scalar by scalar: the reduced product or quotient.
/// - scalar by matrix: the scaled matrix; dividing by a matrix is rejected.
/// - matrix by scalar: the matrix scaled by the scalar or its reciprocal.
/// - matrix by matrix: the matrix product; division is rejected before the
///   shapes are looked at.
///
/// # Errors
/// - `DivisionByZero` when dividing by a zero scalar.
/// - `InvalidOperation` when dividing by a matrix.
/// - `Dimension` when the left column count differs from the right row count.
pub(crate) fn eval_multiplication(op: MultiplicativeOperator,
                                  left: Value,
                                  right: Value)
                                  -> EvalResult<Value> {
    let divide = op == MultiplicativeOperator::Divide;
    match (left, right) {
        (Value::Scalar(a), Value::Scalar(b)) => {
            let result = if divide { a.checked_div(b)? } else { a.checked_mul(b)? };
            Ok(Value::Scalar(result.reduce()))
        },
        (Value::Scalar(_), Value::Matrix(_)) if divide => {
            Err(invalid_division("cannot divide a scalar by a matrix"))
        },
        (Value::Scalar(s), Value::Matrix(m)) => Ok(Value::Matrix(m.scale(s)?)),
        (Value::Matrix(m), Value::Scalar(s)) => {
            let factor = if divide { s.reciprocal()? } else { s };
            Ok(Value::Matrix(m.scale(factor)?))
        },
        (Value::Matrix(_), Value::Matrix(_)) if divide => {
            Err(invalid_division("cannot divide a matrix by a matrix"))
        },
        (Value::Matrix(a), Value::Matrix(b)) => Ok(Value::Matrix(a.multiply(&b)?)),
    }
}

fn invalid_division(details: &str) -> RuntimeError {
    RuntimeError::InvalidOperation { details: details.to_string() }
}
