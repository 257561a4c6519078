use std::fmt;

use crate::{
    ast::{Expr, Target},
    error::RuntimeError,
    input::NoInput,
    interpreter::{
        evaluator::definer::Definer,
        value::{
            core::{Value, ValueKind},
            matrix::Matrix,
            rational::Rational,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Number of slots of each kind, one per letter.
const SLOTS: usize = 26;

/// Rows and columns of the zero matrix every matrix slot starts with.
const DEFAULT_SIZE: usize = 3;

/// The outcome of evaluating one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The value the expression produced.
    pub value:    Value,
    /// The slot written by `-> target`, if the line had one.
    pub assigned: Option<Target>,
}

/// Stores the session state of the evaluator.
///
/// Holds 26 matrix slots `A`-`Z` and 26 scalar slots `a`-`z`. Every slot
/// always has a value: matrices start as 3x3 zero matrices and scalars as
/// zero. `Z` and `z` double as the last matrix and scalar result.
///
/// ## Usage
///
/// An `Environment` is created once per session and passed to every
/// evaluation. The [`Definer`] it owns answers `$A`, `$a` and `$$` factors.
pub struct Environment {
    matrices: Vec<Matrix>,
    scalars:  Vec<Rational>,
    definer:  Box<dyn Definer>,
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
         .field("matrices", &self.matrices)
         .field("scalars", &self.scalars)
         .finish_non_exhaustive()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment whose definer always cancels.
    #[must_use]
    pub fn new() -> Self {
        Self::with_definer(NoInput)
    }

    /// Creates an environment with default slots and the given definer.
    #[must_use]
    pub fn with_definer(definer: impl Definer + 'static) -> Self {
        Self { matrices: vec![default_matrix(); SLOTS],
               scalars:  vec![Rational::ZERO; SLOTS],
               definer:  Box::new(definer), }
    }

    /// Replaces the definer, keeping every slot.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::{
    ///     evaluate_line,
    ///     input::ReaderDefiner,
    ///     interpreter::evaluator::core::Environment,
    /// };
    ///
    /// let mut env = Environment::new();
    /// evaluate_line("7 -> b", &mut env).unwrap();
    /// assert!(evaluate_line("$a", &mut env).is_err());
    ///
    /// env.set_definer(ReaderDefiner::new("3/4\n".as_bytes(), std::io::sink()));
    /// assert_eq!(evaluate_line("$a + b", &mut env).unwrap().value.to_string(), "31/4");
    /// ```
    pub fn set_definer(&mut self, definer: impl Definer + 'static) {
        self.definer = Box::new(definer);
    }

    /// The definer used for `$A`, `$a` and `$$` factors.
    pub(crate) fn definer(&mut self) -> &mut dyn Definer {
        self.definer.as_mut()
    }

    /// Reads matrix slot `name`.
    ///
    /// # Errors
    /// `UnknownVariable` unless `name` is an uppercase ASCII letter.
    pub fn matrix(&self, name: char) -> EvalResult<&Matrix> {
        Ok(&self.matrices[matrix_slot(name)?])
    }

    /// Reads scalar slot `name`.
    ///
    /// # Errors
    /// `UnknownVariable` unless `name` is a lowercase ASCII letter.
    pub fn scalar(&self, name: char) -> EvalResult<Rational> {
        Ok(self.scalars[scalar_slot(name)?])
    }

    /// Writes matrix slot `name`.
    ///
    /// # Errors
    /// `UnknownVariable` unless `name` is an uppercase ASCII letter.
    pub fn set_matrix(&mut self, name: char, value: Matrix) -> EvalResult<()> {
        let slot = matrix_slot(name)?;
        tracing::trace!(slot = %name, rows = value.rows(), columns = value.columns(), "set matrix");
        self.matrices[slot] = value;
        Ok(())
    }

    /// Writes scalar slot `name` in lowest terms.
    ///
    /// # Errors
    /// `UnknownVariable` unless `name` is a lowercase ASCII letter.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::interpreter::{evaluator::core::Environment, value::rational::Rational};
    ///
    /// let mut env = Environment::new();
    /// env.set_scalar('q', Rational::new(4, -6).unwrap()).unwrap();
    /// assert_eq!(env.scalar('q').unwrap().to_string(), "-2/3");
    /// assert!(env.set_scalar('Q', Rational::ONE).is_err());
    /// ```
    pub fn set_scalar(&mut self, name: char, value: Rational) -> EvalResult<()> {
        let slot = scalar_slot(name)?;
        let value = value.reduce();
        tracing::trace!(slot = %name, %value, "set scalar");
        self.scalars[slot] = value;
        Ok(())
    }

    /// The most recent matrix result, slot `Z`.
    ///
    /// This is what the interactive prompt shows for an empty line.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::{evaluate_line, interpreter::evaluator::core::Environment};
    ///
    /// let mut env = Environment::new();
    /// evaluate_line("identity(2) * 2", &mut env).unwrap();
    /// evaluate_line("1 + 1", &mut env).unwrap();
    /// assert_eq!(env.last_matrix().rows(), 2);
    /// assert_eq!(env.last_matrix().get(1, 1).map(|e| e.to_string()), Some("2".to_string()));
    /// ```
    #[must_use]
    pub fn last_matrix(&self) -> &Matrix {
        &self.matrices[SLOTS - 1]
    }

    /// The most recent scalar result, slot `z`.
    #[must_use]
    pub fn last_scalar(&self) -> Rational {
        self.scalars[SLOTS - 1]
    }

    /// Resets every slot to its default value. The definer is kept.
    pub fn clear(&mut self) {
        self.matrices.fill(default_matrix());
        self.scalars.fill(Rational::ZERO);
    }

    /// Evaluates a parsed line.
    ///
    /// The expression is evaluated first. If it names a target, the result
    /// must have the target's kind and is stored there. Matrix results are
    /// then also stored in `Z` and scalar results, reduced, in `z`.
    ///
    /// Values obtained from definers during evaluation stay in their slots
    /// even when a later step fails.
    ///
    /// # Parameters
    /// - `expr`: The root expression returned by the parser.
    ///
    /// # Returns
    /// The value with the slot it was assigned to.
    ///
    /// # Errors
    /// - `TypeMismatch` when assigning a matrix to a scalar slot or the other
    ///   way around.
    /// - Any error raised while evaluating the expression.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::{
    ///     ast::Target,
    ///     interpreter::{
    ///         evaluator::core::Environment,
    ///         lexer::tokenize,
    ///         parser::parse,
    ///         value::{matrix::Matrix, rational::Rational},
    ///     },
    /// };
    ///
    /// let mut env = Environment::new();
    /// let expr = parse(&tokenize("identity(2) * 3 -> B").unwrap()).unwrap();
    /// let result = env.evaluate(&expr).unwrap();
    ///
    /// assert_eq!(result.assigned, Some(Target::Matrix('B')));
    /// assert_eq!(env.matrix('B').unwrap(), env.last_matrix());
    /// assert_eq!(env.last_matrix().get(2, 2), Some(Rational::from(3)));
    /// ```
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Evaluation> {
        let value = self.eval_expr(expr)?;

        if let Some(target) = expr.target {
            self.assign(target, &value)?;
        }

        match &value {
            Value::Matrix(m) => self.matrices[SLOTS - 1] = m.clone(),
            Value::Scalar(s) => self.scalars[SLOTS - 1] = s.reduce(),
        }

        tracing::debug!(kind = %value.kind(), assigned = ?expr.target, "evaluated expression");

        Ok(Evaluation { value,
                        assigned: expr.target })
    }

    /// Evaluates a sum chain without considering its target.
    ///
    /// Grouped and argument expressions go through here as well.
    pub(crate) fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        let mut sum = self.eval_term(&expr.first)?;
        for (op, term) in &expr.rest {
            let right = self.eval_term(term)?;
            sum = Self::eval_addition(*op, sum, right)?;
        }
        Ok(sum)
    }

    fn assign(&mut self, target: Target, value: &Value) -> EvalResult<()> {
        match (target, value) {
            (Target::Matrix(name), Value::Matrix(m)) => self.set_matrix(name, m.clone()),
            (Target::Scalar(name), Value::Scalar(s)) => self.set_scalar(name, *s),
            (Target::Matrix(_), Value::Scalar(_)) => {
                Err(assignment_mismatch(ValueKind::Scalar, ValueKind::Matrix))
            },
            (Target::Scalar(_), Value::Matrix(_)) => {
                Err(assignment_mismatch(ValueKind::Matrix, ValueKind::Scalar))
            },
        }
    }
}

fn assignment_mismatch(value: ValueKind, slot: ValueKind) -> RuntimeError {
    RuntimeError::TypeMismatch { details: format!("cannot assign a {value} value to a {slot} \
                                                   variable") }
}

fn default_matrix() -> Matrix {
    Matrix::zeros(DEFAULT_SIZE, DEFAULT_SIZE).unwrap_or_default()
}

fn matrix_slot(name: char) -> EvalResult<usize> {
    if name.is_ascii_uppercase() {
        Ok(usize::from(name as u8 - b'A'))
    } else {
        Err(RuntimeError::UnknownVariable { name: name.to_string() })
    }
}

fn scalar_slot(name: char) -> EvalResult<usize> {
    if name.is_ascii_lowercase() {
        Ok(usize::from(name as u8 - b'a'))
    } else {
        Err(RuntimeError::UnknownVariable { name: name.to_string() })
    }
}
