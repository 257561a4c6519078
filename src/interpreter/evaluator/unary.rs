use crate::{
    ast::{Factor, FactorKind, VariableRef},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Environment},
        value::{core::Value, rational::Rational},
    },
};

impl Environment {
    /// Evaluates a factor and applies its leading minus.
    ///
    /// Negation multiplies a scalar by -1 and scales a matrix by -1.
    pub(crate) fn eval_factor(&mut self, factor: &Factor) -> EvalResult<Value> {
        let value = match &factor.kind {
            FactorKind::Number(n) => Value::Scalar(Rational::from_integer(*n)),
            FactorKind::Call { name, arguments } => self.eval_function_call(name, arguments)?,
            FactorKind::Variable(variable) => self.eval_variable(*variable)?,
            FactorKind::Grouping(inner) => self.eval_expr(inner)?,
        };

        if factor.negated { negate(value) } else { Ok(value) }
    }

    /// Resolves a variable reference.
    ///
    /// Plain references read their slot. Definitions ask the definer, and
    /// `$A`/`$a` store the answer in the named slot before yielding it.
    ///
    /// # Errors
    /// `Cancelled` if the definer returns nothing.
    fn eval_variable(&mut self, variable: VariableRef) -> EvalResult<Value> {
        match variable {
            VariableRef::Matrix(name) => Ok(Value::Matrix(self.matrix(name)?.clone())),
            VariableRef::Scalar(name) => Ok(Value::Scalar(self.scalar(name)?)),
            VariableRef::DefineMatrix(name) => {
                tracing::trace!(slot = %name, "asking definer for matrix");
                let matrix = self.definer()
                                 .define_matrix(name)
                                 .ok_or(RuntimeError::Cancelled { what: "matrix" })?;
                self.set_matrix(name, matrix.clone())?;
                Ok(Value::Matrix(matrix))
            },
            VariableRef::DefineScalar(name) => {
                tracing::trace!(slot = %name, "asking definer for scalar");
                let scalar = self.definer()
                                 .define_scalar(name)
                                 .ok_or(RuntimeError::Cancelled { what: "scalar" })?;
                self.set_scalar(name, scalar)?;
                Ok(Value::Scalar(scalar))
            },
            VariableRef::DefineAnonymousMatrix => {
                tracing::trace!("asking definer for anonymous matrix");
                self.definer()
                    .define_anonymous_matrix()
                    .map(Value::Matrix)
                    .ok_or(RuntimeError::Cancelled { what: "matrix" })
            },
        }
    }
}

fn negate(value: Value) -> EvalResult<Value> {
    match value {
        Value::Scalar(s) => Ok(Value::Scalar(s.checked_neg()?)),
        Value::Matrix(m) => Ok(Value::Matrix(m.scale(Rational::MINUS_ONE)?)),
    }
}
