use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Environment},
            function::builtin,
        },
        value::core::{Value, ValueKind},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated arguments, already checked against its
/// signature, and returns the call's value.
type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the ordered kinds of its parameters,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                signature: [$($kind:ident),* $(,)?],
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:      &'static str,
            signature: &'static [ValueKind],
            func:      BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, signature: &[$(ValueKind::$kind),*], func: $func },
            )*
        ];
        /// Names of every function that can be called.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "identity"  => { signature: [Scalar],         func: builtin::identity },
    "ref"       => { signature: [Matrix],         func: builtin::row_echelon },
    "rref"      => { signature: [Matrix],         func: builtin::reduced_row_echelon },
    "invert"    => { signature: [Matrix],         func: builtin::invert },
    "augment"   => { signature: [Matrix, Matrix], func: builtin::augment },
    "transpose" => { signature: [Matrix],         func: builtin::transpose },
}

impl Environment {
    /// Evaluates a function call.
    ///
    /// The name is looked up before any argument is evaluated, so an unknown
    /// function never triggers a definer. Arguments are then evaluated left
    /// to right and checked against the signature before the builtin runs.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    ///
    /// # Errors
    /// - `UnknownFunction` if the name is not registered.
    /// - `ArgumentCountMismatch` or `SignatureMismatch` if the arguments do not
    ///   fit the signature.
    /// - Whatever the argument expressions or the builtin raise.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::{evaluate_line, interpreter::evaluator::core::Environment};
    ///
    /// let mut env = Environment::new();
    /// let err = evaluate_line("augment(identity(2))", &mut env).unwrap_err();
    /// assert_eq!(err.to_string(), "Call to augment takes 2 arguments, but was supplied 1.");
    ///
    /// let err = evaluate_line("ref(2)", &mut env).unwrap_err();
    /// assert_eq!(err.to_string(),
    ///            "Call to ref expects arguments (matrix) but was supplied (scalar).");
    ///
    /// let err = evaluate_line("det(A)", &mut env).unwrap_err();
    /// assert_eq!(err.to_string(), "'det' is not a valid function.");
    /// ```
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Expr])
                                     -> EvalResult<Value> {
        let builtin = BUILTIN_TABLE.iter()
                                   .find(|b| b.name == name)
                                   .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string() })?;

        let values = arguments.iter()
                              .map(|argument| self.eval_expr(argument))
                              .collect::<EvalResult<Vec<_>>>()?;

        check_signature(builtin, &values)?;
        tracing::trace!(function = name, arguments = values.len(), "calling builtin");

        (builtin.func)(&values)
    }
}

/// Compares supplied argument kinds with a builtin's parameters.
fn check_signature(builtin: &BuiltinDef, values: &[Value]) -> EvalResult<()> {
    if values.len() != builtin.signature.len() {
        return Err(RuntimeError::ArgumentCountMismatch { name:     builtin.name.to_string(),
                                                         expected: builtin.signature.len(),
                                                         found:    values.len(), });
    }

    let supplied: Vec<ValueKind> = values.iter().map(Value::kind).collect();
    if supplied != builtin.signature {
        return Err(RuntimeError::SignatureMismatch { name:     builtin.name.to_string(),
                                                     expected: join_kinds(builtin.signature),
                                                     supplied: join_kinds(&supplied), });
    }

    Ok(())
}

fn join_kinds(kinds: &[ValueKind]) -> String {
    kinds.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
