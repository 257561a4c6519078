use crate::interpreter::value::{matrix::Matrix, rational::Rational};

/// Supplies values for definition-on-use factors.
///
/// Each call blocks until the collaborator has a value. Returning `None`
/// means the user cancelled, and the evaluation fails with `Cancelled`
/// instead of producing a value.
///
/// ## Example
/// ```
/// use rowsmith::{
///     evaluate_line,
///     interpreter::{
///         evaluator::{core::Environment, definer::Definer},
///         value::{matrix::Matrix, rational::Rational},
///     },
/// };
///
/// struct Always(i64);
///
/// impl Definer for Always {
///     fn define_matrix(&mut self, _name: char) -> Option<Matrix> {
///         Some(Matrix::identity(2).unwrap())
///     }
///
///     fn define_anonymous_matrix(&mut self) -> Option<Matrix> {
///         None
///     }
///
///     fn define_scalar(&mut self, _name: char) -> Option<Rational> {
///         Some(Rational::from(self.0))
///     }
/// }
///
/// let mut env = Environment::with_definer(Always(7));
/// let result = evaluate_line("$b * 2", &mut env).unwrap();
/// assert_eq!(result.value.to_string(), "14");
/// assert_eq!(env.scalar('b').unwrap(), Rational::from(7));
///
/// assert!(evaluate_line("$$", &mut env).is_err());
/// ```
pub trait Definer {
    /// Asks for the matrix to store in slot `name`.
    fn define_matrix(&mut self, name: char) -> Option<Matrix>;

    /// Asks for a matrix that is used once and not stored.
    fn define_anonymous_matrix(&mut self) -> Option<Matrix>;

    /// Asks for the scalar to store in slot `name`.
    fn define_scalar(&mut self, name: char) -> Option<Rational>;
}
