/// Built-in function implementations.
///
/// Contains the matrix functions available by default: `identity`, `ref`,
/// `rref`, `invert`, `augment` and `transpose`.
pub mod builtin;

pub mod core;
