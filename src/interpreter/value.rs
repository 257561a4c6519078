/// Exact fractions.
///
/// Defines the `Rational` type: a numerator and a strictly positive
/// denominator held in 64-bit integers. Arithmetic is exact and does not
/// reduce its result; reduction is an explicit step.
pub mod rational;
/// Dense matrices of fractions.
///
/// Defines the `Matrix` type together with the elementary row operations and
/// the algorithms built from them: row echelon forms, inversion, augmentation,
/// transposition, scaling, addition and multiplication.
pub mod matrix;

pub mod core;
