/// Integer helpers for exact arithmetic.
///
/// This module provides the greatest common divisor used to reduce fractions
/// and checked conversions between the signed integers stored in fractions and
/// the unsigned sizes used for matrix dimensions. Every helper returns a
/// `Result` or `Option` instead of wrapping or panicking.
pub mod num;
