/// Greatest common divisor of two integers, by the Euclidean algorithm.
///
/// The result is always non-negative. `gcd(0, 0)` is `0`. Returns `None` only
/// when the result would be `2^63`, which has no `i64` representation (both
/// inputs are `i64::MIN` or zero and `i64::MIN`).
///
/// ## Example
/// ```
/// use rowsmith::util::num::gcd;
///
/// assert_eq!(gcd(48, 60), Some(12));
/// assert_eq!(gcd(-135, 405), Some(135));
/// assert_eq!(gcd(0, 7), Some(7));
/// assert_eq!(gcd(i64::MIN, 0), None);
/// ```
#[must_use]
pub fn gcd(a: i64, b: i64) -> Option<i64> {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();

    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }

    i64::try_from(a).ok()
}

/// Converts a non-negative `i64` to `usize`.
///
/// ## Errors
/// Returns `error` for negative values or values that exceed `usize::MAX`.
///
/// ## Example
/// ```
/// use rowsmith::util::num::i64_to_usize_checked;
///
/// assert_eq!(i64_to_usize_checked(4, ()), Ok(4));
/// assert!(i64_to_usize_checked(-1, ()).is_err());
/// ```
pub fn i64_to_usize_checked<E>(value: i64, error: E) -> Result<usize, E> {
    usize::try_from(value).map_err(|_| error)
}
