use std::{fmt, str::FromStr};

use crate::{error::ArithmeticError, util::num::gcd};

/// Result type of rational arithmetic.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// An exact fraction `numerator / denominator`.
///
/// The denominator is never zero and is always positive; any sign lives in
/// the numerator. Operations do not reduce to lowest terms, so equal values
/// may be held in different forms (`2/4` and `1/2`). Equality compares the
/// reduced forms, while `Display` prints the form actually held.
///
/// ## Example
/// ```
/// use rowsmith::interpreter::value::rational::Rational;
///
/// let half = Rational::new(2, -4).unwrap();
/// assert_eq!(half.to_string(), "-2/4");
/// assert_eq!(half.reduce().to_string(), "-1/2");
/// assert_eq!(half, Rational::new(-1, 2).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Rational {
    numerator:   i64,
    denominator: i64,
}

impl Rational {
    /// `0/1`.
    pub const ZERO: Self = Self { numerator:   0,
                                  denominator: 1, };
    /// `1/1`.
    pub const ONE: Self = Self { numerator:   1,
                                 denominator: 1, };
    /// `-1/1`.
    pub const MINUS_ONE: Self = Self { numerator:   -1,
                                       denominator: 1, };

    /// Creates a fraction, moving any negative sign into the numerator.
    ///
    /// # Errors
    /// - `DivisionByZero` if `denominator` is zero.
    /// - `Overflow` if the sign cannot be moved (a component is `i64::MIN`).
    pub fn new(numerator: i64, denominator: i64) -> ArithmeticResult<Self> {
        if denominator == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        Self::normalized(numerator, denominator)
    }

    /// Creates the whole number `value / 1`.
    #[must_use]
    pub const fn from_integer(value: i64) -> Self {
        Self { numerator:   value,
               denominator: 1, }
    }

    /// The numerator as held, carrying the sign.
    #[must_use]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// The denominator as held, always positive.
    #[must_use]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Sign normalization: the denominator ends positive.
    fn normalized(numerator: i64, denominator: i64) -> ArithmeticResult<Self> {
        if denominator < 0 {
            let numerator = numerator.checked_neg().ok_or(ArithmeticError::Overflow)?;
            let denominator = denominator.checked_neg().ok_or(ArithmeticError::Overflow)?;
            return Ok(Self { numerator,
                             denominator });
        }
        Ok(Self { numerator,
                  denominator })
    }

    /// Narrows a wide intermediate result back to 64 bits.
    ///
    /// The unreduced form is kept whenever it fits. Only when it does not is the
    /// pair divided by its greatest common divisor before giving up with
    /// `Overflow`.
    fn from_wide(numerator: i128, denominator: i128) -> ArithmeticResult<Self> {
        if let (Ok(n), Ok(d)) = (i64::try_from(numerator), i64::try_from(denominator)) {
            return Self::new(n, d);
        }

        let divisor = wide_gcd(numerator.unsigned_abs(), denominator.unsigned_abs());
        let divisor = i128::try_from(divisor).map_err(|_| ArithmeticError::Overflow)?;
        if divisor == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }

        let n = i64::try_from(numerator / divisor).map_err(|_| ArithmeticError::Overflow)?;
        let d = i64::try_from(denominator / divisor).map_err(|_| ArithmeticError::Overflow)?;
        Self::new(n, d)
    }

    /// Adds two fractions over the product of their denominators.
    ///
    /// No common denominator search is made and the result is not reduced.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::interpreter::value::rational::Rational;
    ///
    /// let sum = Rational::new(-15, 2).unwrap()
    ///                                .checked_add(Rational::new(7, 8).unwrap())
    ///                                .unwrap();
    /// assert_eq!(sum.to_string(), "-106/16");
    /// assert_eq!(sum, Rational::new(-53, 8).unwrap());
    /// ```
    pub fn checked_add(self, other: Self) -> ArithmeticResult<Self> {
        let numerator = (i128::from(self.numerator) * i128::from(other.denominator))
            .checked_add(i128::from(other.numerator) * i128::from(self.denominator))
            .ok_or(ArithmeticError::Overflow)?;
        let denominator = i128::from(self.denominator) * i128::from(other.denominator);
        Self::from_wide(numerator, denominator)
    }

    /// Subtracts `other` by adding its negation.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::interpreter::value::rational::Rational;
    ///
    /// let difference = Rational::new(1, 2).unwrap()
    ///                                     .checked_sub(Rational::new(3, 4).unwrap())
    ///                                     .unwrap();
    /// assert_eq!(difference.to_string(), "-2/8");
    /// assert!(Rational::from(i64::MIN).checked_sub(Rational::ONE).is_err());
    /// ```
    pub fn checked_sub(self, other: Self) -> ArithmeticResult<Self> {
        self.checked_add(other.checked_neg()?)
    }

    /// Multiplies numerators and denominators.
    pub fn checked_mul(self, other: Self) -> ArithmeticResult<Self> {
        let numerator = i128::from(self.numerator) * i128::from(other.numerator);
        let denominator = i128::from(self.denominator) * i128::from(other.denominator);
        Self::from_wide(numerator, denominator)
    }

    /// Multiplies by the reciprocal of `other`.
    ///
    /// # Errors
    /// `DivisionByZero` if `other` is zero.
    pub fn checked_div(self, other: Self) -> ArithmeticResult<Self> {
        self.checked_mul(other.reciprocal()?)
    }

    /// Negates the fraction.
    pub fn checked_neg(self) -> ArithmeticResult<Self> {
        let numerator = self.numerator.checked_neg().ok_or(ArithmeticError::Overflow)?;
        Ok(Self { numerator,
                  denominator: self.denominator })
    }

    /// Swaps numerator and denominator.
    ///
    /// # Errors
    /// `DivisionByZero` for zero, which has no reciprocal.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::{error::ArithmeticError, interpreter::value::rational::Rational};
    ///
    /// let r = Rational::new(-3, 4).unwrap().reciprocal().unwrap();
    /// assert_eq!((r.numerator(), r.denominator()), (-4, 3));
    /// assert_eq!(Rational::ZERO.reciprocal(), Err(ArithmeticError::DivisionByZero));
    /// ```
    pub fn reciprocal(self) -> ArithmeticResult<Self> {
        Self::new(self.denominator, self.numerator)
    }

    /// Returns the fraction in lowest terms.
    ///
    /// Reduction is idempotent and keeps the denominator positive. Zero
    /// reduces to `0/1`.
    #[must_use]
    pub fn reduce(self) -> Self {
        // The denominator is positive, so the divisor fits and is at least 1.
        let divisor = gcd(self.numerator, self.denominator).unwrap_or(1).max(1);
        Self { numerator:   self.numerator / divisor,
               denominator: self.denominator / divisor, }
    }

    /// True for any zero numerator, whatever the denominator.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// True if the fraction denotes a whole number.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.numerator % self.denominator == 0
    }

    /// The whole number this fraction denotes, if it is one.
    #[must_use]
    pub const fn to_integer(&self) -> Option<i64> {
        if self.is_integer() {
            Some(self.numerator / self.denominator)
        } else {
            None
        }
    }
}

fn wide_gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        let (left, right) = (self.reduce(), other.reduce());
        left.numerator == right.numerator && left.denominator == right.denominator
    }
}

impl Eq for Rational {}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Rational {
    type Err = ArithmeticError;

    /// Parses `n` or `n/d`; the denominator defaults to 1.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::{error::ArithmeticError, interpreter::value::rational::Rational};
    ///
    /// let r: Rational = "6/-8".parse().unwrap();
    /// assert_eq!(r.to_string(), "-6/8");
    /// assert_eq!("5".parse::<Rational>().unwrap().to_string(), "5");
    /// assert_eq!("1/0".parse::<Rational>(), Err(ArithmeticError::DivisionByZero));
    /// assert!("1/2/3".parse::<Rational>().is_err());
    /// ```
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || ArithmeticError::Malformed(text.to_string());
        let mut fields = text.trim().split('/');

        let numerator = fields.next()
                              .and_then(|n| n.trim().parse::<i64>().ok())
                              .ok_or_else(malformed)?;
        let denominator = match fields.next() {
            Some(d) => d.trim().parse::<i64>().map_err(|_| malformed())?,
            None => 1,
        };
        if fields.next().is_some() {
            return Err(malformed());
        }

        Self::new(numerator, denominator)
    }
}
