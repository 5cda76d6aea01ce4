//! Exact rational numbers built on arbitrary-precision integers.

use crate::errors::BlankinshipError;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Quotient of two arbitrary-precision integers.
///
/// A fraction built with [`Fraction::try_with`] keeps the numerator and
/// denominator exactly as given; [`Fraction::reduce`] brings it to lowest terms
/// with a positive denominator. Every arithmetic operator returns a reduced
/// value. The denominator is never zero.
#[derive(Debug, Clone)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// Create a fraction `numerator / denominator` without reducing it.
    ///
    /// Only integer types convert into [`BigInt`], so floating-point inputs are
    /// rejected at compile time. Text input goes through [`FromStr`], which
    /// rejects non-integral numbers with `InvalidArgument`.
    ///
    /// # Errors
    ///
    /// Returns `BlankinshipError::DivisionByZero` if `denominator` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use blankinship::ring::Fraction;
    /// let half = Fraction::try_with(2, 4).unwrap();
    /// assert_eq!(half.numerator().to_string(), "2");
    /// assert_eq!(half.reduce().to_string(), "1/2");
    /// assert!(Fraction::try_with(1, 0).is_err());
    /// ```
    pub fn try_with(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> Result<Self, BlankinshipError> {
        let numerator = numerator.into();
        let denominator = denominator.into();

        if denominator.is_zero() {
            return Err(BlankinshipError::DivisionByZero(format!(
                "Fraction {}/0 has a zero denominator",
                numerator
            )));
        }

        Ok(Fraction {
            numerator,
            denominator,
        })
    }

    /// Create the fraction `value / 1`.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Fraction {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    /// Builds a reduced fraction. `denominator` must be non-zero, which holds for
    /// every product of existing denominators.
    fn reduced(numerator: BigInt, denominator: BigInt) -> Self {
        let divisor = numerator.gcd(&denominator);
        let mut numerator = numerator / &divisor;
        let mut denominator = denominator / &divisor;

        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        Fraction {
            numerator,
            denominator,
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Returns the same value with numerator and denominator relatively prime and
    /// the denominator positive.
    ///
    /// # Example
    ///
    /// ```
    /// # use blankinship::ring::Fraction;
    /// let f = Fraction::try_with(6, -4).unwrap().reduce();
    /// assert_eq!(f.to_string(), "-3/2");
    /// ```
    pub fn reduce(&self) -> Fraction {
        Fraction::reduced(self.numerator.clone(), self.denominator.clone())
    }

    /// Whether the fraction is already in lowest terms with a positive denominator.
    pub fn is_reduced(&self) -> bool {
        self.denominator.is_positive() && self.numerator.gcd(&self.denominator).is_one()
    }

    /// Whether the denominator divides the numerator, reduced or not.
    pub fn is_integer(&self) -> bool {
        (&self.numerator % &self.denominator).is_zero()
    }

    /// Computes `self / other`.
    ///
    /// # Errors
    ///
    /// Returns `BlankinshipError::DivisionByZero` if `other` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// # use blankinship::ring::Fraction;
    /// let a = Fraction::try_with(3, 4).unwrap();
    /// assert_eq!(a.try_div(3).unwrap().to_string(), "1/4");
    /// assert!(a.try_div(0).is_err());
    /// ```
    pub fn try_div(&self, other: impl Into<Fraction>) -> Result<Fraction, BlankinshipError> {
        let other = other.into();
        if other.is_zero() {
            return Err(BlankinshipError::DivisionByZero(format!(
                "Cannot divide {} by zero",
                self
            )));
        }

        Ok(Fraction::reduced(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        ))
    }

    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns `BlankinshipError::DivisionByZero` for the zero fraction.
    pub fn recip(&self) -> Result<Fraction, BlankinshipError> {
        Fraction::one().try_div(self)
    }

    fn add_fraction(&self, other: &Fraction) -> Fraction {
        Fraction::reduced(
            &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    fn mul_fraction(&self, other: &Fraction) -> Fraction {
        Fraction::reduced(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }

    fn negated(&self) -> Fraction {
        Fraction::reduced(-&self.numerator, self.denominator.clone())
    }
}

macro_rules! fraction_from_integer {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Fraction {
                fn from(value: $int) -> Self {
                    Fraction::from_integer(value)
                }
            }
        )*
    };
}

fraction_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Fraction::from_integer(value)
    }
}

impl From<&Fraction> for Fraction {
    fn from(value: &Fraction) -> Self {
        value.clone()
    }
}

impl<T: Into<Fraction>> Add<T> for Fraction {
    type Output = Fraction;

    fn add(self, rhs: T) -> Fraction {
        self.add_fraction(&rhs.into())
    }
}

impl<T: Into<Fraction>> Add<T> for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: T) -> Fraction {
        self.add_fraction(&rhs.into())
    }
}

impl<T: Into<Fraction>> Sub<T> for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: T) -> Fraction {
        self.add_fraction(&rhs.into().negated())
    }
}

impl<T: Into<Fraction>> Sub<T> for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: T) -> Fraction {
        self.add_fraction(&rhs.into().negated())
    }
}

impl<T: Into<Fraction>> Mul<T> for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: T) -> Fraction {
        self.mul_fraction(&rhs.into())
    }
}

impl<T: Into<Fraction>> Mul<T> for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: T) -> Fraction {
        self.mul_fraction(&rhs.into())
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        self.negated()
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        self.negated()
    }
}

/// Cross-multiplication, so unreduced operands compare by value.
impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        &self.numerator * &other.denominator == &other.numerator * &self.denominator
    }
}

impl Eq for Fraction {}

impl PartialEq<i64> for Fraction {
    fn eq(&self, other: &i64) -> bool {
        self.numerator == &self.denominator * BigInt::from(*other)
    }
}

impl PartialEq<BigInt> for Fraction {
    fn eq(&self, other: &BigInt) -> bool {
        self.numerator == &self.denominator * other
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Fraction::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Fraction {
    fn one() -> Self {
        Fraction::from_integer(1)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if self.denominator.is_one() {
            self.numerator.to_string()
        } else if self.numerator.is_zero() {
            "0".to_string()
        } else {
            format!("{}/{}", self.numerator, self.denominator)
        };

        f.pad(&text)
    }
}

fn parse_integer(text: &str) -> Result<BigInt, BlankinshipError> {
    let text = text.trim();
    BigInt::from_str(text).map_err(|e| {
        BlankinshipError::InvalidArgument(format!(
            "Numerator and denominator must be integers, got {:?}: {}",
            text, e
        ))
    })
}

/// Parses `"p"` or `"p/q"`. The value is kept as written, not reduced.
impl FromStr for Fraction {
    type Err = BlankinshipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((numerator, denominator)) => {
                Fraction::try_with(parse_integer(numerator)?, parse_integer(denominator)?)
            }
            None => Ok(Fraction::from_integer(parse_integer(s)?)),
        }
    }
}

impl Serialize for Fraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct FractionVisitor;

impl Visitor<'_> for FractionVisitor {
    type Value = Fraction;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a \"p/q\" string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Fraction, E> {
        Ok(Fraction::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Fraction, E> {
        Ok(Fraction::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Fraction, E> {
        Err(E::custom(BlankinshipError::InvalidArgument(format!(
            "Floating-point value {} is not accepted, use an integer or a \"p/q\" string \
             (integers beyond 64 bits must be written as strings)",
            value
        ))))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Fraction, E> {
        value.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FractionVisitor)
    }
}
