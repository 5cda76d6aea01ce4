//! Dense univariate polynomials over the rationals.

use crate::errors::BlankinshipError;

use super::Fraction;

use itertools::{EitherOrBoth, Itertools};
use num_bigint::BigInt;
use num_traits::{One, Zero};

use serde::{Deserialize, Serialize};

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Width every coefficient is right-justified to by the [`fmt::Display`] impl.
pub const DEFAULT_FIELD_WIDTH: usize = 6;
/// Symbol printed for the indeterminate.
pub const INDETERMINATE: char = 'X';

/// A polynomial stored as its coefficients, `coefficients[n]` being the
/// coefficient of `X^n`.
///
/// `X^4 + 3X^2 - 2X + 1` is stored as `[1, -2, 3, 0, 1]`.
///
/// The sequence is never empty; the zero polynomial is `[0]`. Arithmetic
/// results are canonical: no zero coefficient at the highest index except for
/// the zero polynomial itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Fraction>", into = "Vec<Fraction>")]
pub struct Polynomial {
    coefficients: Vec<Fraction>,
}

impl Polynomial {
    /// Builds a polynomial from its coefficients, constant term first.
    ///
    /// The coefficients are kept as given and trailing zeros are not stripped;
    /// call [`Polynomial::canonicalize`] when that matters. An empty sequence
    /// gives the zero polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// # use blankinship::ring::Polynomial;
    /// // X^3 + X^2 - X - 1
    /// let q = Polynomial::new([-1, -1, 1, 1]);
    /// assert_eq!(q.degree(), 3);
    /// ```
    pub fn new<I, T>(coefficients: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Fraction>,
    {
        let coefficients: Vec<Fraction> = coefficients.into_iter().map(Into::into).collect();
        if coefficients.is_empty() {
            return Polynomial::zero();
        }

        Polynomial { coefficients }
    }

    pub fn zero() -> Self {
        Polynomial {
            coefficients: vec![Fraction::zero()],
        }
    }

    pub fn one() -> Self {
        Polynomial {
            coefficients: vec![Fraction::one()],
        }
    }

    /// The polynomial `coefficient * X^degree`.
    pub fn monomial(coefficient: impl Into<Fraction>, degree: usize) -> Self {
        let mut coefficients = vec![Fraction::zero(); degree + 1];
        coefficients[degree] = coefficient.into();

        Polynomial { coefficients }.canonicalized()
    }

    pub fn coefficients(&self) -> &[Fraction] {
        &self.coefficients
    }

    /// Coefficient of `X^power`, zero past the end of the stored sequence.
    pub fn coefficient(&self, power: usize) -> Fraction {
        self.coefficients
            .get(power)
            .cloned()
            .unwrap_or_else(Fraction::zero)
    }

    /// Number of stored coefficients minus one.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Coefficient at the highest stored index.
    pub fn leading_coefficient(&self) -> &Fraction {
        &self.coefficients[self.degree()]
    }

    /// True iff this is the single-coefficient polynomial `[0]`.
    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_zero()
    }

    pub fn is_monic(&self) -> bool {
        self.leading_coefficient().is_one()
    }

    /// Compares against the constant polynomial `value`.
    pub fn eq_constant(&self, value: impl Into<Fraction>) -> bool {
        *self == Polynomial::from(value.into())
    }

    /// Strips zero coefficients from the high end, keeping at least one.
    pub fn canonicalize(&mut self) {
        while self.coefficients.len() > 1
            && self.coefficients.last().is_some_and(Fraction::is_zero)
        {
            self.coefficients.pop();
        }
    }

    pub fn canonicalized(mut self) -> Self {
        self.canonicalize();
        self
    }

    pub fn is_canonical(&self) -> bool {
        self.coefficients.len() == 1 || !self.leading_coefficient().is_zero()
    }

    /// Multiplies every coefficient by `scalar`.
    pub fn scale(&self, scalar: &Fraction) -> Polynomial {
        let coefficients = self.coefficients.iter().map(|c| c * scalar).collect();
        Polynomial { coefficients }.canonicalized()
    }

    /// Divides every coefficient by `scalar`. Division by another polynomial is
    /// not an operation of the ring type; see [`crate::solver::remainder`].
    ///
    /// # Errors
    ///
    /// Returns `BlankinshipError::DivisionByZero` if `scalar` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// # use blankinship::ring::Polynomial;
    /// let p = Polynomial::new([2, 4]);
    /// assert_eq!(p.try_div(2).unwrap(), Polynomial::new([1, 2]));
    /// assert!(p.try_div(0).is_err());
    /// ```
    pub fn try_div(&self, scalar: impl Into<Fraction>) -> Result<Polynomial, BlankinshipError> {
        let scalar = scalar.into();
        if scalar.is_zero() {
            return Err(BlankinshipError::DivisionByZero(format!(
                "Cannot divide polynomial [{}] by zero",
                self.coefficients.iter().join(", ")
            )));
        }

        Ok(self.scale(&scalar.recip()?))
    }

    /// Divides by the leading coefficient so that it becomes 1.
    ///
    /// # Errors
    ///
    /// Returns `BlankinshipError::DivisionByZero` for the zero polynomial.
    pub fn monic(&self) -> Result<Polynomial, BlankinshipError> {
        self.try_div(self.leading_coefficient())
    }

    /// Value at `x`, by Horner's rule.
    pub fn evaluate(&self, x: impl Into<Fraction>) -> Fraction {
        let x = x.into();
        self.coefficients
            .iter()
            .rev()
            .fold(Fraction::zero(), |acc, c| acc * &x + c)
    }

    /// Renders each coefficient right-justified to `width` characters, followed
    /// by `X` or `X^n`, terms joined with `" + "`.
    pub fn render(&self, width: usize) -> String {
        self.coefficients
            .iter()
            .enumerate()
            .map(|(power, c)| match power {
                0 => format!("{:>width$}", c),
                1 => format!("{:>width$}{}", c, INDETERMINATE),
                _ => format!("{:>width$}{}^{}", c, INDETERMINATE, power),
            })
            .join(" + ")
    }

    pub fn from_json(json: &str) -> Result<Polynomial, BlankinshipError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, BlankinshipError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Coefficients with trailing zeros ignored.
    fn significant(&self) -> &[Fraction] {
        let mut len = self.coefficients.len();
        while len > 1 && self.coefficients[len - 1].is_zero() {
            len -= 1;
        }
        &self.coefficients[..len]
    }

    fn add_polynomial(&self, other: &Polynomial) -> Polynomial {
        let coefficients = self
            .coefficients
            .iter()
            .zip_longest(&other.coefficients)
            .map(|pair| match pair {
                EitherOrBoth::Both(a, b) => a + b,
                EitherOrBoth::Left(c) | EitherOrBoth::Right(c) => c.reduce(),
            })
            .collect();

        Polynomial { coefficients }.canonicalized()
    }

    /// Schoolbook convolution, `result[i] = Σ self[k] * other[i - k]`.
    fn mul_polynomial(&self, other: &Polynomial) -> Polynomial {
        let (lhs, rhs) = (&self.coefficients, &other.coefficients);
        let length = lhs.len() + rhs.len() - 1;

        let coefficients = (0..length)
            .map(|i| {
                let low = i.saturating_sub(rhs.len() - 1);
                let high = i.min(lhs.len() - 1);
                (low..=high).fold(Fraction::zero(), |acc, k| acc + &lhs[k] * &rhs[i - k])
            })
            .collect();

        Polynomial { coefficients }.canonicalized()
    }

    fn negated(&self) -> Polynomial {
        let coefficients = self.coefficients.iter().map(Neg::neg).collect();
        Polynomial { coefficients }
    }
}

macro_rules! polynomial_from_scalar {
    ($($scalar:ty),*) => {
        $(
            impl From<$scalar> for Polynomial {
                fn from(value: $scalar) -> Self {
                    Polynomial {
                        coefficients: vec![Fraction::from(value)],
                    }
                }
            }
        )*
    };
}

polynomial_from_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
polynomial_from_scalar!(BigInt, Fraction, &Fraction);

impl From<&Polynomial> for Polynomial {
    fn from(value: &Polynomial) -> Self {
        value.clone()
    }
}

impl TryFrom<Vec<Fraction>> for Polynomial {
    type Error = BlankinshipError;

    fn try_from(coefficients: Vec<Fraction>) -> Result<Self, Self::Error> {
        if coefficients.is_empty() {
            return Err(BlankinshipError::InvalidArgument(
                "A polynomial needs at least one coefficient".to_string(),
            ));
        }

        Ok(Polynomial { coefficients })
    }
}

impl From<Polynomial> for Vec<Fraction> {
    fn from(value: Polynomial) -> Self {
        value.coefficients
    }
}

impl<T: Into<Polynomial>> Add<T> for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: T) -> Polynomial {
        self.add_polynomial(&rhs.into())
    }
}

impl<T: Into<Polynomial>> Add<T> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: T) -> Polynomial {
        self.add_polynomial(&rhs.into())
    }
}

impl<T: Into<Polynomial>> Sub<T> for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: T) -> Polynomial {
        self.add_polynomial(&rhs.into().negated())
    }
}

impl<T: Into<Polynomial>> Sub<T> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: T) -> Polynomial {
        self.add_polynomial(&rhs.into().negated())
    }
}

impl<T: Into<Polynomial>> Mul<T> for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: T) -> Polynomial {
        self.mul_polynomial(&rhs.into())
    }
}

impl<T: Into<Polynomial>> Mul<T> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: T) -> Polynomial {
        self.mul_polynomial(&rhs.into())
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.negated()
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.negated()
    }
}

/// Equality ignores trailing zero coefficients.
impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for Polynomial {}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_FIELD_WIDTH))
    }
}
