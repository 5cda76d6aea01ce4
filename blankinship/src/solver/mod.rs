//! Extended Euclidean algorithm in Q[X], in Blankinship's matrix form.
//!
//! The solver keeps the matrix
//!
//! ```text
//! x1  x2  P
//! y1  y2  Q
//! ```
//!
//! with `x1·P0 + x2·Q0 = P` and `y1·P0 + y2·Q0 = Q` for the inputs `P0`, `Q0`.
//! Each step cancels the leading term of the row with the larger degree using
//! a single monomial multiple of the other row. Once one of `P`, `Q` is zero
//! the other row holds the gcd and its Bezout coefficients.

pub mod matrix;

pub use matrix::{BlankinshipMatrix, Row};

use crate::config::SolverConfig;
use crate::errors::BlankinshipError;
use crate::ring::Polynomial;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Both tracked polynomials are non-zero.
    Reducing,
    /// At least one tracked polynomial is zero.
    Done,
}

/// `u·P + v·Q = gcd`, with `gcd` monic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bezout {
    pub u: Polynomial,
    pub v: Polynomial,
    pub gcd: Polynomial,
}

impl Bezout {
    /// Verifies `p·u + q·v == gcd` exactly.
    pub fn check(&self, p: &Polynomial, q: &Polynomial) -> bool {
        p * &self.u + q * &self.v == self.gcd
    }
}

/// The monomial `R = -(lc(target) / lc(pivot)) · X^(deg target - deg pivot)`, so
/// that `target + pivot·R` loses the leading term of `target`.
///
/// Requires `target.degree() >= pivot.degree()` and a canonical, non-zero pivot.
fn cancelling_monomial(
    target: &Polynomial,
    pivot: &Polynomial,
) -> Result<Polynomial, BlankinshipError> {
    let shift = target.degree() - pivot.degree();
    let coefficient = (-target.leading_coefficient()).try_div(pivot.leading_coefficient())?;

    Ok(Polynomial::monomial(coefficient, shift))
}

#[derive(Debug, Clone)]
pub struct ExtendedGcdSolver {
    p0: Polynomial,
    q0: Polynomial,
    matrix: BlankinshipMatrix,
    config: SolverConfig,
    steps: usize,
}

impl ExtendedGcdSolver {
    /// Starts from the identity next to `p` and `q`. Both inputs are canonicalized
    /// first so their leading coefficients are non-zero.
    pub fn new(p: Polynomial, q: Polynomial) -> Self {
        let p = p.canonicalized();
        let q = q.canonicalized();

        Self {
            matrix: BlankinshipMatrix::new(p.clone(), q.clone()),
            p0: p,
            q0: q,
            config: SolverConfig::default(),
            steps: 0,
        }
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn matrix(&self) -> &BlankinshipMatrix {
        &self.matrix
    }

    /// Number of reduction steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn state(&self) -> State {
        if self.matrix.top.value.is_zero() || self.matrix.bottom.value.is_zero() {
            State::Done
        } else {
            State::Reducing
        }
    }

    /// Whether both rows still combine the original inputs into their values.
    pub fn invariant_holds(&self) -> bool {
        self.matrix.top.combines(&self.p0, &self.q0)
            && self.matrix.bottom.combines(&self.p0, &self.q0)
    }

    /// Performs one reduction step; does nothing once [`State::Done`] is reached.
    ///
    /// The rows are switched first if needed so that the top row has the larger
    /// degree, then the leading term of the top value is cancelled.
    pub fn step(&mut self) -> Result<State, BlankinshipError> {
        if self.state() == State::Done {
            return Ok(State::Done);
        }

        if self.matrix.top.value.degree() < self.matrix.bottom.value.degree() {
            self.matrix.switch();
            log::trace!("step {}: rows switched", self.steps + 1);
        }

        let factor = cancelling_monomial(&self.matrix.top.value, &self.matrix.bottom.value)?;
        let BlankinshipMatrix { top, bottom } = &mut self.matrix;
        top.add_multiple(bottom, &factor);
        self.steps += 1;

        log::trace!(
            "step {}: reduced by {}, degrees now ({}, {})",
            self.steps,
            factor.render(1),
            top.value.degree(),
            bottom.value.degree()
        );
        if self.config.trace_steps {
            log::debug!(
                "matrix after step {}:\n{}",
                self.steps,
                self.matrix.render(self.config.field_width)
            );
        }

        Ok(self.state())
    }

    /// Runs [`ExtendedGcdSolver::step`] until one value is zero and returns the
    /// other row divided by its leading coefficient.
    ///
    /// # Errors
    ///
    /// Returns `BlankinshipError::InvalidArgument` if both inputs are the zero
    /// polynomial: every polynomial divides zero, so there is no monic gcd.
    ///
    /// # Example
    ///
    /// ```
    /// # use blankinship::ring::Polynomial;
    /// # use blankinship::solver::ExtendedGcdSolver;
    /// let p = Polynomial::new([-1, -4, -3, 1, 1]);
    /// let q = Polynomial::new([-1, -1, 1, 1]);
    /// let result = ExtendedGcdSolver::new(p.clone(), q.clone()).solve().unwrap();
    /// assert_eq!(result.gcd, Polynomial::new([1, 1]));
    /// assert!(result.check(&p, &q));
    /// ```
    pub fn solve(mut self) -> Result<Bezout, BlankinshipError> {
        if self.p0.is_zero() && self.q0.is_zero() {
            return Err(BlankinshipError::InvalidArgument(
                "The gcd of two zero polynomials is undefined".to_string(),
            ));
        }

        while self.step()? == State::Reducing {}

        let row = if self.matrix.top.value.is_zero() {
            &self.matrix.bottom
        } else {
            &self.matrix.top
        };
        let leading = row.value.leading_coefficient();

        let result = Bezout {
            u: row.x1.try_div(leading)?,
            v: row.x2.try_div(leading)?,
            gcd: row.value.try_div(leading)?,
        };

        log::debug!(
            "gcd found after {} steps: {}",
            self.steps,
            result.gcd.render(1)
        );

        Ok(result)
    }
}

/// Bezout coefficients and monic gcd of `p` and `q`.
pub fn bezout(p: &Polynomial, q: &Polynomial) -> Result<Bezout, BlankinshipError> {
    ExtendedGcdSolver::new(p.clone(), q.clone()).solve()
}

/// Monic gcd of `p` and `q`.
pub fn gcd(p: &Polynomial, q: &Polynomial) -> Result<Polynomial, BlankinshipError> {
    Ok(bezout(p, q)?.gcd)
}

/// Reduces `dividend` by monomial multiples of `divisor`, one leading term at a
/// time, until it is zero or of lower degree than `divisor`.
///
/// # Errors
///
/// Returns `BlankinshipError::DivisionByZero` if `divisor` is the zero polynomial.
pub fn remainder(
    dividend: &Polynomial,
    divisor: &Polynomial,
) -> Result<Polynomial, BlankinshipError> {
    let divisor = divisor.clone().canonicalized();
    if divisor.is_zero() {
        return Err(BlankinshipError::DivisionByZero(
            "Cannot reduce by the zero polynomial".to_string(),
        ));
    }

    let mut rest = dividend.clone().canonicalized();
    while !rest.is_zero() && rest.degree() >= divisor.degree() {
        let factor = cancelling_monomial(&rest, &divisor)?;
        rest = rest + &divisor * factor;
    }

    Ok(rest)
}

/// Whether `divisor` divides `dividend` exactly.
pub fn divides(divisor: &Polynomial, dividend: &Polynomial) -> Result<bool, BlankinshipError> {
    Ok(remainder(dividend, divisor)?.is_zero())
}
