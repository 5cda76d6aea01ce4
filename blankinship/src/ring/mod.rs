//! # Ring Module
//!
//! Exact arithmetic in Q[X]: [`Fraction`] for the rationals and [`Polynomial`]
//! for dense univariate polynomials over them.

pub mod fraction;
pub mod polynomial;

pub use fraction::Fraction;
pub use polynomial::Polynomial;
