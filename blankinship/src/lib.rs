//! # Blankinship
//!
//! Exact gcd and Bezout coefficients of univariate polynomials with rational
//! coefficients, computed with Blankinship's matrix form of the extended
//! Euclidean algorithm.

pub mod config;
pub mod errors;
pub mod ring;
pub mod solver;

pub use config::SolverConfig;
pub use errors::BlankinshipError;
pub use ring::{Fraction, Polynomial};
pub use solver::{Bezout, ExtendedGcdSolver, bezout, gcd};
