//! Symmetric, Bell and Bernoulli polynomial sequences
//!
//! A small numeric library that evaluates classical families of
//! combinatorial polynomials and inverts the Bell transforms.
//!
//! # Features
//! - Elementary, complete homogeneous and power-sum symmetric polynomials,
//!   plain and normalized by their number of terms
//! - Bernoulli numbers and Bernoulli polynomials
//! - Complete Bell polynomials, their inverse and their negation
//! - Partial Bell polynomial tables and the inverse of a single column
//! - Generic over `f32` / `f64` through [`MathScalar`]
//! - Batch evaluation on a rayon pool with the `parallel` feature
//!
//! Every engine is a stateless unit struct; every call is a pure function
//! of its arguments and returns a [`Result`] instead of panicking on bad
//! input.
//!
//! # Usage Examples
//!
//! ## Symmetric polynomials
//! ```
//! use wnpoly::{Elementary, SymmetricPolynomial};
//!
//! // (1 + t)(1 + 2t)(1 + 3t) = 1 + 6t + 11t^2 + 6t^3
//! let e = Elementary.compute(&[1.0, 2.0, 3.0], 3).unwrap();
//! assert_eq!(e, vec![1.0, 6.0, 11.0, 6.0]);
//! ```
//!
//! ## Bell round trip
//! ```
//! use wnpoly::Bell;
//!
//! let x: Vec<f64> = vec![0.0, 1.0, 0.5, -2.0];
//! let b = Bell.compute(&x).unwrap();
//! let back = Bell.invert(&b).unwrap();
//! assert!(back.iter().zip(&x).all(|(a, b)| (a - b).abs() < 1e-12));
//! ```
//!
//! # Logging
//! Inversions emit `tracing` events (`debug` per call, `trace` per recovered
//! variable, `warn` on degenerate input). Install any `tracing` subscriber
//! to see them.

mod bell;
mod bernoulli;
mod binomial;
mod error;
mod symmetric;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use bell::{Bell, PartialBell, PartialBellMemo, PartialBellTable, bell_numbers};
pub use bernoulli::Bernoulli;
pub use binomial::{BinomialTable, binom, binom_exact};
pub use error::{PolyError, Result};
pub use symmetric::{Complete, Elementary, PowerSum, SymmetricPolynomial};
pub use traits::MathScalar;
