//! Bell polynomial engines
//!
//! The complete Bell polynomials `B_n(x_1, ..., x_n)` of a variable sequence
//! and the partial Bell polynomials `B_{n,k}` that split them by number of
//! blocks:
//!
//! ```text
//! B_n = sum_{k=0}^{n} B_{n,k}
//! ```
//!
//! Both engines use the same convention: the variable sequence is indexed
//! from 0 and `x[0]` carries no information. The partial engine requires it
//! to be zero; the complete engine ignores it.
//!
//! Inversions (`Bell::invert`, `PartialBell::invert`) and `Bell::negate`
//! are forward substitutions on lower-triangular systems: every new unknown
//! appears linearly next to terms that are already known.

mod complete;
mod memo;
mod partial;

pub use complete::{Bell, bell_numbers};
pub use memo::PartialBellMemo;
pub use partial::{PartialBell, PartialBellTable};

use crate::traits::MathScalar;

/// Scalar as `f64` for error payloads
#[inline]
pub(crate) fn as_f64<T: MathScalar>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
