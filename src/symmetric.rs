//! Symmetric polynomial engines
//!
//! Evaluates the elementary (`e`), complete homogeneous (`h`) and power-sum
//! (`p`) symmetric polynomials of a variable sequence `x` for every degree
//! from 0 up to a target order `n`. Each engine returns `n + 1` values with
//! index `i` holding the degree-`i` polynomial; index 0 is always 1.
//!
//! The three families are tied together by Newton's identities, e.g.
//! `n * h[n] = sum_{k=1}^{n} h[n-k] * p[k]`.
//!
//! # Example
//! ```
//! use wnpoly::{Complete, Elementary, PowerSum, SymmetricPolynomial};
//!
//! let x = [1.0, 2.0, 3.0];
//! assert_eq!(Elementary.compute(&x, 3).unwrap(), vec![1.0, 6.0, 11.0, 6.0]);
//! assert_eq!(Complete.compute(&x, 2).unwrap(), vec![1.0, 6.0, 25.0]);
//! assert_eq!(PowerSum.compute(&x, 2).unwrap(), vec![1.0, 6.0, 14.0]);
//! ```

use crate::binomial::binom;
use crate::error::{PolyError, Result};
use crate::traits::{MathScalar, ensure_finite_sequence, scalar_from_usize};

/// Common interface of the symmetric polynomial families
pub trait SymmetricPolynomial {
    /// Short name used in error messages and log events
    const NAME: &'static str;

    /// Polynomial values of degree `0..=n` in the variables `x`
    fn compute<T: MathScalar>(&self, x: &[T], n: usize) -> Result<Vec<T>>;

    /// Number of monomials in the degree-`i` polynomial of `len` variables
    fn term_count<T: MathScalar>(&self, len: usize, i: usize) -> T;

    /// Polynomial values divided by the number of terms in each polynomial,
    /// i.e. the mean monomial value. Requires a non-empty `x`.
    fn compute_normalized<T: MathScalar>(&self, x: &[T], n: usize) -> Result<Vec<T>> {
        if x.is_empty() {
            return Err(PolyError::empty(Self::NAME));
        }
        let mut result = self.compute(x, n)?;
        for (i, value) in result.iter_mut().enumerate() {
            let count: T = self.term_count(x.len(), i);
            *value /= count;
        }
        Ok(result)
    }
}

/// Elementary symmetric polynomials `e_i`: sum over all `i`-subsets of the
/// product of the subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Elementary;

/// Complete homogeneous symmetric polynomials `h_i`: sum over all degree-`i`
/// monomials, repetition allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Complete;

/// Power-sum symmetric polynomials `p_i = sum_j x_j^i`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerSum;

impl SymmetricPolynomial for Elementary {
    const NAME: &'static str = "Elementary";

    /// Requires `n <= x.len()` (`e_i` vanishes identically past the number
    /// of variables).
    fn compute<T: MathScalar>(&self, x: &[T], n: usize) -> Result<Vec<T>> {
        if n > x.len() {
            return Err(PolyError::OrderExceedsLength {
                order: n,
                len: x.len(),
            });
        }

        // y[j] holds the degree-i sum restricted to subsets whose smallest
        // index is j
        let mut y = x.to_vec();
        let mut next = vec![T::zero(); x.len()];
        let mut result = Vec::with_capacity(n + 1);
        result.push(T::one());

        for _ in 1..=n {
            result.push(y.iter().copied().sum());
            let mut tail = T::zero();
            for j in (0..x.len()).rev() {
                next[j] = x[j] * tail;
                tail += y[j];
            }
            std::mem::swap(&mut y, &mut next);
        }

        ensure_finite_sequence(x, result, Self::NAME)
    }

    fn term_count<T: MathScalar>(&self, len: usize, i: usize) -> T {
        binom(len, i)
    }
}

impl SymmetricPolynomial for Complete {
    const NAME: &'static str = "Complete";

    fn compute<T: MathScalar>(&self, x: &[T], n: usize) -> Result<Vec<T>> {
        // y[j] holds the degree-i sum restricted to monomials whose smallest
        // index is j
        let mut y = x.to_vec();
        let mut next = vec![T::zero(); x.len()];
        let mut result = Vec::with_capacity(n + 1);
        result.push(T::one());

        for _ in 1..=n {
            result.push(y.iter().copied().sum());
            let mut tail = T::zero();
            for j in (0..x.len()).rev() {
                tail += y[j];
                next[j] = x[j] * tail;
            }
            std::mem::swap(&mut y, &mut next);
        }

        ensure_finite_sequence(x, result, Self::NAME)
    }

    fn term_count<T: MathScalar>(&self, len: usize, i: usize) -> T {
        // len >= 1 is guaranteed by compute_normalized
        binom((i + len).saturating_sub(1), i)
    }
}

impl SymmetricPolynomial for PowerSum {
    const NAME: &'static str = "PowerSum";

    fn compute<T: MathScalar>(&self, x: &[T], n: usize) -> Result<Vec<T>> {
        let mut y = x.to_vec();
        let mut result = Vec::with_capacity(n + 1);
        result.push(T::one());

        for i in 1..=n {
            if i > 1 {
                for (yj, &xj) in y.iter_mut().zip(x) {
                    *yj *= xj;
                }
            }
            result.push(y.iter().copied().sum());
        }

        ensure_finite_sequence(x, result, Self::NAME)
    }

    /// Every power sum has `len` terms.
    ///
    /// Note that the degree-0 entry is divided too, so the normalized
    /// sequence starts at `1/len` rather than 1. This differs from the other
    /// two families and is kept as is.
    fn term_count<T: MathScalar>(&self, len: usize, _i: usize) -> T {
        scalar_from_usize(len).unwrap_or_else(|_| T::infinity())
    }
}
