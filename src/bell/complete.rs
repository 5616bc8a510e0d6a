use super::as_f64;
use crate::binomial::BinomialTable;
use crate::error::{PolyError, Result};
use crate::traits::{MathScalar, ensure_finite_sequence, is_one};
use tracing::{debug, trace};

/// Complete Bell polynomial engine
///
/// Maps a variable sequence `x` to `b[m] = B_m(x[1], ..., x[m])` through the
/// convolution recurrence
/// `b[m+1] = sum_{i=0}^{m} C(m,i) b[m-i] x[i+1]`, and back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bell;

impl Bell {
    /// Bell polynomials `b[0..len(x)]`; `x[0]` is not read.
    ///
    /// # Example
    /// ```
    /// use wnpoly::Bell;
    ///
    /// // B_2 = x1^2 + x2, B_3 = x1^3 + 3 x1 x2 + x3
    /// let b = Bell.compute(&[0.0, 2.0, 3.0, 5.0]).unwrap();
    /// assert_eq!(b, vec![1.0, 2.0, 7.0, 8.0 + 18.0 + 5.0]);
    /// ```
    pub fn compute<T: MathScalar>(&self, x: &[T]) -> Result<Vec<T>> {
        if x.is_empty() {
            return Err(PolyError::empty("Bell::compute"));
        }
        let binom = BinomialTable::<T>::new(x.len());

        let mut b = vec![T::zero(); x.len()];
        b[0] = T::one();
        for m in 0..x.len() - 1 {
            let mut next = T::zero();
            for i in 0..=m {
                next += binom.get(m, i) * b[m - i] * x[i + 1];
            }
            b[m + 1] = next;
        }

        ensure_finite_sequence(&x[1..], b, "Bell::compute")
    }

    /// Recover the variables from a Bell sequence: `compute(invert(b)) == b`.
    ///
    /// Requires `b[0] = 1`. The returned sequence has the same length as `b`
    /// and `x[0] = 0`.
    pub fn invert<T: MathScalar>(&self, b: &[T]) -> Result<Vec<T>> {
        let Some(&b0) = b.first() else {
            return Err(PolyError::empty("Bell::invert"));
        };
        if !is_one(b0) {
            return Err(PolyError::InvalidLeadingValue { value: as_f64(b0) });
        }
        debug!(len = b.len(), "inverting Bell sequence");
        let binom = BinomialTable::<T>::new(b.len());

        let mut x = Vec::with_capacity(b.len());
        x.push(T::zero());
        for n in 0..b.len() - 1 {
            // b[n+1] = x[n+1] + sum_{i<n} C(n,i) b[n-i] x[i+1]
            let mut next = b[n + 1];
            for i in 0..n {
                next -= binom.get(n, i) * b[n - i] * x[i + 1];
            }
            trace!(order = n + 1, value = ?next, "recovered variable");
            x.push(next);
        }

        ensure_finite_sequence(b, x, "Bell::invert")
    }

    /// Bell sequence of the negated variables `-x`, computed from the Bell
    /// sequence of `x` alone.
    ///
    /// The exponential generating functions satisfy `B(-x)(t) = 1 / B(x)(t)`,
    /// so the result is the convolution inverse of `b`. This assumes
    /// `b[0] = 1`, as for every sequence produced by [`Bell::compute`].
    pub fn negate<T: MathScalar>(&self, b: &[T]) -> Result<Vec<T>> {
        if b.is_empty() {
            return Err(PolyError::empty("Bell::negate"));
        }
        debug!(len = b.len(), "negating Bell sequence");
        let binom = BinomialTable::<T>::new(b.len());

        let mut bn = Vec::with_capacity(b.len());
        bn.push(T::one());
        for n in 1..b.len() {
            let mut next = T::zero();
            for (i, &bni) in bn.iter().enumerate() {
                next -= binom.get(n, i) * bni * b[n - i];
            }
            bn.push(next);
        }

        ensure_finite_sequence(b, bn, "Bell::negate")
    }
}

/// Bell numbers `B_0..=B_n`: the number of set partitions of `0..n`
/// elements, i.e. the complete Bell polynomials at `x_i = 1`.
pub fn bell_numbers<T: MathScalar>(n: usize) -> Result<Vec<T>> {
    let mut x = vec![T::one(); n + 1];
    x[0] = T::zero();
    Bell.compute(&x)
}
