//! Binomial coefficients
//!
//! `C(n, k)` is needed by every engine in the crate. Two entry points are
//! provided:
//!
//! - [`binom`] / [`binom_exact`]: one-off evaluation. Exact 128-bit integer
//!   arithmetic is used while it does not overflow, then a floating
//!   multiplicative formula takes over.
//! - [`BinomialTable`]: a Pascal triangle built once per engine call, for the
//!   inner loops of the recurrences that look up the same coefficients many
//!   times.

use crate::traits::MathScalar;

/// Exact binomial coefficient, `None` on 128-bit overflow.
///
/// Returns `Some(0)` for `k > n`.
pub fn binom_exact(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    // C(n,k) = C(n,n-k)
    let k = k.min(n - k);
    let n = n as u128;

    let mut result: u128 = 1;
    for i in 0..k as u128 {
        // result * (n - i) is always divisible by (i + 1)
        result = result.checked_mul(n - i)? / (i + 1);
    }
    Some(result)
}

/// Binomial coefficient `C(n, k)` as a scalar.
///
/// Exact whenever the integer result is representable in `T`. Past 128-bit
/// range the value is accumulated in floating point and may round; for
/// results beyond `T::max_value()` the return is `+inf`.
pub fn binom<T: MathScalar>(n: usize, k: usize) -> T {
    if let Some(exact) = binom_exact(n, k)
        && let Some(value) = T::from_u128(exact)
    {
        return value;
    }

    let k = k.min(n - k);
    let mut result = T::one();
    for i in 0..k {
        let num = T::from_usize(n - i).unwrap_or_else(T::infinity);
        let den = T::from_usize(i + 1).unwrap_or_else(T::infinity);
        result = result * num / den;
    }
    result
}

/// Pascal triangle of binomial coefficients `C(n, k)` for `n <= max_n`.
#[derive(Debug, Clone)]
pub struct BinomialTable<T> {
    rows: Vec<Vec<T>>,
}

impl<T: MathScalar> BinomialTable<T> {
    /// Build the triangle up to row `max_n` (inclusive)
    pub fn new(max_n: usize) -> Self {
        let mut rows: Vec<Vec<T>> = Vec::with_capacity(max_n + 1);
        rows.push(vec![T::one()]);
        for n in 1..=max_n {
            let prev = &rows[n - 1];
            let mut row = Vec::with_capacity(n + 1);
            row.push(T::one());
            for k in 1..n {
                row.push(prev[k - 1] + prev[k]);
            }
            row.push(T::one());
            rows.push(row);
        }
        BinomialTable { rows }
    }

    /// Largest `n` held in the table
    pub fn max_n(&self) -> usize {
        self.rows.len() - 1
    }

    /// `C(n, k)`; zero for `k > n`. Rows past `max_n` fall back to [`binom`].
    #[inline]
    pub fn get(&self, n: usize, k: usize) -> T {
        if k > n {
            return T::zero();
        }
        match self.rows.get(n) {
            Some(row) => row[k],
            None => binom(n, k),
        }
    }
}
