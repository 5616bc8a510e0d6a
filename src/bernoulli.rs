//! Bernoulli numbers and polynomials
//!
//! Numbers follow the `B_1 = -1/2` convention and are generated by the
//! triangular recurrence
//! `B_m = -sum_{k=0}^{m-1} C(m,k) B_k / (m - k + 1)`.
//! The polynomial of order `n` is `B_n(x) = sum_{k=0}^{n} C(n,k) B_{n-k} x^k`.

use crate::binomial::BinomialTable;
use crate::error::Result;
use crate::traits::{MathScalar, ensure_finite, ensure_finite_sequence, scalar_from_usize};

/// Bernoulli polynomial engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bernoulli;

impl Bernoulli {
    /// Bernoulli numbers `B_0..=B_n`
    pub fn numbers<T: MathScalar>(&self, n: usize) -> Result<Vec<T>> {
        let binom = BinomialTable::<T>::new(n);
        let mut numbers = Vec::with_capacity(n + 1);
        numbers.push(T::one());

        for m in 1..=n {
            let mut bm = T::zero();
            for (k, &bk) in numbers.iter().enumerate() {
                bm -= binom.get(m, k) * bk / scalar_from_usize::<T>(m - k + 1)?;
            }
            numbers.push(bm);
        }

        ensure_finite_sequence(&[], numbers, "Bernoulli::numbers")
    }

    /// Bernoulli polynomial `B_n(x)`
    ///
    /// The numbers are recomputed on every call.
    ///
    /// # Example
    /// ```
    /// use wnpoly::Bernoulli;
    ///
    /// // B_2(x) = x^2 - x + 1/6
    /// let value: f64 = Bernoulli.compute(2, 3.0).unwrap();
    /// assert!((value - (6.0 + 1.0 / 6.0)).abs() < 1e-12);
    /// ```
    pub fn compute<T: MathScalar>(&self, n: usize, x: T) -> Result<T> {
        let numbers = self.numbers::<T>(n)?;
        let binom = BinomialTable::<T>::new(n);

        let mut result = T::zero();
        let mut power = T::one();
        for k in 0..=n {
            result += binom.get(n, k) * numbers[n - k] * power;
            power *= x;
        }

        if x.is_finite() {
            return ensure_finite(result, "Bernoulli::compute");
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PolyError;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_numbers() {
        let expected = [
            1.0,
            -0.5,
            1.0 / 6.0,
            0.0,
            -1.0 / 30.0,
            0.0,
            1.0 / 42.0,
            0.0,
            -1.0 / 30.0,
            0.0,
            5.0 / 66.0,
        ];
        let numbers: Vec<f64> = Bernoulli.numbers(10).unwrap();
        assert_eq!(numbers.len(), expected.len());
        for (m, (got, want)) in numbers.iter().zip(expected).enumerate() {
            assert!((got - want).abs() < TOL, "B_{m}: {got} != {want}");
        }
    }

    #[test]
    fn test_order_zero_and_one() {
        assert_eq!(Bernoulli.compute(0, 7.5_f64).unwrap(), 1.0);
        // B_1(x) = x - 1/2
        assert!((Bernoulli.compute(1, 2.0_f64).unwrap() - 1.5).abs() < TOL);
    }

    #[test]
    fn test_value_at_zero_is_number() {
        let numbers: Vec<f64> = Bernoulli.numbers(8).unwrap();
        for (n, bn) in numbers.iter().enumerate() {
            let at_zero: f64 = Bernoulli.compute(n, 0.0).unwrap();
            assert!((at_zero - bn).abs() < TOL);
        }
    }

    #[test]
    fn test_cubic() {
        // B_3(x) = x^3 - 3/2 x^2 + 1/2 x
        for &x in &[-1.0_f64, 0.25, 2.0] {
            let expected = x * x * x - 1.5 * x * x + 0.5 * x;
            assert!((Bernoulli.compute(3, x).unwrap() - expected).abs() < TOL);
        }
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            Bernoulli.compute(3, 1e200_f64).unwrap_err(),
            PolyError::overflow("Bernoulli::compute")
        );
    }
}
