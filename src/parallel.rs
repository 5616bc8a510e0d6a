//! Parallel batch evaluation using Rayon
//!
//! Each helper fans independent calls out over the global rayon pool. A
//! single call is never split; results keep the order of the inputs and
//! each carries its own `Result`, so one bad input does not hide the others.
//!
//! Enable with the `parallel` feature:
//! ```toml
//! wnpoly = { version = "0.2", features = ["parallel"] }
//! ```

use crate::{Bell, Bernoulli, MathScalar, Result, SymmetricPolynomial};
use rayon::prelude::*;

/// Symmetric polynomial sequences of order `n` for every variable set in `xs`.
///
/// # Example
/// ```ignore
/// use wnpoly::{PowerSum, parallel::compute_batch};
///
/// let xs = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
/// let p = compute_batch(&PowerSum, &xs, 2);
/// assert_eq!(p[1].as_ref().unwrap(), &vec![1.0, 7.0, 25.0]);
/// ```
pub fn compute_batch<E, T, X>(engine: &E, xs: &[X], n: usize) -> Vec<Result<Vec<T>>>
where
    E: SymmetricPolynomial + Sync,
    T: MathScalar,
    X: AsRef<[T]> + Sync,
{
    xs.par_iter().map(|x| engine.compute(x.as_ref(), n)).collect()
}

/// Bernoulli polynomial `B_n` at every point.
pub fn bernoulli_batch<T: MathScalar>(n: usize, points: &[T]) -> Vec<Result<T>> {
    points
        .par_iter()
        .map(|&x| Bernoulli.compute(n, x))
        .collect()
}

/// Complete Bell sequences for every variable sequence in `xs`.
pub fn bell_batch<T, X>(xs: &[X]) -> Vec<Result<Vec<T>>>
where
    T: MathScalar,
    X: AsRef<[T]> + Sync,
{
    xs.par_iter().map(|x| Bell.compute(x.as_ref())).collect()
}
