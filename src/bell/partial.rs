use super::as_f64;
use super::memo::PartialBellMemo;
use crate::binomial::{BinomialTable, binom};
use crate::error::{PolyError, Result};
use crate::traits::{MathScalar, ensure_finite, ensure_finite_sequence, is_zero, scalar_from_usize};
use std::ops::Index;
use tracing::{debug, trace, warn};

/// Square table of partial Bell values `B_{n,k}` for `n, k < size`.
///
/// Entries with `k > n` are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialBellTable<T> {
    size: usize,
    values: Vec<T>,
}

impl<T: MathScalar> PartialBellTable<T> {
    fn zeros(size: usize) -> Self {
        PartialBellTable {
            size,
            values: vec![T::zero(); size * size],
        }
    }

    /// Number of rows (and columns): one more than the highest order
    pub fn size(&self) -> usize {
        self.size
    }

    /// `B_{n,k}`, or `None` outside the table
    pub fn get(&self, n: usize, k: usize) -> Option<T> {
        (n < self.size && k < self.size).then(|| self.values[n * self.size + k])
    }

    /// Row `n`: `B_{n,0}, ..., B_{n,size-1}`
    pub fn row(&self, n: usize) -> &[T] {
        &self.values[n * self.size..(n + 1) * self.size]
    }

    /// `B_{k+m,k}` for `m = 0..size-k`: the input expected by
    /// [`PartialBell::invert`] for partial order `k`.
    pub fn column(&self, k: usize) -> Vec<T> {
        (k..self.size).map(|n| self[(n, k)]).collect()
    }

    /// Complete Bell values `B_n = sum_k B_{n,k}` for every row
    pub fn row_sums(&self) -> Vec<T> {
        (0..self.size)
            .map(|n| self.row(n).iter().copied().sum())
            .collect()
    }

    /// Table as nested rows
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.values.chunks(self.size.max(1)).map(<[T]>::to_vec).collect()
    }
}

impl<T: MathScalar> Index<(usize, usize)> for PartialBellTable<T> {
    type Output = T;

    fn index(&self, (n, k): (usize, usize)) -> &T {
        assert!(
            n < self.size && k < self.size,
            "B({n},{k}) outside a table of size {}",
            self.size
        );
        &self.values[n * self.size + k]
    }
}

/// Partial Bell polynomial engine
///
/// `B_{n,k}(x_1, ..., x_{n-k+1})` sums over the set partitions of `n`
/// elements into exactly `k` blocks. The variable sequence is indexed from 0
/// and must have `x[0] = 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialBell;

impl PartialBell {
    /// Full table `B_{n,k}` for `n, k < len(x)`
    ///
    /// Built bottom-up with
    /// `B_{n,k} = sum_{i=1}^{n-k+1} C(n-1,i-1) x[i] B_{n-i,k-1}`.
    ///
    /// # Example
    /// ```
    /// use wnpoly::PartialBell;
    ///
    /// let table = PartialBell.compute(&[0.0, 2.0, 3.0, 5.0]).unwrap();
    /// // B_{3,2} = 3 x1 x2
    /// assert_eq!(table[(3, 2)], 18.0);
    /// // Rows sum to the complete Bell polynomials
    /// assert_eq!(table.row_sums(), vec![1.0, 2.0, 7.0, 31.0]);
    /// ```
    pub fn compute<T: MathScalar>(&self, x: &[T]) -> Result<PartialBellTable<T>> {
        check_leading_zero(x, "PartialBell::compute")?;
        let size = x.len();
        let binom = BinomialTable::<T>::new(size);

        let mut table = PartialBellTable::zeros(size);
        table.values[0] = T::one();
        for n in 1..size {
            for k in 1..=n {
                let mut value = T::zero();
                for i in 1..=n - k + 1 {
                    value += binom.get(n - 1, i - 1) * x[i] * table[(n - i, k - 1)];
                }
                table.values[n * size + k] = value;
            }
        }

        ensure_finite_sequence(x, table.values.clone(), "PartialBell::compute")?;
        Ok(table)
    }

    /// Single value `B_{n,k}` by direct recursion, without memoization.
    ///
    /// Requires `n >= k` and `len(x) >= n - k + 2`, i.e. every variable the
    /// value depends on must be present. Cost grows exponentially with `k`;
    /// prefer [`PartialBell::compute`] for more than a few values.
    pub fn compute_entry<T: MathScalar>(&self, n: usize, k: usize, x: &[T]) -> Result<T> {
        if n < k {
            return Err(PolyError::PartialOrderExceedsOrder { n, k });
        }
        let needed = (n - k)
            .checked_add(2)
            .ok_or_else(|| PolyError::overflow("PartialBell::compute_entry"))?;
        if x.len() < needed {
            return Err(PolyError::InsufficientVariables {
                n,
                k,
                needed,
                len: x.len(),
            });
        }
        check_leading_zero(x, "PartialBell::compute_entry")?;

        let value = recurse(n, k, x);
        if x.iter().all(|v| v.is_finite()) {
            return ensure_finite(value, "PartialBell::compute_entry");
        }
        Ok(value)
    }

    /// Recover the variables from one column of the partial Bell table.
    ///
    /// `b[m]` is `B_{k+m,k}` for `m = 0..len(b)`. Returns `x[0..=len(b)]`
    /// with `x[0] = 0`, so that `compute(x)` reproduces `b` in column `k`.
    ///
    /// `x[1]` is the real `k`-th root of `b[0]`. Every later variable is
    /// divided by `C(k+m, m+1) x[1]^(k-1)`, so `x[1] = 0` with `k >= 2` is a
    /// [`PolyError::DegenerateInversion`]. `k = 0` has no inverse.
    pub fn invert<T: MathScalar>(&self, k: usize, b: &[T]) -> Result<Vec<T>> {
        let mut memo = PartialBellMemo::new();
        self.invert_with_memo(k, b, &mut memo)
    }

    /// [`PartialBell::invert`] with a caller-supplied memo, cleared on entry.
    ///
    /// On return the memo holds the partial Bell values of the recovered
    /// variables that the inversion needed.
    pub fn invert_with_memo<T: MathScalar>(
        &self,
        k: usize,
        b: &[T],
        memo: &mut PartialBellMemo<T>,
    ) -> Result<Vec<T>> {
        memo.clear();
        if k == 0 {
            return Err(PolyError::ZeroPartialOrder);
        }
        let Some(&b0) = b.first() else {
            return Err(PolyError::empty("PartialBell::invert"));
        };
        // The highest row read is B_{k+len-1, k}
        k.checked_add(b.len())
            .ok_or_else(|| PolyError::overflow("PartialBell::invert"))?;
        debug!(k, len = b.len(), "inverting partial Bell column");

        let x1 = real_root(b0, k).ok_or_else(|| {
            warn!(k, b0 = as_f64(b0), "no real root for leading partial Bell value");
            PolyError::DegenerateInversion {
                order: 1,
                divisor: as_f64(b0),
            }
        })?;

        let mut x = Vec::with_capacity(b.len() + 1);
        x.push(T::zero());
        x.push(x1);

        let exponent = i32::try_from(k - 1).map_err(|_| PolyError::overflow("x1^(k-1)"))?;
        let x1_pow = x1.powi(exponent);
        for m in 1..b.len() {
            // B_{k+m,k} is linear in the only unknown x[m+1]; everything
            // else is read from the known prefix
            let mut sum = b[m];
            for i in 1..=m {
                let known = memo.evaluate(k + m - i, k - 1, &x);
                sum -= binom::<T>(k + m - 1, i - 1) * known * x[i];
            }

            let divisor = binom::<T>(k + m, m + 1) * x1_pow;
            if divisor == T::zero() || !divisor.is_finite() {
                warn!(order = m + 1, k, "degenerate partial Bell inversion");
                return Err(PolyError::DegenerateInversion {
                    order: m + 1,
                    divisor: as_f64(divisor),
                });
            }
            let next = sum / divisor;
            trace!(order = m + 1, value = ?next, "recovered variable");
            x.push(next);

            // The next step reads B_{n+m,n} for n = 1..=k
            for n in 1..=k {
                memo.evaluate(n + m, n, &x);
            }
        }

        ensure_finite_sequence(b, x, "PartialBell::invert")
    }
}

/// Direct recursion behind [`PartialBell::compute_entry`]
fn recurse<T: MathScalar>(n: usize, k: usize, x: &[T]) -> T {
    if n == 0 && k == 0 {
        return T::one();
    }
    if n == 0 || k == 0 {
        return T::zero();
    }
    let mut result = T::zero();
    for i in 1..=n - k + 1 {
        result += binom::<T>(n - 1, i - 1) * x[i] * recurse(n - i, k - 1, x);
    }
    result
}

fn check_leading_zero<T: MathScalar>(x: &[T], operation: &'static str) -> Result<()> {
    match x.first() {
        None => Err(PolyError::empty(operation)),
        Some(&x0) if !is_zero(x0) => Err(PolyError::NonZeroLeadingVariable { value: as_f64(x0) }),
        Some(_) => Ok(()),
    }
}

/// Real `k`-th root of `value`; `None` for a negative value and even `k`.
fn real_root<T: MathScalar>(value: T, k: usize) -> Option<T> {
    if k == 1 {
        return Some(value);
    }
    let exponent = T::one() / scalar_from_usize::<T>(k).ok()?;
    if value >= T::zero() {
        Some(value.powf(exponent))
    } else if k % 2 == 1 {
        Some(-(-value).powf(exponent))
    } else {
        None
    }
}
