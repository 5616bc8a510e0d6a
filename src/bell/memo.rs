use crate::binomial::binom;
use crate::traits::MathScalar;
use rustc_hash::FxHashMap;

/// Memo of partial Bell values `B_{n,k}` for one variable sequence.
///
/// Used by the partial Bell inversion, where the variable sequence grows by
/// one element per step. Variables that are not known yet read as zero, and
/// a value is only stored once every variable it depends on
/// (`x[1..=n-k+1]`) is known, so stored values stay valid while the
/// sequence grows. A memo must not be shared between different variable
/// sequences; [`PartialBell::invert_with_memo`](crate::PartialBell::invert_with_memo)
/// clears it on entry.
#[derive(Debug, Clone)]
pub struct PartialBellMemo<T> {
    values: FxHashMap<(usize, usize), T>,
}

impl<T> Default for PartialBellMemo<T> {
    fn default() -> Self {
        Self {
            values: FxHashMap::default(),
        }
    }
}

impl<T: MathScalar> PartialBellMemo<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every stored value
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stored value of `B_{n,k}`, if any
    pub fn get(&self, n: usize, k: usize) -> Option<T> {
        self.values.get(&(n, k)).copied()
    }

    /// `B_{n,k}(x)` by the recurrence
    /// `B_{n,k} = sum_{i=1}^{n-k+1} C(n-1,i-1) x[i] B_{n-i,k-1}`,
    /// reading and filling the memo.
    ///
    /// Recursion depth is bounded by `k`. Every coefficient read is
    /// `C(n-1, i-1)` with `i - 1 <= n - k`, so each costs `O(n - k)` and no
    /// Pascal triangle over `n` is built.
    pub(crate) fn evaluate(&mut self, n: usize, k: usize, x: &[T]) -> T {
        if n == 0 && k == 0 {
            return T::one();
        }
        if n == 0 || k == 0 || n < k {
            return T::zero();
        }
        if let Some(&value) = self.values.get(&(n, k)) {
            return value;
        }

        let mut result = T::zero();
        for i in 1..=n - k + 1 {
            // Unknown variables are zero
            let Some(&xi) = x.get(i) else { break };
            result += binom::<T>(n - 1, i - 1) * xi * self.evaluate(n - i, k - 1, x);
        }

        if n - k + 1 < x.len() {
            self.values.insert((n, k), result);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_base_cases() {
        let mut memo = PartialBellMemo::<f64>::new();
        let x = [0.0, 2.0, 3.0];
        assert_eq!(memo.evaluate(0, 0, &x), 1.0);
        assert_eq!(memo.evaluate(0, 1, &x), 0.0);
        assert_eq!(memo.evaluate(2, 0, &x), 0.0);
        assert_eq!(memo.evaluate(1, 2, &x), 0.0);
        assert!(memo.is_empty());
    }

    #[test]
    fn test_evaluate_known_values() {
        let mut memo = PartialBellMemo::<f64>::new();
        let x = [0.0, 2.0, 3.0, 5.0];
        // B_{3,1} = x3, B_{3,2} = 3 x1 x2, B_{3,3} = x1^3
        assert_eq!(memo.evaluate(3, 1, &x), 5.0);
        assert_eq!(memo.evaluate(3, 2, &x), 18.0);
        assert_eq!(memo.evaluate(3, 3, &x), 8.0);
        assert_eq!(memo.get(3, 2), Some(18.0));
    }

    #[test]
    fn test_incomplete_values_not_stored() {
        let mut memo = PartialBellMemo::<f64>::new();
        // x3 unknown: B_{3,1} = x3 reads as zero and must not be cached
        let x = [0.0, 2.0, 3.0];
        assert_eq!(memo.evaluate(3, 1, &x), 0.0);
        assert_eq!(memo.get(3, 1), None);

        let x = [0.0, 2.0, 3.0, 5.0];
        assert_eq!(memo.evaluate(3, 1, &x), 5.0);
        assert_eq!(memo.get(3, 1), Some(5.0));

        memo.clear();
        assert!(memo.is_empty());
    }

    #[test]
    fn test_evaluate_high_order() {
        let mut memo = PartialBellMemo::<f64>::new();
        // B_{n,n} = x1^n, B_{n+1,n} = C(n+1,2) x1^(n-1) x2
        let x = [0.0, 1.0, 2.0];
        let n = 2_000;
        assert_eq!(memo.evaluate(n, n, &x), 1.0);
        assert_eq!(memo.evaluate(n + 1, n, &x), (n as f64 + 1.0) * n as f64);
    }
}
