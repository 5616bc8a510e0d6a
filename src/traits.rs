use crate::error::{PolyError, Result};
use num_traits::{Float, FloatConst, FromPrimitive, Signed, ToPrimitive};
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

/// Default tolerance for floating-point comparisons against 0 and 1
pub const FLOAT_TOLERANCE: f64 = 1e-10;

/// Tolerance used when comparing a sequence against its round trip
/// through an inversion (e.g. `invert(compute(x))`)
pub const ROUND_TRIP_TOLERANCE: f64 = 1e-4;

/// A trait comprising all operations required for the scalars the
/// polynomial engines evaluate over.
///
/// This aggregates `num_traits::Float` (powi, powf, abs, ...),
/// `FromPrimitive` for index conversions, and the arithmetic traits.
/// Implemented for `f32` and `f64`.
pub trait MathScalar:
    Float
    + FloatConst
    + FromPrimitive
    + ToPrimitive
    + Signed
    + Debug
    + Display
    + Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + RemAssign
    + Sum
    + Send
    + Sync
    + 'static
{
}

// Blanket implementation for any type that satisfies the bounds
impl<T> MathScalar for T where
    T: Float
        + FloatConst
        + FromPrimitive
        + ToPrimitive
        + Signed
        + Debug
        + Display
        + Copy
        + Clone
        + PartialEq
        + PartialOrd
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Rem<Output = T>
        + Neg<Output = T>
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + RemAssign
        + Sum
        + Send
        + Sync
        + 'static
{
}

/// Convert an index or count into the scalar type.
#[inline]
pub(crate) fn scalar_from_usize<T: MathScalar>(n: usize) -> Result<T> {
    T::from_usize(n).ok_or_else(|| PolyError::overflow("usize to scalar conversion"))
}

/// Reject a non-finite value produced from finite inputs.
#[inline]
pub(crate) fn ensure_finite<T: MathScalar>(value: T, operation: &'static str) -> Result<T> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PolyError::overflow(operation))
    }
}

/// Reject an output sequence that went non-finite although every input value
/// was finite. Non-finite inputs propagate unchanged.
pub(crate) fn ensure_finite_sequence<T: MathScalar>(
    input: &[T],
    output: Vec<T>,
    operation: &'static str,
) -> Result<Vec<T>> {
    if input.iter().all(|v| v.is_finite()) && output.iter().any(|v| !v.is_finite()) {
        return Err(PolyError::overflow(operation));
    }
    Ok(output)
}

// ===== Float tolerance helpers =====

#[inline]
fn tolerance<T: MathScalar>() -> T {
    T::from_f64(FLOAT_TOLERANCE).unwrap_or_else(T::epsilon)
}

/// Check if a scalar is approximately zero (within `FLOAT_TOLERANCE`)
#[inline]
pub fn is_zero<T: MathScalar>(n: T) -> bool {
    n.abs() < tolerance()
}

/// Check if a scalar is approximately one (within `FLOAT_TOLERANCE`)
#[inline]
pub fn is_one<T: MathScalar>(n: T) -> bool {
    (n - T::one()).abs() < tolerance()
}

/// Absolute-tolerance comparison of two scalars
#[inline]
pub fn approx_eq<T: MathScalar>(a: T, b: T, tol: T) -> bool {
    (a - b).abs() <= tol
}

/// Element-wise absolute-tolerance comparison of two sequences.
/// Sequences of different lengths are never equal.
pub fn approx_eq_slice<T: MathScalar>(a: &[T], b: &[T], tol: T) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| approx_eq(x, y, tol))
}
