use core::fmt::Debug;
use num_traits::float::FloatConst;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as polynomial coefficients.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point polynomial coefficients.
///
/// Everything the polynomial engine needs from its element type: zero, one,
/// machine epsilon, absolute value, ordering, NaN detection and the
/// transcendental functions used by the closed-form solvers. Covers `f32`
/// and `f64`.
pub trait FloatScalar: Scalar + Float + FloatConst {
    /// Convert a small integer (a degree, a loop counter) into `Self`.
    #[inline]
    fn from_usize(n: usize) -> Self {
        // Every float type can represent a degree; the cast only rounds.
        <Self as num_traits::NumCast>::from(n).unwrap_or_else(Self::infinity)
    }

    /// Convert an `f64` constant into `Self`.
    #[inline]
    fn from_f64(x: f64) -> Self {
        <Self as num_traits::NumCast>::from(x).unwrap_or_else(Self::nan)
    }
}

impl<T: Scalar + Float + FloatConst> FloatScalar for T {}
