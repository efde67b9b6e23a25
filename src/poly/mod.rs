//! Dense single-variable polynomials and their root-finding engine.
//!
//! [`Polynomial<T>`] stores coefficients in ascending degree order and tracks
//! a tolerance-aware "real" degree that ignores leading coefficients lost to
//! floating-point noise. Everything else builds on that degree:
//!
//! - arithmetic: `+ - * /` against polynomials and scalars, [`Polynomial::derivative`],
//!   [`Polynomial::integrate`], [`Polynomial::pow`], [`Polynomial::normalize`],
//!   [`Polynomial::trim`]
//! - evaluation: Horner's method for real and complex arguments, plus
//!   [`Polynomial::min_max`] over an interval
//! - analytic roots up to degree five ([`Polynomial::roots`], see [`closed_form`])
//! - Durand-Kerner complex roots for any degree ([`Polynomial::complex_roots`])
//! - real roots inside an interval by derivative-guided bisection
//!   ([`Polynomial::roots_in_interval`])
//!
//! # Example
//!
//! ```
//! use polyroot::Polynomial;
//!
//! // x² − 3x + 2, written highest degree first
//! let p = Polynomial::new(&[1.0_f64, -3.0, 2.0]);
//! assert_eq!(p.degree(), 2);
//! assert_eq!(p.eval(4.0), 6.0);
//!
//! let roots = p.roots(1e-10);
//! assert!((roots[0] - 1.0).abs() < 1e-12);
//! assert!((roots[1] - 2.0).abs() < 1e-12);
//! ```

pub mod closed_form;
mod arith;
mod display;
mod durand_kerner;
mod eval;
mod factory;
mod roots;
mod store;

#[cfg(test)]
mod tests;

pub use durand_kerner::ComplexRoots;
pub use store::Polynomial;

/// Errors from polynomial construction, mutation and evaluation.
///
/// ```
/// use polyroot::{Polynomial, PolyError};
///
/// let mut p = Polynomial::new(&[1.0_f64, 2.0]);
/// p.set_readonly();
/// assert_eq!(p.set(0, 5.0).unwrap_err(), PolyError::ReadOnly);
/// assert_eq!(p.pow(-1).unwrap_err(), PolyError::NegativeExponent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyError {
    /// Coefficient write on a read-only polynomial.
    ReadOnly,
    /// Coefficient write beyond the stored coefficients.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of stored coefficients.
        len: usize,
    },
    /// Evaluation argument was NaN.
    NotFinite,
    /// `pow` was called with a negative exponent.
    NegativeExponent,
    /// Iterative root finder did not converge within the iteration budget.
    MaxIterations,
    /// Interpolation needs at least one point.
    TooFewPoints,
    /// `xs` and `ys` have different lengths.
    LengthMismatch,
    /// Two interpolation nodes share the same x value.
    DuplicateNodes,
}

impl core::fmt::Display for PolyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PolyError::ReadOnly => write!(f, "polynomial is read-only"),
            PolyError::IndexOutOfRange { index, len } => {
                write!(f, "coefficient index {} out of range for length {}", index, len)
            }
            PolyError::NotFinite => write!(f, "evaluation argument is NaN"),
            PolyError::NegativeExponent => write!(f, "exponent must be non-negative"),
            PolyError::MaxIterations => write!(f, "maximum iterations exceeded"),
            PolyError::TooFewPoints => write!(f, "not enough data points for interpolation"),
            PolyError::LengthMismatch => write!(f, "xs and ys must have the same length"),
            PolyError::DuplicateNodes => write!(f, "interpolation nodes must be distinct"),
        }
    }
}

/// Settings for the iterative root finders.
///
/// `epsilon` is both the degree tolerance and the convergence threshold,
/// `max_iter` bounds the Durand-Kerner loop, and `accuracy` is the number of
/// decimal digits (relative to the bracket width) that bisection resolves.
#[derive(Debug, Clone, Copy)]
pub struct RootSettings<T> {
    /// Coefficient and convergence tolerance.
    pub epsilon: T,
    /// Maximum number of Durand-Kerner iterations.
    pub max_iter: usize,
    /// Decimal digits resolved by bisection.
    pub accuracy: u32,
}

/// Iteration budget used when only an epsilon is supplied.
pub(crate) const DEFAULT_MAX_ITER: usize = 500;

/// Bisection digits used when only an epsilon is supplied.
pub(crate) const DEFAULT_ACCURACY: u32 = 6;

impl<T> RootSettings<T> {
    /// Settings with the given tolerance and the default budgets.
    pub fn with_epsilon(epsilon: T) -> Self {
        Self {
            epsilon,
            max_iter: DEFAULT_MAX_ITER,
            accuracy: DEFAULT_ACCURACY,
        }
    }
}

impl Default for RootSettings<f64> {
    fn default() -> Self {
        Self::with_epsilon(1e-10)
    }
}

impl Default for RootSettings<f32> {
    fn default() -> Self {
        Self::with_epsilon(1e-5)
    }
}

/// Sort ascending and merge neighbours closer than `tol`.
pub(crate) fn sort_dedup<T: crate::FloatScalar>(values: &mut alloc::vec::Vec<T>, tol: T) {
    values.retain(|v| !v.is_nan());
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));
    values.dedup_by(|b, a| (*b - *a).abs() <= tol);
}
