use alloc::vec;
use alloc::vec::Vec;

use crate::traits::FloatScalar;

use super::{PolyError, Polynomial};

impl<T: FloatScalar> Polynomial<T> {
    /// `x^degree`.
    ///
    /// ```
    /// use polyroot::Polynomial;
    /// let p = Polynomial::<f64>::monomial(3);
    /// assert_eq!(p.coeffs(), &[0.0, 0.0, 0.0, 1.0]);
    /// ```
    pub fn monomial(degree: usize) -> Self {
        Self::from_term(T::one(), degree)
    }

    /// `coefficient · x^degree`.
    pub fn from_term(coefficient: T, degree: usize) -> Self {
        let mut coeffs = vec![T::zero(); degree + 1];
        coeffs[degree] = coefficient;
        Self::from_coeffs(coeffs)
    }

    /// The monomial basis `[1, x, x², …, x^degree]`.
    pub fn standard_basis(degree: usize) -> Vec<Self> {
        (0..=degree).map(Self::monomial).collect()
    }

    /// The unique polynomial of degree below `n` through `n` points.
    ///
    /// Builds Newton's divided differences in O(n²), then expands the Newton
    /// form into coefficients. Nodes need not be sorted.
    ///
    /// # Errors
    ///
    /// - [`PolyError::LengthMismatch`] if `xs` and `ys` differ in length
    /// - [`PolyError::TooFewPoints`] if there are no points
    /// - [`PolyError::DuplicateNodes`] if two `xs` are equal
    ///
    /// ```
    /// use polyroot::Polynomial;
    /// // y = x² through three points
    /// let p = Polynomial::interpolate(&[0.0_f64, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
    /// assert!((p.eval(1.5) - 2.25).abs() < 1e-12);
    /// assert_eq!(p.degree(), 2);
    /// ```
    pub fn interpolate(xs: &[T], ys: &[T]) -> Result<Self, PolyError> {
        if xs.len() != ys.len() {
            return Err(PolyError::LengthMismatch);
        }
        let n = xs.len();
        if n == 0 {
            return Err(PolyError::TooFewPoints);
        }
        for j in 0..n {
            if xs[j + 1..].contains(&xs[j]) {
                return Err(PolyError::DuplicateNodes);
            }
        }

        // dd[i] = f[x_0, …, x_i]
        let mut dd = ys.to_vec();
        for j in 1..n {
            for i in (j..n).rev() {
                dd[i] = (dd[i] - dd[i - 1]) / (xs[i] - xs[i - j]);
            }
        }

        // Horner on the Newton form: p ← p·(x − x_k) + dd[k]
        let mut coeffs = vec![dd[n - 1]];
        for k in (0..n - 1).rev() {
            let mut next = vec![T::zero(); coeffs.len() + 1];
            for (i, &c) in coeffs.iter().enumerate() {
                next[i + 1] = next[i + 1] + c;
                next[i] = next[i] - c * xs[k];
            }
            next[0] = next[0] + dd[k];
            coeffs = next;
        }
        Ok(Self::from_coeffs(coeffs))
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T: FloatScalar> From<Vec<T>> for Polynomial<T> {
    /// Coefficients highest degree first, like [`Polynomial::new`].
    fn from(mut highest_first: Vec<T>) -> Self {
        highest_first.reverse();
        Self::from_coeffs(highest_first)
    }
}

impl<T: FloatScalar> From<&[T]> for Polynomial<T> {
    fn from(highest_first: &[T]) -> Self {
        Self::new(highest_first)
    }
}

macro_rules! tuple_ty {
    ($_x:ident) => {
        T
    };
}

// Tuples of 2 to 11 coefficients, highest degree first:
// `(1.0, -3.0, 2.0)` is `x² − 3x + 2`.
macro_rules! impl_from_tuple {
    ($($name:ident),+) => {
        impl<T: FloatScalar> From<($(tuple_ty!($name),)+)> for Polynomial<T> {
            fn from(($($name,)+): ($(tuple_ty!($name),)+)) -> Self {
                Self::new(&[$($name),+])
            }
        }
    };
}

impl_from_tuple!(a, b);
impl_from_tuple!(a, b, c);
impl_from_tuple!(a, b, c, d);
impl_from_tuple!(a, b, c, d, e);
impl_from_tuple!(a, b, c, d, e, f);
impl_from_tuple!(a, b, c, d, e, f, g);
impl_from_tuple!(a, b, c, d, e, f, g, h);
impl_from_tuple!(a, b, c, d, e, f, g, h, i);
impl_from_tuple!(a, b, c, d, e, f, g, h, i, j);
impl_from_tuple!(a, b, c, d, e, f, g, h, i, j, k);
