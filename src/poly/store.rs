use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::traits::FloatScalar;

use super::PolyError;

/// Lazily computed real degree.
///
/// `usize::MAX` encodes the unknown state. Atomic so that a shared,
/// never-mutated polynomial stays `Sync`; the value is a pure function of the
/// coefficients, so relaxed ordering suffices.
#[derive(Debug)]
pub(crate) struct DegreeCache(AtomicUsize);

const UNKNOWN: usize = usize::MAX;

impl DegreeCache {
    pub(crate) fn unknown() -> Self {
        Self(AtomicUsize::new(UNKNOWN))
    }

    #[inline]
    fn get(&self) -> Option<usize> {
        match self.0.load(Ordering::Relaxed) {
            UNKNOWN => None,
            n => Some(n),
        }
    }

    #[inline]
    fn set(&self, degree: usize) {
        self.0.store(degree, Ordering::Relaxed);
    }

    #[inline]
    fn invalidate(&mut self) {
        *self.0.get_mut() = UNKNOWN;
    }
}

impl Clone for DegreeCache {
    fn clone(&self) -> Self {
        Self(AtomicUsize::new(self.0.load(Ordering::Relaxed)))
    }
}

/// Dense single-variable polynomial with floating-point coefficients.
///
/// Coefficients are stored lowest degree first: index `i` holds the
/// coefficient of `x^i`. There is always at least one coefficient; the empty
/// polynomial is `[0]`.
///
/// The [`degree`](Self::degree) is the *real* degree: the highest power whose
/// coefficient exceeds `T::epsilon()` in magnitude. It is computed on demand,
/// cached, and invalidated by every coefficient write.
///
/// A polynomial can be latched read-only with [`set_readonly`](Self::set_readonly).
/// After that every write fails with [`PolyError::ReadOnly`], and any
/// arithmetic result that touches it is read-only too. The compound
/// assignment operators (`+=`, `-=`, `*=`, `/=`) cannot return an error and
/// panic on a read-only left operand instead.
///
/// # Examples
///
/// ```
/// use polyroot::Polynomial;
///
/// // 3x² + 2x + 1, highest degree first
/// let mut p = Polynomial::new(&[3.0_f64, 2.0, 1.0]);
/// assert_eq!(p.get(0), 1.0);
/// assert_eq!(p.get(2), 3.0);
/// assert_eq!(p.get(9), 0.0); // lenient reads
///
/// p.set(2, 0.0).unwrap();
/// assert_eq!(p.degree(), 1);
/// assert!(p.set(3, 1.0).is_err()); // strict writes
/// ```
#[derive(Debug, Clone)]
pub struct Polynomial<T> {
    pub(crate) coeffs: Vec<T>,
    pub(crate) degree: DegreeCache,
    pub(crate) readonly: bool,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: FloatScalar> Polynomial<T> {
    /// Create a polynomial from coefficients written highest degree first.
    ///
    /// `[a, b, c]` is `a x² + b x + c`. An empty slice gives the zero
    /// polynomial.
    ///
    /// ```
    /// use polyroot::Polynomial;
    /// let p = Polynomial::new(&[1.0_f64, -3.0, 2.0]);
    /// assert_eq!(p.coeffs(), &[2.0, -3.0, 1.0]);
    /// ```
    pub fn new(highest_first: &[T]) -> Self {
        Self::from_coeffs(highest_first.iter().rev().copied().collect())
    }

    /// Create a polynomial from coefficients in ascending degree order.
    ///
    /// `[c, b, a]` is `a x² + b x + c`. An empty vector gives the zero
    /// polynomial.
    pub fn from_coeffs(mut coeffs: Vec<T>) -> Self {
        if coeffs.is_empty() {
            coeffs.push(T::zero());
        }
        Self {
            coeffs,
            degree: DegreeCache::unknown(),
            readonly: false,
        }
    }

    /// Ascending coefficients with an explicit read-only flag, for results of
    /// arithmetic.
    pub(crate) fn derived(coeffs: Vec<T>, readonly: bool) -> Self {
        let mut p = Self::from_coeffs(coeffs);
        p.readonly = readonly;
        p
    }

    /// The zero polynomial `[0]`.
    pub fn zero() -> Self {
        Self::from_coeffs(vec![T::zero()])
    }

    /// The constant polynomial `1`.
    pub fn one() -> Self {
        Self::from_coeffs(vec![T::one()])
    }
}

// ── Storage and the three index views ───────────────────────────────

impl<T: FloatScalar> Polynomial<T> {
    /// Number of stored coefficients (raw length, not the real degree).
    #[inline]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Always false: a polynomial holds at least one coefficient.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Coefficients in ascending degree order.
    #[inline]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Coefficients highest degree first, the order [`new`](Self::new) takes.
    pub fn to_highest_first(&self) -> Vec<T> {
        self.coeffs.iter().rev().copied().collect()
    }

    /// Coefficient at raw storage position `index`, or zero past the end.
    #[inline]
    pub fn get(&self, index: usize) -> T {
        self.coeffs.get(index).copied().unwrap_or_else(T::zero)
    }

    /// Overwrite the coefficient at raw storage position `index`.
    ///
    /// # Errors
    ///
    /// [`PolyError::ReadOnly`] if the polynomial is latched read-only,
    /// [`PolyError::IndexOutOfRange`] if `index >= len()`. The polynomial is
    /// unchanged on error.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), PolyError> {
        if self.readonly {
            return Err(PolyError::ReadOnly);
        }
        let len = self.coeffs.len();
        let slot = self
            .coeffs
            .get_mut(index)
            .ok_or(PolyError::IndexOutOfRange { index, len })?;
        *slot = value;
        self.degree.invalidate();
        Ok(())
    }

    /// Coefficient by term index. Terms are numbered like storage positions.
    #[inline]
    pub fn term(&self, index: usize) -> T {
        self.get(index)
    }

    /// Overwrite a coefficient by term index. Same rules as [`set`](Self::set).
    #[inline]
    pub fn set_term(&mut self, index: usize, value: T) -> Result<(), PolyError> {
        self.set(index, value)
    }

    /// Coefficient of `x^degree`, or zero if not stored.
    #[inline]
    pub fn coefficient_of_degree(&self, degree: usize) -> T {
        self.get(degree)
    }

    /// Overwrite the coefficient of `x^degree`. Same rules as [`set`](Self::set).
    #[inline]
    pub fn set_coefficient_of_degree(&mut self, degree: usize, value: T) -> Result<(), PolyError> {
        self.set(degree, value)
    }

    /// Whether writes are rejected.
    #[inline]
    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// Latch the polynomial read-only. There is no way back.
    pub fn set_readonly(&mut self) {
        self.readonly = true;
    }
}

// ── Degree classification ───────────────────────────────────────────

impl<T: FloatScalar> Polynomial<T> {
    /// Tolerance-aware degree: the highest index whose coefficient exceeds
    /// `epsilon` in magnitude, or `0`.
    ///
    /// The constant term is never discarded, so a zero polynomial still has
    /// degree 0.
    ///
    /// ```
    /// use polyroot::Polynomial;
    /// let p = Polynomial::from_coeffs(vec![1.0_f64, 2.0, 1e-12, 0.0]);
    /// assert_eq!(p.real_order(1e-10), 1);
    /// assert_eq!(p.real_order(0.0), 2);
    /// ```
    pub fn real_order(&self, epsilon: T) -> usize {
        let n = self.coeffs.len();
        let zeros = self.coeffs[1..]
            .iter()
            .rev()
            .take_while(|c| c.abs() <= epsilon)
            .count();
        n - 1 - zeros
    }

    /// Real degree at machine epsilon, cached until the next write.
    pub fn degree(&self) -> usize {
        if let Some(d) = self.degree.get() {
            return d;
        }
        let d = self.real_order(T::epsilon());
        self.degree.set(d);
        d
    }

    /// Coefficient of the real-degree term.
    #[inline]
    pub fn leading_coefficient(&self) -> T {
        self.coeffs[self.degree()]
    }

    /// Copy truncated to `degree() + 1` coefficients.
    ///
    /// Drops the near-zero leading "ghost" terms left behind by cancellation.
    pub fn trim(&self) -> Self {
        self.trim_with(T::epsilon())
    }

    /// Copy truncated to `real_order(epsilon) + 1` coefficients.
    pub fn trim_with(&self, epsilon: T) -> Self {
        let order = self.real_order(epsilon);
        Self::derived(self.coeffs[..=order].to_vec(), self.readonly)
    }

    /// Coefficient-wise comparison of the trimmed polynomials within `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        let a = &self.coeffs[..=self.real_order(epsilon)];
        let b = &other.coeffs[..=other.real_order(epsilon)];
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| (x - y).abs() <= epsilon)
    }
}

impl<T: FloatScalar> PartialEq for Polynomial<T> {
    /// Equal when the trimmed coefficients match within machine epsilon.
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, T::epsilon())
    }
}

impl<T: FloatScalar> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}
