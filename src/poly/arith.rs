use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::FloatScalar;

use super::{PolyError, Polynomial};

// ── Coefficient kernels ─────────────────────────────────────────────

fn zip_longest<T: FloatScalar>(a: &[T], b: &[T], f: impl Fn(T, T) -> T) -> Vec<T> {
    let n = a.len().max(b.len());
    let at = |s: &[T], i: usize| s.get(i).copied().unwrap_or_else(T::zero);
    (0..n).map(|i| f(at(a, i), at(b, i))).collect()
}

/// Discrete convolution: `r[i + j] += a[i] * b[j]`.
fn convolve<T: FloatScalar>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = vec![T::zero(); a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i + j] = out[i + j] + x * y;
        }
    }
    out
}

// ── Calculus, power, normalization ──────────────────────────────────

impl<T: FloatScalar> Polynomial<T> {
    /// First derivative.
    ///
    /// For real degree `d` the result has `d` coefficients,
    /// `r[i] = (i + 1) · c[i + 1]`. A constant differentiates to `[0]`.
    ///
    /// ```
    /// use polyroot::Polynomial;
    /// // 3x² + 2x + 1 → 6x + 2
    /// let d = Polynomial::new(&[3.0_f64, 2.0, 1.0]).derivative();
    /// assert_eq!(d.to_highest_first(), vec![6.0, 2.0]);
    /// ```
    pub fn derivative(&self) -> Self {
        let d = self.degree();
        if d == 0 {
            return Self::derived(vec![T::zero()], self.readonly);
        }
        let coeffs = (0..d)
            .map(|i| T::from_usize(i + 1) * self.coeffs[i + 1])
            .collect();
        Self::derived(coeffs, self.readonly)
    }

    /// Antiderivative with constant of integration `term0`.
    ///
    /// ```
    /// use polyroot::Polynomial;
    /// let x = Polynomial::new(&[1.0_f64]).integrate(0.0);
    /// assert_eq!(x.coeffs(), &[0.0, 1.0]);
    /// ```
    pub fn integrate(&self, term0: T) -> Self {
        let mut coeffs = Vec::with_capacity(self.coeffs.len() + 1);
        coeffs.push(term0);
        coeffs.extend(
            self.coeffs
                .iter()
                .enumerate()
                .map(|(i, &c)| c / T::from_usize(i + 1)),
        );
        Self::derived(coeffs, self.readonly)
    }

    /// Raise to a non-negative integer power by repeated convolution.
    ///
    /// `pow(0)` is the constant `1`.
    ///
    /// # Errors
    ///
    /// [`PolyError::NegativeExponent`] if `n < 0`.
    ///
    /// ```
    /// use polyroot::Polynomial;
    /// let p = Polynomial::new(&[1.0_f64, 1.0]).pow(2).unwrap();
    /// assert_eq!(p.to_highest_first(), vec![1.0, 2.0, 1.0]);
    /// ```
    pub fn pow(&self, n: i32) -> Result<Self, PolyError> {
        if n < 0 {
            return Err(PolyError::NegativeExponent);
        }
        let mut acc = vec![T::one()];
        for _ in 0..n {
            acc = convolve(&acc, &self.coeffs);
        }
        Ok(Self::derived(acc, self.readonly))
    }

    /// Scale so the leading coefficient is one, at machine epsilon.
    pub fn normalize(&self) -> Self {
        self.normalize_with(T::epsilon())
    }

    /// Trim at `epsilon`, then divide by the leading coefficient.
    ///
    /// Coefficients with magnitude at most `epsilon` are set to zero rather
    /// than divided, so noise is not amplified. The zero polynomial is
    /// returned unchanged.
    pub fn normalize_with(&self, epsilon: T) -> Self {
        let trimmed = self.trim_with(epsilon);
        let lead = trimmed.coeffs[trimmed.coeffs.len() - 1];
        if lead.abs() <= epsilon {
            return trimmed;
        }
        let coeffs = trimmed
            .coeffs
            .iter()
            .map(|&c| if c.abs() <= epsilon { T::zero() } else { c / lead })
            .collect();
        Self::derived(coeffs, self.readonly)
    }
}

// ── Polynomial ± polynomial ─────────────────────────────────────────

fn add_poly<T: FloatScalar>(a: &Polynomial<T>, b: &Polynomial<T>) -> Polynomial<T> {
    Polynomial::derived(zip_longest(&a.coeffs, &b.coeffs, |x, y| x + y), a.readonly || b.readonly)
}

fn sub_poly<T: FloatScalar>(a: &Polynomial<T>, b: &Polynomial<T>) -> Polynomial<T> {
    Polynomial::derived(zip_longest(&a.coeffs, &b.coeffs, |x, y| x - y), a.readonly || b.readonly)
}

fn mul_poly<T: FloatScalar>(a: &Polynomial<T>, b: &Polynomial<T>) -> Polynomial<T> {
    Polynomial::derived(convolve(&a.coeffs, &b.coeffs), a.readonly || b.readonly)
}

macro_rules! impl_poly_binop {
    ($Trait:ident, $method:ident, $kernel:ident) => {
        impl<T: FloatScalar> $Trait for Polynomial<T> {
            type Output = Polynomial<T>;
            fn $method(self, rhs: Polynomial<T>) -> Polynomial<T> {
                $kernel(&self, &rhs)
            }
        }

        impl<T: FloatScalar> $Trait<&Polynomial<T>> for Polynomial<T> {
            type Output = Polynomial<T>;
            fn $method(self, rhs: &Polynomial<T>) -> Polynomial<T> {
                $kernel(&self, rhs)
            }
        }

        impl<T: FloatScalar> $Trait<Polynomial<T>> for &Polynomial<T> {
            type Output = Polynomial<T>;
            fn $method(self, rhs: Polynomial<T>) -> Polynomial<T> {
                $kernel(self, &rhs)
            }
        }

        impl<T: FloatScalar> $Trait<&Polynomial<T>> for &Polynomial<T> {
            type Output = Polynomial<T>;
            fn $method(self, rhs: &Polynomial<T>) -> Polynomial<T> {
                $kernel(self, rhs)
            }
        }
    };
}

impl_poly_binop!(Add, add, add_poly);
impl_poly_binop!(Sub, sub, sub_poly);
impl_poly_binop!(Mul, mul, mul_poly);

// ── Polynomial ∘ scalar ─────────────────────────────────────────────

fn add_scalar<T: FloatScalar>(a: &Polynomial<T>, s: T) -> Polynomial<T> {
    let mut coeffs = a.coeffs.clone();
    coeffs[0] = coeffs[0] + s;
    Polynomial::derived(coeffs, a.readonly)
}

fn sub_scalar<T: FloatScalar>(a: &Polynomial<T>, s: T) -> Polynomial<T> {
    add_scalar(a, -s)
}

fn mul_scalar<T: FloatScalar>(a: &Polynomial<T>, s: T) -> Polynomial<T> {
    Polynomial::derived(a.coeffs.iter().map(|&c| c * s).collect(), a.readonly)
}

fn div_scalar<T: FloatScalar>(a: &Polynomial<T>, s: T) -> Polynomial<T> {
    Polynomial::derived(a.coeffs.iter().map(|&c| c / s).collect(), a.readonly)
}

macro_rules! impl_scalar_binop {
    ($Trait:ident, $method:ident, $kernel:ident) => {
        impl<T: FloatScalar> $Trait<T> for Polynomial<T> {
            type Output = Polynomial<T>;
            fn $method(self, rhs: T) -> Polynomial<T> {
                $kernel(&self, rhs)
            }
        }

        impl<T: FloatScalar> $Trait<T> for &Polynomial<T> {
            type Output = Polynomial<T>;
            fn $method(self, rhs: T) -> Polynomial<T> {
                $kernel(self, rhs)
            }
        }
    };
}

impl_scalar_binop!(Add, add, add_scalar);
impl_scalar_binop!(Sub, sub, sub_scalar);
impl_scalar_binop!(Mul, mul, mul_scalar);
impl_scalar_binop!(Div, div, div_scalar);

// Scalar on the left needs concrete float types.
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl Add<Polynomial<$t>> for $t {
                type Output = Polynomial<$t>;
                fn add(self, rhs: Polynomial<$t>) -> Polynomial<$t> {
                    add_scalar(&rhs, self)
                }
            }

            impl Sub<Polynomial<$t>> for $t {
                type Output = Polynomial<$t>;
                fn sub(self, rhs: Polynomial<$t>) -> Polynomial<$t> {
                    add_scalar(&-rhs, self)
                }
            }

            impl Mul<Polynomial<$t>> for $t {
                type Output = Polynomial<$t>;
                fn mul(self, rhs: Polynomial<$t>) -> Polynomial<$t> {
                    mul_scalar(&rhs, self)
                }
            }

            impl Mul<&Polynomial<$t>> for $t {
                type Output = Polynomial<$t>;
                fn mul(self, rhs: &Polynomial<$t>) -> Polynomial<$t> {
                    mul_scalar(rhs, self)
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64);

// ── Negation ────────────────────────────────────────────────────────

impl<T: FloatScalar> Neg for Polynomial<T> {
    type Output = Polynomial<T>;
    fn neg(self) -> Polynomial<T> {
        -&self
    }
}

impl<T: FloatScalar> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;
    fn neg(self) -> Polynomial<T> {
        Polynomial::derived(self.coeffs.iter().map(|&c| -c).collect(), self.readonly)
    }
}

// ── Compound assignment ─────────────────────────────────────────────
//
// These replace the coefficient vector of the left operand, so they obey the
// write-path rule: a read-only left operand panics. `a = &a + b` is the
// non-panicking form; its result is read-only if either side is.

macro_rules! impl_assign {
    ($Trait:ident, $method:ident, $Rhs:ty, $kernel:ident, $op:literal) => {
        impl<T: FloatScalar> $Trait<$Rhs> for Polynomial<T> {
            #[doc = concat!("In-place `", $op, "`.")]
            ///
            /// # Panics
            ///
            /// If `self` is read-only (see [`Polynomial::set_readonly`]).
            fn $method(&mut self, rhs: $Rhs) {
                assert!(!self.readonly, "read-only polynomial: {}", $op);
                *self = $kernel(self, rhs);
            }
        }
    };
}

fn add_owned<T: FloatScalar>(a: &Polynomial<T>, b: Polynomial<T>) -> Polynomial<T> {
    add_poly(a, &b)
}

fn sub_owned<T: FloatScalar>(a: &Polynomial<T>, b: Polynomial<T>) -> Polynomial<T> {
    sub_poly(a, &b)
}

fn mul_owned<T: FloatScalar>(a: &Polynomial<T>, b: Polynomial<T>) -> Polynomial<T> {
    mul_poly(a, &b)
}

impl_assign!(AddAssign, add_assign, Polynomial<T>, add_owned, "+=");
impl_assign!(AddAssign, add_assign, &Polynomial<T>, add_poly, "+=");
impl_assign!(SubAssign, sub_assign, Polynomial<T>, sub_owned, "-=");
impl_assign!(SubAssign, sub_assign, &Polynomial<T>, sub_poly, "-=");
impl_assign!(MulAssign, mul_assign, Polynomial<T>, mul_owned, "*=");
impl_assign!(MulAssign, mul_assign, &Polynomial<T>, mul_poly, "*=");
impl_assign!(AddAssign, add_assign, T, add_scalar, "+=");
impl_assign!(SubAssign, sub_assign, T, sub_scalar, "-=");
impl_assign!(MulAssign, mul_assign, T, mul_scalar, "*=");
impl_assign!(DivAssign, div_assign, T, div_scalar, "/=");
