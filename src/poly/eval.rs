use num_complex::Complex;

use crate::traits::FloatScalar;

use super::{PolyError, Polynomial};

impl<T: FloatScalar> Polynomial<T> {
    /// Evaluate at `x` with Horner's method.
    ///
    /// Starts from the real-degree coefficient, so ghost terms above it are
    /// ignored. NaN in, NaN out; see [`evaluate`](Self::evaluate) for the
    /// checked variant.
    #[inline]
    pub fn eval(&self, x: T) -> T {
        self.coeffs[..=self.degree()]
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * x + c)
    }

    /// Evaluate at `x`, rejecting NaN arguments.
    ///
    /// # Errors
    ///
    /// [`PolyError::NotFinite`] if `x` is NaN.
    ///
    /// ```
    /// use polyroot::{Polynomial, PolyError};
    /// let p = Polynomial::new(&[2.0_f64, 1.0]);
    /// assert_eq!(p.evaluate(3.0), Ok(7.0));
    /// assert_eq!(p.evaluate(f64::NAN), Err(PolyError::NotFinite));
    /// ```
    pub fn evaluate(&self, x: T) -> Result<T, PolyError> {
        if x.is_nan() {
            return Err(PolyError::NotFinite);
        }
        Ok(self.eval(x))
    }

    /// Evaluate at a complex argument with Horner's method.
    ///
    /// ```
    /// use polyroot::{Complex, Polynomial};
    /// // x² + 1 vanishes at ±i
    /// let p = Polynomial::new(&[1.0_f64, 0.0, 1.0]);
    /// let y = p.eval_complex(Complex::new(0.0, 1.0));
    /// assert!(y.norm() < 1e-15);
    /// ```
    pub fn eval_complex(&self, z: Complex<T>) -> Complex<T> {
        self.coeffs[..=self.degree()]
            .iter()
            .rev()
            .fold(Complex::new(T::zero(), T::zero()), |acc, &c| {
                acc * z + Complex::new(c, T::zero())
            })
    }

    /// Value of the first derivative at `x`.
    pub fn differentiate(&self, x: T) -> T {
        self.derivative().eval(x)
    }

    /// Minimum and maximum of the polynomial on `[min_x, max_x]`.
    ///
    /// Samples the endpoints and every real critical point strictly inside the
    /// interval. The bounds may be given in either order. Call this on the polynomial whose shape you care about: a
    /// simplified or re-scaled copy has different critical points.
    ///
    /// ```
    /// use polyroot::Polynomial;
    /// // x² − 1 on [-2, 1]: minimum −1 at 0, maximum 3 at −2
    /// let p = Polynomial::new(&[1.0_f64, 0.0, -1.0]);
    /// let (lo, hi) = p.min_max(-2.0, 1.0);
    /// assert!((lo + 1.0).abs() < 1e-12);
    /// assert!((hi - 3.0).abs() < 1e-12);
    /// ```
    pub fn min_max(&self, min_x: T, max_x: T) -> (T, T) {
        let (min_x, max_x) = if min_x <= max_x { (min_x, max_x) } else { (max_x, min_x) };
        let deriv = self.derivative();
        let eps = T::epsilon();
        let critical = if deriv.can_solve_real_roots(eps) {
            deriv.roots(eps)
        } else {
            deriv.roots_in_interval(min_x, max_x, eps)
        };

        let mut lo = self.eval(min_x).min(self.eval(max_x));
        let mut hi = self.eval(min_x).max(self.eval(max_x));
        for x in critical.into_iter().filter(|&x| x > min_x && x < max_x) {
            let y = self.eval(x);
            lo = lo.min(y);
            hi = hi.max(y);
        }
        (lo, hi)
    }
}
