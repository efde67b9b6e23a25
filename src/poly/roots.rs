use alloc::vec;
use alloc::vec::Vec;

use num_complex::Complex;

use crate::traits::FloatScalar;

use super::closed_form;
use super::{sort_dedup, PolyError, Polynomial, RootSettings};

/// Highest degree with a closed-form solver.
const MAX_ANALYTIC_DEGREE: usize = 5;

#[inline]
fn different_signs<T: FloatScalar>(x: T, y: T) -> bool {
    (x < T::zero()) != (y < T::zero())
}

// ── Analytic dispatch ───────────────────────────────────────────────

impl<T: FloatScalar> Polynomial<T> {
    /// Whether [`roots`](Self::roots) has a closed-form solver for this
    /// polynomial's real degree (at most five).
    pub fn can_solve_real_roots(&self, epsilon: T) -> bool {
        self.real_order(epsilon) <= MAX_ANALYTIC_DEGREE
    }

    /// Real roots from the closed-form solvers, ascending and duplicate-free.
    ///
    /// The solver is picked by [`real_order(epsilon)`](Self::real_order):
    ///
    /// - constant: the zero polynomial reports `0`, any other constant has
    ///   no roots
    /// - degree 1 to 5: [`closed_form`] on the trimmed coefficients
    /// - degree 6 and above: empty. Check
    ///   [`can_solve_real_roots`](Self::can_solve_real_roots) to tell this
    ///   apart from "no real roots", or use
    ///   [`complex_roots`](Self::complex_roots)
    ///
    /// ```
    /// use polyroot::Polynomial;
    /// let p = Polynomial::new(&[1.0_f64, -3.0, 2.0]);
    /// let r = p.roots(1e-10);
    /// assert!((r[0] - 1.0).abs() < 1e-12 && (r[1] - 2.0).abs() < 1e-12);
    /// ```
    pub fn roots(&self, epsilon: T) -> Vec<T> {
        let order = self.real_order(epsilon);
        let c = &self.coeffs[..=order];
        match order {
            0 => {
                if c[0].abs() <= epsilon {
                    vec![T::zero()]
                } else {
                    Vec::new()
                }
            }
            1 => closed_form::solve_linear(c, epsilon),
            2 => closed_form::solve_quadratic(c, epsilon),
            3 => closed_form::solve_cubic(c, epsilon),
            4 => closed_form::solve_quartic(c, epsilon),
            5 => closed_form::solve_quintic(c, epsilon),
            _ => {
                log::debug!("no closed-form solver for degree {}", order);
                Vec::new()
            }
        }
    }

    /// Analytic roots as complex numbers when the degree allows, otherwise
    /// the Durand-Kerner roots.
    ///
    /// # Errors
    ///
    /// [`PolyError::MaxIterations`] if Durand-Kerner does not converge.
    pub fn real_or_complex_roots(&self, epsilon: T) -> Result<Vec<Complex<T>>, PolyError> {
        if self.can_solve_real_roots(epsilon) {
            Ok(self
                .roots(epsilon)
                .into_iter()
                .map(|r| Complex::new(r, T::zero()))
                .collect())
        } else {
            self.complex_roots(epsilon).into_result()
        }
    }
}

// ── Interval isolation ──────────────────────────────────────────────

impl<T: FloatScalar> Polynomial<T> {
    /// Bisection on `[min, max]` with default accuracy.
    ///
    /// See [`bisection_with`](Self::bisection_with).
    pub fn bisection(&self, min: T, max: T, epsilon: T) -> Option<T> {
        self.bisection_with(min, max, &RootSettings::with_epsilon(epsilon))
    }

    /// Classic bisection for a root bracketed by `[min, max]`.
    ///
    /// Returns an endpoint directly if the polynomial is within
    /// `settings.epsilon` of zero there, and `None` if there is no sign
    /// change. Otherwise halves the bracket
    /// `ceil((ln(max − min) + ln(10)·accuracy) / ln 2)` times, stopping early
    /// at a midpoint within epsilon of zero.
    ///
    /// ```
    /// use polyroot::Polynomial;
    /// let p = Polynomial::new(&[1.0_f64, 0.0, -2.0]);
    /// let r = p.bisection(0.0, 2.0, 1e-12).unwrap();
    /// assert!((r - 2.0_f64.sqrt()).abs() < 1e-6);
    /// assert!(p.bisection(-1.0, 1.0, 1e-12).is_none());
    /// ```
    pub fn bisection_with(&self, min: T, max: T, settings: &RootSettings<T>) -> Option<T> {
        let eps = settings.epsilon;
        let (mut lo, mut hi) = if min <= max { (min, max) } else { (max, min) };
        let mut flo = self.eval(lo);
        let fhi = self.eval(hi);
        if flo.abs() <= eps {
            return Some(lo);
        }
        if fhi.abs() <= eps {
            return Some(hi);
        }
        if !different_signs(flo, fhi) {
            return None;
        }

        let half = T::one() / (T::one() + T::one());
        let digits = T::from_usize(settings.accuracy as usize);
        let steps = (((hi - lo).ln() + T::LN_10() * digits) / T::LN_2())
            .ceil()
            .to_usize()
            .unwrap_or(1)
            .max(1);

        for _ in 0..steps {
            let mid = (lo + hi) * half;
            let fmid = self.eval(mid);
            if fmid.abs() <= eps {
                return Some(mid);
            }
            if different_signs(flo, fmid) {
                hi = mid;
            } else {
                lo = mid;
                flo = fmid;
            }
        }
        Some((lo + hi) * half)
    }

    /// Real roots inside `[min, max]` with default accuracy.
    ///
    /// See [`roots_in_interval_with`](Self::roots_in_interval_with).
    pub fn roots_in_interval(&self, min: T, max: T, epsilon: T) -> Vec<T> {
        self.roots_in_interval_with(min, max, &RootSettings::with_epsilon(epsilon))
    }

    /// Real roots inside `[min, max]`, any degree.
    ///
    /// A polynomial is monotonic between consecutive critical points, so the
    /// derivative's roots (found recursively) split the interval into pieces
    /// that hold at most one root each, and each piece gets one
    /// [`bisection_with`](Self::bisection_with). Roots of even multiplicity
    /// are only found when they sit on a piece boundary within epsilon of
    /// zero.
    ///
    /// ```
    /// use polyroot::Polynomial;
    /// // (x + 1)(x − 1)(x − 2)(x − 3)
    /// let p = Polynomial::new(&[1.0_f64, -5.0, 5.0, 5.0, -6.0]);
    /// let roots = p.roots_in_interval(0.0, 2.5, 1e-12);
    /// assert_eq!(roots.len(), 2);
    /// assert!((roots[0] - 1.0).abs() < 1e-5);
    /// assert!((roots[1] - 2.0).abs() < 1e-5);
    /// ```
    pub fn roots_in_interval_with(&self, min: T, max: T, settings: &RootSettings<T>) -> Vec<T> {
        let eps = settings.epsilon;
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let trimmed = self.trim_with(eps);
        let order = trimmed.len() - 1;

        let mut roots = match order {
            0 => Vec::new(),
            1 => trimmed.bisection_with(min, max, settings).into_iter().collect(),
            _ => {
                let deriv = trimmed.derivative();
                let critical: Vec<T> = deriv
                    .roots_in_interval_with(min, max, settings)
                    .into_iter()
                    .filter(|&x| x > min && x < max)
                    .collect();
                log::trace!(
                    "degree {} on [{:?}, {:?}]: {} critical points",
                    order,
                    min,
                    max,
                    critical.len()
                );

                let mut points = Vec::with_capacity(critical.len() + 2);
                points.push(min);
                points.extend(critical);
                points.push(max);
                points
                    .windows(2)
                    .filter_map(|w| trimmed.bisection_with(w[0], w[1], settings))
                    .collect()
            }
        };
        sort_dedup(&mut roots, eps);
        roots
    }
}
