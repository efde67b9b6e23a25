use alloc::vec::Vec;

use num_complex::Complex;

use crate::traits::FloatScalar;

use super::{PolyError, Polynomial, RootSettings};

/// Result of a Durand-Kerner run.
///
/// A run that hits the iteration limit still returns its last candidates,
/// with `converged` set to false.
#[derive(Debug, Clone)]
pub struct ComplexRoots<T> {
    /// Root candidates, one per degree. Unordered.
    pub roots: Vec<Complex<T>>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether every candidate moved by at most epsilon in the last step.
    pub converged: bool,
}

impl<T: FloatScalar> ComplexRoots<T> {
    /// The roots, or [`PolyError::MaxIterations`] if the run did not converge.
    pub fn into_result(self) -> Result<Vec<Complex<T>>, PolyError> {
        if self.converged {
            Ok(self.roots)
        } else {
            Err(PolyError::MaxIterations)
        }
    }

    /// Real parts of the roots whose imaginary part is within `tol` of zero,
    /// ascending.
    pub fn real(&self, tol: T) -> Vec<T> {
        let mut out: Vec<T> = self
            .roots
            .iter()
            .filter(|z| z.im.abs() <= tol)
            .map(|z| z.re)
            .collect();
        out.sort_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));
        out
    }
}

impl<T: FloatScalar> Polynomial<T> {
    /// All complex roots by Durand-Kerner iteration, default iteration budget.
    ///
    /// See [`complex_roots_with`](Self::complex_roots_with).
    ///
    /// ```
    /// use polyroot::Polynomial;
    /// // x² + 1
    /// let p = Polynomial::new(&[1.0_f64, 0.0, 1.0]);
    /// let r = p.complex_roots(1e-12);
    /// assert!(r.converged);
    /// for z in &r.roots {
    ///     assert!((z.re).abs() < 1e-9 && (z.im.abs() - 1.0).abs() < 1e-9);
    /// }
    /// ```
    pub fn complex_roots(&self, epsilon: T) -> ComplexRoots<T> {
        self.complex_roots_with(&RootSettings::with_epsilon(epsilon))
    }

    /// All complex roots by simultaneous Weierstrass iteration.
    ///
    /// The polynomial is normalized to a monic one, then `n` candidates
    /// (`n` = real degree at `settings.epsilon`) are seeded at successive
    /// powers of `0.4 + 0.9i`, which keeps them off the real axis and apart
    /// from each other. Each step applies
    ///
    /// `z_i ← z_i − P(z_i) / Π_{j≠i} (z_i − z_j)`
    ///
    /// to every candidate using the previous step's values. The run stops when
    /// no real or imaginary part moved by more than `settings.epsilon`, or
    /// after `settings.max_iter` steps. Constants have no roots.
    pub fn complex_roots_with(&self, settings: &RootSettings<T>) -> ComplexRoots<T> {
        let eps = settings.epsilon;
        let monic = self.normalize_with(eps);
        let n = monic.len() - 1;
        if n < 1 {
            return ComplexRoots {
                roots: Vec::new(),
                iterations: 0,
                converged: true,
            };
        }

        let one = Complex::new(T::one(), T::zero());
        let seed = Complex::new(T::from_f64(0.4), T::from_f64(0.9));
        let mut cur = Vec::with_capacity(n);
        let mut z = one;
        for _ in 0..n {
            cur.push(z);
            z = z * seed;
        }
        let mut next = cur.clone();

        for iter in 1..=settings.max_iter {
            for (i, slot) in next.iter_mut().enumerate() {
                let zi = cur[i];
                let denom = cur
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .fold(one, |acc, (_, &zj)| acc * (zi - zj));
                *slot = zi - monic.eval_complex(zi) / denom;
            }

            let done = cur
                .iter()
                .zip(&next)
                .all(|(a, b)| (a.re - b.re).abs() <= eps && (a.im - b.im).abs() <= eps);
            core::mem::swap(&mut cur, &mut next);

            if done {
                log::debug!("durand-kerner: degree {} converged after {} iterations", n, iter);
                return ComplexRoots {
                    roots: cur,
                    iterations: iter,
                    converged: true,
                };
            }
        }

        log::warn!(
            "durand-kerner: degree {} did not converge in {} iterations",
            n,
            settings.max_iter
        );
        ComplexRoots {
            roots: cur,
            iterations: settings.max_iter,
            converged: false,
        }
    }
}
