//! Closed-form real-root solvers for degrees one through five.
//!
//! Every solver takes coefficients in ascending degree order
//! (`coeffs[i]` multiplies `x^i`) plus a tolerance, and returns the real roots
//! sorted ascending with duplicates merged. A leading coefficient within
//! `epsilon` of zero falls back to the next lower degree.
//!
//! Raw closed forms lose a few digits near multiple roots, so each root is
//! polished with a handful of Newton steps on the original coefficients
//! before de-duplication. Branch decisions are taken on the polynomial
//! rescaled so its roots are of order one, which makes them independent of
//! the magnitude of the roots. Roots closer than `sqrt(epsilon)` times that
//! scale are merged.
//!
//! # Example
//!
//! ```
//! use polyroot::poly::closed_form::solve_cubic;
//!
//! // (x − 1)(x − 2)(x − 3) = x³ − 6x² + 11x − 6
//! let roots = solve_cubic(&[-6.0_f64, 11.0, -6.0, 1.0], 1e-10);
//! assert_eq!(roots.len(), 3);
//! assert!((roots[2] - 3.0).abs() < 1e-12);
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::traits::FloatScalar;

use super::sort_dedup;

/// Maximum Newton steps spent polishing one root.
const POLISH_STEPS: usize = 4;

/// Upper bound on bisection halvings when isolating quintic roots.
const MAX_BISECTIONS: usize = 4096;

// ── Shared helpers ──────────────────────────────────────────────────

/// Horner evaluation of the value and first derivative.
#[inline]
fn horner<T: FloatScalar>(coeffs: &[T], x: T) -> (T, T) {
    let mut p = T::zero();
    let mut dp = T::zero();
    for &c in coeffs.iter().rev() {
        dp = dp * x + p;
        p = p * x + c;
    }
    (p, dp)
}

/// `|x|` with the sign of `sign`.
#[inline]
fn with_sign<T: FloatScalar>(x: T, sign: T) -> T {
    if sign.is_sign_negative() {
        -x.abs()
    } else {
        x.abs()
    }
}

/// Newton steps that are only accepted while the residual shrinks.
fn polish<T: FloatScalar>(coeffs: &[T], mut x: T) -> T {
    let (mut fx, mut dfx) = horner(coeffs, x);
    for _ in 0..POLISH_STEPS {
        if fx == T::zero() || dfx == T::zero() {
            break;
        }
        let candidate = x - fx / dfx;
        let (fc, dfc) = horner(coeffs, candidate);
        if !(fc.abs() < fx.abs()) {
            break;
        }
        x = candidate;
        fx = fc;
        dfx = dfc;
    }
    x
}

/// Polish every root on the original coefficients, then sort and merge
/// roots closer than `sqrt(epsilon)` relative to the root scale.
fn finish<T: FloatScalar>(coeffs: &[T], roots: Vec<T>, epsilon: T, scale: T) -> Vec<T> {
    let mut roots: Vec<T> = roots.into_iter().map(|r| polish(coeffs, r)).collect();
    sort_dedup(&mut roots, epsilon.sqrt().max(epsilon) * scale);
    roots
}

#[inline]
fn negligible<T: FloatScalar>(c: T, epsilon: T) -> bool {
    c.abs() <= epsilon
}

/// Monic coefficients of `p(s·y) / (a_n sⁿ)` together with the root scale
/// `s = max_k |a_{n−k} / a_n|^(1/k)`.
///
/// Every root of the rescaled polynomial satisfies `|y| <= 2`, so the
/// discriminant tests below compare quantities of order one against
/// `epsilon` whatever the magnitude of the original roots. `None` when all
/// lower coefficients vanish, i.e. `p = a_n xⁿ` whose only root is zero.
fn rescale<T: FloatScalar>(coeffs: &[T]) -> Option<(Vec<T>, T)> {
    let n = coeffs.len() - 1;
    let lead = coeffs[n];
    let scale = (1..=n).fold(T::zero(), |s, k| {
        s.max((coeffs[n - k] / lead).abs().powf(T::one() / T::from_usize(k)))
    });
    if scale == T::zero() {
        return None;
    }
    let mut monic = vec![T::one(); n + 1];
    let mut pow = T::one();
    for i in (0..n).rev() {
        pow = pow * scale;
        monic[i] = coeffs[i] / lead / pow;
    }
    Some((monic, scale))
}

// ── Solvers ─────────────────────────────────────────────────────────
//
// Each solver reads the first `degree + 1` coefficients. A shorter slice is
// a lower-degree polynomial and goes to the matching solver.

/// Root of `c0 + c1 x`.
///
/// A constant (`|c1| <= epsilon`, or fewer than two coefficients) has no
/// isolated root and returns nothing.
pub fn solve_linear<T: FloatScalar>(coeffs: &[T], epsilon: T) -> Vec<T> {
    if coeffs.len() < 2 || negligible(coeffs[1], epsilon) {
        return Vec::new();
    }
    vec![-coeffs[0] / coeffs[1]]
}

/// Real roots of `c0 + c1 x + c2 x²`.
///
/// Uses the cancellation-free pair `q / a`, `c / q` with
/// `q = −½(b + sign(b)·√disc)`. The discriminant of the rescaled monic
/// quadratic is compared against `epsilon`: within it the quadratic has a
/// double root.
pub fn solve_quadratic<T: FloatScalar>(coeffs: &[T], epsilon: T) -> Vec<T> {
    if coeffs.len() < 3 || negligible(coeffs[2], epsilon) {
        return solve_linear(&coeffs[..coeffs.len().min(2)], epsilon);
    }
    let coeffs = &coeffs[..3];
    let Some((m, s)) = rescale(coeffs) else {
        return vec![T::zero()];
    };
    let b = m[1];
    let c = m[0];
    let four = T::from_usize(4);
    let half = T::one() / (T::one() + T::one());

    let disc = b * b - four * c;
    let ys = if disc < -epsilon {
        Vec::new()
    } else if disc <= epsilon {
        vec![-half * b]
    } else {
        let q = -half * (b + with_sign(disc.sqrt(), b));
        vec![q, c / q]
    };
    finish(coeffs, ys.into_iter().map(|y| y * s).collect(), epsilon, s)
}

/// Real roots of `c0 + c1 x + c2 x² + c3 x³`.
///
/// Blinn's formulation: the rescaled cubic is written
/// `y³ + 3c2 y² + 3c1 y + c0`. A clearly positive discriminant gives three
/// real roots in trigonometric form. Otherwise one simple real root (Cardano
/// with real cube roots, or the simple root of the double-root form) is
/// polished and deflated out, and the remaining quadratic settles whether
/// the other two roots are real, double or complex.
pub fn solve_cubic<T: FloatScalar>(coeffs: &[T], epsilon: T) -> Vec<T> {
    if coeffs.len() < 4 || negligible(coeffs[3], epsilon) {
        return solve_quadratic(&coeffs[..coeffs.len().min(3)], epsilon);
    }
    let coeffs = &coeffs[..4];
    let Some((m, s)) = rescale(coeffs) else {
        return vec![T::zero()];
    };
    let one = T::one();
    let two = one + one;
    let three = two + one;
    let third = one / three;
    let half = one / two;

    let c2 = m[2] * third;
    let c1 = m[1] * third;
    let c0 = m[0];

    // Blinn's "Delta" and discriminant
    let d0 = (-c2).mul_add(c2, c1);
    let d1 = (-c1).mul_add(c2, c0);
    let d2 = c2 * c0 - c1 * c1;
    let d = two * two * d0 * d2 - d1 * d1;
    let de = (-two * c2).mul_add(d0, d1);

    let ys = if d > epsilon {
        let th = d.sqrt().atan2(-de) * third;
        let (th_sin, th_cos) = th.sin_cos();
        let ss3 = th_sin * three.sqrt();
        let t = two * (-d0).sqrt();
        vec![
            t.mul_add(th_cos, -c2),
            t.mul_add(half * (-th_cos + ss3), -c2),
            t.mul_add(half * (-th_cos - ss3), -c2),
        ]
    } else {
        // One real root or a near-double root: take the simple root, then
        // deflate and let the quadratic decide the rest.
        let y1 = if d < -epsilon {
            let sq = (-d / (two * two)).sqrt();
            let r = -half * de;
            (r + sq).cbrt() + (r - sq).cbrt() - c2
        } else {
            let t1 = with_sign((-d0).max(T::zero()).sqrt(), de);
            -two * t1 - c2
        };
        let y1 = polish(&m, y1);
        let b1 = m[2] + y1;
        let b0 = b1.mul_add(y1, m[1]);
        let mut ys = vec![y1];
        ys.extend(solve_quadratic(&[b0, b1, one], epsilon));
        ys
    };
    finish(coeffs, ys.into_iter().map(|y| y * s).collect(), epsilon, s)
}

/// Real roots of `c0 + c1 x + c2 x² + c3 x³ + c4 x⁴`.
///
/// Ferrari's method. The rescaled monic quartic is depressed to
/// `z⁴ + p z² + q z + r` with `y = z − a/4`. When `|q| <= epsilon` it is a
/// quadratic in `z²`. Otherwise the largest root `m` of the resolvent cubic
/// `8m³ + 8p m² + (2p² − 8r) m − q²` splits it into
/// `z² ∓ s z + (p/2 + m ± q/(2s))` with `s = √(2m)`.
pub fn solve_quartic<T: FloatScalar>(coeffs: &[T], epsilon: T) -> Vec<T> {
    if coeffs.len() < 5 || negligible(coeffs[4], epsilon) {
        return solve_cubic(&coeffs[..coeffs.len().min(4)], epsilon);
    }
    let coeffs = &coeffs[..5];
    let Some((mc, scale)) = rescale(coeffs) else {
        return vec![T::zero()];
    };
    let one = T::one();
    let two = one + one;
    let three = two + one;
    let four = two + two;
    let eight = four + four;
    let half = one / two;

    let a = mc[3];
    let b = mc[2];
    let c = mc[1];
    let d = mc[0];

    let a2 = a * a;
    let p = b - three * a2 / eight;
    let q = c - a * b * half + a2 * a / eight;
    let r = d - a * c / four + a2 * b / T::from_usize(16) - three * a2 * a2 / T::from_usize(256);
    let shift = -a / four;

    let mut zs = Vec::with_capacity(4);
    if q.abs() <= epsilon {
        for w in solve_quadratic(&[r, p, one], epsilon) {
            if w > epsilon {
                let s = w.sqrt();
                zs.push(s);
                zs.push(-s);
            } else if w >= -epsilon {
                zs.push(T::zero());
            }
        }
    } else {
        let resolvent = [-q * q, two * p * p - eight * r, eight * p, eight];
        let m = solve_cubic(&resolvent, epsilon)
            .into_iter()
            .fold(T::neg_infinity(), T::max);
        if m > T::zero() {
            let s = (two * m).sqrt();
            let k = q / (two * s);
            zs.extend(solve_quadratic(&[half * p + m + k, -s, one], epsilon));
            zs.extend(solve_quadratic(&[half * p + m - k, s, one], epsilon));
        }
    }

    let roots = zs.into_iter().map(|z| (z + shift) * scale).collect();
    finish(coeffs, roots, epsilon, scale)
}

/// Real roots of `c0 + c1 x + … + c5 x⁵`.
///
/// Quintics have no general closed form. On the rescaled polynomial the
/// critical points (roots of the quartic derivative) split the Cauchy bound
/// interval `[−B, B]` into monotonic pieces; each piece with a sign change
/// is bisected to machine precision. Critical points where the quintic
/// vanishes are reported directly, which catches even-multiplicity roots.
pub fn solve_quintic<T: FloatScalar>(coeffs: &[T], epsilon: T) -> Vec<T> {
    if coeffs.len() < 6 || negligible(coeffs[5], epsilon) {
        return solve_quartic(&coeffs[..coeffs.len().min(5)], epsilon);
    }
    let coeffs = &coeffs[..6];
    let Some((m, scale)) = rescale(coeffs) else {
        return vec![T::zero()];
    };
    let deriv: Vec<T> = m[1..]
        .iter()
        .enumerate()
        .map(|(i, &c)| T::from_usize(i + 1) * c)
        .collect();

    let bound = cauchy_bound(&m);
    let mut points = vec![-bound];
    points.extend(
        solve_quartic(&deriv, epsilon)
            .into_iter()
            .filter(|&x| x > -bound && x < bound),
    );
    points.push(bound);

    let mut ys = Vec::new();
    for w in points.windows(2) {
        let (lo, hi) = (w[0], w[1]);
        let (flo, _) = horner(&m, lo);
        let (fhi, _) = horner(&m, hi);
        if flo.abs() <= epsilon {
            ys.push(lo);
        } else if fhi.abs() <= epsilon {
            ys.push(hi);
        } else if (flo < T::zero()) != (fhi < T::zero()) {
            ys.push(bisect(&m, lo, hi, flo));
        }
    }
    finish(coeffs, ys.into_iter().map(|y| y * scale).collect(), epsilon, scale)
}

/// Cauchy's bound: every root satisfies `|x| <= 1 + max |c_i / c_n|`.
fn cauchy_bound<T: FloatScalar>(coeffs: &[T]) -> T {
    let n = coeffs.len() - 1;
    let lead = coeffs[n].abs();
    let max_ratio = coeffs[..n]
        .iter()
        .fold(T::zero(), |m, c| m.max(c.abs() / lead));
    T::one() + max_ratio
}

/// Bisect a bracket `[lo, hi]` with a sign change until it stops shrinking.
fn bisect<T: FloatScalar>(coeffs: &[T], mut lo: T, mut hi: T, mut flo: T) -> T {
    let half = T::one() / (T::one() + T::one());
    for _ in 0..MAX_BISECTIONS {
        let mid = (lo + hi) * half;
        if mid <= lo || mid >= hi {
            break;
        }
        let (fmid, _) = horner(coeffs, mid);
        if fmid == T::zero() {
            return mid;
        }
        if (flo < T::zero()) != (fmid < T::zero()) {
            hi = mid;
        } else {
            lo = mid;
            flo = fmid;
        }
    }
    (lo + hi) * half
}
