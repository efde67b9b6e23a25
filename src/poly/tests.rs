use super::*;
use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;
use num_complex::Complex;

const TOL: f64 = 1e-10;

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff {})",
        msg,
        a,
        b,
        (a - b).abs()
    );
}

fn assert_coeffs(p: &Polynomial<f64>, expected: &[f64], msg: &str) {
    assert_eq!(p.len(), expected.len(), "{}: {:?} vs {:?}", msg, p.coeffs(), expected);
    for (i, (&a, &b)) in p.coeffs().iter().zip(expected).enumerate() {
        assert_near(a, b, TOL, &alloc::format!("{} [{}]", msg, i));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Storage
// ═══════════════════════════════════════════════════════════════════

#[test]
fn new_reverses_to_ascending() {
    let p = Polynomial::new(&[1.0_f64, -3.0, 2.0]);
    assert_eq!(p.coeffs(), &[2.0, -3.0, 1.0]);
    assert_eq!(p.to_highest_first(), vec![1.0, -3.0, 2.0]);
}

#[test]
fn empty_is_zero() {
    let p = Polynomial::<f64>::new(&[]);
    assert_eq!(p.len(), 1);
    assert_eq!(p.coeffs(), &[0.0]);
    assert_eq!(p.degree(), 0);
    assert_eq!(Polynomial::<f64>::from_coeffs(Vec::new()), Polynomial::zero());
}

#[test]
fn reads_are_lenient() {
    let p = Polynomial::new(&[1.0_f64, 2.0]);
    assert_eq!(p.get(1), 1.0);
    assert_eq!(p.get(5), 0.0);
    assert_eq!(p.term(7), 0.0);
    assert_eq!(p.coefficient_of_degree(100), 0.0);
}

#[test]
fn index_views_agree() {
    let mut p = Polynomial::from_coeffs(vec![1.0_f64, 2.0, 3.0]);
    for i in 0..3 {
        assert_eq!(p.get(i), p.term(i));
        assert_eq!(p.get(i), p.coefficient_of_degree(i));
    }
    p.set_term(1, 5.0).unwrap();
    assert_eq!(p.coefficient_of_degree(1), 5.0);
    p.set_coefficient_of_degree(2, 7.0).unwrap();
    assert_eq!(p.get(2), 7.0);
}

#[test]
fn write_out_of_range() {
    let mut p = Polynomial::new(&[1.0_f64, 2.0]);
    let err = p.set(2, 1.0).unwrap_err();
    assert_eq!(err, PolyError::IndexOutOfRange { index: 2, len: 2 });
    assert_eq!(p.coeffs(), &[2.0, 1.0]);
}

#[test]
fn readonly_latch() {
    let mut p = Polynomial::new(&[1.0_f64, 2.0]);
    assert!(!p.is_readonly());
    p.set_readonly();
    assert!(p.is_readonly());
    assert_eq!(p.set(0, 9.0), Err(PolyError::ReadOnly));
    assert_eq!(p.set_term(0, 9.0), Err(PolyError::ReadOnly));
    assert_eq!(p.set_coefficient_of_degree(0, 9.0), Err(PolyError::ReadOnly));
    // Read-only wins over out-of-range
    assert_eq!(p.set(9, 9.0), Err(PolyError::ReadOnly));
    assert_eq!(p.coeffs(), &[2.0, 1.0]);
    // A clone keeps the latch
    assert!(p.clone().is_readonly());
}

#[test]
fn degree_cache_invalidated_on_write() {
    let mut p = Polynomial::new(&[1.0_f64, 2.0, 3.0]);
    assert_eq!(p.degree(), 2);
    p.set(2, 0.0).unwrap();
    assert_eq!(p.degree(), 1);
    p.set(1, 0.0).unwrap();
    assert_eq!(p.degree(), 0);
    p.set(2, 4.0).unwrap();
    assert_eq!(p.degree(), 2);
}

#[test]
fn clone_carries_degree() {
    let p = Polynomial::new(&[0.0_f64, 1.0, 1.0]);
    assert_eq!(p.degree(), 1);
    let mut q = p.clone();
    assert_eq!(q.degree(), 1);
    q.set(2, 1.0).unwrap();
    assert_eq!(q.degree(), 2);
    assert_eq!(p.degree(), 1);
}

// ═══════════════════════════════════════════════════════════════════
// Degree classification
// ═══════════════════════════════════════════════════════════════════

#[test]
fn real_order_ignores_ghost_terms() {
    let p = Polynomial::from_coeffs(vec![1.0_f64, 2.0, 1e-14, -1e-15]);
    assert_eq!(p.real_order(1e-12), 1);
    assert_eq!(p.real_order(0.0), 3);
    assert_eq!(p.len(), 4);
}

#[test]
fn real_order_keeps_constant_term() {
    let p = Polynomial::from_coeffs(vec![0.0_f64, 0.0, 0.0]);
    assert_eq!(p.real_order(1e-12), 0);
    let p = Polynomial::from_coeffs(vec![1e-20_f64, 0.0]);
    assert_eq!(p.real_order(1e-12), 0);
}

#[test]
fn trim_drops_leading_noise() {
    let p = Polynomial::from_coeffs(vec![1.0_f64, 2.0, 0.0, 0.0]);
    let t = p.trim();
    assert_eq!(t.coeffs(), &[1.0, 2.0]);
    assert_eq!(t.trim().coeffs(), t.coeffs());
}

#[test]
fn equality_trims_and_uses_tolerance() {
    let a = Polynomial::from_coeffs(vec![1.0_f64, 2.0]);
    let b = Polynomial::from_coeffs(vec![1.0_f64, 2.0, 0.0, 0.0]);
    assert_eq!(a, b);
    let c = Polynomial::from_coeffs(vec![1.0_f64, 2.0 + 1e-17]);
    assert_eq!(a, c);
    let d = Polynomial::from_coeffs(vec![1.0_f64, 2.0, 1.0]);
    assert_ne!(a, d);
    assert!(a.approx_eq(&Polynomial::from_coeffs(vec![1.001, 2.0]), 1e-2));
}

// ═══════════════════════════════════════════════════════════════════
// Arithmetic
// ═══════════════════════════════════════════════════════════════════

#[test]
fn add_sub_pad_shorter() {
    let p = Polynomial::new(&[1.0_f64, 0.0, 1.0]); // x² + 1
    let q = Polynomial::new(&[2.0_f64, 3.0]); // 2x + 3
    assert_coeffs(&(&p + &q), &[4.0, 2.0, 1.0], "p + q");
    assert_coeffs(&(&p - &q), &[-2.0, -2.0, 1.0], "p - q");
    assert_coeffs(&(&q - &p), &[2.0, 2.0, -1.0], "q - p");
    assert_coeffs(&(p.clone() + q.clone()), &[4.0, 2.0, 1.0], "owned");
}

#[test]
fn scalar_ops_touch_constant_only() {
    let p = Polynomial::new(&[1.0_f64, 1.0, 1.0]);
    assert_coeffs(&(&p + 2.0), &[3.0, 1.0, 1.0], "p + 2");
    assert_coeffs(&(&p - 1.0), &[0.0, 1.0, 1.0], "p - 1");
    assert_coeffs(&(2.0 + p.clone()), &[3.0, 1.0, 1.0], "2 + p");
    assert_coeffs(&(1.0 - p.clone()), &[0.0, -1.0, -1.0], "1 - p");
}

#[test]
fn scalar_mul_div() {
    let p = Polynomial::new(&[2.0_f64, 4.0, 6.0]);
    assert_coeffs(&(&p * 0.5), &[3.0, 2.0, 1.0], "p * 0.5");
    assert_coeffs(&(&p / 2.0), &[3.0, 2.0, 1.0], "p / 2");
    assert_coeffs(&(3.0 * &p), &[18.0, 12.0, 6.0], "3 * p");
}

#[test]
fn multiply_is_convolution() {
    let p = Polynomial::new(&[1.0_f64, -1.0]); // x − 1
    let q = Polynomial::new(&[1.0_f64, -2.0]); // x − 2
    let r = &p * &q;
    assert_eq!(r.len(), 3);
    assert_coeffs(&r, &[2.0, -3.0, 1.0], "(x−1)(x−2)");
    let s = Polynomial::new(&[1.0_f64, 0.0, 1.0]) * Polynomial::new(&[1.0, 0.0, -1.0]);
    assert_coeffs(&s, &[-1.0, 0.0, 0.0, 0.0, 1.0], "x⁴ − 1");
}

#[test]
fn negation() {
    let p = Polynomial::new(&[1.0_f64, -2.0]);
    assert_coeffs(&-p, &[2.0, -1.0], "neg");
}

#[test]
fn operands_untouched() {
    let p = Polynomial::new(&[1.0_f64, 2.0]);
    let q = Polynomial::new(&[3.0_f64, 4.0]);
    let _ = &p * &q;
    let _ = &p + &q;
    assert_eq!(p.coeffs(), &[2.0, 1.0]);
    assert_eq!(q.coeffs(), &[4.0, 3.0]);
}

#[test]
fn readonly_propagates_through_arithmetic() {
    let mut ro = Polynomial::new(&[1.0_f64, 2.0]);
    ro.set_readonly();
    let rw = Polynomial::new(&[3.0_f64, 4.0]);
    assert!((&ro + &rw).is_readonly());
    assert!((&rw - &ro).is_readonly());
    assert!((&rw * &ro).is_readonly());
    assert!((&ro * 2.0).is_readonly());
    assert!(ro.derivative().is_readonly());
    assert!(ro.integrate(0.0).is_readonly());
    assert!(ro.pow(2).unwrap().is_readonly());
    assert!(ro.trim().is_readonly());
    assert!(!(&rw + &rw).is_readonly());
}

#[test]
fn compound_assign() {
    let mut p = Polynomial::new(&[1.0_f64, 1.0]);
    p += &Polynomial::new(&[1.0, 0.0, 0.0]);
    assert_coeffs(&p, &[1.0, 1.0, 1.0], "+=");
    p *= 2.0;
    assert_coeffs(&p, &[2.0, 2.0, 2.0], "*=");
    p -= 2.0;
    assert_coeffs(&p, &[0.0, 2.0, 2.0], "-=");
    p /= 2.0;
    assert_coeffs(&p, &[0.0, 1.0, 1.0], "/=");
    p *= Polynomial::new(&[1.0, 0.0]);
    assert_coeffs(&p, &[0.0, 0.0, 1.0, 1.0], "*= poly");
}

#[test]
fn rebinding_readonly_does_not_panic() {
    let mut ro = Polynomial::new(&[1.0_f64, 1.0]);
    ro.set_readonly();
    let sum = &ro + 1.0;
    assert_coeffs(&sum, &[2.0, 1.0], "rebound");
    assert!(sum.is_readonly());
}

#[test]
#[should_panic(expected = "read-only polynomial: *=")]
fn compound_mul_on_readonly_panics() {
    let mut p = Polynomial::new(&[1.0_f64, 1.0]);
    p.set_readonly();
    p *= &Polynomial::new(&[1.0, 0.0]);
}

#[test]
#[should_panic(expected = "read-only polynomial")]
fn compound_assign_on_readonly_panics() {
    let mut p = Polynomial::new(&[1.0_f64, 1.0]);
    p.set_readonly();
    p += 1.0;
}

#[test]
fn derivative_basic() {
    let d = Polynomial::new(&[3.0_f64, 2.0, 1.0]).derivative();
    assert_eq!(d.to_highest_first(), vec![6.0, 2.0]);
}

#[test]
fn derivative_of_constant_is_zero() {
    let d = Polynomial::new(&[5.0_f64]).derivative();
    assert_eq!(d.coeffs(), &[0.0]);
    // Ghost terms do not survive differentiation
    let d = Polynomial::from_coeffs(vec![5.0_f64, 0.0, 0.0]).derivative();
    assert_eq!(d.coeffs(), &[0.0]);
}

#[test]
fn integrate_basic() {
    let p = Polynomial::new(&[1.0_f64]).integrate(0.0);
    assert_eq!(p.coeffs(), &[0.0, 1.0]);
    // ∫(3x² + 2x + 1) = x³ + x² + x + 4
    let p = Polynomial::new(&[3.0_f64, 2.0, 1.0]).integrate(4.0);
    assert_coeffs(&p, &[4.0, 1.0, 1.0, 1.0], "integral");
}

#[test]
fn pow_basic() {
    let p = Polynomial::new(&[1.0_f64, 1.0]);
    assert_eq!(p.pow(2).unwrap().to_highest_first(), vec![1.0, 2.0, 1.0]);
    assert_coeffs(&p.pow(3).unwrap(), &[1.0, 3.0, 3.0, 1.0], "(x+1)³");
    assert_eq!(p.pow(0).unwrap().coeffs(), &[1.0]);
    assert_eq!(p.pow(-2).unwrap_err(), PolyError::NegativeExponent);
}

#[test]
fn normalize_makes_monic() {
    let p = Polynomial::from_coeffs(vec![4.0_f64, -6.0, 2.0, 0.0]);
    let n = p.normalize();
    assert_coeffs(&n, &[2.0, -3.0, 1.0], "monic");
}

#[test]
fn normalize_zeroes_noise() {
    let p = Polynomial::from_coeffs(vec![1e-14_f64, 2.0, 4.0]);
    let n = p.normalize_with(1e-12);
    assert_eq!(n.coeffs(), &[0.0, 0.5, 1.0]);
    // Zero polynomial is left alone
    assert_eq!(Polynomial::<f64>::zero().normalize().coeffs(), &[0.0]);
}

// ═══════════════════════════════════════════════════════════════════
// Evaluation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn eval_horner() {
    let p = Polynomial::new(&[2.0_f64, -3.0, 0.0, 5.0]); // 2x³ − 3x² + 5
    for &x in &[-2.0, -0.5, 0.0, 1.0, 3.0] {
        let naive = 2.0 * x * x * x - 3.0 * x * x + 5.0;
        assert_near(p.eval(x), naive, 1e-12, "horner");
    }
}

#[test]
fn evaluate_rejects_nan() {
    let p = Polynomial::new(&[1.0_f64, 1.0]);
    assert_eq!(p.evaluate(f64::NAN), Err(PolyError::NotFinite));
    assert_eq!(p.evaluate(2.0), Ok(3.0));
}

#[test]
fn eval_complex_matches_real_on_axis() {
    let p = Polynomial::new(&[1.0_f64, -6.0, 11.0, -6.0]);
    let z = p.eval_complex(Complex::new(2.5, 0.0));
    assert_near(z.re, p.eval(2.5), 1e-12, "re");
    assert_near(z.im, 0.0, 1e-15, "im");
    // x² + 1 at 1 + i = 1 + 2i
    let q = Polynomial::new(&[1.0_f64, 0.0, 1.0]);
    let w = q.eval_complex(Complex::new(1.0, 1.0));
    assert_near(w.re, 1.0, 1e-15, "re");
    assert_near(w.im, 2.0, 1e-15, "im");
}

#[test]
fn differentiate_at_point() {
    let p = Polynomial::new(&[1.0_f64, 0.0, 0.0, 0.0]); // x³
    assert_near(p.differentiate(2.0), 12.0, 1e-12, "3x² at 2");
}

#[test]
fn min_max_interior_extremum() {
    // x³ − 3x on [-3, 3]: critical points ±1 inside, endpoints ±18
    let p = Polynomial::new(&[1.0_f64, 0.0, -3.0, 0.0]);
    let (lo, hi) = p.min_max(-3.0, 3.0);
    assert_near(lo, -18.0, 1e-12, "min");
    assert_near(hi, 18.0, 1e-12, "max");
    // On [-1.5, 1.5] the critical values ±2 dominate
    let (lo, hi) = p.min_max(-1.5, 1.5);
    assert_near(lo, -2.0, 1e-9, "min");
    assert_near(hi, 2.0, 1e-9, "max");
}

#[test]
fn min_max_monotonic() {
    let p = Polynomial::new(&[2.0_f64, 1.0]);
    assert_eq!(p.min_max(0.0, 1.0), (1.0, 3.0));
}

#[test]
fn min_max_reversed_bounds() {
    // (x − 1)(x − 2) on [0, 3]: minimum −0.25 at 1.5, maximum 2 at both ends
    let p = Polynomial::new(&[1.0_f64, -3.0, 2.0]);
    let (lo, hi) = p.min_max(3.0, 0.0);
    assert_near(lo, -0.25, 1e-12, "min");
    assert_near(hi, 2.0, 1e-12, "max");
    assert_eq!(p.min_max(3.0, 0.0), p.min_max(0.0, 3.0));
}

// ═══════════════════════════════════════════════════════════════════
// Analytic roots
// ═══════════════════════════════════════════════════════════════════

#[test]
fn roots_quadratic() {
    let r = Polynomial::new(&[1.0_f64, -3.0, 2.0]).roots(TOL);
    assert_eq!(r.len(), 2);
    assert_near(r[0], 1.0, 1e-12, "r0");
    assert_near(r[1], 2.0, 1e-12, "r1");
}

#[test]
fn roots_cubic() {
    let r = Polynomial::new(&[1.0_f64, -6.0, 11.0, -6.0]).roots(TOL);
    assert_eq!(r.len(), 3);
    for (got, want) in r.iter().zip([1.0, 2.0, 3.0]) {
        assert_near(*got, want, 1e-10, "cubic");
    }
}

#[test]
fn roots_small_cubic() {
    // (x − 0.001)(x − 0.002)(x − 0.003)
    let p = Polynomial::new(&[1.0_f64, -0.006, 1.1e-5, -6e-9]);
    let r = p.roots(TOL);
    assert_eq!(r.len(), 3);
    for (got, want) in r.iter().zip([0.001, 0.002, 0.003]) {
        assert_near(*got, want, 1e-15, "small cubic");
        assert!(p.eval(*got).abs() < 1e-20);
    }
}

#[test]
fn roots_large_quartic() {
    // (x − 100)(x − 200)(x − 300)(x − 400)
    let mut p = Polynomial::one();
    for r in [100.0_f64, 200.0, 300.0, 400.0] {
        p = p * Polynomial::new(&[1.0, -r]);
    }
    let r = p.roots(TOL);
    assert_eq!(r.len(), 4);
    for (got, want) in r.iter().zip([100.0, 200.0, 300.0, 400.0]) {
        assert_near(*got, want, 1e-9, "large quartic");
    }
}

#[test]
fn roots_ghost_leading_term() {
    // The 1e-14 x³ term is noise: solved as a quadratic
    let p = Polynomial::from_coeffs(vec![2.0_f64, -3.0, 1.0, 1e-14]);
    let r = p.roots(1e-12);
    assert_eq!(r.len(), 2);
}

#[test]
fn roots_constant() {
    assert!(Polynomial::new(&[3.0_f64]).roots(TOL).is_empty());
    assert_eq!(Polynomial::<f64>::zero().roots(TOL), vec![0.0]);
}

#[test]
fn roots_sextic_unsupported() {
    let p = Polynomial::<f64>::monomial(6) - 1.0;
    assert!(!p.can_solve_real_roots(TOL));
    assert!(p.roots(TOL).is_empty());
    assert!(Polynomial::<f64>::monomial(5).can_solve_real_roots(TOL));
}

#[test]
fn real_or_complex_dispatch() {
    // Solvable: analytic roots widened
    let p = Polynomial::new(&[1.0_f64, -3.0, 2.0]);
    let r = p.real_or_complex_roots(TOL).unwrap();
    assert_eq!(r.len(), 2);
    assert!(r.iter().all(|z| z.im == 0.0));

    // Sextic x⁶ − 1: Durand-Kerner gives all six roots of unity
    let q = Polynomial::<f64>::monomial(6) - 1.0;
    let r = q.real_or_complex_roots(TOL).unwrap();
    assert_eq!(r.len(), 6);
    for z in &r {
        assert_near(z.norm(), 1.0, 1e-8, "|z|");
        assert!(q.eval_complex(*z).norm() < 1e-8);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Durand-Kerner
// ═══════════════════════════════════════════════════════════════════

#[test]
fn durand_kerner_real_roots() {
    let p = Polynomial::new(&[1.0_f64, -3.0, 2.0]);
    let result = p.complex_roots(TOL);
    assert!(result.converged);
    assert_eq!(result.roots.len(), 2);
    let real = result.real(1e-8);
    assert_eq!(real.len(), 2);
    assert_near(real[0], 1.0, 1e-8, "r0");
    assert_near(real[1], 2.0, 1e-8, "r1");
}

#[test]
fn durand_kerner_complex_pair() {
    // x² + 2x + 5: −1 ± 2i
    let p = Polynomial::new(&[1.0_f64, 2.0, 5.0]);
    let r = p.complex_roots(TOL).into_result().unwrap();
    for z in &r {
        assert_near(z.re, -1.0, 1e-8, "re");
        assert_near(z.im.abs(), 2.0, 1e-8, "im");
    }
    assert!(r[0].im * r[1].im < 0.0);
}

#[test]
fn durand_kerner_scaled_input() {
    // 3x³ − 18x² + 33x − 18 = 3(x − 1)(x − 2)(x − 3)
    let p = Polynomial::new(&[3.0_f64, -18.0, 33.0, -18.0]);
    let result = p.complex_roots(TOL);
    assert!(result.converged);
    for z in &result.roots {
        assert!(p.eval_complex(*z).norm() < 1e-8);
    }
}

#[test]
fn durand_kerner_constant_has_no_roots() {
    let result = Polynomial::new(&[4.0_f64]).complex_roots(TOL);
    assert!(result.converged);
    assert!(result.roots.is_empty());
    assert_eq!(result.iterations, 0);
}

#[test]
fn durand_kerner_iteration_cap() {
    let p = Polynomial::new(&[1.0_f64, -6.0, 11.0, -6.0]);
    let settings = RootSettings {
        epsilon: 1e-14,
        max_iter: 2,
        accuracy: 6,
    };
    let result = p.complex_roots_with(&settings);
    assert!(!result.converged);
    assert_eq!(result.iterations, 2);
    assert_eq!(result.roots.len(), 3);
    assert_eq!(result.into_result().unwrap_err(), PolyError::MaxIterations);
}

// ═══════════════════════════════════════════════════════════════════
// Bisection and interval isolation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn bisection_finds_sqrt2() {
    let p = Polynomial::new(&[1.0_f64, 0.0, -2.0]);
    let r = p.bisection(0.0, 2.0, 1e-14).unwrap();
    assert_near(r, core::f64::consts::SQRT_2, 1e-6, "√2");
}

#[test]
fn bisection_endpoint_root() {
    let p = Polynomial::new(&[1.0_f64, -1.0]);
    assert_eq!(p.bisection(1.0, 3.0, 1e-12), Some(1.0));
    assert_eq!(p.bisection(-3.0, 1.0, 1e-12), Some(1.0));
}

#[test]
fn bisection_no_sign_change() {
    let p = Polynomial::new(&[1.0_f64, 0.0, 1.0]);
    assert_eq!(p.bisection(-1.0, 1.0, 1e-12), None);
}

#[test]
fn bisection_accuracy_setting() {
    let p = Polynomial::new(&[1.0_f64, 0.0, -2.0]);
    let settings = RootSettings {
        epsilon: 0.0,
        max_iter: 0,
        accuracy: 12,
    };
    let r = p.bisection_with(0.0, 2.0, &settings).unwrap();
    assert_near(r, core::f64::consts::SQRT_2, 1e-11, "√2 to 12 digits");
}

#[test]
fn roots_in_interval_quartic() {
    // (x + 1)(x − 1)(x − 2)(x − 3)
    let p = Polynomial::new(&[1.0_f64, -5.0, 5.0, 5.0, -6.0]);
    let r = p.roots_in_interval(-5.0, 5.0, 1e-12);
    assert_eq!(r.len(), 4);
    for (got, want) in r.iter().zip([-1.0, 1.0, 2.0, 3.0]) {
        assert_near(*got, want, 1e-5, "quartic");
    }
    let r = p.roots_in_interval(1.5, 2.5, 1e-12);
    assert_eq!(r.len(), 1);
    assert_near(r[0], 2.0, 1e-5, "only 2");
}

#[test]
fn roots_in_interval_high_degree() {
    // Seven roots at −3..=3: beyond the closed-form solvers
    let mut p = Polynomial::one();
    for k in -3..=3 {
        p = p * Polynomial::new(&[1.0_f64, -(k as f64)]);
    }
    assert!(!p.can_solve_real_roots(TOL));
    let r = p.roots_in_interval(-4.0, 4.0, 1e-12);
    assert_eq!(r.len(), 7);
    for (got, want) in r.iter().zip(-3..=3) {
        assert_near(*got, want as f64, 1e-5, "septic");
    }
}

#[test]
fn roots_in_interval_monotonic_and_constant() {
    let p = Polynomial::new(&[1.0_f64, 0.0, 0.0, -8.0]); // x³ − 8
    let r = p.roots_in_interval(0.0, 4.0, 1e-12);
    assert_eq!(r.len(), 1);
    assert_near(r[0], 2.0, 1e-5, "cube root");
    assert!(Polynomial::new(&[3.0_f64]).roots_in_interval(-1.0, 1.0, 1e-12).is_empty());
}

#[test]
fn roots_in_interval_reversed_bounds() {
    let p = Polynomial::new(&[1.0_f64, -3.0, 2.0]);
    let r = p.roots_in_interval(3.0, 0.0, 1e-12);
    assert_eq!(r.len(), 2);
}

// ═══════════════════════════════════════════════════════════════════
// Factories and conversions
// ═══════════════════════════════════════════════════════════════════

#[test]
fn monomial_and_term() {
    assert_eq!(Polynomial::<f64>::monomial(0).coeffs(), &[1.0]);
    assert_eq!(Polynomial::<f64>::monomial(2).coeffs(), &[0.0, 0.0, 1.0]);
    let t = Polynomial::from_term(4.0_f64, 1);
    assert_eq!(t.coeffs(), &[0.0, 4.0]);
    assert_eq!(t.degree(), 1);
}

#[test]
fn standard_basis() {
    let basis = Polynomial::<f64>::standard_basis(3);
    assert_eq!(basis.len(), 4);
    for (d, b) in basis.iter().enumerate() {
        assert_eq!(b.degree(), d);
        assert_eq!(b.leading_coefficient(), 1.0);
    }
}

#[test]
fn interpolate_cubic_through_points() {
    let xs = [-1.0_f64, 0.0, 2.0, 3.0];
    let f = |x: f64| x * x * x - 2.0 * x + 1.0;
    let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();
    let p = Polynomial::interpolate(&xs, &ys).unwrap();
    assert_coeffs(&p, &[1.0, -2.0, 0.0, 1.0], "interpolant");
    assert_near(p.eval(1.5), f(1.5), 1e-12, "between nodes");
}

#[test]
fn interpolate_unsorted_and_single() {
    let p = Polynomial::interpolate(&[2.0_f64, 0.0], &[5.0, 1.0]).unwrap();
    assert_coeffs(&p, &[1.0, 2.0], "line");
    let c = Polynomial::interpolate(&[7.0_f64], &[3.0]).unwrap();
    assert_coeffs(&c, &[3.0], "constant");
}

#[test]
fn interpolate_errors() {
    assert_eq!(
        Polynomial::<f64>::interpolate(&[], &[]).unwrap_err(),
        PolyError::TooFewPoints
    );
    assert_eq!(
        Polynomial::interpolate(&[0.0_f64, 1.0], &[1.0]).unwrap_err(),
        PolyError::LengthMismatch
    );
    assert_eq!(
        Polynomial::interpolate(&[0.0_f64, 1.0, 0.0], &[1.0, 2.0, 3.0]).unwrap_err(),
        PolyError::DuplicateNodes
    );
}

#[test]
fn tuple_conversions() {
    let p: Polynomial<f64> = (1.0, -3.0, 2.0).into();
    assert_eq!(p.coeffs(), &[2.0, -3.0, 1.0]);
    let q = Polynomial::from((1.0_f64, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0));
    assert_eq!(q.degree(), 10);
    assert_eq!(q.get(0), -1.0);
    let r: Polynomial<f32> = (2.0_f32, 1.0).into();
    assert_eq!(r.coeffs(), &[1.0, 2.0]);
}

#[test]
fn vec_and_slice_conversions() {
    let p: Polynomial<f64> = vec![1.0, 2.0].into();
    assert_eq!(p.coeffs(), &[2.0, 1.0]);
    let s: &[f64] = &[1.0, 2.0];
    assert_eq!(Polynomial::from(s), p);
}

// ═══════════════════════════════════════════════════════════════════
// Display and errors
// ═══════════════════════════════════════════════════════════════════

#[test]
fn display_forms() {
    assert_eq!(Polynomial::new(&[1.0_f64, -3.0, 2.0]).to_string(), "x² - 3x + 2");
    assert_eq!(Polynomial::new(&[-1.0_f64, 0.0]).to_string(), "-x");
    assert_eq!(Polynomial::<f64>::zero().to_string(), "0");
    assert_eq!(Polynomial::<f64>::monomial(12).to_string(), "x¹²");
    assert_eq!(Polynomial::new(&[0.5_f64, 0.25]).to_string(), "0.5x + 0.25");
    assert_eq!(
        alloc::format!("{:.2}", Polynomial::new(&[1.5_f64, -1.0 / 3.0])),
        "1.50x - 0.33"
    );
}

#[test]
fn error_display() {
    assert_eq!(PolyError::ReadOnly.to_string(), "polynomial is read-only");
    assert_eq!(
        PolyError::IndexOutOfRange { index: 3, len: 2 }.to_string(),
        "coefficient index 3 out of range for length 2"
    );
    assert_eq!(PolyError::MaxIterations.to_string(), "maximum iterations exceeded");
}

#[test]
fn settings_defaults() {
    let s64 = RootSettings::<f64>::default();
    assert_eq!(s64.epsilon, 1e-10);
    assert_eq!(s64.max_iter, DEFAULT_MAX_ITER);
    assert_eq!(s64.accuracy, 6);
    let s32 = RootSettings::<f32>::default();
    assert_eq!(s32.epsilon, 1e-5);
}

#[test]
fn f32_pipeline() {
    let p = Polynomial::new(&[1.0_f32, -3.0, 2.0]);
    let r = p.roots(1e-5);
    assert_eq!(r.len(), 2);
    assert!((r[0] - 1.0).abs() < 1e-5);
    let c = p.complex_roots(1e-5);
    assert!(c.converged);
    assert_eq!(c.real(1e-3).len(), 2);
}
