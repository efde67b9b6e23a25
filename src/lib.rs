//! # polyroot
//!
//! Generic dense polynomials over `f32`/`f64` with a root-finding engine,
//! no-std compatible (requires `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use polyroot::Polynomial;
//!
//! // x³ − 6x² + 11x − 6 = (x − 1)(x − 2)(x − 3)
//! let p = Polynomial::new(&[1.0_f64, -6.0, 11.0, -6.0]);
//! let roots = p.roots(1e-10);
//! assert_eq!(roots.len(), 3);
//! for (r, expected) in roots.iter().zip([1.0, 2.0, 3.0]) {
//!     assert!((r - expected).abs() < 1e-9);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`poly`]: [`Polynomial<T>`]: coefficient storage with a read-only latch
//!   and a cached tolerance-aware degree, arithmetic (`+ - * /`, derivative,
//!   integral, power, normalization, trimming), Horner evaluation for real
//!   and complex arguments, and root finding:
//!   - analytic real roots up to degree five ([`Polynomial::roots`])
//!   - Durand-Kerner complex roots ([`Polynomial::complex_roots`])
//!   - derivative-guided bisection inside an interval
//!     ([`Polynomial::roots_in_interval`])
//!
//! - [`poly::closed_form`]: the closed-form real-root solvers for linear
//!   through quintic coefficient slices.
//!
//! - [`traits`]: [`FloatScalar`], the element bound (`f32`, `f64`).
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm |
//! | `libm`  | no      | Pure-Rust software float fallback for no-std targets |
//!
//! Iterative solvers report progress through the [`log`] facade; install any
//! logger to see it.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod poly;
pub mod traits;

pub use poly::{ComplexRoots, PolyError, Polynomial, RootSettings};
pub use traits::{FloatScalar, Scalar};

pub use num_complex::Complex;
