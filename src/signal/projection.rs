//! Normalized complex inner product
//!
//! `projection(a, b) = (1/N) · Σ conj(a_t) · b_t`
//!
//! Used as the inner product for Gram-Schmidt and amplitude measurement, and
//! as the objective of the frequency refiner (with `b` a candidate basis vector).

use num_complex::Complex64;

/// Project `b` onto `a`
///
/// Both sequences must have the same length; callers inside the crate always
/// pass vectors of the signal length. Returns zero for empty input.
///
/// # Example
///
/// ```
/// use naff::signal::{basis, projection};
///
/// let e = basis(0.25, 16);
/// let p = projection(&e, &e);
/// assert!((p.re - 1.0).abs() < 1e-12);
/// assert!(p.im.abs() < 1e-12);
/// ```
pub fn projection(a: &[Complex64], b: &[Complex64]) -> Complex64 {
    debug_assert_eq!(a.len(), b.len(), "projection operands differ in length");

    if a.is_empty() {
        return Complex64::new(0.0, 0.0);
    }

    let sum: Complex64 = a.iter().zip(b.iter()).map(|(x, y)| x.conj() * y).sum();
    sum / a.len() as f64
}

/// Total energy `Σ |x_t|²` of a sample sequence
pub fn energy(samples: &[Complex64]) -> f64 {
    samples.iter().map(|x| x.norm_sqr()).sum()
}
