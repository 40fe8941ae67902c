//! Spectral-leakage tapers
//!
//! Two tapers are used at different stages:
//!
//! - **Gaussian** before the coarse FFT estimate. The transform of a Gaussian is
//!   Gaussian, so its log-magnitude is a parabola and three-bin log-parabolic
//!   interpolation lands close to the true peak.
//! - **Hanning** before local refinement. Its low sidelobes keep the projection
//!   objective unimodal around the coarse estimate.
//!
//! Both operate on a copy; the input is never modified.

use num_complex::Complex64;

use super::TWO_PI;

/// Taper selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowType {
    /// Gaussian taper with shape parameter `r`
    Gaussian(f64),
    /// Hanning (raised cosine) taper
    Hanning,
}

/// Gaussian window coefficients
///
/// `w_i = exp(-0.5 · (r · (i − h) / (N − 1))²)` for `i = 1..=N`, `h = (N − 1) / 2`.
/// The index is 1-based, so the taper peaks half a sample right of centre.
pub fn gaussian_window(n: usize, shape: f64) -> Vec<f64> {
    if n < 2 {
        return vec![1.0; n];
    }

    let span = (n - 1) as f64;
    let h = span / 2.0;
    (1..=n)
        .map(|i| {
            let x = shape * (i as f64 - h) / span;
            (-0.5 * x * x).exp()
        })
        .collect()
}

/// Hanning window coefficients
///
/// `w_i = 0.5 · (1 + cos(2π · (i − h − 1) / (N − 1)))` for `i = 1..=N`.
/// Symmetric, zero at both ends, one at the centre.
pub fn hanning_window(n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![1.0; n];
    }

    let span = (n - 1) as f64;
    let h = span / 2.0;
    (1..=n)
        .map(|i| 0.5 * (1.0 + (TWO_PI * (i as f64 - h - 1.0) / span).cos()))
        .collect()
}

/// Return a tapered copy of `samples`
pub fn apply_window(samples: &[Complex64], window: WindowType) -> Vec<Complex64> {
    let coefficients = match window {
        WindowType::Gaussian(shape) => gaussian_window(samples.len(), shape),
        WindowType::Hanning => hanning_window(samples.len()),
    };

    samples
        .iter()
        .zip(coefficients.iter())
        .map(|(&x, &w)| x * w)
        .collect()
}
