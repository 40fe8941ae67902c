//! Spectral peak estimation and local frequency refinement
//!
//! Each extracted component goes through two stages:
//! 1. [`SpectralPeakEstimator`]: Gaussian window, FFT, dominant interior bin,
//!    log-parabolic sub-bin interpolation
//! 2. [`refine_frequency`]: Hanning window, bracket-then-Brent maximization of
//!    the projection magnitude around the coarse estimate

pub mod dump;
pub mod peak;
pub mod refine;

pub use dump::{SpectrumDump, SpectrumSink};
pub use peak::{estimate_peak, SpectralPeak, SpectralPeakEstimator};
pub use refine::refine_frequency;

/// Map any frequency onto `[0, 1)` cycles/sample
///
/// The basis `exp(-i·2π·f·t)` is 1-periodic in `f`, so wrapping never changes
/// the sampled vector.
pub fn wrap_frequency(frequency: f64) -> f64 {
    let wrapped = frequency.rem_euclid(1.0);
    // rem_euclid of a tiny negative value rounds up to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}
