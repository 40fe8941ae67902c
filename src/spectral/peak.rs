//! Coarse frequency estimation from the windowed FFT
//!
//! # Algorithm
//!
//! 1. Taper a copy of the signal with a Gaussian window
//! 2. Transform it (positive-exponent DFT, so `exp(-i·2π·f·t)` lands on bin `f·N`)
//! 3. Pick the largest magnitude among interior bins `1..N-1`
//! 4. Interpolate the sub-bin offset from the log-magnitudes of the peak and
//!    its two neighbours:
//!    `A = (ln m₊ − ln m₋) / (2 · (2 ln m₀ − ln m₊ − ln m₋))`
//! 5. `frequency = (bin + A) / N`
//!
//! The boundary bins are excluded so both neighbours always exist.
//!
//! # Example
//!
//! ```
//! use naff::signal::basis;
//! use naff::spectral::estimate_peak;
//!
//! let signal = basis(0.3, 64);
//! let peak = estimate_peak(&signal, 8.0, None)?.expect("non-silent signal");
//! assert!((peak.frequency - 0.3).abs() < 1e-3);
//! # Ok::<(), naff::NaffError>(())
//! ```

use std::sync::Arc;

use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};

use super::dump::SpectrumSink;
use crate::error::{NaffError, Result};
use crate::signal::window::{apply_window, WindowType};

/// Coarse spectral peak
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralPeak {
    /// Interpolated frequency in cycles/sample
    pub frequency: f64,

    /// Index of the dominant interior bin
    pub bin: usize,

    /// Magnitude of the dominant bin
    pub magnitude: f64,

    /// Log-parabolic sub-bin offset applied to `bin`
    pub offset: f64,
}

/// Reusable estimator for one signal length
///
/// Holds the FFT plan so repeated calls across decomposition iterations only
/// redo the window product and transform.
pub struct SpectralPeakEstimator {
    n: usize,
    window: WindowType,
    fft: Arc<dyn Fft<f64>>,
}

impl std::fmt::Debug for SpectralPeakEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpectralPeakEstimator")
            .field("n", &self.n)
            .field("window", &self.window)
            .finish()
    }
}

impl SpectralPeakEstimator {
    /// Plan an estimator for signals of length `n`
    ///
    /// # Errors
    ///
    /// Returns `NaffError::InvalidInput` if `n < 3` (no interior bin with two
    /// neighbours) or the Gaussian shape is not positive.
    pub fn new(n: usize, gaussian_shape: f64) -> Result<Self> {
        if n < 3 {
            return Err(NaffError::InvalidInput(format!(
                "Spectral peak estimation needs at least 3 samples, got {}",
                n
            )));
        }

        if !(gaussian_shape.is_finite() && gaussian_shape > 0.0) {
            return Err(NaffError::InvalidInput(format!(
                "Gaussian shape must be finite and > 0, got {}",
                gaussian_shape
            )));
        }

        // rustfft's inverse direction is the unnormalized exp(+i·2π·k·t/N) sum
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_inverse(n);

        Ok(Self {
            n,
            window: WindowType::Gaussian(gaussian_shape),
            fft,
        })
    }

    /// Estimate the dominant frequency of `signal`
    ///
    /// Returns `Ok(None)` when the dominant interior bin has zero magnitude.
    /// If `sink` is given, the full magnitude spectrum is recorded first; a
    /// failing sink is logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns `NaffError::InvalidInput` if `signal` does not match the planned length.
    pub fn estimate(
        &self,
        signal: &[Complex64],
        sink: Option<&mut (dyn SpectrumSink + '_)>,
    ) -> Result<Option<SpectralPeak>> {
        if signal.len() != self.n {
            return Err(NaffError::InvalidInput(format!(
                "Estimator planned for {} samples, got {}",
                self.n,
                signal.len()
            )));
        }

        let mut buffer = apply_window(signal, self.window);
        self.fft.process(&mut buffer);

        let magnitudes: Vec<f64> = buffer.iter().map(|x| x.norm()).collect();

        if let Some(sink) = sink {
            let spectrum: Vec<(f64, f64)> = magnitudes
                .iter()
                .enumerate()
                .map(|(k, &m)| (k as f64 / self.n as f64, m))
                .collect();
            if let Err(e) = sink.record(&spectrum) {
                log::warn!("Failed to write debug spectrum: {}", e);
            }
        }

        // First maximum wins on ties
        let mut bin = 1;
        for k in 2..self.n - 1 {
            if magnitudes[k] > magnitudes[bin] {
                bin = k;
            }
        }
        let magnitude = magnitudes[bin];

        if magnitude == 0.0 {
            log::debug!("No usable spectral peak: dominant interior bin is zero");
            return Ok(None);
        }

        let offset = log_parabolic_offset(magnitudes[bin - 1], magnitude, magnitudes[bin + 1]);
        let frequency = (bin as f64 + offset) / self.n as f64;

        log::debug!(
            "Spectral peak: bin={}, magnitude={:.6e}, offset={:+.6}, frequency={:.10}",
            bin,
            magnitude,
            offset,
            frequency
        );

        Ok(Some(SpectralPeak {
            frequency,
            bin,
            magnitude,
            offset,
        }))
    }
}

/// One-shot estimate for a single signal
///
/// Plans a fresh [`SpectralPeakEstimator`]; prefer the struct when estimating
/// repeatedly on signals of the same length.
pub fn estimate_peak(
    signal: &[Complex64],
    gaussian_shape: f64,
    sink: Option<&mut (dyn SpectrumSink + '_)>,
) -> Result<Option<SpectralPeak>> {
    SpectralPeakEstimator::new(signal.len(), gaussian_shape)?.estimate(signal, sink)
}

/// Sub-bin offset of a peak from the log-magnitudes of three adjacent bins
///
/// Exact for a Gaussian-shaped peak. Falls back to 0 (the bin centre) when a
/// neighbour is zero or the three points do not form a finite parabola.
fn log_parabolic_offset(left: f64, centre: f64, right: f64) -> f64 {
    let (lm, l0, lp) = (left.ln(), centre.ln(), right.ln());
    let offset = (lp - lm) / (2.0 * (2.0 * l0 - lp - lm));

    if offset.is_finite() {
        offset
    } else {
        log::debug!(
            "Log-parabolic interpolation undefined for ({:e}, {:e}, {:e}), using bin centre",
            left,
            centre,
            right
        );
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::basis;
    use crate::spectral::SpectrumDump;

    #[test]
    fn test_log_parabolic_offset_exact_for_gaussian() {
        // Samples of exp(-(k - 0.3)^2 / 2) at k = -1, 0, 1
        let g = |k: f64| (-(k - 0.3f64).powi(2) / 2.0).exp();
        let offset = log_parabolic_offset(g(-1.0), g(0.0), g(1.0));
        assert!((offset - 0.3).abs() < 1e-12, "offset = {}", offset);
    }

    #[test]
    fn test_log_parabolic_offset_symmetric() {
        assert_eq!(log_parabolic_offset(0.5, 1.0, 0.5), 0.0);
    }

    #[test]
    fn test_log_parabolic_offset_zero_neighbour() {
        assert_eq!(log_parabolic_offset(0.0, 1.0, 0.5), 0.0);
    }

    #[test]
    fn test_estimate_single_tone() {
        let n = 128;
        let f = 0.2137;
        let signal = basis(f, n);
        let peak = estimate_peak(&signal, 8.0, None).unwrap().unwrap();
        assert_eq!(peak.bin, (f * n as f64).round() as usize);
        assert!(
            (peak.frequency - f).abs() < 0.05 / n as f64,
            "coarse estimate {} too far from {}",
            peak.frequency,
            f
        );
    }

    #[test]
    fn test_estimate_ignores_boundary_bins() {
        // DC tone: bin 0 dominates but is excluded
        let n = 32;
        let signal = vec![Complex64::new(1.0, 0.0); n];
        let peak = estimate_peak(&signal, 8.0, None).unwrap().unwrap();
        assert!(peak.bin >= 1 && peak.bin <= n - 2);
    }

    #[test]
    fn test_estimate_silent_signal() {
        let signal = vec![Complex64::new(0.0, 0.0); 16];
        assert!(estimate_peak(&signal, 8.0, None).unwrap().is_none());
    }

    #[test]
    fn test_estimate_writes_spectrum() {
        let n = 16;
        let signal = basis(0.25, n);
        let mut dump = SpectrumDump::new(Vec::new());
        let peak = estimate_peak(&signal, 8.0, Some(&mut dump)).unwrap();
        assert!(peak.is_some());

        let text = String::from_utf8(dump.into_inner()).unwrap();
        let data_lines: Vec<&str> = text
            .lines()
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect();
        assert_eq!(data_lines.len(), n);
        assert!(data_lines[4].starts_with("1 0.25 "));
    }

    #[test]
    fn test_estimator_rejects_short_or_mismatched_signals() {
        assert!(SpectralPeakEstimator::new(2, 8.0).is_err());
        assert!(SpectralPeakEstimator::new(16, 0.0).is_err());

        let estimator = SpectralPeakEstimator::new(16, 8.0).unwrap();
        let signal = basis(0.1, 8);
        assert!(estimator.estimate(&signal, None).is_err());
    }
}
