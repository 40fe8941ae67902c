//! Configuration parameters for frequency decomposition

use serde::{Deserialize, Serialize};

use crate::error::{NaffError, Result};

/// Shape parameter `r` of the Gaussian window used before the coarse estimate
pub const GAUSSIAN_SHAPE: f64 = 8.0;

/// Fractional tolerance of the Brent refinement
pub const REFINE_TOLERANCE: f64 = 1e-8;

/// Width of the initial refinement bracket, in FFT bins
pub const BRACKET_STEP_BINS: f64 = 0.1;

/// Iteration cap shared by the bracketing and minimization routines
pub const MAX_OPTIMIZER_ITERATIONS: usize = 100;

/// Decomposition configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaffConfig {
    /// Pin the first component to frequency 0.0 (default: false)
    ///
    /// When set, the first extracted component is the DC term: its amplitude is
    /// the mean of the signal. The spectral estimator still runs for that
    /// iteration so a debug sink receives the spectrum, but its result is discarded.
    pub zero_first: bool,

    /// Gaussian window shape parameter `r` (default: 8.0)
    /// Larger values taper harder and widen the main lobe
    pub gaussian_shape: f64,

    /// Fractional tolerance of the frequency refinement (default: 1e-8)
    /// Refinement stops once the frequency is known to about `1e-8 · f`
    pub refine_tolerance: f64,

    /// Initial bracket width in bins (default: 0.1)
    /// The refiner seeds its bracket with `[f, f + bracket_step_bins / N]`
    pub bracket_step_bins: f64,

    /// Maximum iterations for bracketing and for minimization (default: 100)
    pub max_optimizer_iterations: usize,
}

impl Default for NaffConfig {
    fn default() -> Self {
        Self {
            zero_first: false,
            gaussian_shape: GAUSSIAN_SHAPE,
            refine_tolerance: REFINE_TOLERANCE,
            bracket_step_bins: BRACKET_STEP_BINS,
            max_optimizer_iterations: MAX_OPTIMIZER_ITERATIONS,
        }
    }
}

impl NaffConfig {
    /// Default configuration with the first component pinned to DC
    pub fn with_zero_first() -> Self {
        Self {
            zero_first: true,
            ..Self::default()
        }
    }

    /// Check that every numeric parameter is usable
    pub fn validate(&self) -> Result<()> {
        if !(self.gaussian_shape.is_finite() && self.gaussian_shape > 0.0) {
            return Err(NaffError::InvalidInput(format!(
                "Gaussian shape must be finite and > 0, got {}",
                self.gaussian_shape
            )));
        }

        if !(self.refine_tolerance.is_finite() && self.refine_tolerance > 0.0) {
            return Err(NaffError::InvalidInput(format!(
                "Refine tolerance must be finite and > 0, got {}",
                self.refine_tolerance
            )));
        }

        if !(self.bracket_step_bins.is_finite() && self.bracket_step_bins > 0.0) {
            return Err(NaffError::InvalidInput(format!(
                "Bracket step must be finite and > 0, got {}",
                self.bracket_step_bins
            )));
        }

        if self.max_optimizer_iterations == 0 {
            return Err(NaffError::InvalidInput(
                "Optimizer iteration cap must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}
