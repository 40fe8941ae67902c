//! Error types for the frequency decomposition engine

use std::fmt;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, NaffError>;

/// Errors that can occur during a decomposition
#[derive(Debug, Clone, PartialEq)]
pub enum NaffError {
    /// Invalid input parameters (buffer sizes, component count, signal length, config)
    InvalidInput(String),

    /// The dominant interior FFT bin has zero magnitude (silent or flat residual)
    ///
    /// `iteration` is the 1-based index of the component being extracted when
    /// the estimator gave up. Components before it were extracted normally.
    DegenerateSpectrum {
        /// 1-based component index
        iteration: usize,
    },

    /// Numerical error (optimizer did not converge, non-finite objective, etc.)
    NumericalError(String),
}

impl fmt::Display for NaffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NaffError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            NaffError::DegenerateSpectrum { iteration } => write!(
                f,
                "Degenerate spectrum: no usable peak while extracting component {}",
                iteration
            ),
            NaffError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for NaffError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_degenerate_spectrum() {
        let err = NaffError::DegenerateSpectrum { iteration: 3 };
        assert_eq!(
            err.to_string(),
            "Degenerate spectrum: no usable peak while extracting component 3"
        );
    }

    #[test]
    fn test_display_invalid_input() {
        let err = NaffError::InvalidInput("component count must be > 0".to_string());
        assert!(err.to_string().starts_with("Invalid input:"));
    }
}
