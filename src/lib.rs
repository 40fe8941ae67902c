//! # NAFF
//!
//! Numerical Analysis of Fundamental Frequencies: extracts the dominant
//! frequency components of a finite, evenly sampled complex signal with a
//! precision far beyond the `1/N` bin spacing of a plain FFT.
//!
//! ## Features
//!
//! - **Coarse estimate**: Gaussian-windowed FFT with log-parabolic sub-bin interpolation
//! - **Refinement**: Brent maximization of the Hanning-windowed projection magnitude
//! - **Orthogonalization**: Gram-Schmidt against every earlier component
//! - **Deflation**: each component is subtracted before the next is searched
//!
//! ## Quick Start
//!
//! ```
//! use naff::{decompose_signal, Complex64, NaffConfig};
//!
//! // x_t = 1.2 · exp(-i·2π·0.31·t)
//! let signal: Vec<Complex64> = (0..256)
//!     .map(|t| Complex64::from_polar(1.2, -2.0 * std::f64::consts::PI * 0.31 * t as f64))
//!     .collect();
//!
//! let result = decompose_signal(&signal, 1, &NaffConfig::default())?;
//! let c = result.components[0];
//! println!("f = {:.10}, |a| = {:.6}", c.frequency, c.magnitude());
//! # Ok::<(), naff::NaffError>(())
//! ```
//!
//! ## Conventions
//!
//! Frequencies are in cycles/sample in `[0, 1)`; a component with frequency `f`
//! and amplitude `a` contributes `a · exp(-i·2π·f·t)` to sample `t`. Signal
//! lengths must be powers of two.
//!
//! The loop always extracts the requested number of components. Choosing how
//! many are significant is left to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod decompose;
pub mod error;
pub mod optimize;
pub mod signal;
pub mod spectral;

// Re-export main types
pub use analysis::result::{Decomposition, FrequencyComponent};
pub use config::NaffConfig;
pub use decompose::{decompose, decompose_signal};
pub use error::{NaffError, Result};
pub use num_complex::Complex64;
pub use spectral::{SpectrumDump, SpectrumSink};
