//! Derivative-free scalar minimization
//!
//! Two-stage search used by the frequency refiner:
//! - [`bracket_minimum`]: expand two seed points into a triple straddling a local minimum
//! - [`brent_minimize`]: refine that triple to a fractional tolerance with Brent's method
//!
//! # Reference
//!
//! Brent, R. P. (1973). *Algorithms for Minimization without Derivatives*. Prentice-Hall.

pub mod bracket;
pub mod brent;

pub use bracket::{bracket_minimum, Bracket};
pub use brent::{brent_minimize, Minimum};

use crate::error::{NaffError, Result};

/// Golden ratio, used for default bracket magnification
pub(crate) const GOLDEN_RATIO: f64 = 1.618034;

/// Evaluate an objective, rejecting non-finite values
pub(crate) fn evaluate<F>(objective: &mut F, x: f64) -> Result<f64>
where
    F: FnMut(f64) -> f64,
{
    let value = objective(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NaffError::NumericalError(format!(
            "Objective is not finite at x={}: {}",
            x, value
        )))
    }
}
