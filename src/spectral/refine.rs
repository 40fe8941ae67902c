//! Local frequency refinement
//!
//! Maximizes `|projection(hanning(signal), basis(f, N))|` around a coarse
//! estimate. The objective handed to the optimizer is the negated magnitude,
//! so the minimizer's argmin is the refined frequency.

use num_complex::Complex64;

use super::wrap_frequency;
use crate::config::NaffConfig;
use crate::error::{NaffError, Result};
use crate::optimize::{bracket_minimum, brent_minimize};
use crate::signal::window::{apply_window, WindowType};
use crate::signal::{basis, projection};

/// Refine a coarse frequency estimate
///
/// # Arguments
///
/// * `coarse` - Starting estimate in cycles/sample
/// * `signal` - Signal (or residual) to refine against; not modified
/// * `config` - Supplies bracket width, tolerance and iteration cap
///
/// # Returns
///
/// Refined frequency, wrapped into `[0, 1)`
///
/// # Errors
///
/// Returns `NaffError::InvalidInput` for an empty signal or non-finite
/// estimate, and `NaffError::NumericalError` if bracketing or minimization
/// fails to converge.
pub fn refine_frequency(coarse: f64, signal: &[Complex64], config: &NaffConfig) -> Result<f64> {
    if signal.is_empty() {
        return Err(NaffError::InvalidInput(
            "Cannot refine frequency of an empty signal".to_string(),
        ));
    }

    if !coarse.is_finite() {
        return Err(NaffError::InvalidInput(format!(
            "Coarse frequency estimate is not finite: {}",
            coarse
        )));
    }

    let n = signal.len();
    let windowed = apply_window(signal, WindowType::Hanning);
    let mut objective = |frequency: f64| -projection(&windowed, &basis(frequency, n)).norm();

    let step = config.bracket_step_bins / n as f64;
    let bracket = bracket_minimum(
        &mut objective,
        coarse,
        coarse + step,
        config.max_optimizer_iterations,
    )?;
    let minimum = brent_minimize(
        &mut objective,
        &bracket,
        config.refine_tolerance,
        config.max_optimizer_iterations,
    )?;

    let refined = wrap_frequency(minimum.x);

    log::debug!(
        "Refined frequency {:.10} -> {:.12} (|projection|={:.6e}, {} iterations)",
        coarse,
        refined,
        -minimum.value,
        minimum.iterations
    );

    Ok(refined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refine_single_tone_from_offset_start() {
        let n = 64;
        let f = 0.371_234_5;
        let signal: Vec<Complex64> = basis(f, n)
            .into_iter()
            .map(|x| x * Complex64::new(0.7, -0.2))
            .collect();

        let refined = refine_frequency(f + 0.3 / n as f64, &signal, &NaffConfig::default()).unwrap();
        assert!((refined - f).abs() < 1e-7, "refined {} vs true {}", refined, f);
    }

    #[test]
    fn test_refine_wraps_into_unit_interval() {
        let n = 32;
        let f = 0.999;
        let signal = basis(f, n);
        let refined = refine_frequency(1.0 + 0.01 / n as f64, &signal, &NaffConfig::default()).unwrap();
        assert!((0.0..1.0).contains(&refined));
        assert!((refined - f).abs() < 1e-7, "refined {}", refined);
    }

    #[test]
    fn test_refine_does_not_modify_signal() {
        let signal = basis(0.2, 16);
        let copy = signal.clone();
        refine_frequency(0.2, &signal, &NaffConfig::default()).unwrap();
        assert_eq!(signal, copy);
    }

    #[test]
    fn test_refine_rejects_bad_input() {
        let config = NaffConfig::default();
        assert!(refine_frequency(0.1, &[], &config).is_err());
        assert!(refine_frequency(f64::NAN, &basis(0.1, 8), &config).is_err());
    }
}
