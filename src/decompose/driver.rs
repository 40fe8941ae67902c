//! Per-component extraction loop
//!
//! For each requested component:
//!
//! 1. Coarse estimate from the Gaussian-windowed FFT of the current residual
//! 2. Local refinement of the projection magnitude (Hanning window, Brent)
//! 3. Build `basis(f, N)` and orthogonalize it against earlier components
//! 4. `amplitude = projection(u, residual)`
//! 5. Deflate: `residual ← residual − amplitude · u`
//!
//! Iteration `i` works on the residual left by iteration `i − 1`, so the loop is
//! strictly sequential. It always runs the requested number of times; deciding
//! how many components are significant is up to the caller.

use num_complex::Complex64;

use crate::analysis::result::{Decomposition, FrequencyComponent};
use crate::config::NaffConfig;
use crate::decompose::gram_schmidt::gram_schmidt;
use crate::error::{NaffError, Result};
use crate::signal::{basis, energy, projection};
use crate::spectral::{refine_frequency, SpectralPeakEstimator, SpectrumSink};

/// Smallest supported signal length (two boundary bins plus an interior peak
/// with both neighbours)
pub const MIN_SIGNAL_LEN: usize = 4;

/// Decompose `signal` in place into `frequencies.len()` components
///
/// **Destructive:** on return `signal` holds the residual left after every
/// extracted component was subtracted. Copy it beforehand if the original data
/// is still needed, or use [`decompose_signal`].
///
/// # Arguments
///
/// * `signal` - Complex samples; length must be a power of two and at least 4
/// * `frequencies` - Output, one slot per requested component (cycles/sample, `[0, 1)`)
/// * `amplitudes` - Output, same length as `frequencies`
/// * `config` - Decomposition parameters (see [`NaffConfig`])
/// * `sink` - Optional receiver for the magnitude spectrum of every iteration
///
/// # Errors
///
/// - `NaffError::InvalidInput` if the output slices are empty or differ in
///   length, the signal length is not a power of two (or below 4), a sample is
///   not finite, or the config is invalid. Nothing is modified.
/// - `NaffError::DegenerateSpectrum` if the residual has no usable spectral peak.
///   Slots before the failing iteration are filled and `signal` holds the
///   residual after those deflations.
/// - `NaffError::NumericalError` if frequency refinement fails to converge.
///
/// # Example
///
/// ```
/// use naff::{decompose, Complex64, NaffConfig};
/// use naff::signal::basis;
///
/// let mut signal: Vec<Complex64> = basis(0.2, 64)
///     .into_iter()
///     .map(|x| x * 1.5)
///     .collect();
/// let mut frequencies = [0.0; 1];
/// let mut amplitudes = [Complex64::new(0.0, 0.0); 1];
///
/// decompose(&mut signal, &mut frequencies, &mut amplitudes, &NaffConfig::default(), None)?;
/// assert!((frequencies[0] - 0.2).abs() < 1e-8);
/// assert!((amplitudes[0] - Complex64::new(1.5, 0.0)).norm() < 1e-6);
/// # Ok::<(), naff::NaffError>(())
/// ```
pub fn decompose(
    signal: &mut [Complex64],
    frequencies: &mut [f64],
    amplitudes: &mut [Complex64],
    config: &NaffConfig,
    sink: Option<&mut (dyn SpectrumSink + '_)>,
) -> Result<()> {
    validate_inputs(signal, frequencies.len(), amplitudes.len(), config)?;
    extract_components(signal, frequencies, amplitudes, config, sink)?;
    Ok(())
}

/// Decompose a copy of `signal` into `count` components
///
/// Non-destructive variant of [`decompose`]: the input is left untouched and
/// the residual is returned alongside the components and the orthogonalized
/// basis vectors.
///
/// # Errors
///
/// Same conditions as [`decompose`]. On error no partial result is returned.
///
/// # Example
///
/// ```
/// use naff::{decompose_signal, Complex64, NaffConfig};
/// use naff::signal::basis;
///
/// let signal: Vec<Complex64> = basis(0.4, 128)
///     .iter()
///     .zip(basis(0.15, 128))
///     .map(|(&a, b)| a + b * Complex64::new(0.0, 0.3))
///     .collect();
/// let result = decompose_signal(&signal, 2, &NaffConfig::default())?;
/// assert_eq!(result.components.len(), 2);
/// assert!((result.components[0].frequency - 0.4).abs() < 1e-6);
/// assert!((result.components[1].frequency - 0.15).abs() < 1e-6);
/// # Ok::<(), naff::NaffError>(())
/// ```
pub fn decompose_signal(
    signal: &[Complex64],
    count: usize,
    config: &NaffConfig,
) -> Result<Decomposition> {
    validate_inputs(signal, count, count, config)?;

    let mut residual = signal.to_vec();
    let mut frequencies = vec![0.0; count];
    let mut amplitudes = vec![Complex64::new(0.0, 0.0); count];
    let basis = extract_components(&mut residual, &mut frequencies, &mut amplitudes, config, None)?;

    let components = frequencies
        .into_iter()
        .zip(amplitudes)
        .map(|(frequency, amplitude)| FrequencyComponent {
            frequency,
            amplitude,
        })
        .collect();

    Ok(Decomposition {
        components,
        basis,
        residual,
    })
}

/// Reject every precondition violation before anything is touched
fn validate_inputs(
    signal: &[Complex64],
    frequency_slots: usize,
    amplitude_slots: usize,
    config: &NaffConfig,
) -> Result<()> {
    if frequency_slots == 0 {
        return Err(NaffError::InvalidInput(
            "Component count must be > 0".to_string(),
        ));
    }

    if frequency_slots != amplitude_slots {
        return Err(NaffError::InvalidInput(format!(
            "Output buffers differ in length: {} frequencies, {} amplitudes",
            frequency_slots, amplitude_slots
        )));
    }

    let n = signal.len();
    if n < MIN_SIGNAL_LEN || !n.is_power_of_two() {
        return Err(NaffError::InvalidInput(format!(
            "Signal length must be a power of two >= {}, got {}",
            MIN_SIGNAL_LEN, n
        )));
    }

    if let Some(t) = signal.iter().position(|x| !x.is_finite()) {
        return Err(NaffError::InvalidInput(format!(
            "Signal sample {} is not finite: {}",
            t, signal[t]
        )));
    }

    config.validate()
}

/// Extraction loop; returns the accepted basis vectors
fn extract_components(
    signal: &mut [Complex64],
    frequencies: &mut [f64],
    amplitudes: &mut [Complex64],
    config: &NaffConfig,
    mut sink: Option<&mut (dyn SpectrumSink + '_)>,
) -> Result<Vec<Vec<Complex64>>> {
    let n = signal.len();
    let count = frequencies.len();
    let estimator = SpectralPeakEstimator::new(n, config.gaussian_shape)?;
    let mut accepted: Vec<Vec<Complex64>> = Vec::with_capacity(count);

    log::debug!(
        "Decomposing {} samples into {} components (zero_first={})",
        n,
        count,
        config.zero_first
    );

    let mut previous_energy = energy(signal);

    for i in 0..count {
        let iteration = i + 1;

        let frequency = if i == 0 && config.zero_first {
            // Estimate only for the diagnostic spectrum
            if sink.is_some() {
                estimator.estimate(signal, sink.as_deref_mut())?;
            }
            0.0
        } else {
            let peak = estimator
                .estimate(signal, sink.as_deref_mut())?
                .ok_or(NaffError::DegenerateSpectrum { iteration })?;
            refine_frequency(peak.frequency, signal, config)?
        };

        let vector = gram_schmidt(basis(frequency, n), &accepted);
        let amplitude = projection(&vector, signal);

        for (s, &u) in signal.iter_mut().zip(vector.iter()) {
            *s -= amplitude * u;
        }

        frequencies[i] = frequency;
        amplitudes[i] = amplitude;
        accepted.push(vector);

        let residual_energy = energy(signal);
        log::debug!(
            "Component {}/{}: frequency={:.12}, amplitude={:.6}{:+.6}i, residual energy {:.6e} -> {:.6e}",
            iteration,
            count,
            frequency,
            amplitude.re,
            amplitude.im,
            previous_energy,
            residual_energy
        );
        previous_energy = residual_energy;
    }

    Ok(accepted)
}
