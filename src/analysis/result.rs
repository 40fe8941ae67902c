//! Decomposition result types

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::signal::energy;

/// One extracted frequency component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyComponent {
    /// Frequency in cycles/sample, in `[0, 1)`
    /// Angular frequency is `2π · frequency`
    pub frequency: f64,

    /// Complex amplitude measured against the orthogonalized basis vector
    pub amplitude: Complex64,
}

impl FrequencyComponent {
    /// Amplitude magnitude
    pub fn magnitude(&self) -> f64 {
        self.amplitude.norm()
    }

    /// Amplitude phase in radians, in `(-π, π]`
    pub fn phase(&self) -> f64 {
        self.amplitude.arg()
    }
}

/// Full result of a non-destructive decomposition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decomposition {
    /// Components in order of extraction
    pub components: Vec<FrequencyComponent>,

    /// Accepted (Gram-Schmidt orthogonalized) basis vector of each component
    pub basis: Vec<Vec<Complex64>>,

    /// Signal left after every component was subtracted
    pub residual: Vec<Complex64>,
}

impl Decomposition {
    /// Extracted frequencies, in order of extraction
    pub fn frequencies(&self) -> Vec<f64> {
        self.components.iter().map(|c| c.frequency).collect()
    }

    /// Extracted amplitudes, in order of extraction
    pub fn amplitudes(&self) -> Vec<Complex64> {
        self.components.iter().map(|c| c.amplitude).collect()
    }

    /// Energy `Σ|r_t|²` of the residual
    pub fn residual_energy(&self) -> f64 {
        energy(&self.residual)
    }

    /// Rebuild the input signal as `residual + Σ amplitude_i · u_i`
    ///
    /// Uses the orthogonalized basis vectors, so this reproduces the input up
    /// to rounding regardless of how well the components were resolved.
    pub fn reconstruct(&self) -> Vec<Complex64> {
        let mut signal = self.residual.clone();
        for (component, vector) in self.components.iter().zip(self.basis.iter()) {
            for (s, &u) in signal.iter_mut().zip(vector.iter()) {
                *s += component.amplitude * u;
            }
        }
        signal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_magnitude_and_phase() {
        let c = FrequencyComponent {
            frequency: 0.1,
            amplitude: Complex64::new(0.0, 2.0),
        };
        assert!((c.magnitude() - 2.0).abs() < 1e-12);
        assert!((c.phase() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_reconstruct_adds_components_to_residual() {
        let d = Decomposition {
            components: vec![FrequencyComponent {
                frequency: 0.0,
                amplitude: Complex64::new(2.0, 0.0),
            }],
            basis: vec![vec![Complex64::new(1.0, 0.0); 4]],
            residual: vec![Complex64::new(0.5, -0.5); 4],
        };
        let rebuilt = d.reconstruct();
        assert!(rebuilt.iter().all(|x| *x == Complex64::new(2.5, -0.5)));
        assert_eq!(d.frequencies(), vec![0.0]);
        assert_eq!(d.amplitudes(), vec![Complex64::new(2.0, 0.0)]);
        assert!((d.residual_energy() - 2.0).abs() < 1e-12);
    }
}
