//! Minimum bracketing by golden-ratio expansion with parabolic extrapolation

use super::{evaluate, GOLDEN_RATIO};
use crate::error::{NaffError, Result};

/// Largest parabolic step allowed, as a multiple of the current interval
const PARABOLIC_LIMIT: f64 = 100.0;

/// Guards the parabola denominator against division by zero
const TINY: f64 = 1e-20;

/// Three abscissae straddling a local minimum, with objective values
///
/// Invariant: `fb <= fa` and `fb <= fc`, and `b` lies between `a` and `c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Outer point
    pub a: f64,
    /// Inner point (lowest value found)
    pub b: f64,
    /// Outer point on the other side of `b`
    pub c: f64,
    /// Objective at `a`
    pub fa: f64,
    /// Objective at `b`
    pub fb: f64,
    /// Objective at `c`
    pub fc: f64,
}

/// Bracket a local minimum of `objective` starting from seeds `a` and `b`
///
/// Walks downhill from the seeds, growing the step by the golden ratio and
/// taking parabolic extrapolation steps when they look promising.
///
/// # Errors
///
/// Returns `NaffError::NumericalError` if the objective becomes non-finite or
/// no bracket is found within `max_iterations` expansions.
///
/// # Example
///
/// ```
/// use naff::optimize::bracket_minimum;
///
/// let mut f = |x: f64| (x - 3.0).powi(2);
/// let bracket = bracket_minimum(&mut f, 0.0, 0.5, 100)?;
/// assert!(bracket.fb <= bracket.fa && bracket.fb <= bracket.fc);
/// # Ok::<(), naff::NaffError>(())
/// ```
pub fn bracket_minimum<F>(
    objective: &mut F,
    a: f64,
    b: f64,
    max_iterations: usize,
) -> Result<Bracket>
where
    F: FnMut(f64) -> f64,
{
    let (mut a, mut b) = (a, b);
    let mut fa = evaluate(objective, a)?;
    let mut fb = evaluate(objective, b)?;

    // Walk downhill from a to b
    if fb > fa {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    let mut c = b + GOLDEN_RATIO * (b - a);
    let mut fc = evaluate(objective, c)?;
    let mut iterations = 0;

    while fb > fc {
        iterations += 1;
        if iterations > max_iterations {
            return Err(NaffError::NumericalError(format!(
                "Failed to bracket a minimum within {} iterations (last triple: {}, {}, {})",
                max_iterations, a, b, c
            )));
        }

        // Parabolic extrapolation through (a, b, c)
        let r = (b - a) * (fb - fc);
        let q = (b - c) * (fb - fa);
        let d = q - r;
        let denom = 2.0 * d.abs().max(TINY).copysign(d);
        let mut u = b - ((b - c) * q - (b - a) * r) / denom;
        let u_limit = b + PARABOLIC_LIMIT * (c - b);
        let mut fu;

        if (b - u) * (u - c) > 0.0 {
            // Parabolic u lies between b and c
            fu = evaluate(objective, u)?;
            if fu < fc {
                a = b;
                fa = fb;
                b = u;
                fb = fu;
                break;
            } else if fu > fb {
                c = u;
                fc = fu;
                break;
            }
            u = c + GOLDEN_RATIO * (c - b);
            fu = evaluate(objective, u)?;
        } else if (c - u) * (u - u_limit) > 0.0 {
            // Parabolic u lies between c and the allowed limit
            fu = evaluate(objective, u)?;
            if fu < fc {
                b = c;
                c = u;
                u += GOLDEN_RATIO * (u - b);
                fb = fc;
                fc = fu;
                fu = evaluate(objective, u)?;
            }
        } else if (u - u_limit) * (u_limit - c) >= 0.0 {
            u = u_limit;
            fu = evaluate(objective, u)?;
        } else {
            u = c + GOLDEN_RATIO * (c - b);
            fu = evaluate(objective, u)?;
        }

        a = b;
        b = c;
        c = u;
        fa = fb;
        fb = fc;
        fc = fu;
    }

    log::trace!(
        "Bracketed minimum after {} expansions: ({:.10}, {:.10}, {:.10})",
        iterations,
        a,
        b,
        c
    );

    Ok(Bracket {
        a,
        b,
        c,
        fa,
        fb,
        fc,
    })
}
