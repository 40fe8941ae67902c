//! Brent's method: parabolic interpolation with golden-section fallback

use super::{evaluate, Bracket};
use crate::error::{NaffError, Result};

/// Golden-section fraction `(3 − √5) / 2`
const GOLDEN_SECTION: f64 = 0.381_966_0;

/// Absolute floor of the tolerance, for minima at or near zero
const ZEPS: f64 = 1e-10;

/// Located minimum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimum {
    /// Abscissa of the minimum
    pub x: f64,
    /// Objective value at `x`
    pub value: f64,
    /// Iterations used
    pub iterations: usize,
}

/// Refine a bracketed minimum to a fractional tolerance
///
/// The stopping width is `tolerance · |x| + 1e-10`, so small abscissae are
/// located to the same relative precision as large ones.
///
/// # Arguments
///
/// * `objective` - Scalar function to minimize
/// * `bracket` - Triple from [`bracket_minimum`](super::bracket_minimum)
/// * `tolerance` - Fractional tolerance on the abscissa
/// * `max_iterations` - Iteration cap
///
/// # Errors
///
/// Returns `NaffError::NumericalError` if the objective is non-finite or the
/// method does not converge within `max_iterations`.
pub fn brent_minimize<F>(
    objective: &mut F,
    bracket: &Bracket,
    tolerance: f64,
    max_iterations: usize,
) -> Result<Minimum>
where
    F: FnMut(f64) -> f64,
{
    let mut a = bracket.a.min(bracket.c);
    let mut b = bracket.a.max(bracket.c);

    // x: best so far, w: second best, v: previous w
    let mut x = bracket.b;
    let mut w = x;
    let mut v = x;
    let mut fx = bracket.fb;
    let mut fw = fx;
    let mut fv = fx;

    let mut d: f64 = 0.0;
    let mut e: f64 = 0.0;

    for iteration in 0..max_iterations {
        let xm = 0.5 * (a + b);
        let tol1 = tolerance * x.abs() + ZEPS;
        let tol2 = 2.0 * tol1;

        if (x - xm).abs() <= tol2 - 0.5 * (b - a) {
            log::trace!(
                "Brent converged after {} iterations: x={:.12}, f={:.12}",
                iteration,
                x,
                fx
            );
            return Ok(Minimum {
                x,
                value: fx,
                iterations: iteration,
            });
        }

        let golden_step = |x: f64| if x >= xm { a - x } else { b - x };

        if e.abs() > tol1 {
            // Trial parabolic fit through x, w, v
            let r = (x - w) * (fx - fv);
            let mut q = (x - v) * (fx - fw);
            let mut p = (x - v) * q - (x - w) * r;
            q = 2.0 * (q - r);
            if q > 0.0 {
                p = -p;
            }
            q = q.abs();
            let previous_e = e;
            e = d;

            if p.abs() >= (0.5 * q * previous_e).abs() || p <= q * (a - x) || p >= q * (b - x) {
                e = golden_step(x);
                d = GOLDEN_SECTION * e;
            } else {
                d = p / q;
                let u = x + d;
                if u - a < tol2 || b - u < tol2 {
                    d = tol1.copysign(xm - x);
                }
            }
        } else {
            e = golden_step(x);
            d = GOLDEN_SECTION * e;
        }

        let u = if d.abs() >= tol1 {
            x + d
        } else {
            x + tol1.copysign(d)
        };
        let fu = evaluate(objective, u)?;

        if fu <= fx {
            if u >= x {
                a = x;
            } else {
                b = x;
            }
            v = w;
            fv = fw;
            w = x;
            fw = fx;
            x = u;
            fx = fu;
        } else {
            if u < x {
                a = u;
            } else {
                b = u;
            }
            if fu <= fw || w == x {
                v = w;
                fv = fw;
                w = u;
                fw = fu;
            } else if fu <= fv || v == x || v == w {
                v = u;
                fv = fu;
            }
        }
    }

    Err(NaffError::NumericalError(format!(
        "Brent minimization did not converge within {} iterations (x={}, interval=[{}, {}])",
        max_iterations, x, a, b
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimize::bracket_minimum;

    #[test]
    fn test_brent_quadratic() {
        let mut f = |x: f64| (x - 1.234_567).powi(2) + 0.5;
        let bracket = bracket_minimum(&mut f, 0.0, 0.1, 100).unwrap();
        let min = brent_minimize(&mut f, &bracket, 1e-8, 100).unwrap();
        assert!((min.x - 1.234_567).abs() < 1e-6, "x = {}", min.x);
        assert!((min.value - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_brent_non_parabolic() {
        // cosh has a smooth minimum at 0 but is far from quadratic away from it
        let mut f = |x: f64| (x - 0.75).cosh();
        let bracket = bracket_minimum(&mut f, -2.0, -1.9, 100).unwrap();
        let min = brent_minimize(&mut f, &bracket, 1e-8, 100).unwrap();
        assert!((min.x - 0.75).abs() < 1e-6, "x = {}", min.x);
    }

    #[test]
    fn test_brent_small_abscissa_relative_precision() {
        let target = 7e-4;
        let mut f = |x: f64| (1000.0 * (x - target)).cosh();
        let bracket = bracket_minimum(&mut f, 0.0, 1e-4, 100).unwrap();
        let min = brent_minimize(&mut f, &bracket, 1e-8, 100).unwrap();
        let rel = (min.x - target).abs() / target;
        assert!(rel < 1e-6, "relative error {:.3e}", rel);
    }

    #[test]
    fn test_brent_respects_iteration_cap() {
        let mut f = |x: f64| (x - 10.0).powi(2);
        let bracket = Bracket {
            a: 0.0,
            b: 5.0,
            c: 20.0,
            fa: 100.0,
            fb: 25.0,
            fc: 100.0,
        };
        let result = brent_minimize(&mut f, &bracket, 1e-12, 1);
        assert!(matches!(result, Err(NaffError::NumericalError(_))));
    }

    #[test]
    fn test_brent_reports_value_at_minimum() {
        let mut f = |x: f64| x * x - 4.0 * x;
        let bracket = bracket_minimum(&mut f, 0.0, 1.0, 100).unwrap();
        let min = brent_minimize(&mut f, &bracket, 1e-10, 100).unwrap();
        assert!((min.x - 2.0).abs() < 1e-6);
        assert!((min.value + 4.0).abs() < 1e-10);
    }
}
