//! Complex-exponential basis vectors

use num_complex::Complex64;

use super::TWO_PI;

/// Sample `exp(-i·2π·f·t)` for `t = 0..n`
///
/// `frequency` is in cycles/sample; the sequence is 1-periodic in it.
pub fn basis(frequency: f64, n: usize) -> Vec<Complex64> {
    let omega = -TWO_PI * frequency;
    (0..n)
        .map(|t| Complex64::from_polar(1.0, omega * t as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_dc_is_exactly_one() {
        let e = basis(0.0, 16);
        assert!(e.iter().all(|x| *x == Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_basis_quarter_cycle() {
        let e = basis(0.25, 4);
        let expected = [
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, -1.0),
            Complex64::new(-1.0, 0.0),
            Complex64::new(0.0, 1.0),
        ];
        for (got, want) in e.iter().zip(expected.iter()) {
            assert!((got - want).norm() < 1e-12, "got {}, want {}", got, want);
        }
    }

    #[test]
    fn test_basis_unit_modulus() {
        let e = basis(0.3718, 33);
        assert_eq!(e.len(), 33);
        assert!(e.iter().all(|x| (x.norm() - 1.0).abs() < 1e-12));
    }
}
