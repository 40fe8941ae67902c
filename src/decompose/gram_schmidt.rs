//! Classical Gram-Schmidt against previously accepted basis vectors

use num_complex::Complex64;

use crate::signal::projection;

/// Remove from `vector` its components along each of `accepted`
///
/// For `j = 1..i−1` in order: `u_i ← u_i − projection(u_j, u_i) · u_j`.
/// Single pass, no re-orthogonalization and no renormalization. The accepted
/// vectors are those already orthogonalized by earlier calls.
pub fn gram_schmidt(mut vector: Vec<Complex64>, accepted: &[Vec<Complex64>]) -> Vec<Complex64> {
    for previous in accepted {
        let overlap = projection(previous, &vector);
        for (v, &p) in vector.iter_mut().zip(previous.iter()) {
            *v -= overlap * p;
        }
    }
    vector
}
