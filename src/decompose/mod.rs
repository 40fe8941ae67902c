//! Iterative decomposition by spectral deflation
//!
//! - Gram-Schmidt orthogonalization of basis vectors
//! - The per-component extraction loop

pub mod driver;
pub mod gram_schmidt;

pub use driver::{decompose, decompose_signal};
pub use gram_schmidt::gram_schmidt;
