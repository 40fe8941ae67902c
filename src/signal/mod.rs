//! Signal primitives shared by every stage of the decomposition
//!
//! - Normalized complex projection (inner product)
//! - Complex-exponential basis generation
//! - Gaussian and Hanning tapers

pub mod basis;
pub mod projection;
pub mod window;

pub use basis::basis;
pub use projection::{energy, projection};
pub use window::{apply_window, gaussian_window, hanning_window, WindowType};

/// 2π in double precision
pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;
