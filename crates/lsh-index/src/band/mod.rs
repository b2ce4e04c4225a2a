//! Band builders: windowed token-key banding and fixed-width signature banding.

mod fixed;
mod windowed;

pub use fixed::{build_fixed, num_bands, RowBand};
pub use windowed::{build_windowed, WindowBand};
