//! Export pipeline errors.

use thiserror::Error;

/// Errors from the PNG export pipeline. Core document operations are total
/// and never fail; only rasterization and I/O can.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid viewport size {0}x{1}")]
    InvalidViewport(f64, f64),
    #[error("SVG parsing failed: {0}")]
    Svg(String),
    #[error("failed to allocate {0}x{1} pixmap")]
    Pixmap(u32, u32),
    #[error("PNG encoding failed: {0}")]
    Encode(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
