//! Stickerpad Render Library
//!
//! Replay rendering over the core [`Surface`](stickerpad_core::Surface)
//! abstraction, an SVG surface implementation, and PNG export.

mod error;
mod export;
mod renderer;
mod svg;

pub use error::ExportError;
pub use export::{ExportConfig, PngExporter, EXPORT_FILE_NAME};
pub use renderer::render;
pub use svg::SvgSurface;
