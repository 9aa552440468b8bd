//! Stickerpad Core Library
//!
//! Platform-agnostic drawing model for the sticker sketchpad: drawables,
//! the display list with undo/redo history, tool state, and the pointer
//! interaction controller. Rendering targets implement [`Surface`].

pub mod controller;
pub mod document;
pub mod drawable;
pub mod surface;
pub mod tools;

pub use controller::{PointerEvent, SketchController, ToolbarCommand};
pub use document::SketchDocument;
pub use drawable::{Drawable, DrawableKind, Preview, PreviewKind, Sticker, Stroke};
pub use surface::{Color, PaintOp, RecordingSurface, StrokePaint, Surface};
pub use tools::{ToolKind, ToolState, DEFAULT_LINE_WIDTH};
