//! Drawable definitions for the sketchpad.

mod preview;
mod sticker;
mod stroke;

pub use preview::{Preview, PreviewKind};
pub use sticker::Sticker;
pub use stroke::Stroke;

use crate::surface::Surface;
use serde::{Deserialize, Serialize};

/// Discriminator for [`Drawable`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawableKind {
    Stroke,
    Sticker,
    Preview,
}

/// A self-contained renderable unit.
///
/// Committed history holds only strokes and stickers; a preview is painted
/// by the render loop but never enters the display list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
    Preview(Preview),
}

impl Drawable {
    pub fn kind(&self) -> DrawableKind {
        match self {
            Drawable::Stroke(_) => DrawableKind::Stroke,
            Drawable::Sticker(_) => DrawableKind::Sticker,
            Drawable::Preview(_) => DrawableKind::Preview,
        }
    }

    /// Paint this drawable onto a surface.
    pub fn paint(&self, surface: &mut dyn Surface) {
        match self {
            Drawable::Stroke(s) => s.paint(surface),
            Drawable::Sticker(s) => s.paint(surface),
            Drawable::Preview(p) => p.paint(surface),
        }
    }

    /// Get the stroke if this drawable is one.
    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Drawable::Stroke(s) => Some(s),
            _ => None,
        }
    }

    /// Get the sticker if this drawable is one.
    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Drawable::Sticker(s) => Some(s),
            _ => None,
        }
    }
}
