//! Transient tool preview.

use super::Sticker;
use crate::surface::{Color, StrokePaint, Surface};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Opacity used for all previews.
const PREVIEW_ALPHA: f64 = 0.5;

/// What the preview shows for the active tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PreviewKind {
    /// Circle marker sized to the current line width.
    Brush { radius: f64 },
    /// Ghost of the sticker glyph that would be placed.
    Sticker { glyph: String },
}

/// A non-committed marker showing where the next action would land.
///
/// Owned by the interaction controller only; never pushed to the display
/// list, and never painted while a stroke is in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    at: Point,
    kind: PreviewKind,
}

impl Preview {
    /// Brush-tool preview: a circle with radius = half the line width.
    pub fn brush(at: Point, line_width: f64) -> Self {
        Self {
            at,
            kind: PreviewKind::Brush {
                radius: line_width / 2.0,
            },
        }
    }

    /// Sticker-tool preview: the glyph rendered as a ghost.
    pub fn sticker(at: Point, glyph: impl Into<String>) -> Self {
        Self {
            at,
            kind: PreviewKind::Sticker {
                glyph: glyph.into(),
            },
        }
    }

    pub fn position(&self) -> Point {
        self.at
    }

    pub fn kind(&self) -> &PreviewKind {
        &self.kind
    }

    pub fn paint(&self, surface: &mut dyn Surface) {
        surface.save();
        surface.set_alpha(PREVIEW_ALPHA);
        match &self.kind {
            PreviewKind::Brush { radius } => {
                surface.begin_path();
                surface.circle(self.at, *radius);
                surface.stroke(&StrokePaint::with_width(1.0));
            }
            PreviewKind::Sticker { glyph } => {
                surface.fill_text(glyph, self.at, Sticker::FONT_SIZE, Color::black());
            }
        }
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{PaintOp, RecordingSurface};

    #[test]
    fn test_brush_preview_radius_is_half_width() {
        let preview = Preview::brush(Point::new(10.0, 10.0), 8.0);
        let mut surface = RecordingSurface::new();
        preview.paint(&mut surface);

        assert_eq!(surface.ops()[0], PaintOp::Save);
        assert_eq!(surface.ops()[1], PaintOp::SetAlpha(PREVIEW_ALPHA));
        assert!(surface.ops().contains(&PaintOp::Circle {
            center: Point::new(10.0, 10.0),
            radius: 4.0,
        }));
        assert_eq!(*surface.ops().last().unwrap(), PaintOp::Restore);
    }

    #[test]
    fn test_sticker_preview_is_translucent_glyph() {
        let preview = Preview::sticker(Point::new(3.0, 4.0), "⭐");
        let mut surface = RecordingSurface::new();
        preview.paint(&mut surface);

        assert_eq!(surface.text_count(), 1);
        assert!(surface.ops().contains(&PaintOp::SetAlpha(PREVIEW_ALPHA)));
    }
}
