//! Sticker drawable.

use crate::surface::{Color, Surface};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A glyph (usually an emoji) anchored at a point, rendered centered on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sticker {
    glyph: String,
    at: Point,
}

impl Sticker {
    /// Font size stickers are rendered at, in surface units.
    pub const FONT_SIZE: f64 = 32.0;

    pub fn new(glyph: impl Into<String>, at: Point) -> Self {
        Self {
            glyph: glyph.into(),
            at,
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn position(&self) -> Point {
        self.at
    }

    pub fn paint(&self, surface: &mut dyn Surface) {
        surface.fill_text(&self.glyph, self.at, Self::FONT_SIZE, Color::black());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{PaintOp, RecordingSurface};

    #[test]
    fn test_sticker_paint_centered_at_anchor() {
        let sticker = Sticker::new("🎉", Point::new(50.0, 50.0));
        let mut surface = RecordingSurface::new();
        sticker.paint(&mut surface);

        assert_eq!(surface.ops().len(), 1);
        match &surface.ops()[0] {
            PaintOp::FillText { text, at, size, .. } => {
                assert_eq!(text, "🎉");
                assert_eq!(*at, Point::new(50.0, 50.0));
                assert!((size - Sticker::FONT_SIZE).abs() < f64::EPSILON);
            }
            op => panic!("expected fill_text, got {op:?}"),
        }
    }
}
