//! Abstract drawing surface.
//!
//! Drawables paint themselves through the [`Surface`] trait, so the core
//! never depends on a concrete rendering API. Production code supplies a
//! real target (e.g. an SVG surface); tests use [`RecordingSurface`].

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// RGBA8 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Alpha channel as a 0.0..=1.0 fraction.
    pub fn alpha(&self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

/// Paint settings for stroking the current path.
///
/// Line cap and join are always round; only color and width vary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokePaint {
    pub color: Color,
    pub width: f64,
}

impl StrokePaint {
    /// Default black stroke at the given width.
    pub fn with_width(width: f64) -> Self {
        Self {
            color: Color::black(),
            width,
        }
    }
}

/// A 2D drawing target.
///
/// The contract mirrors an immediate-mode canvas: build a path with
/// `begin_path`/`move_to`/`line_to`/`circle`, then `stroke` it. Paint state
/// (alpha, scale) nests via `save`/`restore`.
pub trait Surface {
    /// Wipe the whole surface.
    fn clear(&mut self, size: Size);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Start a new path, discarding any unstroked one.
    fn begin_path(&mut self);

    /// Move the path cursor without drawing.
    fn move_to(&mut self, p: Point);

    /// Extend the path with a line segment.
    fn line_to(&mut self, p: Point);

    /// Add a full-circle subpath.
    fn circle(&mut self, center: Point, radius: f64);

    /// Stroke the current path with round caps and joins.
    fn stroke(&mut self, paint: &StrokePaint);

    /// Place text centered horizontally and vertically on `at`.
    fn fill_text(&mut self, text: &str, at: Point, size: f64, color: Color);

    /// Set the alpha applied to subsequent drawing.
    fn set_alpha(&mut self, alpha: f64);

    /// Push the current paint state (alpha, transform).
    fn save(&mut self);

    /// Pop back to the most recently saved paint state.
    fn restore(&mut self);

    /// Apply an affine scale, combined with the current transform.
    fn scale(&mut self, sx: f64, sy: f64);
}

/// One recorded [`Surface`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Clear { size: Size },
    FillRect { rect: Rect, color: Color },
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Circle { center: Point, radius: f64 },
    Stroke(StrokePaint),
    FillText { text: String, at: Point, size: f64, color: Color },
    SetAlpha(f64),
    Save,
    Restore,
    Scale { sx: f64, sy: f64 },
}

/// A surface that records every call instead of rendering.
///
/// Lets tests assert exactly what a repaint or export would draw without a
/// real rendering backend.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<PaintOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, in order.
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Count recorded `Stroke` calls.
    pub fn stroke_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, PaintOp::Stroke(_)))
            .count()
    }

    /// Count recorded `FillText` calls.
    pub fn text_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, PaintOp::FillText { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, size: Size) {
        self.ops.push(PaintOp::Clear { size });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(PaintOp::FillRect { rect, color });
    }

    fn begin_path(&mut self) {
        self.ops.push(PaintOp::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.ops.push(PaintOp::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.ops.push(PaintOp::LineTo(p));
    }

    fn circle(&mut self, center: Point, radius: f64) {
        self.ops.push(PaintOp::Circle { center, radius });
    }

    fn stroke(&mut self, paint: &StrokePaint) {
        self.ops.push(PaintOp::Stroke(*paint));
    }

    fn fill_text(&mut self, text: &str, at: Point, size: f64, color: Color) {
        self.ops.push(PaintOp::FillText {
            text: text.to_string(),
            at,
            size,
            color,
        });
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.ops.push(PaintOp::SetAlpha(alpha));
    }

    fn save(&mut self) {
        self.ops.push(PaintOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(PaintOp::Restore);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.ops.push(PaintOp::Scale { sx, sy });
    }
}
