//! Freehand stroke drawable.

use crate::surface::{StrokePaint, Surface};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A freehand stroke: an ordered series of points with a fixed line width.
///
/// The width is captured when the stroke starts; later tool changes never
/// affect it. A stroke with fewer than two points paints nothing but still
/// occupies a display-list slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Point>,
    width: f64,
}

impl Stroke {
    /// Create an empty stroke with the given line width.
    pub fn new(width: f64) -> Self {
        Self {
            points: Vec::new(),
            width,
        }
    }

    /// Create from existing points.
    pub fn from_points(points: Vec<Point>, width: f64) -> Self {
        Self { points, width }
    }

    /// Append a point to the path.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Paint the polyline. Strokes with fewer than two points are invisible.
    pub fn paint(&self, surface: &mut dyn Surface) {
        if self.points.len() < 2 {
            return;
        }
        surface.begin_path();
        surface.move_to(self.points[0]);
        for point in self.points.iter().skip(1) {
            surface.line_to(*point);
        }
        surface.stroke(&StrokePaint::with_width(self.width));
    }
}
