//! SVG implementation of the core [`Surface`] trait.
//!
//! Each paint call appends SVG elements to an in-memory document. The
//! exporter rasterizes the result; tests can inspect it as text.

use std::fmt::Write;

use kurbo::{Point, Rect, Size};
use stickerpad_core::{Color, StrokePaint, Surface};

/// Paint state tracked across save/restore.
#[derive(Debug, Clone, Copy)]
struct GfxState {
    sx: f64,
    sy: f64,
    alpha: f64,
}

impl Default for GfxState {
    fn default() -> Self {
        Self {
            sx: 1.0,
            sy: 1.0,
            alpha: 1.0,
        }
    }
}

/// A [`Surface`] that emits SVG elements.
#[derive(Debug)]
pub struct SvgSurface {
    size: Size,
    body: String,
    path_data: String,
    circles: Vec<(Point, f64)>,
    state: GfxState,
    stack: Vec<GfxState>,
}

impl SvgSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            body: String::with_capacity(4096),
            path_data: String::new(),
            circles: Vec::new(),
            state: GfxState::default(),
            stack: Vec::new(),
        }
    }

    /// Finish the document and return the SVG markup.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">{body}</svg>",
            w = self.size.width,
            h = self.size.height,
            body = self.body,
        )
    }

    fn transform_attr(&self) -> String {
        if (self.state.sx - 1.0).abs() < f64::EPSILON && (self.state.sy - 1.0).abs() < f64::EPSILON
        {
            String::new()
        } else {
            format!(" transform=\"scale({},{})\"", self.state.sx, self.state.sy)
        }
    }

    fn opacity_attr(&self, attr: &str, color: Color) -> String {
        let opacity = self.state.alpha * color.alpha();
        if opacity < 1.0 {
            format!(" {attr}=\"{opacity}\"")
        } else {
            String::new()
        }
    }
}

fn hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// Escape special XML characters.
fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

impl Surface for SvgSurface {
    fn clear(&mut self, _size: Size) {
        self.body.clear();
        self.path_data.clear();
        self.circles.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let _ = write!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"{}{}/>",
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            hex(color),
            self.opacity_attr("fill-opacity", color),
            self.transform_attr(),
        );
    }

    fn begin_path(&mut self) {
        self.path_data.clear();
        self.circles.clear();
    }

    fn move_to(&mut self, p: Point) {
        let _ = write!(self.path_data, "M{} {}", p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        let _ = write!(self.path_data, "L{} {}", p.x, p.y);
    }

    fn circle(&mut self, center: Point, radius: f64) {
        self.circles.push((center, radius));
    }

    fn stroke(&mut self, paint: &StrokePaint) {
        let stroke_attrs = format!(
            "fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"{}{}",
            hex(paint.color),
            paint.width,
            self.opacity_attr("stroke-opacity", paint.color),
            self.transform_attr(),
        );
        if !self.path_data.is_empty() {
            let _ = write!(self.body, "<path d=\"{}\" {}/>", self.path_data, stroke_attrs);
        }
        for &(center, radius) in &self.circles {
            let _ = write!(
                self.body,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}/>",
                center.x, center.y, radius, stroke_attrs,
            );
        }
    }

    fn fill_text(&mut self, text: &str, at: Point, size: f64, color: Color) {
        let _ = write!(
            self.body,
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" fill=\"{}\"{}{}>{}</text>",
            at.x,
            at.y,
            size,
            hex(color),
            self.opacity_attr("fill-opacity", color),
            self.transform_attr(),
            escape_xml(text),
        );
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.state.alpha = alpha;
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.state.sx *= sx;
        self.state.sy *= sy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroked_path_markup() {
        let mut surface = SvgSurface::new(Size::new(100.0, 100.0));
        surface.begin_path();
        surface.move_to(Point::new(0.0, 0.0));
        surface.line_to(Point::new(50.0, 50.0));
        surface.stroke(&StrokePaint::with_width(4.0));

        let svg = surface.finish();
        assert!(svg.contains("d=\"M0 0L50 50\""));
        assert!(svg.contains("stroke-width=\"4\""));
        assert!(svg.contains("stroke-linecap=\"round\""));
        assert!(svg.contains("fill=\"none\""));
    }

    #[test]
    fn test_scale_written_per_element() {
        let mut surface = SvgSurface::new(Size::new(100.0, 100.0));
        surface.save();
        surface.scale(4.0, 2.0);
        surface.begin_path();
        surface.move_to(Point::new(0.0, 0.0));
        surface.line_to(Point::new(10.0, 0.0));
        surface.stroke(&StrokePaint::with_width(1.0));
        surface.restore();
        surface.fill_text("⭐", Point::new(5.0, 5.0), 32.0, Color::black());

        let svg = surface.finish();
        assert!(svg.contains("transform=\"scale(4,2)\""));
        // The text was emitted after restore, outside the scale.
        let text_elem = svg.split("<text").nth(1).unwrap();
        assert!(!text_elem.contains("transform"));
    }

    #[test]
    fn test_alpha_becomes_opacity_attr() {
        let mut surface = SvgSurface::new(Size::new(10.0, 10.0));
        surface.save();
        surface.set_alpha(0.5);
        surface.fill_text("x", Point::new(1.0, 1.0), 8.0, Color::black());
        surface.restore();

        let svg = surface.finish();
        assert!(svg.contains("fill-opacity=\"0.5\""));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut surface = SvgSurface::new(Size::new(10.0, 10.0));
        surface.fill_text("<&>", Point::new(1.0, 1.0), 8.0, Color::black());
        let svg = surface.finish();
        assert!(svg.contains("&lt;&amp;&gt;"));
    }

    #[test]
    fn test_circle_stroked_not_filled() {
        let mut surface = SvgSurface::new(Size::new(10.0, 10.0));
        surface.begin_path();
        surface.circle(Point::new(5.0, 5.0), 2.0);
        surface.stroke(&StrokePaint::with_width(1.0));

        let svg = surface.finish();
        assert!(svg.contains("<circle cx=\"5\" cy=\"5\" r=\"2\""));
        assert!(svg.contains("fill=\"none\""));
    }

    #[test]
    fn test_clear_drops_emitted_elements() {
        let mut surface = SvgSurface::new(Size::new(10.0, 10.0));
        surface.fill_rect(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Color::white(),
        );
        surface.clear(Size::new(10.0, 10.0));
        let svg = surface.finish();
        assert!(!svg.contains("<rect"));
    }
}
