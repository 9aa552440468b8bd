//! PNG export: replay the display list at a fixed target resolution.
//!
//! The document is replayed through an [`SvgSurface`] with a scale
//! transform, rasterized with usvg/resvg into a tiny-skia pixmap, and
//! encoded as PNG bytes.

use std::path::Path;

use kurbo::{Rect, Size};
use stickerpad_core::{Color, SketchDocument, Surface};

use crate::error::ExportError;
use crate::renderer::replay;
use crate::svg::SvgSurface;

/// File name offered for the exported image.
pub const EXPORT_FILE_NAME: &str = "sketchpad.png";

/// Configuration for PNG export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Output width in pixels, independent of the visible surface.
    pub width: u32,
    /// Output height in pixels, independent of the visible surface.
    pub height: u32,
    /// Opaque background fill.
    pub background: Color,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            background: Color::white(),
        }
    }
}

/// Exports a [`SketchDocument`] to PNG bytes.
pub struct PngExporter {
    config: ExportConfig,
}

impl PngExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(ExportConfig::default())
    }

    /// Render the committed display list (never the preview) to PNG bytes
    /// at the configured dimensions.
    pub fn export(&self, document: &SketchDocument, visible: Size) -> Result<Vec<u8>, ExportError> {
        let svg = self.render_to_svg(document, visible)?;
        let pixmap = rasterize(&svg)?;
        log::debug!(
            "exported {} drawables at {}x{}",
            document.len(),
            pixmap.width(),
            pixmap.height()
        );
        pixmap
            .encode_png()
            .map_err(|e| ExportError::Encode(e.to_string()))
    }

    /// Export and write the PNG to a file.
    pub fn export_to_file(
        &self,
        document: &SketchDocument,
        visible: Size,
        path: impl AsRef<Path>,
    ) -> Result<(), ExportError> {
        let png = self.export(document, visible)?;
        std::fs::write(path, png)?;
        Ok(())
    }

    /// Build the SVG intermediate: opaque background, then the display list
    /// replayed under independent horizontal/vertical scale factors so the
    /// visible surface maps onto the full target.
    pub fn render_to_svg(
        &self,
        document: &SketchDocument,
        visible: Size,
    ) -> Result<String, ExportError> {
        if visible.width <= 0.0 || visible.height <= 0.0 {
            return Err(ExportError::InvalidViewport(visible.width, visible.height));
        }
        let target = Size::new(f64::from(self.config.width), f64::from(self.config.height));

        let mut surface = SvgSurface::new(target);
        surface.fill_rect(
            Rect::from_origin_size((0.0, 0.0), target),
            self.config.background,
        );
        surface.save();
        surface.scale(target.width / visible.width, target.height / visible.height);
        replay(document, &mut surface);
        surface.restore();
        Ok(surface.finish())
    }
}

/// Rasterize SVG markup into a pixmap.
fn rasterize(svg: &str) -> Result<tiny_skia::Pixmap, ExportError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree =
        usvg::Tree::from_str(svg, &options).map_err(|e| ExportError::Svg(e.to_string()))?;

    let width = tree.size().width() as u32;
    let height = tree.size().height() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width.max(1), height.max(1))
        .ok_or(ExportError::Pixmap(width, height))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Ok(pixmap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use stickerpad_core::{Drawable, Sticker, Stroke};

    /// Width and height from a PNG's IHDR chunk.
    fn png_dimensions(png: &[u8]) -> (u32, u32) {
        let w = u32::from_be_bytes(png[16..20].try_into().unwrap());
        let h = u32::from_be_bytes(png[20..24].try_into().unwrap());
        (w, h)
    }

    fn doc_with_center_line(visible: f64) -> SketchDocument {
        let mut doc = SketchDocument::new();
        doc.commit(Drawable::Stroke(Stroke::from_points(
            vec![
                Point::new(0.0, visible / 2.0),
                Point::new(visible, visible / 2.0),
            ],
            8.0,
        )));
        doc
    }

    #[test]
    fn test_export_produces_png_at_fixed_dimensions() {
        let doc = doc_with_center_line(256.0);
        let exporter = PngExporter::with_defaults();

        // Target dimensions do not depend on the visible surface size.
        for visible in [256.0, 512.0, 640.0] {
            let png = exporter
                .export(&doc, Size::new(visible, visible))
                .expect("png export");
            assert_eq!(&png[0..4], &[137, 80, 78, 71]);
            assert_eq!(png_dimensions(&png), (1024, 1024));
        }
    }

    #[test]
    fn test_empty_document_exports() {
        let doc = SketchDocument::new();
        let exporter = PngExporter::with_defaults();
        let png = exporter
            .export(&doc, Size::new(256.0, 256.0))
            .expect("empty export");
        assert_eq!(&png[0..4], &[137, 80, 78, 71]);
    }

    #[test]
    fn test_stroke_lands_at_scaled_position() {
        let doc = doc_with_center_line(256.0);
        let exporter = PngExporter::with_defaults();
        let svg = exporter
            .render_to_svg(&doc, Size::new(256.0, 256.0))
            .unwrap();
        assert!(svg.contains("transform=\"scale(4,4)\""));

        let pixmap = rasterize(&svg).unwrap();
        // The center line maps to y=512; background stays white elsewhere.
        let on_line = pixmap.pixel(512, 512).unwrap();
        assert!(on_line.red() < 64, "expected dark stroke pixel");
        let off_line = pixmap.pixel(512, 128).unwrap();
        assert_eq!(off_line.red(), 255);
        assert_eq!(off_line.green(), 255);
    }

    #[test]
    fn test_corner_stroke_scales_proportionally() {
        let mut doc = SketchDocument::new();
        // Vertical line hugging the right edge of a 256x256 viewport.
        doc.commit(Drawable::Stroke(Stroke::from_points(
            vec![Point::new(252.0, 0.0), Point::new(252.0, 256.0)],
            4.0,
        )));
        let exporter = PngExporter::with_defaults();
        let pixmap = rasterize(
            &exporter
                .render_to_svg(&doc, Size::new(256.0, 256.0))
                .unwrap(),
        )
        .unwrap();

        // 252 * 4 = 1008 in export space.
        assert!(pixmap.pixel(1008, 512).unwrap().red() < 64);
        assert_eq!(pixmap.pixel(512, 512).unwrap().red(), 255);
    }

    #[test]
    fn test_sticker_glyph_in_svg_intermediate() {
        let mut doc = SketchDocument::new();
        doc.commit(Drawable::Sticker(Sticker::new("⭐", Point::new(50.0, 50.0))));
        let exporter = PngExporter::with_defaults();
        let svg = exporter
            .render_to_svg(&doc, Size::new(256.0, 256.0))
            .unwrap();
        assert!(svg.contains("⭐"));
        assert!(svg.contains("text-anchor=\"middle\""));
    }

    #[test]
    fn test_invisible_stroke_exports_blank_canvas() {
        let mut doc = SketchDocument::new();
        let mut stroke = Stroke::new(8.0);
        stroke.add_point(Point::new(128.0, 128.0));
        doc.commit(Drawable::Stroke(stroke));

        let exporter = PngExporter::with_defaults();
        let svg = exporter
            .render_to_svg(&doc, Size::new(256.0, 256.0))
            .unwrap();
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_invalid_viewport_rejected() {
        let doc = SketchDocument::new();
        let exporter = PngExporter::with_defaults();
        let err = exporter.render_to_svg(&doc, Size::new(0.0, 256.0));
        assert!(matches!(err, Err(ExportError::InvalidViewport(..))));
    }

    #[test]
    fn test_export_to_file() {
        let doc = doc_with_center_line(256.0);
        let exporter = PngExporter::with_defaults();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);

        exporter
            .export_to_file(&doc, Size::new(256.0, 256.0), &path)
            .expect("file export");

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..4], &[137, 80, 78, 71]);
    }
}
