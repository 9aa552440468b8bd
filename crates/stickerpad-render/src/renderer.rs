//! Full-repaint replay renderer.

use kurbo::Size;
use stickerpad_core::{Drawable, SketchDocument, Surface};

/// Repaint the whole surface from scratch: clear, replay every committed
/// drawable in display-list order (painter's algorithm), then the preview
/// on top if one exists.
///
/// Cost is O(total points across all strokes); there is no incremental or
/// dirty-rectangle path.
pub fn render(
    document: &SketchDocument,
    preview: Option<&Drawable>,
    surface: &mut dyn Surface,
    viewport: Size,
) {
    surface.clear(viewport);
    replay(document, surface);
    if let Some(preview) = preview {
        preview.paint(surface);
    }
}

/// Paint every committed drawable. Shared by the render loop and the
/// exporter so on-screen and exported output stay in lockstep.
pub(crate) fn replay(document: &SketchDocument, surface: &mut dyn Surface) {
    for drawable in document.drawables() {
        drawable.paint(surface);
    }
}
