//! Interaction controller: pointer state machine over the document.

use crate::document::SketchDocument;
use crate::drawable::{Drawable, Preview, Sticker, Stroke};
use crate::tools::{ToolKind, ToolState};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A pointer event in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
    Leave,
}

/// A command issued by the toolbar collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolbarCommand {
    SelectMarker,
    /// Select the sticker tool with the palette glyph at this index.
    SelectSticker(usize),
    SetLineWidth(f64),
    /// Add a glyph to the palette and select it. Whitespace-only input is
    /// rejected silently.
    AddGlyph(String),
    Undo,
    Redo,
    Clear,
}

/// Owns all mutable sketchpad state and consumes pointer and toolbar
/// commands, turning them into display-list mutations.
///
/// While a stroke is being drawn the preview is always `None`, so the two
/// are never rendered together.
#[derive(Debug, Default)]
pub struct SketchController {
    pub document: SketchDocument,
    pub tools: ToolState,
    preview: Option<Drawable>,
    drawing: bool,
    needs_repaint: bool,
}

impl SketchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The transient preview, if one should be painted on top.
    pub fn preview(&self) -> Option<&Drawable> {
        self.preview.as_ref()
    }

    /// Whether a stroke is currently being drawn.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Whether anything changed since the last repaint was taken.
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Consume the repaint flag. The render loop calls this once per frame.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    /// Feed a pointer event through the state machine.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(point) => self.pointer_down(point),
            PointerEvent::Move(point) => self.pointer_move(point),
            PointerEvent::Up => {
                // The stroke stays committed; only the "current" reference
                // is dropped.
                self.drawing = false;
            }
            PointerEvent::Leave => {
                self.drawing = false;
                self.preview = None;
                self.needs_repaint = true;
            }
        }
    }

    /// Apply a toolbar command.
    pub fn handle_command(&mut self, command: ToolbarCommand) {
        match command {
            ToolbarCommand::SelectMarker => self.tools.select_marker(),
            ToolbarCommand::SelectSticker(index) => self.tools.select_sticker(index),
            ToolbarCommand::SetLineWidth(width) => self.tools.set_line_width(width),
            ToolbarCommand::AddGlyph(glyph) => {
                if let Some(index) = self.tools.add_glyph(&glyph) {
                    self.tools.select_sticker(index);
                }
            }
            ToolbarCommand::Undo => {
                // Detach any in-progress stroke first, otherwise later moves
                // would grow whatever drawable ends up at the tail.
                self.drawing = false;
                if self.document.undo() {
                    self.needs_repaint = true;
                }
            }
            ToolbarCommand::Redo => {
                self.drawing = false;
                if self.document.redo() {
                    self.needs_repaint = true;
                }
            }
            ToolbarCommand::Clear => {
                self.drawing = false;
                self.document.clear();
                self.needs_repaint = true;
            }
        }
    }

    fn pointer_down(&mut self, point: Point) {
        self.preview = None;
        match self.tools.current_tool {
            ToolKind::Marker => {
                // Committed immediately so the stroke is part of history
                // from its first point, even though a single point renders
                // nothing.
                let mut stroke = Stroke::new(self.tools.line_width);
                stroke.add_point(point);
                self.document.commit(Drawable::Stroke(stroke));
                self.drawing = true;
            }
            ToolKind::Sticker => {
                let glyph = self.tools.active_glyph.clone();
                self.document.commit(Drawable::Sticker(Sticker::new(glyph, point)));
            }
        }
        self.needs_repaint = true;
    }

    fn pointer_move(&mut self, point: Point) {
        if self.drawing {
            log::trace!("extend stroke to {point:?}");
            self.document.extend_active_stroke(point);
        } else {
            self.preview = Some(Drawable::Preview(match self.tools.current_tool {
                ToolKind::Marker => Preview::brush(point, self.tools.line_width),
                ToolKind::Sticker => {
                    Preview::sticker(point, self.tools.active_glyph.clone())
                }
            }));
        }
        self.needs_repaint = true;
    }
}
