//! Display list and undo/redo history.

use crate::drawable::{Drawable, DrawableKind};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// The sketch document: an ordered display list of committed drawables plus
/// a redo stack of drawables removed by undo.
///
/// The two collections are disjoint at all times; a drawable moves between
/// them by value. The redo stack survives both `commit` and `clear`, so a
/// redo can resurrect a drawable removed before unrelated edits. That
/// matches the observed sketchpad behavior and is covered by tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SketchDocument {
    drawables: Vec<Drawable>,
    redo_stack: Vec<Drawable>,
    /// Monotonic change counter; bumped on every mutation so a render loop
    /// knows when to repaint.
    #[serde(skip)]
    revision: u64,
}

impl SketchDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drawable to the display list.
    ///
    /// Does not touch the redo stack.
    pub fn commit(&mut self, drawable: Drawable) {
        debug_assert_ne!(drawable.kind(), DrawableKind::Preview);
        log::debug!("commit {:?}", drawable.kind());
        self.drawables.push(drawable);
        self.revision += 1;
    }

    /// Remove the most recent drawable onto the redo stack.
    /// Returns false if the display list is empty.
    pub fn undo(&mut self) -> bool {
        match self.drawables.pop() {
            Some(drawable) => {
                log::debug!("undo {:?}", drawable.kind());
                self.redo_stack.push(drawable);
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    /// Re-append the most recently undone drawable.
    /// Returns false if the redo stack is empty.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(drawable) => {
                log::debug!("redo {:?}", drawable.kind());
                self.drawables.push(drawable);
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    /// Empty the display list. The redo stack is left untouched.
    pub fn clear(&mut self) {
        log::debug!("clear ({} drawables)", self.drawables.len());
        self.drawables.clear();
        self.revision += 1;
    }

    /// Append a point to the drawable at the tail of the display list, if it
    /// is a stroke. This is the only mutation allowed on committed data and
    /// is used for the stroke currently being drawn.
    pub fn extend_active_stroke(&mut self, point: Point) -> bool {
        match self.drawables.last_mut() {
            Some(Drawable::Stroke(stroke)) => {
                stroke.add_point(point);
                self.revision += 1;
                true
            }
            _ => false,
        }
    }

    /// Committed drawables in paint order (oldest first).
    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    /// Drawables removed by undo, most recent last.
    pub fn redo_stack(&self) -> &[Drawable] {
        &self.redo_stack
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.drawables.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Current change counter.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
