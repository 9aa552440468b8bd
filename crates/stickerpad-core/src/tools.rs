//! Tool selection and parameters.

use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToolKind {
    /// Freehand marker.
    #[default]
    Marker,
    /// Sticker placement.
    Sticker,
}

/// Default marker line width.
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;

/// Current tool, its parameters, and the sticker palette.
///
/// Parameter changes take effect on the next pointer-down; an in-progress
/// stroke keeps the width it was created with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolState {
    pub current_tool: ToolKind,
    pub line_width: f64,
    /// Glyph used when the sticker tool places or previews a sticker.
    pub active_glyph: String,
    palette: Vec<String>,
}

impl Default for ToolState {
    fn default() -> Self {
        let palette: Vec<String> = ["🙂", "⭐", "🎉"].map(String::from).into();
        Self {
            current_tool: ToolKind::default(),
            line_width: DEFAULT_LINE_WIDTH,
            active_glyph: palette[0].clone(),
            palette,
        }
    }
}

impl ToolState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to the marker tool.
    pub fn select_marker(&mut self) {
        self.current_tool = ToolKind::Marker;
    }

    /// Switch to the sticker tool with the palette glyph at `index`.
    /// Out-of-range indices are ignored.
    pub fn select_sticker(&mut self, index: usize) {
        if let Some(glyph) = self.palette.get(index) {
            self.active_glyph = glyph.clone();
            self.current_tool = ToolKind::Sticker;
        }
    }

    /// Set the marker line width.
    pub fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    /// Add a glyph to the palette after trimming surrounding whitespace.
    ///
    /// Empty or whitespace-only input is rejected silently (returns None).
    /// Duplicates are allowed. Returns the new glyph's palette index.
    pub fn add_glyph(&mut self, glyph: &str) -> Option<usize> {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            return None;
        }
        self.palette.push(glyph.to_string());
        Some(self.palette.len() - 1)
    }

    /// The sticker palette, in insertion order.
    pub fn palette(&self) -> &[String] {
        &self.palette
    }
}
