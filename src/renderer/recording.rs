//! In-memory render target that records draw calls
//!
//! Backs the headless surface; tests assert on the recorded commands.

use glam::IVec2;

use super::{Color, RenderTarget, TextStyle};
use crate::sim::Rect;

/// Approximate glyph advance: 3/5 of the text size, rounded up
const GLYPH_ADVANCE: (i32, i32) = (3, 5);

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect { rect: Rect, color: Color },
    FillOval { rect: Rect, color: Color },
    Image { image: String, rect: Rect },
    Text { text: String, origin: IVec2, style: TextStyle },
}

/// Render target that keeps every command issued during a frame
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    pub commands: Vec<DrawCommand>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text strings drawn this frame, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|text| text == needle)
    }

    /// Number of images drawn with the given key
    pub fn image_count(&self, image: &str) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Image { image: i, .. } if i == image))
            .count()
    }
}

impl RenderTarget for RecordingTarget {
    fn clear(&mut self, color: Color) {
        // Anything issued before a clear is invisible
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_oval(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillOval { rect, color });
    }

    fn draw_image(&mut self, image: &str, rect: Rect) {
        self.commands.push(DrawCommand::Image {
            image: image.to_string(),
            rect,
        });
    }

    fn measure_text(&self, text: &str, size: f32) -> IVec2 {
        let px = size.round() as i32;
        let (num, den) = GLYPH_ADVANCE;
        let width = (text.chars().count() as i32 * px * num + den - 1) / den;
        IVec2::new(width, px)
    }

    fn draw_text(&mut self, text: &str, origin: IVec2, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            style,
        });
    }
}
