//! Rendering abstraction
//!
//! The host owns the real drawing primitives; the game only talks to a
//! [`RenderTarget`] acquired from the surface once per frame.

pub mod recording;
pub mod scene;

pub use recording::{DrawCommand, RecordingTarget};
pub use scene::draw_game;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// An RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(136, 136, 136);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Text paint settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
}

/// An exclusive drawable buffer for a single frame
///
/// Implemented by the host for its canvas type. All coordinates are pixels
/// in the same space as the game's [`Screen`](crate::sim::Screen).
pub trait RenderTarget {
    /// Fill the whole target
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill the oval inscribed in `rect`
    fn fill_oval(&mut self, rect: Rect, color: Color);

    /// Draw a host-loaded image, scaled into `rect`
    fn draw_image(&mut self, image: &str, rect: Rect);

    /// Bounds (width, height) of `text` at the given size
    fn measure_text(&self, text: &str, size: f32) -> IVec2;

    /// Draw text with its baseline-left corner at `origin`
    fn draw_text(&mut self, text: &str, origin: IVec2, style: TextStyle);
}
