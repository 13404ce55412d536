//! Axis-aligned rectangles and screen geometry
//!
//! All coordinates are integer pixels with the origin at the top-left corner.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (right/bottom exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Build from edges, normalizing so right >= left and bottom >= top
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left: left.min(right),
            top: top.min(bottom),
            right: left.max(right),
            bottom: top.max(bottom),
        }
    }

    /// Build from an origin and a size
    pub fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self::from_xywh(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Drawable area supplied by the host, fixed for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    pub width: i32,
    pub height: i32,
}

impl Screen {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_normalizes_edges() {
        let rect = Rect::new(10, 20, 0, 5);
        assert_eq!(rect, Rect::new(0, 5, 10, 20));
        assert_eq!(rect.width(), 10);
        assert_eq!(rect.height(), 15);
    }

    #[test]
    fn test_rect_from_xywh() {
        let rect = Rect::from_xywh(40, 230, 20, 80);
        assert_eq!(rect.left, 40);
        assert_eq!(rect.right, 60);
        assert_eq!(rect.bottom, 310);
        assert_eq!(Rect::from_pos_size(IVec2::new(40, 230), IVec2::new(20, 80)), rect);
    }
}
