//! Platform abstraction layer
//!
//! Handles the host side of the game:
//! - Drawing surface contract
//! - Touch input and control events
//! - Surface lifecycle (`GamePanel`)

pub mod headless;
pub mod panel;
pub mod surface;

pub use headless::HeadlessSurface;
pub use panel::GamePanel;
pub use surface::{Surface, SurfaceError};

use glam::IVec2;

use crate::sim::Game;

/// A decoded touch, in surface pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEvent {
    Down(IVec2),
    Move(IVec2),
    Up(IVec2),
}

/// Anything the host asks of the game between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Touch(TouchEvent),
    Start,
    Pause,
    Unpause,
}

impl HostEvent {
    pub fn apply_to(self, game: &mut Game) {
        match self {
            HostEvent::Touch(TouchEvent::Down(point)) => game.handle_touch_down(point),
            HostEvent::Touch(TouchEvent::Move(point)) => game.handle_touch_move(point),
            HostEvent::Touch(TouchEvent::Up(point)) => game.handle_touch_up(point),
            HostEvent::Start => game.start(),
            HostEvent::Pause => game.pause(),
            HostEvent::Unpause => game.unpause(),
        }
    }
}

impl From<TouchEvent> for HostEvent {
    fn from(event: TouchEvent) -> Self {
        HostEvent::Touch(event)
    }
}
