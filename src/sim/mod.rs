//! Deterministic game simulation
//!
//! Integer-pixel entities, strict AABB collisions and the fixed-step game
//! state machine. Nothing in here touches threads or the host surface.

pub mod collision;
pub mod entity;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::colliding;
pub use entity::{Ball, Body, ENEMY_IMAGE, Enemy, Paddle, Sprite, SpriteEvent, World};
pub use rect::{Rect, Screen};
pub use state::{Game, Outcome, Snapshot};
