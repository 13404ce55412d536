//! Surface Pong - a paddle-and-ball arcade game over a host drawing surface
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state machine)
//! - `renderer`: Render target abstraction and scene drawing
//! - `engine`: Frame-paced background loop
//! - `platform`: Host surface, input and lifecycle contract
//! - `settings`: Session configuration

pub mod engine;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use engine::{EngineError, FrameLoop, LoopState};
pub use platform::{GamePanel, HeadlessSurface, Surface, SurfaceError, TouchEvent};
pub use renderer::{Color, RenderTarget};
pub use settings::{ConfigError, GameConfig};
pub use sim::{Game, Outcome};

/// Game configuration constants
pub mod consts {
    /// Ticks of pre-roll before motion starts (at startup and after each miss)
    pub const PRE_ROLL_TICKS: u32 = 200;
    /// Ticks a finished game must sit before a touch restarts it
    pub const RESTART_DELAY_TICKS: u32 = 200;
    /// Lives at the start of every session
    pub const INITIAL_LIVES: u8 = 3;
    /// Score awarded per enemy removed
    pub const POINTS_PER_ENEMY: u32 = 100;

    /// Frame rate cap for the render loop
    pub const DEFAULT_TARGET_FPS: u32 = 30;
    /// Enemies spawned per session
    pub const DEFAULT_ENEMY_COUNT: usize = 5;
    /// Upper bound on the configured enemy count
    pub const MAX_ENEMY_COUNT: usize = 64;

    /// Ball width is screen width / 40
    pub const BALL_WIDTH_DIVISOR: i32 = 40;
    /// Enemy width is screen width / 20
    pub const ENEMY_WIDTH_DIVISOR: i32 = 20;
    /// Paddle is one ball wide and four balls tall
    pub const PADDLE_HEIGHT_FACTOR: i32 = 4;

    /// HUD text size (lives/score)
    pub const HUD_TEXT_SIZE: f32 = 12.0;
    /// Win/lose banner text size
    pub const BANNER_TEXT_SIZE: f32 = 20.0;
}
