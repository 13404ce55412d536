//! Real-time execution engine
//!
//! A dedicated thread paces simulation and rendering against the host
//! surface at a capped frame rate.

pub mod frame_loop;
pub mod pacer;
pub mod stage;

pub use frame_loop::{FrameLoop, LoopState};
pub use pacer::FramePacer;
pub use stage::Stage;

pub(crate) use frame_loop::lock;

use std::time::Duration;

use thiserror::Error;

/// Frame loop lifecycle failures
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to spawn frame loop thread: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("frame loop did not stop within {0:?}")]
    StopTimeout(Duration),
    #[error("frame loop thread panicked")]
    Panicked,
}
