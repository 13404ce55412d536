//! Host drawing surface contract

use thiserror::Error;

use crate::renderer::RenderTarget;

/// Why a render target could not be acquired or presented
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// No buffer is available right now (surface torn down or mid-resize)
    #[error("surface is not available")]
    Unavailable,
    /// The buffer was invalidated while in use
    #[error("surface lost: {0}")]
    Lost(String),
}

/// A double-buffered surface whose buffers are owned by the host
///
/// Only the frame loop calls these, and only while holding the surface lock.
/// Both operations may fail transiently; the loop skips rather than retries.
pub trait Surface: Send + 'static {
    type Target: RenderTarget;

    /// Lock the back buffer for exclusive drawing
    fn try_acquire(&mut self) -> Result<Self::Target, SurfaceError>;

    /// Hand a drawn buffer back to the host for display
    fn present(&mut self, target: Self::Target) -> Result<(), SurfaceError>;

    /// The host changed the buffer format or size
    fn configure(&mut self, _width: i32, _height: i32) {}
}
