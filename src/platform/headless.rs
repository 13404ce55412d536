//! In-memory surface for tests and the demo binary

use super::surface::{Surface, SurfaceError};
use crate::renderer::RecordingTarget;

/// Surface that hands out [`RecordingTarget`]s and keeps the last presented one
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    width: i32,
    height: i32,
    available: bool,
    fail_present: bool,
    acquired: u64,
    presented: u64,
    last_frame: Option<RecordingTarget>,
}

impl HeadlessSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            available: true,
            fail_present: false,
            acquired: 0,
            presented: 0,
            last_frame: None,
        }
    }

    /// Simulate the host tearing the buffer down (or bringing it back)
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Make every present fail
    pub fn set_fail_present(&mut self, fail: bool) {
        self.fail_present = fail;
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn acquired(&self) -> u64 {
        self.acquired
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }

    pub fn last_frame(&self) -> Option<&RecordingTarget> {
        self.last_frame.as_ref()
    }
}

impl Surface for HeadlessSurface {
    type Target = RecordingTarget;

    fn try_acquire(&mut self) -> Result<RecordingTarget, SurfaceError> {
        if !self.available {
            return Err(SurfaceError::Unavailable);
        }
        self.acquired += 1;
        Ok(RecordingTarget::new())
    }

    fn present(&mut self, target: RecordingTarget) -> Result<(), SurfaceError> {
        if self.fail_present {
            return Err(SurfaceError::Lost("present rejected".to_string()));
        }
        self.presented += 1;
        self.last_frame = Some(target);
        Ok(())
    }

    fn configure(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_surface_refuses_targets() {
        let mut surface = HeadlessSurface::new(800, 480);
        surface.set_available(false);
        assert_eq!(surface.try_acquire().unwrap_err(), SurfaceError::Unavailable);
        assert_eq!(surface.acquired(), 0);
    }

    #[test]
    fn test_present_keeps_last_frame() {
        let mut surface = HeadlessSurface::new(800, 480);
        let target = surface.try_acquire().unwrap();
        surface.present(target).unwrap();
        assert_eq!(surface.presented(), 1);
        assert!(surface.last_frame().is_some());

        surface.set_fail_present(true);
        let target = surface.try_acquire().unwrap();
        assert!(matches!(surface.present(target), Err(SurfaceError::Lost(_))));
        assert_eq!(surface.presented(), 1);
    }
}
