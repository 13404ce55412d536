//! Frame budget and rolling FPS average

use std::time::Duration;

/// Caps the loop at a target rate and averages the achieved rate
///
/// The average is recomputed every `target_fps` frames and is diagnostic only.
#[derive(Debug, Clone)]
pub struct FramePacer {
    target_fps: u32,
    budget: Duration,
    total_time: Duration,
    frame_count: u32,
    average_fps: f32,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        let target_fps = target_fps.max(1);
        Self {
            target_fps,
            budget: Duration::from_millis(1000 / u64::from(target_fps)),
            total_time: Duration::ZERO,
            frame_count: 0,
            average_fps: target_fps as f32,
        }
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Fixed per-frame budget (`1000 / target_fps` ms)
    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn average_fps(&self) -> f32 {
        self.average_fps
    }

    /// How long to sleep after a frame that took `elapsed`
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.budget
            .checked_sub(elapsed)
            .filter(|rest| !rest.is_zero())
    }

    /// Account for one full frame (work plus sleep)
    ///
    /// Returns the new average once every `target_fps` frames.
    pub fn record(&mut self, frame_time: Duration) -> Option<f32> {
        self.total_time += frame_time;
        self.frame_count += 1;

        if self.frame_count < self.target_fps {
            return None;
        }

        let secs = self.total_time.as_secs_f32();
        if secs > 0.0 {
            self.average_fps = self.frame_count as f32 / secs;
        }
        self.frame_count = 0;
        self.total_time = Duration::ZERO;
        Some(self.average_fps)
    }
}
