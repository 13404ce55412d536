//! Host-facing game panel
//!
//! Owns the game, the surface and the current frame loop. The host calls the
//! `on_surface_*` lifecycle hooks from its UI thread and forwards touches
//! from wherever they arrive.

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

use super::surface::Surface;
use super::{HostEvent, TouchEvent};
use crate::engine::{EngineError, FrameLoop, LoopState, Stage, lock};
use crate::settings::{ConfigError, GameConfig};
use crate::sim::Game;

pub struct GamePanel<S: Surface> {
    config: GameConfig,
    surface: Arc<Mutex<S>>,
    stage: Arc<Mutex<Stage>>,
    events: Sender<HostEvent>,
    frame_loop: Option<FrameLoop>,
}

impl<S: Surface> GamePanel<S> {
    /// Validate the config and build the game; no thread runs until the surface is ready
    pub fn new(config: GameConfig, surface: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let (stage, events) = Stage::new(Some(Game::new(&config)));
        Ok(Self {
            config,
            surface: Arc::new(Mutex::new(surface)),
            stage: Arc::new(Mutex::new(stage)),
            events,
            frame_loop: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The host surface can be drawn to: start a fresh loop
    ///
    /// Any previous loop is stopped and joined first. The ball is launched
    /// the first time a surface becomes ready.
    pub fn on_surface_ready(&mut self) -> Result<(), EngineError> {
        if let Some(mut previous) = self.frame_loop.take() {
            log::debug!("Surface ready while a loop is live, stopping it first");
            previous.stop()?;
        }

        if let Some(game) = lock(&self.stage).game_mut() {
            if !game.started {
                game.start();
            }
        }

        let frame_loop = FrameLoop::spawn(
            Arc::clone(&self.surface),
            Arc::clone(&self.stage),
            self.config.target_fps,
            self.config.stop_timeout(),
        )?;
        self.frame_loop = Some(frame_loop);
        Ok(())
    }

    /// The host resized or reformatted the surface
    pub fn on_surface_changed(&self, width: i32, height: i32) {
        log::debug!("Surface changed to {}x{}", width, height);
        self.with_surface(|surface| surface.configure(width, height));
    }

    /// The host is destroying the surface: stop and join before returning
    pub fn on_surface_torn_down(&mut self) -> Result<(), EngineError> {
        match self.frame_loop.take() {
            Some(mut frame_loop) => frame_loop.stop(),
            None => Ok(()),
        }
    }

    /// Forward a touch to the game; applied at the start of the next tick
    pub fn touch(&self, event: TouchEvent) {
        self.send(event.into());
    }

    pub fn start(&self) {
        self.send(HostEvent::Start);
    }

    pub fn pause(&self) {
        self.send(HostEvent::Pause);
    }

    pub fn unpause(&self) {
        self.send(HostEvent::Unpause);
    }

    fn send(&self, event: HostEvent) {
        if self.events.send(event).is_err() {
            log::warn!("Dropped {:?}: game stage is gone", event);
        }
    }

    /// Run `f` against the game between ticks
    pub fn with_game<R>(&self, f: impl FnOnce(&Game) -> R) -> Option<R> {
        lock(&self.stage).game().map(f)
    }

    /// Run `f` while holding the render lock, so no frame is mid-draw
    pub fn with_surface<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut lock(&self.surface))
    }

    pub fn loop_state(&self) -> LoopState {
        self.frame_loop
            .as_ref()
            .map_or(LoopState::Stopped, FrameLoop::state)
    }

    pub fn is_running(&self) -> bool {
        self.loop_state() == LoopState::Running
    }

    /// Diagnostic FPS of the current loop, if any
    pub fn average_fps(&self) -> Option<f32> {
        self.frame_loop.as_ref().map(FrameLoop::average_fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::{Duration, Instant};

    use glam::IVec2;

    use crate::consts::PRE_ROLL_TICKS;
    use crate::platform::HeadlessSurface;

    fn panel() -> GamePanel<HeadlessSurface> {
        let config = GameConfig {
            target_fps: 200,
            seed: Some(5),
            ..GameConfig::default()
        };
        GamePanel::new(config, HeadlessSurface::new(800, 480)).unwrap()
    }

    fn wait_for(mut cond: impl FnMut() -> bool) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !cond() {
            assert!(Instant::now() < deadline, "timed out waiting");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let result = GamePanel::new(GameConfig::for_screen(0, 0), HeadlessSurface::new(0, 0));
        assert!(result.is_err());
    }

    #[test]
    fn test_nothing_runs_before_surface_ready() {
        let panel = panel();
        assert_eq!(panel.loop_state(), LoopState::Stopped);
        assert_eq!(panel.average_fps(), None);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(panel.with_game(|g| g.time_before_start), Some(PRE_ROLL_TICKS));
        assert_eq!(panel.with_surface(|s| s.presented()), 0);
    }

    #[test]
    fn test_surface_lifecycle() {
        let mut panel = panel();
        panel.on_surface_ready().unwrap();
        assert!(panel.is_running());
        assert_eq!(panel.with_game(|g| g.started), Some(true));
        wait_for(|| panel.with_surface(|s| s.presented()) >= 3);

        panel.on_surface_torn_down().unwrap();
        assert_eq!(panel.loop_state(), LoopState::Stopped);
        let presented = panel.with_surface(|s| s.presented());
        thread::sleep(Duration::from_millis(20));
        assert_eq!(panel.with_surface(|s| s.presented()), presented);

        // A new session picks up the same game where it left off
        let ticks = panel.with_game(|g| g.time_before_start).unwrap();
        panel.on_surface_ready().unwrap();
        wait_for(|| panel.with_game(|g| g.time_before_start).unwrap() < ticks);
        panel.on_surface_torn_down().unwrap();
        panel.on_surface_torn_down().unwrap();
    }

    #[test]
    fn test_ready_twice_replaces_loop() {
        let mut panel = panel();
        panel.on_surface_ready().unwrap();
        panel.on_surface_ready().unwrap();
        assert!(panel.is_running());
        panel.on_surface_torn_down().unwrap();
    }

    #[test]
    fn test_touch_and_pause_reach_game() {
        let mut panel = panel();
        panel.on_surface_ready().unwrap();

        panel.touch(TouchEvent::Move(IVec2::new(0, 300)));
        panel.pause();
        wait_for(|| panel.with_game(|g| g.paused).unwrap());
        assert_eq!(panel.with_game(|g| g.paddle.body.pos.y), Some(260));

        // Paused: drags no longer move the paddle
        panel.touch(TouchEvent::Down(IVec2::new(0, 100)));
        panel.unpause();
        wait_for(|| !panel.with_game(|g| g.paused).unwrap());
        assert_eq!(panel.with_game(|g| g.paddle.body.pos.y), Some(260));

        panel.on_surface_torn_down().unwrap();
    }

    #[test]
    fn test_surface_changed_reconfigures_under_lock() {
        let mut panel = panel();
        panel.on_surface_ready().unwrap();
        panel.on_surface_changed(1024, 600);
        assert_eq!(panel.with_surface(|s| s.size()), (1024, 600));
        panel.on_surface_torn_down().unwrap();
    }

    #[test]
    fn test_presented_frame_shows_hud() {
        let mut panel = panel();
        panel.on_surface_ready().unwrap();
        wait_for(|| panel.with_surface(|s| s.presented()) >= 1);
        panel.on_surface_torn_down().unwrap();

        let has_hud = panel.with_surface(|s| {
            s.last_frame()
                .is_some_and(|f| f.contains_text("Lives: 3") && f.contains_text("Score: 0"))
        });
        assert!(has_hud);
    }
}
