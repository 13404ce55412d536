//! The game slot the frame loop drives
//!
//! Host events queue up on a channel and are drained here once per tick, so
//! only the thread holding the stage lock ever mutates the game.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::platform::HostEvent;
use crate::renderer::RenderTarget;
use crate::sim::Game;

pub struct Stage {
    game: Option<Game>,
    inbox: Receiver<HostEvent>,
}

impl Stage {
    /// Create a stage and the sender hosts use to reach it
    pub fn new(game: Option<Game>) -> (Self, Sender<HostEvent>) {
        let (tx, inbox) = mpsc::channel();
        (Self { game, inbox }, tx)
    }

    pub fn install(&mut self, game: Game) {
        self.game = Some(game);
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut Game> {
        self.game.as_mut()
    }

    /// Drain pending events, advance one tick and draw
    ///
    /// Returns false when no game is installed yet; queued events are kept
    /// for the first tick that has one.
    pub fn tick(&mut self, target: Option<&mut dyn RenderTarget>) -> bool {
        let Some(game) = self.game.as_mut() else {
            log::trace!("No game installed, skipping tick");
            return false;
        };

        while let Ok(event) = self.inbox.try_recv() {
            event.apply_to(game);
        }

        game.update();
        game.draw(target);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    use crate::platform::TouchEvent;
    use crate::renderer::RecordingTarget;
    use crate::settings::GameConfig;

    fn game() -> Game {
        Game::new(&GameConfig {
            seed: Some(3),
            ..GameConfig::default()
        })
    }

    #[test]
    fn test_empty_stage_skips() {
        let (mut stage, tx) = Stage::new(None);
        tx.send(HostEvent::Pause).unwrap();

        let mut target = RecordingTarget::new();
        assert!(!stage.tick(Some(&mut target)));
        assert!(target.is_empty());

        // Event survives until a game shows up
        stage.install(game());
        assert!(stage.tick(None));
        assert!(stage.game().unwrap().paused);
    }

    #[test]
    fn test_events_drained_before_update() {
        let (mut stage, tx) = Stage::new(Some(game()));
        tx.send(HostEvent::Touch(TouchEvent::Move(IVec2::new(5, 300)))).unwrap();
        tx.send(HostEvent::Start).unwrap();

        let mut target = RecordingTarget::new();
        assert!(stage.tick(Some(&mut target)));

        let game = stage.game().unwrap();
        assert_eq!(game.paddle.body.pos.y, 260);
        assert!(game.started);
        assert_eq!(game.time_before_start, crate::consts::PRE_ROLL_TICKS - 1);
        assert!(!target.is_empty());
    }
}
