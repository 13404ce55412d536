//! Fixed-step simulation tick and input handling
//!
//! One call to [`Game::update`] is one tick. Motion is a fixed displacement
//! per tick, so the result depends only on the sequence of ticks and inputs.

use glam::IVec2;

use super::collision::colliding;
use super::entity::{Sprite, SpriteEvent, World};
use super::state::Game;
use crate::consts::*;

impl Game {
    /// Launch the ball diagonally at one ball width per tick
    pub fn start(&mut self) {
        self.started = true;
        let speed = self.ball.body.width();
        self.ball.body.vel = IVec2::new(speed, speed);
        log::info!("Game started");
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn unpause(&mut self) {
        self.paused = false;
    }

    /// Advance the game by one tick
    pub fn update(&mut self) {
        if self.time_before_start > 0 {
            self.time_before_start -= 1;
            return;
        }

        if self.game_over {
            self.game_over_time = self.game_over_time.saturating_add(1);
            return;
        }

        if self.paused {
            return;
        }

        let world = World {
            screen: self.screen,
            paddle: self.paddle.rect(),
        };

        self.paddle.update(&world);

        if let Some(SpriteEvent::Missed) = self.ball.update(&world) {
            self.handle_miss();
            if self.game_over {
                return;
            }
        }

        // Reverse scan so swap_remove never skips an unvisited enemy
        let ball = self.ball.rect();
        for i in (0..self.enemies.len()).rev() {
            self.enemies[i].update(&world);
            if colliding(ball, self.enemies[i].rect()) {
                self.enemies.swap_remove(i);
                self.score += POINTS_PER_ENEMY;
                log::debug!("Enemy hit, score {}", self.score);

                if self.enemies.is_empty() {
                    self.game_over = true;
                    log::info!("All enemies cleared, final score {}", self.score);
                }
            }
        }
    }

    /// The ball got past the paddle: lose a life and re-serve
    pub fn handle_miss(&mut self) {
        self.reset_ball_and_time();

        self.lives = self.lives.saturating_sub(1);
        log::debug!("Missed, {} lives left", self.lives);
        if self.lives == 0 {
            self.game_over = true;
            log::info!("Out of lives, final score {}", self.score);
        }
    }

    pub fn handle_touch_down(&mut self, point: IVec2) {
        self.handle_touch_down_or_move(point);
    }

    pub fn handle_touch_move(&mut self, point: IVec2) {
        self.handle_touch_down_or_move(point);
    }

    pub fn handle_touch_up(&mut self, _point: IVec2) {}

    /// Presses and drags both steer the paddle and may restart a finished game
    fn handle_touch_down_or_move(&mut self, point: IVec2) {
        if !self.paused {
            self.paddle.center_on(point.y);
            if self.clamp_paddle {
                self.paddle.clamp_to(self.screen);
            }
        }

        self.try_restart();
    }

    /// Restart once the game has been over long enough
    ///
    /// Returns true if the session was reset.
    pub fn try_restart(&mut self) -> bool {
        if !self.game_over || self.game_over_time < RESTART_DELAY_TICKS {
            return false;
        }

        self.game_over = false;
        self.game_over_time = 0;
        self.score = 0;
        self.lives = INITIAL_LIVES;
        self.load_enemies();
        self.reset_ball_and_time();
        log::info!("Game restarted");
        true
    }
}
