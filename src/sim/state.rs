//! Game state and session setup
//!
//! Everything the simulation mutates lives in [`Game`]. The tick rules and
//! input handlers are in `tick.rs`; drawing is in the renderer.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Ball, Enemy, Paddle};
use super::rect::Screen;
use crate::consts::*;
use crate::settings::GameConfig;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every enemy was removed
    Won,
    /// Every life was lost
    Lost,
}

/// Serializable view of the game for HUDs and diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub started: bool,
    pub paused: bool,
    pub game_over: bool,
    pub outcome: Option<Outcome>,
    pub score: u32,
    pub lives: u8,
    pub time_before_start: u32,
    pub game_over_time: u32,
    pub ball: IVec2,
    pub ball_velocity: IVec2,
    pub paddle: IVec2,
    pub enemies: usize,
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct Game {
    pub(super) screen: Screen,
    pub(super) rng: Pcg32,
    pub(super) enemy_count: usize,
    pub(super) clamp_paddle: bool,
    pub started: bool,
    pub paused: bool,
    pub game_over: bool,
    pub score: u32,
    pub lives: u8,
    /// Ticks elapsed since the game ended (gates restart)
    pub game_over_time: u32,
    /// Pre-roll ticks remaining before entities move
    pub time_before_start: u32,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Live enemies (order irrelevant)
    pub enemies: Vec<Enemy>,
}

impl Game {
    /// Create a new session from the host configuration
    pub fn new(config: &GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        log::debug!("New game with seed {}", seed);
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }

    fn with_rng(config: &GameConfig, rng: Pcg32) -> Self {
        let screen = config.screen();
        let ball_width = screen.width / BALL_WIDTH_DIVISOR;

        // Ball centered on screen
        let ball = Ball::new(
            screen.width / 2 - ball_width / 2,
            screen.height / 2 - ball_width / 2,
            ball_width,
        );

        // Paddle on the left, halfway down
        let paddle = Paddle::new(
            ball_width * 2,
            screen.height / 2 - ball_width / 2,
            ball_width,
            ball_width * PADDLE_HEIGHT_FACTOR,
        );

        let mut game = Self {
            screen,
            rng,
            enemy_count: config.enemy_count,
            clamp_paddle: config.clamp_paddle,
            started: false,
            paused: false,
            game_over: false,
            score: 0,
            lives: INITIAL_LIVES,
            game_over_time: 0,
            time_before_start: PRE_ROLL_TICKS,
            ball,
            paddle,
            enemies: Vec::with_capacity(config.enemy_count.min(MAX_ENEMY_COUNT)),
        };
        game.load_enemies();
        game
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Replace the live enemy set with a freshly randomized one
    ///
    /// Enemies spawn in the right half of the screen, fully on screen.
    pub fn load_enemies(&mut self) {
        let size = self.screen.width / ENEMY_WIDTH_DIVISOR;
        let x_span = (self.screen.width / 2 - size).max(1);
        let y_span = (self.screen.height - size).max(1);

        self.enemies.clear();
        for _ in 0..self.enemy_count {
            let x = self.screen.width / 2 + self.rng.random_range(0..x_span);
            let y = self.rng.random_range(0..y_span);
            self.enemies.push(Enemy::new(x, y, size, size));
        }
        log::debug!("Spawned {} enemies", self.enemies.len());
    }

    /// Put the ball back near mid-screen and restart the pre-roll
    pub fn reset_ball_and_time(&mut self) {
        let body = &mut self.ball.body;
        let x_span = (body.width() * 3).max(1);
        let y_span = (self.screen.height - body.height()).max(1);

        body.pos.x = self.screen.width / 2 + self.rng.random_range(0..x_span);
        body.pos.y = self.rng.random_range(0..y_span);
        // Head away from the paddle
        body.vel.x = body.vel.x.abs();

        self.time_before_start = PRE_ROLL_TICKS;
    }

    /// Derived end state, if the game is over
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.game_over {
            None
        } else if self.enemies.is_empty() {
            Some(Outcome::Won)
        } else if self.lives == 0 {
            Some(Outcome::Lost)
        } else {
            None
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            started: self.started,
            paused: self.paused,
            game_over: self.game_over,
            outcome: self.outcome(),
            score: self.score,
            lives: self.lives,
            time_before_start: self.time_before_start,
            game_over_time: self.game_over_time,
            ball: self.ball.body.pos,
            ball_velocity: self.ball.body.vel,
            paddle: self.paddle.body.pos,
            enemies: self.enemies.len(),
        }
    }
}
