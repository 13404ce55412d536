//! Scene drawing: entities, HUD and the end-of-game banner

use glam::IVec2;

use super::{Color, RenderTarget, TextStyle};
use crate::consts::{BANNER_TEXT_SIZE, HUD_TEXT_SIZE};
use crate::sim::{Game, Outcome, Sprite};

pub const WIN_TEXT: &str = "You win!";
pub const LOSE_TEXT: &str = "Better luck next time!";

/// Render the current game state into `target`
///
/// A missing target (surface not available this frame) draws nothing.
pub fn draw_game(game: &Game, target: Option<&mut dyn RenderTarget>) {
    let Some(target) = target else {
        return;
    };
    let screen = game.screen();

    target.clear(Color::BLACK);

    game.paddle.draw(target);
    game.ball.draw(target);
    for enemy in &game.enemies {
        enemy.draw(target);
    }

    let hud = TextStyle {
        size: HUD_TEXT_SIZE,
        color: Color::WHITE,
    };

    // Lives a quarter of the way across, score three quarters, both three text-heights down
    let lives = format!("Lives: {}", game.lives);
    let bounds = target.measure_text(&lives, hud.size);
    let origin = IVec2::new(screen.width / 4 - bounds.x / 2, bounds.y * 3);
    target.draw_text(&lives, origin, hud);

    let score = format!("Score: {}", game.score);
    let bounds = target.measure_text(&score, hud.size);
    let origin = IVec2::new(3 * screen.width / 4 - bounds.x / 2, bounds.y * 3);
    target.draw_text(&score, origin, hud);

    let banner = match game.outcome() {
        Some(Outcome::Won) => WIN_TEXT,
        Some(Outcome::Lost) => LOSE_TEXT,
        None => return,
    };
    let style = TextStyle {
        size: BANNER_TEXT_SIZE,
        color: Color::YELLOW,
    };
    let bounds = target.measure_text(banner, style.size);
    let origin = IVec2::new(
        screen.width / 2 - bounds.x / 2,
        screen.height / 2 - bounds.y / 2,
    );
    target.draw_text(banner, origin, style);
}

impl Game {
    /// Render the frozen or live frame; see [`draw_game`]
    pub fn draw(&self, target: Option<&mut dyn RenderTarget>) {
        draw_game(self, target);
    }
}
