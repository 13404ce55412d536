//! Movable entities: ball, paddle and enemies
//!
//! Each kind shares a [`Body`] and implements [`Sprite`] with its own update
//! and draw rules. The game dispatches through the trait every tick.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::colliding;
use super::rect::{Rect, Screen};
use crate::renderer::{Color, RenderTarget};

/// Image key the host resolves for enemy sprites
pub const ENEMY_IMAGE: &str = "enemy";

/// Position, size and per-tick velocity in integer pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Body {
    pub pos: IVec2,
    pub size: IVec2,
    pub vel: IVec2,
}

impl Body {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
            vel: IVec2::ZERO,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// Advance one tick
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// What an entity update may report back to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteEvent {
    /// The ball left the screen past the paddle
    Missed,
}

/// Read-only view of the world an entity updates against
#[derive(Debug, Clone, Copy)]
pub struct World {
    pub screen: Screen,
    pub paddle: Rect,
}

/// Shared capability of everything the game moves and draws
pub trait Sprite {
    fn body(&self) -> &Body;

    /// Advance one tick
    fn update(&mut self, world: &World) -> Option<SpriteEvent>;

    fn draw(&self, target: &mut dyn RenderTarget);

    fn rect(&self) -> Rect {
        self.body().rect()
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub body: Body,
}

impl Ball {
    pub fn new(x: i32, y: i32, width: i32) -> Self {
        Self {
            body: Body::new(x, y, width, width),
        }
    }
}

impl Sprite for Ball {
    fn body(&self) -> &Body {
        &self.body
    }

    fn update(&mut self, world: &World) -> Option<SpriteEvent> {
        let body = &mut self.body;
        body.advance();

        // Right wall
        if body.pos.x + body.width() >= world.screen.width {
            body.vel.x = -body.vel.x.abs();
        }

        // Top and bottom walls
        if body.pos.y <= 0 {
            body.vel.y = body.vel.y.abs();
        } else if body.pos.y + body.height() >= world.screen.height {
            body.vel.y = -body.vel.y.abs();
        }

        // Paddle contact always sends the ball back toward the enemies
        if colliding(body.rect(), world.paddle) {
            body.vel.x = body.vel.x.abs();
        }

        if body.pos.x + body.width() <= 0 {
            return Some(SpriteEvent::Missed);
        }

        None
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        target.fill_oval(self.rect(), Color::MAGENTA);
    }
}

/// The player's paddle, moved only by touch input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub body: Body,
}

impl Paddle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            body: Body::new(x, y, width, height),
        }
    }

    /// Put the paddle's vertical center on `y`
    pub fn center_on(&mut self, y: i32) {
        self.body.pos.y = y - self.body.height() / 2;
    }

    /// Keep the paddle fully on screen
    pub fn clamp_to(&mut self, screen: Screen) {
        let max_y = (screen.height - self.body.height()).max(0);
        self.body.pos.y = self.body.pos.y.clamp(0, max_y);
    }
}

impl Sprite for Paddle {
    fn body(&self) -> &Body {
        &self.body
    }

    fn update(&mut self, _world: &World) -> Option<SpriteEvent> {
        // Movement follows touch input between ticks
        None
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        target.fill_rect(self.rect(), Color::GRAY);
    }
}

/// A stationary target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub body: Body,
}

impl Enemy {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            body: Body::new(x, y, width, height),
        }
    }
}

impl Sprite for Enemy {
    fn body(&self) -> &Body {
        &self.body
    }

    fn update(&mut self, _world: &World) -> Option<SpriteEvent> {
        // Hook for movement or animation; enemies are fixed in this mode
        self.body.advance();
        None
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        target.draw_image(ENEMY_IMAGE, self.rect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingTarget};

    fn world() -> World {
        World {
            screen: Screen::new(800, 480),
            paddle: Rect::from_xywh(40, 230, 20, 80),
        }
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut ball = Ball::new(390, 100, 20);
        ball.body.vel = IVec2::new(20, 20);
        assert_eq!(ball.update(&world()), None);
        assert_eq!(ball.body.pos, IVec2::new(410, 120));
    }

    #[test]
    fn test_ball_reflects_off_right_wall() {
        let mut ball = Ball::new(760, 100, 20);
        ball.body.vel = IVec2::new(20, 20);
        ball.update(&world());
        assert_eq!(ball.body.pos.x, 780);
        assert_eq!(ball.body.vel.x, -20);
    }

    #[test]
    fn test_ball_reflects_off_top_and_bottom() {
        let mut ball = Ball::new(400, 20, 20);
        ball.body.vel = IVec2::new(20, -20);
        ball.update(&world());
        assert_eq!(ball.body.vel.y, 20);

        let mut ball = Ball::new(400, 440, 20);
        ball.body.vel = IVec2::new(20, 20);
        ball.update(&world());
        assert_eq!(ball.body.vel.y, -20);
    }

    #[test]
    fn test_ball_bounces_away_from_paddle() {
        let mut ball = Ball::new(60, 240, 20);
        ball.body.vel = IVec2::new(-20, 20);
        assert_eq!(ball.update(&world()), None);
        assert_eq!(ball.body.pos, IVec2::new(40, 260));
        assert_eq!(ball.body.vel.x, 20);
    }

    #[test]
    fn test_ball_reports_miss_past_left_edge() {
        let mut ball = Ball::new(0, 20, 20);
        ball.body.vel = IVec2::new(-20, 20);
        assert_eq!(ball.update(&world()), Some(SpriteEvent::Missed));
    }

    #[test]
    fn test_ball_partially_off_screen_is_not_a_miss() {
        let mut ball = Ball::new(10, 20, 20);
        ball.body.vel = IVec2::new(-20, 20);
        assert_eq!(ball.update(&world()), None);
        assert_eq!(ball.body.pos.x, -10);
    }

    #[test]
    fn test_paddle_center_and_clamp() {
        let mut paddle = Paddle::new(40, 0, 20, 80);
        paddle.center_on(300);
        assert_eq!(paddle.body.pos.y, 260);

        paddle.center_on(10);
        assert_eq!(paddle.body.pos.y, -30);
        paddle.clamp_to(Screen::new(800, 480));
        assert_eq!(paddle.body.pos.y, 0);

        paddle.center_on(470);
        paddle.clamp_to(Screen::new(800, 480));
        assert_eq!(paddle.body.pos.y, 400);
    }

    #[test]
    fn test_paddle_and_enemy_updates_do_not_move() {
        let mut paddle = Paddle::new(40, 200, 20, 80);
        let mut enemy = Enemy::new(500, 100, 40, 40);
        assert_eq!(paddle.update(&world()), None);
        assert_eq!(enemy.update(&world()), None);
        assert_eq!(paddle.body.pos, IVec2::new(40, 200));
        assert_eq!(enemy.body.pos, IVec2::new(500, 100));
    }

    #[test]
    fn test_sprite_draw_commands() {
        let mut target = RecordingTarget::new();
        Ball::new(10, 10, 20).draw(&mut target);
        Paddle::new(40, 200, 20, 80).draw(&mut target);
        Enemy::new(500, 100, 40, 40).draw(&mut target);

        assert_eq!(
            target.commands,
            vec![
                DrawCommand::FillOval {
                    rect: Rect::from_xywh(10, 10, 20, 20),
                    color: Color::MAGENTA,
                },
                DrawCommand::FillRect {
                    rect: Rect::from_xywh(40, 200, 20, 80),
                    color: Color::GRAY,
                },
                DrawCommand::Image {
                    image: ENEMY_IMAGE.to_string(),
                    rect: Rect::from_xywh(500, 100, 40, 40),
                },
            ]
        );
    }
}
