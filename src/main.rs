//! Surface Pong entry point
//!
//! Runs the game headless against an in-memory surface, with a paddle bot
//! feeding touch events, then prints the final state.
//!
//! Usage: `surface-pong [config.json] [seconds]`

use std::error::Error;
use std::thread;
use std::time::{Duration, Instant};

use glam::IVec2;

use surface_pong::sim::Snapshot;
use surface_pong::{Game, GameConfig, GamePanel, HeadlessSurface, TouchEvent};

/// How often the bot looks at the game and drags the paddle
const BOT_INTERVAL: Duration = Duration::from_millis(15);

fn main() {
    env_logger::init();
    log::info!("Surface Pong (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load_or_default(path),
        None => GameConfig::default(),
    };
    let seconds = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);

    if let Err(err) = run(config, Duration::from_secs(seconds)) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run(config: GameConfig, duration: Duration) -> Result<(), Box<dyn Error>> {
    let surface = HeadlessSurface::new(config.screen_width, config.screen_height);
    let mut panel = GamePanel::new(config, surface)?;
    panel.on_surface_ready()?;

    let deadline = Instant::now() + duration;
    while Instant::now() < deadline {
        if let Some(snapshot) = panel.with_game(Game::snapshot) {
            steer(&panel, &snapshot);
        }
        thread::sleep(BOT_INTERVAL);
    }

    let fps = panel.average_fps().unwrap_or_default();
    panel.on_surface_torn_down()?;

    let frames = panel.with_surface(|surface| surface.presented());
    log::info!("Presented {} frames, ~{:.1} fps", frames, fps);

    if let Some(snapshot) = panel.with_game(Game::snapshot) {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}

/// Track the ball with the paddle center; tap to restart when the game ends
fn steer(panel: &GamePanel<HeadlessSurface>, snapshot: &Snapshot) {
    let ball_size = panel.config().screen_width / surface_pong::consts::BALL_WIDTH_DIVISOR;
    let target = IVec2::new(0, snapshot.ball.y + ball_size / 2);

    if snapshot.game_over {
        panel.touch(TouchEvent::Down(target));
        panel.touch(TouchEvent::Up(target));
    } else {
        panel.touch(TouchEvent::Move(target));
    }
}
