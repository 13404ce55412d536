//! Session configuration
//!
//! Screen geometry and loop tuning supplied by the host once at startup.
//! Loaded from JSON; missing fields fall back to defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Screen;

/// Configuration loading/validation failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Host-supplied game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Drawable width in pixels
    pub screen_width: i32,
    /// Drawable height in pixels
    pub screen_height: i32,
    /// Frame rate cap for the render loop
    pub target_fps: u32,
    /// Enemies spawned at start and on every restart
    pub enemy_count: usize,
    /// Keep the paddle fully on screen while dragging
    pub clamp_paddle: bool,
    /// RNG seed (random when unset)
    pub seed: Option<u64>,
    /// How long teardown waits for the loop thread before abandoning it
    pub stop_timeout_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 480,
            target_fps: DEFAULT_TARGET_FPS,
            enemy_count: DEFAULT_ENEMY_COUNT,
            clamp_paddle: true,
            seed: None,
            stop_timeout_ms: 2000,
        }
    }
}

impl GameConfig {
    /// Default configuration for a host screen size
    pub fn for_screen(width: i32, height: i32) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            ..Self::default()
        }
    }

    pub fn screen(&self) -> Screen {
        Screen::new(self.screen_width, self.screen_height)
    }

    pub fn stop_timeout(&self) -> Duration {
        Duration::from_millis(self.stop_timeout_ms)
    }

    /// Check that every entity fits on the configured screen
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "screen must be positive, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.screen_width < BALL_WIDTH_DIVISOR {
            return Err(ConfigError::Invalid(format!(
                "screen width {} is too narrow for a {}th-width ball",
                self.screen_width, BALL_WIDTH_DIVISOR
            )));
        }
        let paddle_height = self.screen_width / BALL_WIDTH_DIVISOR * PADDLE_HEIGHT_FACTOR;
        let enemy_size = self.screen_width / ENEMY_WIDTH_DIVISOR;
        if self.screen_height <= paddle_height.max(enemy_size) {
            return Err(ConfigError::Invalid(format!(
                "screen height {} is too short for the paddle and enemies",
                self.screen_height
            )));
        }
        if self.enemy_count == 0 || self.enemy_count > MAX_ENEMY_COUNT {
            return Err(ConfigError::Invalid(format!(
                "enemy_count must be in 1..={}, got {}",
                MAX_ENEMY_COUNT, self.enemy_count
            )));
        }
        if self.target_fps == 0 || self.target_fps > 1000 {
            return Err(ConfigError::Invalid(format!(
                "target_fps must be in 1..=1000, got {}",
                self.target_fps
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load a config file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{}; using default config", err);
                Self::default()
            }
        }
    }
}
