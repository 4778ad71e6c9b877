//! Gameplay tuning.
//!
//! Every magic number of the game lives here with its unit. The file at
//! `~/.dasher/config.json` may override any subset of fields; missing fields
//! keep their defaults.

use super::constants::*;
use crate::utils::persistence::data_path;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors from loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] io::Error),

    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tuning for one game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Downward acceleration while airborne (px/s²).
    pub gravity: f64,
    /// Velocity added by a jump (px/s, negative is upward).
    pub jump_velocity: f64,
    /// Horizontal velocity shared by obstacles and the finish line (px/s,
    /// negative scrolls toward the player).
    pub scroll_velocity: f64,
    /// Y coordinate of the ground surface (px from the top).
    pub ground_level: f64,
    /// Inset applied to each obstacle box before collision tests (px).
    pub collision_padding: f64,
    /// Seconds per player animation frame.
    pub player_frame_duration: f64,
    /// Seconds per obstacle animation frame. Zero advances every frame.
    pub obstacle_frame_duration: f64,

    /// World width (px); obstacles spawn at this x.
    pub window_width: f64,
    /// World height (px).
    pub window_height: f64,
    /// Fixed horizontal position of the player's left edge (px).
    pub player_x: f64,
    pub obstacle_count: usize,
    /// Distance between consecutive obstacles (px).
    pub obstacle_spacing: f64,
    /// Maximum random deviation from `obstacle_spacing` (px). Zero spaces
    /// obstacles evenly.
    pub obstacle_spacing_jitter: f64,
    /// Scroll speed of each background layer, farthest first (px/s).
    pub layer_speeds: Vec<f64>,
    /// Scale applied to background textures.
    pub background_scale: f64,
    pub target_fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            scroll_velocity: SCROLL_VELOCITY,
            ground_level: WINDOW_HEIGHT,
            collision_padding: COLLISION_PADDING,
            player_frame_duration: PLAYER_FRAME_DURATION,
            obstacle_frame_duration: OBSTACLE_FRAME_DURATION,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            player_x: 0.0,
            obstacle_count: OBSTACLE_COUNT,
            obstacle_spacing: OBSTACLE_SPACING,
            obstacle_spacing_jitter: 0.0,
            layer_speeds: LAYER_SPEEDS.to_vec(),
            background_scale: BACKGROUND_SCALE,
            target_fps: TARGET_FPS,
        }
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

impl GameConfig {
    /// Load `~/.dasher/config.json`, or defaults if the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = data_path(CONFIG_FILENAME)?;
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate a config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the simulation cannot run sensibly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("scroll_velocity", self.scroll_velocity),
            ("ground_level", self.ground_level),
            ("collision_padding", self.collision_padding),
            ("player_frame_duration", self.player_frame_duration),
            ("obstacle_frame_duration", self.obstacle_frame_duration),
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("player_x", self.player_x),
            ("obstacle_spacing", self.obstacle_spacing),
            ("obstacle_spacing_jitter", self.obstacle_spacing_jitter),
            ("background_scale", self.background_scale),
        ];
        if let Some(&(field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(field, "must be a finite number"));
        }
        if self.layer_speeds.iter().any(|v| !v.is_finite()) {
            return Err(invalid("layer_speeds", "must be finite numbers"));
        }

        if self.gravity <= 0.0 {
            return Err(invalid("gravity", "must be positive"));
        }
        if self.jump_velocity >= 0.0 {
            return Err(invalid("jump_velocity", "must be negative (upward)"));
        }
        if self.scroll_velocity >= 0.0 {
            return Err(invalid(
                "scroll_velocity",
                "must be negative (toward the player)",
            ));
        }
        if self.layer_speeds.iter().any(|v| *v < 0.0) {
            return Err(invalid("layer_speeds", "must not be negative"));
        }
        if self.collision_padding < 0.0 {
            return Err(invalid("collision_padding", "must not be negative"));
        }
        if self.player_frame_duration < 0.0 {
            return Err(invalid("player_frame_duration", "must not be negative"));
        }
        if self.obstacle_frame_duration < 0.0 {
            return Err(invalid("obstacle_frame_duration", "must not be negative"));
        }
        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            return Err(invalid("window_width", "window must have a positive size"));
        }
        if self.obstacle_spacing <= 0.0 {
            return Err(invalid("obstacle_spacing", "must be positive"));
        }
        if self.obstacle_spacing_jitter < 0.0 || self.obstacle_spacing_jitter >= self.obstacle_spacing
        {
            return Err(invalid(
                "obstacle_spacing_jitter",
                "must be in [0, obstacle_spacing)",
            ));
        }
        if self.background_scale <= 0.0 {
            return Err(invalid("background_scale", "must be positive"));
        }
        if self.target_fps == 0 {
            return Err(invalid("target_fps", "must be at least 1"));
        }
        Ok(())
    }
}
