//! Validated game configuration
//!
//! All tunable numbers live here so the simulation never hard-codes them.
//! Configs are validated once at construction; everything downstream is
//! infallible.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// A rejected configuration. These are developer errors caught at startup,
/// not runtime failures.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("arena dimensions must be positive, got {width}x{height}")]
    InvalidArena { width: f32, height: f32 },
    #[error("{name} size must be positive and smaller than the arena, got {size}")]
    InvalidEntitySize { name: &'static str, size: f32 },
    #[error("player speed must be positive and finite, got {0}")]
    InvalidSpeed(f32),
    #[error("food cap must be at least 1")]
    ZeroFoodCap,
    #[error("{name} period must be at least 1 ms")]
    ZeroPeriod { name: &'static str },
}

/// Game tuning parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Arena width in pixels
    pub arena_width: f32,
    /// Arena height in pixels
    pub arena_height: f32,
    /// Player sprite size (square)
    pub player_size: f32,
    /// Food sprite size (square)
    pub food_size: f32,
    /// Pixels moved per tick per held direction
    pub player_speed: f32,
    /// Maximum simultaneous food items
    pub food_cap: usize,
    /// Movement/collision tick period
    pub tick_interval_ms: u32,
    /// Food spawn period
    pub spawn_interval_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            player_size: PLAYER_SIZE,
            food_size: FOOD_SIZE,
            player_speed: PLAYER_SPEED,
            food_cap: FOOD_CAP,
            tick_interval_ms: TICK_INTERVAL_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON, falling back to defaults for missing fields
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check the config for developer errors
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.arena_width > 0.0 && self.arena_height > 0.0)
            || !self.arena_width.is_finite()
            || !self.arena_height.is_finite()
        {
            return Err(ConfigError::InvalidArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        // Strictly smaller than both dimensions: an entity that fills an
        // axis leaves an empty position range (spawn sampling is half-open)
        if !(self.player_size > 0.0)
            || self.player_size >= self.arena_width
            || self.player_size >= self.arena_height
        {
            return Err(ConfigError::InvalidEntitySize {
                name: "player",
                size: self.player_size,
            });
        }
        if !(self.food_size > 0.0)
            || self.food_size >= self.arena_width
            || self.food_size >= self.arena_height
        {
            return Err(ConfigError::InvalidEntitySize {
                name: "food",
                size: self.food_size,
            });
        }
        if !(self.player_speed > 0.0) || !self.player_speed.is_finite() {
            return Err(ConfigError::InvalidSpeed(self.player_speed));
        }
        if self.food_cap == 0 {
            return Err(ConfigError::ZeroFoodCap);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroPeriod { name: "tick" });
        }
        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::ZeroPeriod { name: "spawn" });
        }
        Ok(())
    }

    /// Largest valid player position (per-axis clamp limit)
    #[inline]
    pub fn player_max(&self) -> glam::Vec2 {
        glam::Vec2::new(
            self.arena_width - self.player_size,
            self.arena_height - self.player_size,
        )
    }

    /// Largest valid food position
    #[inline]
    pub fn food_max(&self) -> glam::Vec2 {
        glam::Vec2::new(
            self.arena_width - self.food_size,
            self.arena_height - self.food_size,
        )
    }

    /// Arena center, adjusted so the player sprite is centered
    #[inline]
    pub fn player_center(&self) -> glam::Vec2 {
        self.player_max() / 2.0
    }
}
