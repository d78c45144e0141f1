//! Hungry Llama - a pasture grazing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collection, game state)
//! - `config`: Validated, data-driven game configuration
//!
//! The presentation layer (DOM rendering, buttons, toasts) lives in the wasm
//! entry point and only ever consumes state the simulation hands it.

pub mod config;
pub mod sim;

pub use config::{ConfigError, GameConfig};

/// Default game tuning (see [`GameConfig`] for overrides)
pub mod consts {
    /// Arena dimensions in pixels
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    /// Entity sizes (square, axis-aligned)
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const FOOD_SIZE: f32 = 20.0;

    /// Player movement per tick, in pixels per held direction
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Maximum simultaneous food items
    pub const FOOD_CAP: usize = 5;

    /// Movement/collision tick period (~60 Hz)
    pub const TICK_INTERVAL_MS: u32 = 16;
    /// Food spawn period
    pub const SPAWN_INTERVAL_MS: u32 = 2000;
}
