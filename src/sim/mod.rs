//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{collect_radius, food_within_reach};
pub use input::{Direction, HeldKeys};
pub use state::{FoodId, FoodItem, FoodKind, GameEvent, GameState};
