//! Food spawner
//!
//! Runs on its own fixed period (2000 ms, driven by the presentation layer's
//! timer). Each call adds at most one food item, never exceeding the cap.

use glam::Vec2;
use rand::Rng;

use super::state::{FoodItem, FoodKind, GameState};

impl GameState {
    /// Spawn one food item at a uniformly random in-bounds position with a
    /// fair coin flip between kinds. Inert while paused or at the cap.
    pub fn spawn(&mut self) {
        if !self.playing || self.foods.len() >= self.config.food_cap {
            return;
        }

        let max = self.config.food_max();
        let rng = self.rng_mut();
        let position = Vec2::new(rng.random_range(0.0..max.x), rng.random_range(0.0..max.y));
        let kind = if rng.random_bool(0.5) {
            FoodKind::Grain
        } else {
            FoodKind::Grass
        };

        let id = self.next_food_id();
        self.foods.push(FoodItem { id, position, kind });
        log::debug!("spawned {} at ({:.0}, {:.0})", kind.as_str(), position.x, position.y);
    }
}
