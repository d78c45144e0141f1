//! Proximity test for food collection
//!
//! Both sprites are square and top-left anchored; collection uses the
//! distance between their anchor points against the sum of their half-sizes,
//! matching how the sprites visually overlap.

use glam::Vec2;

/// Distance below which a food item counts as collected
#[inline]
pub fn collect_radius(player_size: f32, food_size: f32) -> f32 {
    (player_size + food_size) / 2.0
}

/// Whether a food item at `food_pos` is close enough to the player to collect
pub fn food_within_reach(
    player_pos: Vec2,
    player_size: f32,
    food_pos: Vec2,
    food_size: f32,
) -> bool {
    player_pos.distance(food_pos) < collect_radius(player_size, food_size)
}
