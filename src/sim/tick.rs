//! Fixed timestep movement and collection tick
//!
//! One tick: read held keys, move and clamp the player, then resolve
//! collection against the food set as it stood at tick start. Each tick is a
//! synchronous, bounded computation.

use glam::Vec2;

use super::collision::food_within_reach;
use super::input::HeldKeys;
use super::state::{GameEvent, GameState};

impl GameState {
    /// Advance the session by one tick. Inert while paused.
    pub fn tick(&mut self, input: &HeldKeys) {
        if !self.playing {
            return;
        }
        self.time_ticks += 1;

        let velocity = input.velocity() * self.config.player_speed;
        self.player = (self.player + velocity).clamp(Vec2::ZERO, self.config.player_max());

        self.collect_reachable_food();
    }

    /// Remove every food item within reach of the player, crediting its
    /// points. All simultaneous collections resolve in the same tick; point
    /// values are fixed per kind, so ordering is immaterial.
    fn collect_reachable_food(&mut self) {
        let player = self.player;
        let player_size = self.config.player_size;
        let food_size = self.config.food_size;

        let mut collected = Vec::new();
        self.foods.retain(|food| {
            if food_within_reach(player, player_size, food.position, food_size) {
                collected.push((food.id, food.kind));
                false
            } else {
                true
            }
        });

        for (id, kind) in collected {
            let points = kind.points();
            self.score += points;
            self.push_event(GameEvent::FoodCollected { id, kind, points });
            log::debug!("collected {} (+{points})", kind.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::input::Direction;
    use crate::sim::state::{FoodItem, FoodKind};
    use proptest::prelude::*;

    fn started_state() -> GameState {
        let mut state = GameState::new(GameConfig::default(), 42).unwrap();
        state.start();
        state.foods.clear(); // drop the bootstrap item; tests place food themselves
        state
    }

    fn place_food(state: &mut GameState, position: Vec2, kind: FoodKind) {
        let id = state.next_food_id();
        state.foods.push(FoodItem { id, position, kind });
    }

    fn keys(dirs: &[Direction]) -> HeldKeys {
        let mut keys = HeldKeys::new();
        for &dir in dirs {
            keys.press(dir);
        }
        keys
    }

    #[test]
    fn test_no_keys_no_movement() {
        let mut state = started_state();
        let before = state.player;
        state.tick(&HeldKeys::new());
        assert_eq!(state.player, before);
    }

    #[test]
    fn test_single_direction_moves_by_speed() {
        let mut state = started_state();
        state.tick(&keys(&[Direction::Right]));
        assert_eq!(state.player, Vec2::new(285.0, 180.0));
    }

    #[test]
    fn test_diagonal_is_unnormalized_sum() {
        let mut state = started_state();
        state.tick(&keys(&[Direction::Right, Direction::Down]));
        // Both axes move the full step; diagonal speed is √2 × axial
        assert_eq!(state.player, Vec2::new(285.0, 185.0));
    }

    #[test]
    fn test_clamps_at_origin_corner() {
        let mut state = started_state();
        state.player = Vec2::ZERO;
        state.tick(&keys(&[Direction::Left, Direction::Up]));
        assert_eq!(state.player, Vec2::ZERO);
    }

    #[test]
    fn test_clamps_at_far_corner() {
        let mut state = started_state();
        state.player = state.config.player_max();
        state.tick(&keys(&[Direction::Right, Direction::Down]));
        assert_eq!(state.player, Vec2::new(560.0, 360.0));
    }

    #[test]
    fn test_grain_scores_20_and_is_removed() {
        let mut state = started_state();
        place_food(&mut state, Vec2::new(285.0, 185.0), FoodKind::Grain);
        state.tick(&HeldKeys::new());
        assert_eq!(state.score, 20);
        assert!(state.foods.is_empty());
    }

    #[test]
    fn test_grass_scores_10() {
        let mut state = started_state();
        place_food(&mut state, Vec2::new(285.0, 185.0), FoodKind::Grass);
        state.tick(&HeldKeys::new());
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_simultaneous_collections_all_resolve() {
        let mut state = started_state();
        place_food(&mut state, Vec2::new(285.0, 185.0), FoodKind::Grain);
        place_food(&mut state, Vec2::new(275.0, 175.0), FoodKind::Grass);
        place_food(&mut state, Vec2::new(500.0, 300.0), FoodKind::Grain);
        state.tick(&HeldKeys::new());
        assert_eq!(state.score, 30);
        assert_eq!(state.foods.len(), 1);
        assert_eq!(state.drain_events().len(), 2);
    }

    #[test]
    fn test_out_of_reach_food_survives() {
        let mut state = started_state();
        place_food(&mut state, Vec2::new(310.0, 180.0), FoodKind::Grain);
        state.tick(&HeldKeys::new());
        assert_eq!(state.score, 0);
        assert_eq!(state.foods.len(), 1);
    }

    #[test]
    fn test_collection_emits_event() {
        let mut state = started_state();
        place_food(&mut state, Vec2::new(285.0, 185.0), FoodKind::Grain);
        state.tick(&HeldKeys::new());
        let events = state.drain_events();
        assert!(matches!(
            events.as_slice(),
            [GameEvent::FoodCollected {
                kind: FoodKind::Grain,
                points: 20,
                ..
            }]
        ));
        // Drain empties the queue
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_paused_tick_is_inert() {
        let mut state = started_state();
        place_food(&mut state, Vec2::new(285.0, 185.0), FoodKind::Grain);
        state.pause();
        state.tick(&keys(&[Direction::Right]));
        assert_eq!(state.player, Vec2::new(280.0, 180.0));
        assert_eq!(state.score, 0);
        assert_eq!(state.foods.len(), 1);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_keys_held_across_start_keep_working() {
        // The held set is level-triggered physical state; a session reset
        // must not require releasing and re-pressing an arrow
        let mut state = started_state();
        let input = keys(&[Direction::Right]);
        state.tick(&input);
        state.start();
        state.tick(&input);
        assert_eq!(state.player, Vec2::new(285.0, 180.0));
    }

    #[test]
    fn test_walk_to_food_and_collect() {
        // Food 40px to the right: out of reach (40 ≥ 30), in reach after
        // three ticks of walking (25 < 30)
        let mut state = started_state();
        place_food(&mut state, Vec2::new(320.0, 180.0), FoodKind::Grass);
        let right = keys(&[Direction::Right]);

        state.tick(&right);
        state.tick(&right);
        assert_eq!(state.foods.len(), 1);
        state.tick(&right);
        assert!(state.foods.is_empty());
        assert_eq!(state.score, 10);
    }

    proptest! {
        #[test]
        fn player_always_within_bounds(masks in proptest::collection::vec(0u8..16, 1..300)) {
            let mut state = started_state();
            let max = state.config.player_max();
            for mask in masks {
                let mut input = HeldKeys::new();
                for (bit, dir) in Direction::ALL.iter().enumerate() {
                    if mask & (1 << bit) != 0 {
                        input.press(*dir);
                    }
                }
                state.tick(&input);
                prop_assert!(state.player.x >= 0.0 && state.player.x <= max.x);
                prop_assert!(state.player.y >= 0.0 && state.player.y <= max.y);
            }
        }
    }
}
