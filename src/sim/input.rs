//! Directional input tracking
//!
//! Keys are level-triggered: a direction is either held or not, with no
//! repeat or debounce logic. Only the four arrow keys are tracked; every
//! other key is ignored (and must not be suppressed by the caller).

use glam::Vec2;

/// A movement direction bound to one arrow key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a DOM `KeyboardEvent.key` name to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Unit step for this direction (screen coordinates: +y is down)
    #[inline]
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// The set of currently-held movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    held: [bool; 4],
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key-down: add a direction to the held set
    pub fn press(&mut self, dir: Direction) {
        self.held[dir as usize] = true;
    }

    /// Key-up: remove a direction from the held set
    pub fn release(&mut self, dir: Direction) {
        self.held[dir as usize] = false;
    }

    #[inline]
    pub fn is_held(&self, dir: Direction) -> bool {
        self.held[dir as usize]
    }

    pub fn is_idle(&self) -> bool {
        self.held == [false; 4]
    }

    /// Release everything (e.g. when the window loses focus and key-up
    /// events can no longer be observed)
    pub fn clear(&mut self) {
        self.held = [false; 4];
    }

    /// Sum of unit steps for held directions.
    ///
    /// Deliberately not normalized: holding two perpendicular arrows moves
    /// the player √2 times faster than one. Opposing arrows cancel.
    pub fn velocity(&self) -> Vec2 {
        Direction::ALL
            .iter()
            .filter(|&&dir| self.is_held(dir))
            .map(|dir| dir.unit())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_arrows_only() {
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
        assert_eq!(Direction::from_key("w"), None);
        assert_eq!(Direction::from_key(" "), None);
        assert_eq!(Direction::from_key("Enter"), None);
    }

    #[test]
    fn test_press_release_level_triggered() {
        let mut keys = HeldKeys::new();
        assert!(keys.is_idle());

        keys.press(Direction::Left);
        keys.press(Direction::Left); // key repeat is a no-op
        assert!(keys.is_held(Direction::Left));

        keys.release(Direction::Left);
        assert!(keys.is_idle());
    }

    #[test]
    fn test_velocity_sums_axes() {
        let mut keys = HeldKeys::new();
        assert_eq!(keys.velocity(), Vec2::ZERO);

        keys.press(Direction::Right);
        assert_eq!(keys.velocity(), Vec2::new(1.0, 0.0));

        // Diagonal is the raw sum, not normalized
        keys.press(Direction::Down);
        assert_eq!(keys.velocity(), Vec2::new(1.0, 1.0));

        // Opposing directions cancel
        keys.press(Direction::Left);
        assert_eq!(keys.velocity(), Vec2::new(0.0, 1.0));
    }
}
