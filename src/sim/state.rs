//! Game state and core simulation types
//!
//! All session state lives behind [`GameState`] and is mutated only through
//! its explicit methods (`start`, `pause`, `tick`, `spawn`). The presentation
//! layer reads fields and drains events; it never writes.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::{ConfigError, GameConfig};

/// Kinds of food the llama can collect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodKind {
    Grass,
    Grain,
}

impl FoodKind {
    /// Score awarded when collected
    #[inline]
    pub fn points(self) -> u32 {
        match self {
            FoodKind::Grass => 10,
            FoodKind::Grain => 20,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FoodKind::Grass => "grass",
            FoodKind::Grain => "grain",
        }
    }
}

/// Opaque unique identifier for a food item.
///
/// Allocated from a per-session counter; callers only rely on uniqueness
/// and the `Display` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FoodId(u32);

impl std::fmt::Display for FoodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "food-{}", self.0)
    }
}

/// A spawned food item. Immutable once spawned; removed exactly once,
/// atomically with the score increment, when collected.
#[derive(Debug, Clone)]
pub struct FoodItem {
    pub id: FoodId,
    pub position: Vec2,
    pub kind: FoodKind,
}

/// Fire-and-forget notifications for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A food item was collected this tick
    FoodCollected {
        id: FoodId,
        kind: FoodKind,
        points: u32,
    },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Validated tuning parameters
    pub config: GameConfig,
    /// Session seed for reproducibility
    pub seed: u64,
    /// Player position (top-left anchored, always within bounds)
    pub player: Vec2,
    /// Active food items, in spawn order
    pub foods: Vec<FoodItem>,
    /// Session score; only increases while playing
    pub score: u32,
    /// Whether the session is active; when false, tick/spawn are inert
    pub playing: bool,
    /// Ticks elapsed since the last `start()`
    pub time_ticks: u64,
    /// Spawn randomness
    rng: Pcg32,
    /// Next food ID
    next_food_id: u32,
    /// Events queued for the presentation layer
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a paused session with the given config and seed.
    ///
    /// The config is validated here; everything after this point is
    /// infallible.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let player = config.player_center();
        Ok(Self {
            config,
            seed,
            player,
            foods: Vec::new(),
            score: 0,
            playing: false,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_food_id: 1,
            events: Vec::new(),
        })
    }

    /// Start a fresh session: reset score, clear food, center the player,
    /// and spawn one bootstrap food item so there is an initial target.
    ///
    /// There is no resume-without-reset; `start()` after `pause()` always
    /// begins over.
    pub fn start(&mut self) {
        self.score = 0;
        self.foods.clear();
        self.events.clear();
        self.time_ticks = 0;
        self.player = self.config.player_center();
        self.playing = true;
        self.spawn();
        log::info!("session started (seed {})", self.seed);
    }

    /// Freeze the session. State is left untouched so the presentation layer
    /// can keep showing the final score; timers must be stopped by the caller.
    pub fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            log::info!(
                "session paused at {} points, {} ticks",
                self.score,
                self.time_ticks
            );
        }
    }

    /// Seconds elapsed since `start()`, derived from the tick counter
    pub fn elapsed_secs(&self) -> u64 {
        self.time_ticks * self.config.tick_interval_ms as u64 / 1000
    }

    /// Allocate a new food ID
    pub(crate) fn next_food_id(&mut self) -> FoodId {
        let id = FoodId(self.next_food_id);
        self.next_food_id += 1;
        id
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
