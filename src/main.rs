//! Hungry Llama entry point
//!
//! The wasm build is the presentation layer: it renders simulation state into
//! the DOM, shows collection toasts, and forwards keyboard/button intents to
//! the session controller. Expected page elements: `#arena`, `#player`,
//! `#toasts`, `#hud-score .hud-value`, `#hud-time .hud-value`, `#status`,
//! `#start-btn`, `#pause-btn`.
//!
//! The native build runs a short headless session as a smoke test.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, KeyboardEvent, MouseEvent};

    use hungry_llama::GameConfig;
    use hungry_llama::sim::{Direction, FoodKind, GameEvent, GameState, HeldKeys};

    /// Game instance holding simulation state, held keys, and timer handles
    struct Game {
        state: GameState,
        input: HeldKeys,
        tick_handle: Option<i32>,
        spawn_handle: Option<i32>,
    }

    impl Game {
        fn new(state: GameState) -> Self {
            Self {
                state,
                input: HeldKeys::new(),
                tick_handle: None,
                spawn_handle: None,
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Hungry Llama starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let config = load_config(&document);
        let seed = js_sys::Date::now() as u64;
        let state = match GameState::new(config, seed) {
            Ok(state) => state,
            Err(e) => {
                log::error!("invalid config: {e}");
                return;
            }
        };

        size_arena(&document, &state);

        let game = Rc::new(RefCell::new(Game::new(state)));

        setup_keyboard(game.clone());
        setup_buttons(game.clone());

        {
            let g = game.borrow();
            render(&document, &g.state);
            update_hud(&document, &g.state);
        }

        log::info!("Hungry Llama ready (seed {seed})");
    }

    /// Read an optional JSON tuning override from `#arena[data-config]`
    fn load_config(document: &Document) -> GameConfig {
        if let Some(arena) = document.get_element_by_id("arena") {
            if let Some(json) = arena.get_attribute("data-config") {
                match GameConfig::from_json(&json) {
                    Ok(config) => {
                        log::info!("loaded config override from data-config");
                        return config;
                    }
                    Err(e) => log::warn!("ignoring bad data-config: {e}"),
                }
            }
        }
        GameConfig::default()
    }

    fn size_arena(document: &Document, state: &GameState) {
        if let Some(arena) = document.get_element_by_id("arena") {
            let _ = arena.set_attribute(
                "style",
                &format!(
                    "width:{}px;height:{}px",
                    state.config.arena_width, state.config.arena_height
                ),
            );
        }
        if let Some(player) = document.get_element_by_id("player") {
            let _ = player.set_attribute(
                "style",
                &format!(
                    "width:{0}px;height:{0}px;left:{1}px;top:{2}px",
                    state.config.player_size, state.player.x, state.player.y
                ),
            );
        }
    }

    /// Start a fresh session and install both periodic timers
    fn start_session(game: &Rc<RefCell<Game>>) {
        pause_session(game); // drop any stale timers first
        // The held set is not cleared here: it mirrors physically-held keys,
        // so an arrow held across Start keeps moving the player
        game.borrow_mut().state.start();

        let window = web_sys::window().unwrap();

        // Movement/collision tick (~60 Hz)
        let tick_handle = {
            let game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                let document = web_sys::window().unwrap().document().unwrap();
                let mut g = game.borrow_mut();
                let input = g.input;
                g.state.tick(&input);
                let events = g.state.drain_events();
                render(&document, &g.state);
                update_hud(&document, &g.state);
                drop(g);
                for event in events {
                    show_toast(&document, event);
                }
            });
            let interval = game.borrow().state.config.tick_interval_ms as i32;
            let handle = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    interval,
                )
                .expect("failed to install tick timer");
            closure.forget();
            handle
        };

        // Food spawn tick
        let spawn_handle = {
            let game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                game.borrow_mut().state.spawn();
            });
            let interval = game.borrow().state.config.spawn_interval_ms as i32;
            let handle = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    interval,
                )
                .expect("failed to install spawn timer");
            closure.forget();
            handle
        };

        let mut g = game.borrow_mut();
        g.tick_handle = Some(tick_handle);
        g.spawn_handle = Some(spawn_handle);
    }

    /// Freeze the session: stop (not merely ignore) both timers
    fn pause_session(game: &Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let mut g = game.borrow_mut();
        if let Some(handle) = g.tick_handle.take() {
            window.clear_interval_with_handle(handle);
        }
        if let Some(handle) = g.spawn_handle.take() {
            window.clear_interval_with_handle(handle);
        }
        g.state.pause();
        update_hud(&document, &g.state);
    }

    /// Sync DOM elements to simulation state
    fn render(document: &Document, state: &GameState) {
        if let Some(player) = document.get_element_by_id("player") {
            let _ = player.set_attribute(
                "style",
                &format!(
                    "width:{0}px;height:{0}px;left:{1}px;top:{2}px",
                    state.config.player_size, state.player.x, state.player.y
                ),
            );
        }

        let arena = match document.get_element_by_id("arena") {
            Some(arena) => arena,
            None => return,
        };

        // Create elements for newly spawned food
        for food in &state.foods {
            let dom_id = food.id.to_string();
            if document.get_element_by_id(&dom_id).is_none() {
                if let Ok(el) = document.create_element("div") {
                    el.set_id(&dom_id);
                    let _ = el.set_attribute("class", &format!("food {}", food.kind.as_str()));
                    let _ = el.set_attribute(
                        "style",
                        &format!(
                            "width:{0}px;height:{0}px;left:{1}px;top:{2}px",
                            state.config.food_size, food.position.x, food.position.y
                        ),
                    );
                    let _ = arena.append_child(&el);
                }
            }
        }

        // Drop elements for collected food
        if let Ok(nodes) = document.query_selector_all("#arena .food") {
            for i in 0..nodes.length() {
                if let Some(node) = nodes.item(i) {
                    if let Ok(el) = node.dyn_into::<Element>() {
                        let live = state.foods.iter().any(|f| f.id.to_string() == el.id());
                        if !live {
                            el.remove();
                        }
                    }
                }
            }
        }
    }

    /// Update score/timer displays and start/pause control visibility
    fn update_hud(document: &Document, state: &GameState) {
        if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
            el.set_text_content(Some(&state.score.to_string()));
        }

        if let Some(el) = document.query_selector("#hud-time .hud-value").ok().flatten() {
            let secs = state.elapsed_secs();
            el.set_text_content(Some(&format!("{}:{:02}", secs / 60, secs % 60)));
        }

        if let Some(el) = document.get_element_by_id("status") {
            let class = if state.playing { "status" } else { "status hidden" };
            let _ = el.set_attribute("class", class);
        }

        if let Some(el) = document.get_element_by_id("start-btn") {
            let class = if state.playing { "hidden" } else { "" };
            let _ = el.set_attribute("class", class);
        }
        if let Some(el) = document.get_element_by_id("pause-btn") {
            let class = if state.playing { "" } else { "hidden" };
            let _ = el.set_attribute("class", class);
        }
    }

    /// Show a short-lived collection toast. Fire-and-forget; never touches
    /// game state.
    fn show_toast(document: &Document, event: GameEvent) {
        let GameEvent::FoodCollected { kind, points, .. } = event;

        let container = match document.get_element_by_id("toasts") {
            Some(el) => el,
            None => return,
        };
        let el = match document.create_element("div") {
            Ok(el) => el,
            Err(_) => return,
        };
        let title = match kind {
            FoodKind::Grain => "Yummy grains!",
            FoodKind::Grass => "Fresh grass!",
        };
        let _ = el.set_attribute("class", "toast");
        el.set_text_content(Some(&format!("{title} +{points} points")));
        let _ = container.append_child(&el);

        // Remove after one second
        let closure = Closure::once(move || {
            el.remove();
        });
        let _ = web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                1000,
            );
        closure.forget();
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key-down: track arrows, leave everything else alone
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(dir) = Direction::from_key(&event.key()) {
                    event.prevent_default();
                    game.borrow_mut().input.press(dir);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key-up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(dir) = Direction::from_key(&event.key()) {
                    event.prevent_default();
                    game.borrow_mut().input.release(dir);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                start_session(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("pause-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                pause_session(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use hungry_llama::GameConfig;
    use hungry_llama::sim::{Direction, GameState, HeldKeys};

    env_logger::init();
    log::info!("Hungry Llama (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Headless smoke run: walk right across the arena, spawning on the
    // original cadence, and check the core invariants hold.
    let config = GameConfig::default();
    let spawn_every = (config.spawn_interval_ms / config.tick_interval_ms) as u64;
    let mut state = GameState::new(config, 2024).expect("default config is valid");
    state.start();

    let mut input = HeldKeys::new();
    input.press(Direction::Right);

    for tick in 1..=600u64 {
        state.tick(&input);
        if tick % spawn_every == 0 {
            state.spawn();
        }
        assert!(state.foods.len() <= state.config.food_cap);
        let max = state.config.player_max();
        assert!(state.player.x >= 0.0 && state.player.x <= max.x);
        assert!(state.player.y >= 0.0 && state.player.y <= max.y);
    }

    state.pause();
    println!(
        "✓ smoke run: {} points in {}s, {} food items on the field",
        state.score,
        state.elapsed_secs(),
        state.foods.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
