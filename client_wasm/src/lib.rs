//! Browser handle for the Pong physics core
//!
//! JavaScript owns the page: it calls `tick()` from `requestAnimationFrame`,
//! forwards key and resize events, and reads positions back to place the
//! paddle and ball elements. Nothing here touches the DOM.

mod input;

use game_core::{Action, Config, Game, Side};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub use input::action_for_key;

/// Install the panic hook and console logger
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
    }
    log::info!("Pong starting...");
}

/// One running game, driven from JavaScript
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct PongApp {
    game: Game,
    scorer: Option<Side>,
    paddle_hit: Option<Side>,
    hit_wall: bool,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl PongApp {
    /// Start a game filling a `width` x `height` viewport
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new(width: f32, height: f32) -> Result<PongApp, String> {
        Self::from_config(&Config::new().with_arena(width, height))
    }

    /// Advance one frame; returns true if a goal was scored
    pub fn tick(&mut self) -> bool {
        let events = self.game.tick();
        self.scorer = events.goals.last().map(|goal| goal.scorer);
        self.paddle_hit = events.ball_hit_paddle;
        self.hit_wall = events.ball_hit_wall;
        self.scorer.is_some()
    }

    /// Returns true if the key is bound, so the page can suppress scrolling
    pub fn key_down(&mut self, key: &str, key_code: u32) -> bool {
        self.set_action(action_for_key(key, key_code), true)
    }

    pub fn key_up(&mut self, key: &str, key_code: u32) -> bool {
        self.set_action(action_for_key(key, key_code), false)
    }

    /// Viewport resized; returns false if the size was rejected
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        self.game.resize(width, height).is_ok()
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn ball_left(&self) -> f32 {
        self.game.ball().map_or(0.0, |ball| ball.pos.x)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn ball_top(&self) -> f32 {
        self.game.ball().map_or(0.0, |ball| ball.pos.y)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn left_paddle_top(&self) -> f32 {
        self.game.paddle_top(Side::Left).unwrap_or(0.0)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn right_paddle_top(&self) -> f32 {
        self.game.paddle_top(Side::Right).unwrap_or(0.0)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn score_left(&self) -> u32 {
        self.game.score.left
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn score_right(&self) -> u32 {
        self.game.score.right
    }

    // Per-tick flags, valid until the next tick()

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn scored_left(&self) -> bool {
        self.scorer == Some(Side::Left)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn scored_right(&self) -> bool {
        self.scorer == Some(Side::Right)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn left_paddle_hit(&self) -> bool {
        self.paddle_hit == Some(Side::Left)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn right_paddle_hit(&self) -> bool {
        self.paddle_hit == Some(Side::Right)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn hit_wall(&self) -> bool {
        self.hit_wall
    }
}

/// Event-based variants for listeners registered straight on `window`
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl PongApp {
    pub fn on_key_down(&mut self, event: &web_sys::KeyboardEvent) -> bool {
        self.set_action(input::get_action_from_event(event), true)
    }

    pub fn on_key_up(&mut self, event: &web_sys::KeyboardEvent) -> bool {
        self.set_action(input::get_action_from_event(event), false)
    }
}

impl PongApp {
    pub fn from_config(config: &Config) -> Result<PongApp, String> {
        let game = Game::new(config).map_err(|e| e.to_string())?;
        Ok(Self {
            game,
            scorer: None,
            paddle_hit: None,
            hit_wall: false,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    fn set_action(&mut self, action: Option<Action>, pressed: bool) -> bool {
        match action {
            Some(action) => {
                self.game.input.set(action, pressed);
                true
            }
            None => false,
        }
    }
}
