//! Keyboard input handling

use game_core::Action;
#[cfg(target_arch = "wasm32")]
use web_sys::KeyboardEvent;

/// Resolve a key to a paddle action
///
/// The key name wins; the legacy key code covers browsers that report an
/// unidentified key name.
pub fn action_for_key(key: &str, key_code: u32) -> Option<Action> {
    Action::from_key(key).or_else(|| Action::from_key_code(key_code))
}

/// Extract the paddle action from a keyboard event
#[cfg(target_arch = "wasm32")]
pub fn get_action_from_event(event: &KeyboardEvent) -> Option<Action> {
    action_for_key(&event.key(), event.key_code())
}
