//! Logical paddle actions and the pressed-key state read by each tick

use crate::Side;

/// A paddle movement the players can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl Action {
    /// Map a `KeyboardEvent.key` name to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" => Some(Action::LeftUp),
            "s" | "S" => Some(Action::LeftDown),
            "ArrowUp" => Some(Action::RightUp),
            "ArrowDown" => Some(Action::RightDown),
            _ => None,
        }
    }

    /// Map a legacy `KeyboardEvent.keyCode` to an action
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            87 => Some(Action::LeftUp),
            83 => Some(Action::LeftDown),
            38 => Some(Action::RightUp),
            40 => Some(Action::RightDown),
            _ => None,
        }
    }
}

/// Currently held actions
///
/// Written by key handlers between ticks, read by the tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, action: Action, pressed: bool) {
        match action {
            Action::LeftUp => self.left_up = pressed,
            Action::LeftDown => self.left_down = pressed,
            Action::RightUp => self.right_up = pressed,
            Action::RightDown => self.right_down = pressed,
        }
    }

    pub fn press(&mut self, action: Action) {
        self.set(action, true);
    }

    pub fn release(&mut self, action: Action) {
        self.set(action, false);
    }

    /// Movement direction for one paddle: -1 = up, 0 = stop, 1 = down
    ///
    /// Up wins when both keys are held.
    pub fn paddle_dir(&self, side: Side) -> i8 {
        let (up, down) = match side {
            Side::Left => (self.left_up, self.left_down),
            Side::Right => (self.right_up, self.right_down),
        };
        if up {
            -1
        } else if down {
            1
        } else {
            0
        }
    }
}
