use glam::Vec2;

use crate::error::{GameError, GameResult};
use crate::{Params, Side};

/// Play field rectangle, in viewport pixels
///
/// Origin is the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> GameResult<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(GameError::InvalidArena { width, height });
        }
        Ok(Self { width, height })
    }

    /// Lowest allowed paddle top
    pub fn max_paddle_top(&self) -> f32 {
        self.height - Params::PADDLE_HEIGHT
    }

    /// Paddle top that vertically centers a paddle
    pub fn paddle_spawn(&self) -> f32 {
        self.height / 2.0 - Params::PADDLE_HEIGHT / 2.0
    }

    /// Ball top-left corner that centers the ball
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.width / 2.0 - Params::BALL_SIZE / 2.0,
            self.height / 2.0 - Params::BALL_SIZE / 2.0,
        )
    }

    /// Ball `left` at which the ball touches the inner face of a paddle
    pub fn paddle_face(&self, side: Side) -> f32 {
        match side {
            Side::Left => Params::PADDLE_WIDTH + Params::WALL_THICKNESS,
            Side::Right => {
                self.width - Params::PADDLE_WIDTH - Params::WALL_THICKNESS - Params::BALL_SIZE
            }
        }
    }
}
