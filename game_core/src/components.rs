use glam::Vec2;
use rand::Rng;

use crate::{Arena, GameRng, Params};

/// Which half of the field something belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub top: f32, // Distance from the top of the arena to the paddle's top edge
}

impl Paddle {
    pub fn new(side: Side, top: f32) -> Self {
        Self { side, top }
    }

    /// Does a ball whose top edge is at `ball_top` overlap this paddle vertically?
    pub fn overlaps(&self, ball_top: f32) -> bool {
        ball_top + Params::BALL_SIZE > self.top && ball_top < self.top + Params::PADDLE_HEIGHT
    }

    /// Signed distance from paddle center to ball center, negative above
    pub fn hit_offset(&self, ball_top: f32) -> f32 {
        (ball_top + Params::BALL_SIZE / 2.0) - (self.top + Params::PADDLE_HEIGHT / 2.0)
    }
}

/// Ball component - the pong ball
///
/// `pos` is the top-left corner (left, top), `vel` is pixels per tick.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Ball in the middle of the arena with the opening serve velocity
    pub fn kickoff(arena: &Arena) -> Self {
        Self::new(
            arena.ball_spawn(),
            Vec2::new(Params::BALL_START_VX, Params::BALL_START_VY),
        )
    }

    /// Reset ball to center with a random serve
    ///
    /// Horizontal speed is in [3, 5) toward either side with equal
    /// probability, vertical speed is in [-3, 3).
    pub fn reset(&mut self, arena: &Arena, rng: &mut GameRng) {
        self.pos = arena.ball_spawn();

        let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let vx: f32 = rng.0.gen_range(Params::SERVE_VX_MIN..Params::SERVE_VX_MAX);
        let vy: f32 = rng.0.gen_range(-Params::SERVE_VY_MAX..Params::SERVE_VY_MAX);
        self.vel = Vec2::new(dir * vx, vy);

        log::debug!("ball reset at {:?} with velocity {:?}", self.pos, self.vel);
    }
}
