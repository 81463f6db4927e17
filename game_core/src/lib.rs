//! Deterministic per-tick physics for a two-paddle Pong game
//!
//! One call to [`step`] is one rendered frame. Speeds are pixels per tick and
//! there is no time scaling.

pub mod arena;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod params;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use input::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
///
/// Collisions are discrete: a ball moving further than a paddle's width in
/// one tick can pass through it.
pub fn step(
    world: &mut World,
    arena: &Arena,
    input: &InputState,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move paddles from held keys
    move_paddles(world, arena, input);

    // 2. Move ball
    move_ball(world);

    // 3. Check collisions (walls, paddles, goal lines)
    check_collisions(world, arena, events);

    // 4. Award goals and re-serve
    check_scoring(world, arena, score, events, rng);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, top: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, top),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
