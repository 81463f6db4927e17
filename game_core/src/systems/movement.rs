use crate::{Arena, Ball, InputState, Paddle, Params};
use hecs::World;

/// Apply paddle movement based on held keys
///
/// Moving up stops at the top of the arena, moving down stops where the
/// paddle's bottom edge meets the floor.
pub fn move_paddles(world: &mut World, arena: &Arena, input: &InputState) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        match input.paddle_dir(paddle.side) {
            -1 => paddle.top = (paddle.top - Params::PLAYER_SPEED).max(0.0),
            1 => paddle.top = (paddle.top + Params::PLAYER_SPEED).min(arena.max_paddle_top()),
            _ => {}
        }
    }
}

/// Move ball one tick along its velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
