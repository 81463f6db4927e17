use crate::{Arena, Ball, Events, Paddle, Params, Side};
use glam::Vec2;
use hecs::World;

/// Check ball collisions with walls and paddles, and detect goals
///
/// Every check reads the ball position as it was right after translation.
/// Goals are only recorded in `events`; `check_scoring` awards them.
pub fn check_collisions(world: &mut World, arena: &Arena, events: &mut Events) {
    // First, collect ball and paddle data without holding borrows
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel))
    };

    let (seen, mut ball_vel) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };
    let mut ball_pos = seen;

    // Top/bottom wall bounces
    if seen.y <= 0.0 || seen.y + Params::BALL_SIZE >= arena.height {
        ball_vel.y = -ball_vel.y;
        // Clamp position to prevent sticking
        ball_pos.y = if seen.y <= 0.0 {
            0.0
        } else {
            arena.height - Params::BALL_SIZE
        };
        events.ball_hit_wall = true;
    }

    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    let paddle_on = |side: Side| paddles.iter().find(|p| p.side == side).copied();

    // Right side: ball reached the right paddle's column
    if seen.x + Params::BALL_SIZE >= arena.width - Params::PADDLE_WIDTH - Params::WALL_THICKNESS {
        match paddle_on(Side::Right) {
            Some(paddle) if paddle.overlaps(seen.y) => {
                ball_vel = rebound(ball_vel, paddle.hit_offset(seen.y));
                ball_pos.x = arena.paddle_face(Side::Right);
                events.ball_hit_paddle = Some(Side::Right);
                log::debug!("right paddle hit, velocity now {:?}", ball_vel);
            }
            _ if seen.x + Params::BALL_SIZE >= arena.width => events.push_goal(Side::Left),
            _ => {}
        }
    }

    // Left side: ball reached the left paddle's column
    if seen.x <= Params::PADDLE_WIDTH + Params::WALL_THICKNESS {
        match paddle_on(Side::Left) {
            Some(paddle) if paddle.overlaps(seen.y) => {
                ball_vel = rebound(ball_vel, paddle.hit_offset(seen.y));
                ball_pos.x = arena.paddle_face(Side::Left);
                events.ball_hit_paddle = Some(Side::Left);
                log::debug!("left paddle hit, velocity now {:?}", ball_vel);
            }
            _ if seen.x <= 0.0 => events.push_goal(Side::Right),
            _ => {}
        }
    }

    // Update ball
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = ball_pos;
        ball.vel = ball_vel;
    }
}

/// Velocity after the ball hits a paddle
///
/// `hit_offset` is the distance from the paddle's center to the ball's
/// center. It sets the new vertical speed, so edge hits leave at a steeper
/// angle. Both components then speed up by 5%, capped at the max speed.
pub fn rebound(vel: Vec2, hit_offset: f32) -> Vec2 {
    let vx = -vel.x;
    let vy = hit_offset * Params::HIT_ANGLE_FACTOR;
    Vec2::new(speed_up(vx), speed_up(vy))
}

fn speed_up(v: f32) -> f32 {
    sign(v) * (v.abs() * Params::BALL_SPEED_INCREASE).min(Params::BALL_SPEED_MAX)
}

// f32::signum maps 0.0 to 1.0; a dead-center hit must keep vy at zero
fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
