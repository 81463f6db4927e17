/// Game tuning parameters for Pong
///
/// All distances are pixels and all speeds are pixels per tick. One tick is
/// one rendered frame, so the game runs faster on high refresh rate displays.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Paddle
    pub const PLAYER_SPEED: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 140.0;
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const WALL_THICKNESS: f32 = 20.0; // Gap between paddle and screen edge

    // Ball
    pub const BALL_SIZE: f32 = 28.0;
    pub const BALL_SPEED_MAX: f32 = 8.0; // Per velocity component
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply speed on paddle hit
    pub const HIT_ANGLE_FACTOR: f32 = 0.15; // Hit offset (px) -> vertical speed

    // Opening serve, before any goal has been scored
    pub const BALL_START_VX: f32 = 4.0;
    pub const BALL_START_VY: f32 = 2.0;

    // Serve after a goal
    pub const SERVE_VX_MIN: f32 = 3.0;
    pub const SERVE_VX_MAX: f32 = 5.0;
    pub const SERVE_VY_MAX: f32 = 3.0;
}
