use hecs::{Entity, World};

use crate::error::GameResult;
use crate::{
    create_ball, create_paddle, step, Action, Arena, Ball, Config, Events, GameRng, InputState,
    Paddle, Score, Side,
};

/// Everything the tick reads and writes
///
/// Owned by whoever drives the frame loop. Key and resize handlers write into
/// it between ticks, never during one.
pub struct Game {
    pub world: World,
    pub arena: Arena,
    pub input: InputState,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub ticks: u64,
    left_paddle: Entity,
    right_paddle: Entity,
    ball: Entity,
}

impl Game {
    /// Paddles centered, ball centered with the opening serve
    pub fn new(config: &Config) -> GameResult<Self> {
        let arena = config.validate()?;
        let mut world = World::new();

        // Create paddles
        let left_paddle = create_paddle(&mut world, Side::Left, arena.paddle_spawn());
        let right_paddle = create_paddle(&mut world, Side::Right, arena.paddle_spawn());

        // Create ball
        let kickoff = Ball::kickoff(&arena);
        let ball = create_ball(&mut world, kickoff.pos, kickoff.vel);

        log::info!("new game in {}x{} arena", arena.width, arena.height);

        Ok(Self {
            world,
            arena,
            input: InputState::new(),
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::from_seed(config.seed),
            ticks: 0,
            left_paddle,
            right_paddle,
            ball,
        })
    }

    /// Advance one frame and return what happened during it
    pub fn tick(&mut self) -> &Events {
        step(
            &mut self.world,
            &self.arena,
            &self.input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        self.ticks += 1;
        &self.events
    }

    pub fn press(&mut self, action: Action) {
        self.input.press(action);
    }

    pub fn release(&mut self, action: Action) {
        self.input.release(action);
    }

    /// Key-down handler; returns whether the key is bound to an action
    pub fn key_down(&mut self, key: &str) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                self.press(action);
                true
            }
            None => false,
        }
    }

    /// Key-up handler; returns whether the key is bound to an action
    pub fn key_up(&mut self, key: &str) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                self.release(action);
                true
            }
            None => false,
        }
    }

    /// Viewport changed size
    ///
    /// Re-centers both paddles and the ball. Ball velocity and score carry
    /// over. Invalid sizes are rejected and leave the game as it was.
    pub fn resize(&mut self, width: f32, height: f32) -> GameResult<()> {
        self.arena = Arena::new(width, height).map_err(|e| {
            log::warn!("rejecting resize: {}", e);
            e
        })?;

        let paddle_top = self.arena.paddle_spawn();
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.top = paddle_top;
        }
        let ball_pos = self.arena.ball_spawn();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = ball_pos;
        }

        log::debug!("arena resized to {}x{}", width, height);
        Ok(())
    }

    /// Current ball state. `None` only if the ball entity has been removed.
    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    /// Current paddle top for one side
    pub fn paddle_top(&self, side: Side) -> Option<f32> {
        let entity = match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        };
        self.world
            .get::<&Paddle>(entity)
            .ok()
            .map(|paddle| paddle.top)
    }
}
