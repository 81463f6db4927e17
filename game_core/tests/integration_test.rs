use game_core::*;
use glam::Vec2;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn new_game() -> Game {
    init_logging();
    Game::new(&Config::seeded(2024).with_arena(800.0, 600.0)).unwrap()
}

fn set_paddle(game: &mut Game, side: Side, top: f32) {
    for (_e, paddle) in game.world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.top = top;
        }
    }
}

fn set_ball(game: &mut Game, pos: Vec2, vel: Vec2) {
    for (_e, ball) in game.world.query_mut::<&mut Ball>() {
        ball.pos = pos;
        ball.vel = vel;
    }
}

#[test]
fn test_opening_serve_scores_for_left_player() {
    let mut game = new_game();

    // The ball reaches the right paddle column below the centered paddle
    // and crosses the right edge on tick 97
    for _ in 0..96 {
        game.tick();
        assert!(game.events.goals.is_empty(), "No goal before tick 97");
        assert!(game.events.ball_hit_paddle.is_none());
    }
    assert_eq!(game.ball().unwrap().pos, Vec2::new(770.0, 478.0));

    let events = game.tick().clone();

    assert_eq!(events.goals, vec![GoalEvent { scorer: Side::Left }]);
    assert_eq!(game.score.left, 1);
    assert_eq!(game.score.right, 0);
    let ball = game.ball().unwrap();
    assert_eq!(ball.pos, Vec2::new(386.0, 286.0), "Ball re-served from center");
    assert!((3.0..5.0).contains(&ball.vel.x.abs()));
    assert!((-3.0..3.0).contains(&ball.vel.y));
}

#[test]
fn test_right_paddle_returns_opening_serve() {
    let mut game = new_game();

    game.press(Action::RightDown);
    for _ in 0..10 {
        game.tick();
    }
    game.release(Action::RightDown);
    assert_eq!(game.paddle_top(Side::Right), Some(350.0));

    let mut hit_tick = None;
    for _ in 0..100 {
        let hit = game.tick().ball_hit_paddle;
        assert!(game.events.goals.is_empty());
        if hit == Some(Side::Right) {
            hit_tick = Some(game.ticks);
            break;
        }
    }

    assert_eq!(hit_tick, Some(87));
    let ball = game.ball().unwrap();
    // Offset (460 + 14) - (350 + 70) = 54, 54 * 0.15 * 1.05 is over the cap
    assert!((ball.vel.x + 4.2).abs() < 1e-4, "vx = {}", ball.vel.x);
    assert_eq!(ball.vel.y, Params::BALL_SPEED_MAX);
    assert_eq!(ball.pos.x, 732.0);
}

#[test]
fn test_right_player_scores_on_the_left() {
    let mut game = new_game();
    set_paddle(&mut game, Side::Left, 0.0);
    set_ball(&mut game, Vec2::new(60.0, 400.0), Vec2::new(-5.0, 0.0));

    let mut goals = Vec::new();
    for _ in 0..20 {
        goals.extend(game.tick().goals.iter().copied());
        if !goals.is_empty() {
            break;
        }
    }

    assert_eq!(goals, vec![GoalEvent { scorer: Side::Right }]);
    assert_eq!(game.score, Score { left: 0, right: 1 });
    assert_eq!(game.ball().unwrap().pos, game.arena.ball_spawn());
}

#[test]
fn test_ball_bounces_between_walls() {
    let mut game = new_game();
    set_ball(&mut game, Vec2::new(300.0, 10.0), Vec2::new(0.5, -4.0));

    // 10 -> 6 -> 2 -> -2 clamps to 0 and flips
    for _ in 0..3 {
        game.tick();
    }
    let ball = game.ball().unwrap();
    assert!(game.events.ball_hit_wall);
    assert_eq!(ball.pos.y, 0.0);
    assert_eq!(ball.vel.y, 4.0);

    game.tick();
    assert!(!game.events.ball_hit_wall, "Events are cleared every tick");
    assert_eq!(game.ball().unwrap().pos.y, 4.0);
}

#[test]
fn test_long_rally_keeps_invariants() {
    let mut game = new_game();

    for i in 0..5_000u32 {
        // Crude bots: each paddle chases the ball, alternating priority
        let ball = game.ball().unwrap();
        let center = ball.pos.y + Params::BALL_SIZE / 2.0;
        for (side, up, down) in [
            (Side::Left, Action::LeftUp, Action::LeftDown),
            (Side::Right, Action::RightUp, Action::RightDown),
        ] {
            let top = game.paddle_top(side).unwrap();
            let paddle_center = top + Params::PADDLE_HEIGHT / 2.0;
            game.input.set(up, center < paddle_center - 10.0);
            game.input.set(down, center > paddle_center + 10.0 || i % 7 == 0);
        }

        game.tick();

        let ball = game.ball().unwrap();
        assert!(ball.vel.x.abs() <= Params::BALL_SPEED_MAX);
        assert!(ball.vel.y.abs() <= Params::BALL_SPEED_MAX);
        assert!(ball.pos.y >= 0.0 && ball.pos.y <= 600.0 - Params::BALL_SIZE);
        for side in [Side::Left, Side::Right] {
            let top = game.paddle_top(side).unwrap();
            assert!((0.0..=game.arena.max_paddle_top()).contains(&top));
        }
    }
    assert_eq!(game.ticks, 5_000);
}

#[test]
fn test_resize_mid_game() {
    let mut game = new_game();
    for _ in 0..30 {
        game.tick();
    }
    let vel = game.ball().unwrap().vel;

    game.resize(1280.0, 720.0).unwrap();
    assert!(game.resize(1280.0, 0.0).is_err());

    assert_eq!(game.arena.width, 1280.0);
    assert_eq!(game.ball().unwrap().pos, Vec2::new(626.0, 346.0));
    assert_eq!(game.ball().unwrap().vel, vel);
    assert_eq!(game.paddle_top(Side::Left), Some(290.0));

    game.tick();
    assert_eq!(game.ball().unwrap().pos, Vec2::new(626.0, 346.0) + vel);
}
