use crate::{Arena, Ball, Events, GameRng, Score};
use hecs::World;

/// Award goals recorded this tick and re-serve the ball
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    score: &mut Score,
    events: &Events,
    rng: &mut GameRng,
) {
    for goal in &events.goals {
        score.award(goal.scorer);
        log::info!(
            "{} player scored, score is now {}-{}",
            goal.scorer.as_str(),
            score.left,
            score.right
        );

        // Reset ball
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.reset(arena, rng);
        }
    }
}
