//! Per-tick simulation step
//!
//! One call advances the game by one rendered frame:
//! input edge → flyer integration → obstacle scroll → scoring → collisions.

use super::collision::{Collision, check_collisions};
use super::state::{GamePhase, Simulator};
use crate::consts::*;
use crate::settings::ScoreTrigger;

/// Input sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Jump input currently held
    pub jump_pressed: bool,
    /// Exit requested (consumed by the driving loop, not the simulator)
    pub quit_requested: bool,
    /// Play again after a game over (consumed by the driving loop)
    pub restart_requested: bool,
}

impl InputSnapshot {
    pub fn jump() -> Self {
        Self {
            jump_pressed: true,
            ..Default::default()
        }
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Points added this tick
    pub scored: u64,
    /// Set on the tick that ended the game
    pub collision: Option<Collision>,
}

/// Advance the simulation by one tick. Does nothing outside `Playing`.
pub fn tick(sim: &mut Simulator, input: &InputSnapshot) -> TickReport {
    if sim.phase == GamePhase::GameOver {
        return TickReport::default();
    }

    sim.ticks += 1;

    if input.jump_pressed {
        sim.flyer.jump();
    } else {
        sim.flyer.release_jump();
    }

    sim.flyer.integrate(GRAVITY, VELOCITY_SOFT_CAP);

    let before = sim.obstacles.positions();
    let recycled = sim.obstacles.advance(FLYER_SPEED, &mut sim.rng);
    if recycled > 0 {
        log::debug!("Recycled {} obstacle(s) at tick {}", recycled, sim.ticks);
    }

    let scored = cleared_obstacles(sim, &before);
    if scored > 0 {
        sim.score += scored;
        log::debug!("Score: {}", sim.score);
    }

    let collision = check_collisions(&sim.flyer, &sim.obstacles);
    if let Some(kind) = collision {
        log::debug!("Collision with {:?} at y={:.1}", kind, sim.flyer.y);
        sim.game_over();
    }

    TickReport { scored, collision }
}

/// Points earned by the scroll that moved slots from `before` to their current x
fn cleared_obstacles(sim: &Simulator, before: &[i32; OBSTACLE_COUNT]) -> u64 {
    match sim.score_trigger {
        ScoreTrigger::ExactEdge => {
            let next = sim.obstacles.next_relevant(FLYER_X);
            u64::from(next.x == FLYER_X)
        }
        ScoreTrigger::Crossing => sim
            .obstacles
            .slots()
            .iter()
            .zip(before)
            .filter(|(slot, was)| **was > FLYER_X && slot.x <= FLYER_X)
            .count() as u64,
    }
}

impl Simulator {
    /// Advance one tick; see [`tick`]
    pub fn step(&mut self, input: &InputSnapshot) -> TickReport {
        tick(self, input)
    }
}
