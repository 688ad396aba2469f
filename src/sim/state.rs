//! Game state and the simulator that owns it
//!
//! A single `Simulator` is the source of truth for one game: the flyer, the
//! obstacle pool, the phase and the score. Input and render collaborators get
//! it by reference; there are no process-wide singletons.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::flyer::Flyer;
use super::obstacle::{ObstaclePool, ObstacleSlot};
use crate::consts::*;
use crate::settings::ScoreTrigger;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; simulation is frozen until `start()`
    GameOver,
}

/// Read-only view of the simulation handed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub flyer: Flyer,
    pub obstacles: [ObstacleSlot; OBSTACLE_COUNT],
    pub score: u64,
    pub best_score: u64,
    pub phase: GamePhase,
    pub ticks: u64,
}

/// Owns and advances one game
#[derive(Debug, Clone)]
pub struct Simulator {
    /// Seed the gap RNG was created from
    pub seed: u64,
    /// Gap RNG (advances across restarts)
    pub(crate) rng: Pcg32,
    /// Scoring rule
    pub score_trigger: ScoreTrigger,
    pub phase: GamePhase,
    pub flyer: Flyer,
    pub obstacles: ObstaclePool,
    /// Obstacles cleared since the last start
    pub score: u64,
    /// Highest score reached at a game over during this process
    pub best_score: u64,
    /// Playing ticks since the last start
    pub ticks: u64,
}

impl Simulator {
    /// Create a simulator and start the first game
    pub fn new(seed: u64) -> Self {
        Self::with_score_trigger(seed, ScoreTrigger::default())
    }

    pub fn with_score_trigger(seed: u64, score_trigger: ScoreTrigger) -> Self {
        let mut sim = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score_trigger,
            phase: GamePhase::Playing,
            flyer: Flyer::default(),
            obstacles: ObstaclePool::new(),
            score: 0,
            best_score: 0,
            ticks: 0,
        };
        sim.start();
        sim
    }

    /// Reset score, flyer and obstacles, and enter `Playing`.
    ///
    /// Valid from any phase. `best_score` is kept.
    pub fn start(&mut self) {
        self.score = 0;
        self.ticks = 0;
        self.flyer = Flyer::default();
        self.obstacles.initialize(&mut self.rng);
        self.phase = GamePhase::Playing;
        log::info!("Game started (seed {})", self.seed);
    }

    /// Enter `GameOver`, folding the score into `best_score`
    pub(crate) fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        log::info!("Game over - score {}", self.score);
        if self.score > self.best_score {
            log::info!("New best score: {} (was {})", self.score, self.best_score);
            self.best_score = self.score;
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            flyer: self.flyer,
            obstacles: *self.obstacles.slots(),
            score: self.score,
            best_score: self.best_score,
            phase: self.phase,
            ticks: self.ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_playing() {
        let sim = Simulator::new(1);
        assert_eq!(sim.phase, GamePhase::Playing);
        assert_eq!(sim.score, 0);
        assert_eq!(sim.flyer.y, ((SCREEN_HEIGHT - FLYER_SIZE) / 2) as f32);
        assert_eq!(sim.flyer.vy, JUMP_VELOCITY);
        assert!(!sim.flyer.jump_latched);
        assert_eq!(sim.obstacles.positions(), [866, 1199, 1532]);
    }

    #[test]
    fn test_start_twice_from_game_over_is_idempotent() {
        let mut sim = Simulator::new(5);
        sim.score = 4;
        sim.flyer.y = 590.0;
        sim.flyer.jump_latched = true;
        sim.obstacles.slots_mut()[2].x = -20;
        sim.game_over();

        sim.start();
        let first = sim.snapshot();
        sim.start();
        let second = sim.snapshot();

        assert_eq!(first.phase, GamePhase::Playing);
        assert_eq!(first.flyer, second.flyer);
        assert_eq!(first.score, 0);
        assert_eq!(second.score, 0);
        assert_eq!(first.ticks, second.ticks);
        // Gap offsets are re-rolled; positions are not
        assert_eq!(
            first.obstacles.map(|slot| slot.x),
            second.obstacles.map(|slot| slot.x)
        );
    }

    #[test]
    fn test_best_score_is_max_on_game_over() {
        let mut sim = Simulator::new(9);
        sim.score = 3;
        sim.game_over();
        assert_eq!(sim.best_score, 3);

        sim.start();
        assert_eq!(sim.best_score, 3, "start keeps the best score");
        sim.score = 1;
        sim.game_over();
        assert_eq!(sim.best_score, 3);
        assert_eq!(sim.score, 1, "no score adjustment on game over");
    }

    #[test]
    fn test_snapshot_serializes() {
        let sim = Simulator::new(3);
        let json = serde_json::to_string(&sim.snapshot()).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sim.snapshot());
    }
}
