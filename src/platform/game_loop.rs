//! Driving loop
//!
//! Per frame: poll input → step the simulator → draw → pace. The loop is the
//! single writer of the simulator; renderers only see snapshots.

use std::time::Instant;

use super::input::InputSource;
use super::time::FramePacer;
use crate::highscores::HighScores;
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::Simulator;

/// Totals for one `GameLoop::run` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames stepped and drawn
    pub frames: u64,
    /// Games that ended in a collision
    pub games_finished: u32,
    /// Best score at the end of the run
    pub best_score: u64,
    /// The loop stopped because input asked to quit
    pub quit: bool,
}

pub struct GameLoop {
    pub sim: Simulator,
    pub highscores: HighScores,
    pacer: FramePacer,
    auto_restart: bool,
    max_ticks: Option<u64>,
}

impl GameLoop {
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.resolve_seed();
        Self {
            sim: Simulator::with_score_trigger(seed, settings.score_trigger),
            highscores: HighScores::new(),
            pacer: FramePacer::new(settings.frame_delay()),
            auto_restart: settings.auto_restart,
            max_ticks: settings.max_ticks,
        }
    }

    /// Run until input requests quit or the tick limit is reached
    pub fn run<I, R>(&mut self, input: &mut I, renderer: &mut R) -> RunSummary
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        let mut summary = RunSummary::default();

        while self.max_ticks.is_none_or(|max| summary.frames < max) {
            let frame_start = Instant::now();

            let snapshot = input.poll(&self.sim);
            if snapshot.quit_requested {
                log::info!("Quit requested after {} frames", summary.frames);
                summary.quit = true;
                break;
            }

            if !self.sim.is_playing() && (snapshot.restart_requested || self.auto_restart) {
                self.sim.start();
            }

            let report = self.sim.step(&snapshot);
            if let Some(collision) = report.collision {
                summary.games_finished += 1;
                log::info!(
                    "Game {} over ({:?}) - final score {}",
                    summary.games_finished,
                    collision,
                    self.sim.score
                );
                if let Some(rank) =
                    self.highscores
                        .add_score(self.sim.score, self.sim.ticks, self.sim.seed)
                {
                    log::info!("Leaderboard rank #{}", rank);
                }
            }

            renderer.draw(&self.sim.snapshot());
            summary.frames += 1;

            self.pacer.wait(frame_start.elapsed());
        }

        summary.best_score = self.sim.best_score;
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Autopilot, ScriptedInput};
    use crate::sim::{GamePhase, InputSnapshot, ObstacleSlot, Snapshot};

    /// Keeps every frame it is handed
    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<Snapshot>,
    }

    impl Renderer for RecordingRenderer {
        fn draw(&mut self, frame: &Snapshot) {
            self.frames.push(*frame);
        }
    }

    fn headless(max_ticks: u64) -> GameLoop {
        GameLoop::new(&Settings::headless(17, max_ticks))
    }

    #[test]
    fn test_quit_before_first_frame() {
        let mut game = headless(100);
        let mut renderer = RecordingRenderer::default();
        let summary = game.run(&mut ScriptedInput::new(Vec::new()), &mut renderer);
        assert!(summary.quit);
        assert_eq!(summary.frames, 0);
        assert!(renderer.frames.is_empty());
    }

    #[test]
    fn test_free_fall_hits_ground_and_freezes() {
        let mut game = headless(100);
        let mut renderer = RecordingRenderer::default();
        let summary = game.run(&mut ScriptedInput::idle(), &mut renderer);

        assert!(!summary.quit);
        assert_eq!(summary.frames, 100);
        assert_eq!(summary.games_finished, 1);
        assert_eq!(game.sim.phase, GamePhase::GameOver);
        // 37 ticks to reach the soft cap, then 33 at 10px per tick
        assert_eq!(game.sim.ticks, 70);
        assert!(game.highscores.is_empty(), "zero scores are not ranked");

        // Every frame after the crash is identical
        let last = renderer.frames[69];
        assert_eq!(last.phase, GamePhase::GameOver);
        assert!(renderer.frames[70..].iter().all(|frame| *frame == last));
    }

    #[test]
    fn test_auto_restart() {
        let mut settings = Settings::headless(17, 150);
        settings.auto_restart = true;
        let mut game = GameLoop::new(&settings);
        let summary = game.run(&mut ScriptedInput::idle(), &mut RecordingRenderer::default());

        assert_eq!(summary.games_finished, 2);
        assert_eq!(game.sim.phase, GamePhase::Playing);
        assert_eq!(game.sim.ticks, 10);
    }

    #[test]
    fn test_restart_request_only_after_game_over() {
        let restart = InputSnapshot {
            restart_requested: true,
            ..Default::default()
        };
        let mut inputs = vec![restart];
        inputs.extend(std::iter::repeat_n(InputSnapshot::default(), 79));
        inputs.push(restart);

        let mut game = headless(1000);
        let summary = game.run(&mut ScriptedInput::new(inputs), &mut RecordingRenderer::default());

        assert!(summary.quit);
        assert_eq!(summary.frames, 81);
        assert_eq!(summary.games_finished, 1);
        // The first request came while playing and was ignored
        assert_eq!(game.sim.phase, GamePhase::Playing);
        assert_eq!(game.sim.ticks, 1);
    }

    #[test]
    fn test_scored_run_reaches_leaderboard() {
        let mut game = headless(100);
        *game.sim.obstacles.slots_mut() = [
            ObstacleSlot { x: 204, gap_offset: 100 },
            ObstacleSlot { x: 537, gap_offset: 100 },
            ObstacleSlot { x: 870, gap_offset: 100 },
        ];

        let summary = game.run(&mut ScriptedInput::idle(), &mut RecordingRenderer::default());

        assert_eq!(summary.games_finished, 1);
        assert_eq!(summary.best_score, 1);
        assert_eq!(game.highscores.top_score(), Some(1));
        assert_eq!(game.highscores.entries[0].ticks, 70);
        assert_eq!(game.highscores.entries[0].seed, 17);
    }

    #[test]
    fn test_autopilot_long_run_keeps_invariants() {
        let mut settings = Settings::headless(2024, 3000);
        settings.auto_restart = true;
        let mut game = GameLoop::new(&settings);
        let mut renderer = RecordingRenderer::default();
        let mut pilot = Autopilot::new();

        let summary = game.run(&mut pilot, &mut renderer);

        assert_eq!(summary.frames, 3000);
        assert!(pilot.jumps() > 0);
        assert!(renderer.frames.iter().all(|frame| {
            frame.obstacles.iter().all(|slot| {
                slot.right() >= 0 && crate::gap_offset_range().contains(&slot.gap_offset)
            })
        }));
        assert!(summary.best_score >= game.highscores.top_score().unwrap_or(0));
    }
}
