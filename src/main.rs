//! Flappy Gap entry point
//!
//! Runs a paced autopilot demo in the terminal log and prints the last frame.

use flappy_gap::Settings;
use flappy_gap::platform::{Autopilot, GameLoop};
use flappy_gap::renderer::TextRenderer;

/// Demo length: about ten seconds at the default cadence
const DEMO_TICKS: u64 = 600;

fn main() {
    env_logger::init();
    log::info!("Flappy Gap (native) starting...");

    let settings = Settings {
        auto_restart: true,
        max_ticks: Some(DEMO_TICKS),
        ..Settings::default()
    };

    let mut game = GameLoop::new(&settings);
    log::info!("Game initialized with seed: {}", game.sim.seed);

    let mut renderer = TextRenderer::new(settings.render_cols, settings.render_rows);
    let mut pilot = Autopilot::new();
    let summary = game.run(&mut pilot, &mut renderer);

    println!("{}", renderer.frame());
    println!(
        "\n{} frames, {} game(s) finished, best score {}",
        summary.frames, summary.games_finished, summary.best_score
    );
    for (rank, entry) in game.highscores.entries.iter().enumerate() {
        println!("  #{:<2} {:>4} pts  {:>6} ticks", rank + 1, entry.score, entry.ticks);
    }
}
