//! Platform layer
//!
//! Everything outside the simulation core that drives it:
//! - Input sources that produce one `InputSnapshot` per tick
//! - Frame pacing to the target cadence
//! - The game loop tying input, simulation and rendering together

pub mod game_loop;
pub mod input;
pub mod time;

pub use game_loop::{GameLoop, RunSummary};
pub use input::{Autopilot, InputSource, ScriptedInput};
pub use time::FramePacer;
