//! Flappy Gap - a gap-runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (flyer physics, obstacles, collisions, game state)
//! - `renderer`: Render collaborator seam and a text rasterizer
//! - `platform`: Input sources, frame pacing and the driving game loop
//! - `highscores`: In-memory leaderboard for the current process
//! - `settings`: Runtime configuration

pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::{ScoreTrigger, Settings};

/// World constants (fixed-size world, fixed obstacle gap)
pub mod consts {
    /// World dimensions in pixels
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;

    /// Downward acceleration added to the flyer's velocity every tick
    pub const GRAVITY: f32 = 0.6;
    /// Terminal fall speed. Named but never applied by the simulation;
    /// integration only ever clamps to `VELOCITY_SOFT_CAP`.
    pub const FALL_SPEED_CAP: f32 = 22.0;
    /// Clamp applied to vertical velocity before each integration step
    pub const VELOCITY_SOFT_CAP: f32 = 10.0;

    /// Flyer defaults
    pub const FLYER_X: i32 = 200;
    /// Horizontal travel speed, applied to obstacles rather than the flyer
    pub const FLYER_SPEED: i32 = 4;
    /// Velocity override on jump (negative = upward)
    pub const JUMP_VELOCITY: f32 = -12.0;
    pub const FLYER_SIZE: i32 = 40;

    /// Obstacle defaults
    pub const OBSTACLE_COUNT: usize = 3;
    pub const OBSTACLE_WIDTH: i32 = 110;
    pub const OBSTACLE_GAP: i32 = 220;
    /// Minimum distance between the gap and the top/bottom of the world
    pub const GAP_MARGIN: i32 = 20;
    /// Distance right of the screen edge where a placed slot appears
    pub const OBSTACLE_STANDOFF: i32 = (OBSTACLE_WIDTH + 90) / 3;
    /// Numerator of the initial per-slot spacing (`i * SPACING_SPAN / 3`)
    pub const OBSTACLE_SPACING_SPAN: i32 = SCREEN_WIDTH + OBSTACLE_WIDTH + 90;

    /// Target frame cadence of the driving loop (milliseconds)
    pub const FRAME_DELAY_MS: u64 = 16;
}

/// Half-open range `[min, max)` of valid gap offsets
#[inline]
pub fn gap_offset_range() -> std::ops::Range<i32> {
    use consts::*;
    GAP_MARGIN..SCREEN_HEIGHT - OBSTACLE_GAP - GAP_MARGIN
}
