//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per rendered frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod flyer;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use collision::{Collision, check_collisions};
pub use flyer::Flyer;
pub use obstacle::{ObstaclePool, ObstacleSlot};
pub use state::{GamePhase, Simulator, Snapshot};
pub use tick::{InputSnapshot, TickReport, tick};
