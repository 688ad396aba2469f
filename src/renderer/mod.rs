//! Rendering module
//!
//! Renderers consume a read-only [`Snapshot`] once per tick and perform no
//! game logic. The core never depends on a graphics library.

pub mod text;

pub use text::TextRenderer;

use crate::sim::Snapshot;

/// A render collaborator
pub trait Renderer {
    /// Draw one frame from the current simulation state
    fn draw(&mut self, frame: &Snapshot);
}
