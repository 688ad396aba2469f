//! Input sources
//!
//! A source is polled once per tick and may look at the simulation (the
//! autopilot does); it never mutates it.

use std::collections::VecDeque;

use crate::consts::*;
use crate::sim::{InputSnapshot, Simulator};

/// Produces one input snapshot per tick
pub trait InputSource {
    fn poll(&mut self, sim: &Simulator) -> InputSnapshot;
}

/// Replays a fixed sequence of snapshots, then repeats `fallback`
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    queue: VecDeque<InputSnapshot>,
    fallback: InputSnapshot,
}

impl ScriptedInput {
    /// Replay `inputs`, then request quit
    pub fn new(inputs: impl IntoIterator<Item = InputSnapshot>) -> Self {
        Self::with_fallback(
            inputs,
            InputSnapshot {
                quit_requested: true,
                ..Default::default()
            },
        )
    }

    pub fn with_fallback(
        inputs: impl IntoIterator<Item = InputSnapshot>,
        fallback: InputSnapshot,
    ) -> Self {
        Self {
            queue: inputs.into_iter().collect(),
            fallback,
        }
    }

    /// No input at all, forever
    pub fn idle() -> Self {
        Self::with_fallback(std::iter::empty(), InputSnapshot::default())
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _sim: &Simulator) -> InputSnapshot {
        self.queue.pop_front().unwrap_or(self.fallback)
    }
}

/// Depth below the gap top at which the autopilot jumps.
///
/// A jump climbs 126px (12 + 11.4 + ... + 0.6), so the apex lands just
/// inside the gap.
const JUMP_TRIGGER_DEPTH: f32 = 132.0;

/// Demo player: jumps when falling past a fixed depth into the next gap
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot {
    jumps: u64,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jumps(&self) -> u64 {
        self.jumps
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, sim: &Simulator) -> InputSnapshot {
        if !sim.is_playing() {
            return InputSnapshot::default();
        }

        let next = sim.obstacles.next_relevant(FLYER_X);
        let trigger = next.gap_offset as f32 + JUMP_TRIGGER_DEPTH;
        let falling = sim.flyer.vy >= 0.0;
        let jump = falling && sim.flyer.y >= trigger && !sim.flyer.jump_latched;
        if jump {
            self.jumps += 1;
        }

        InputSnapshot {
            jump_pressed: jump,
            ..Default::default()
        }
    }
}
