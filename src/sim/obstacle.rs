//! Recyclable gap obstacles
//!
//! The pool is a fixed arena of exactly three slots. Slots are never created or
//! destroyed after start; a slot that leaves the world on the left is placed
//! again past the right edge with a fresh gap.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::gap_offset_range;

/// One gap obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ObstacleSlot {
    /// Left edge (pixels)
    pub x: i32,
    /// Top of the passable gap; the gap spans `[gap_offset, gap_offset + OBSTACLE_GAP)`
    pub gap_offset: i32,
}

impl ObstacleSlot {
    /// Move the slot to the stand-off position right of the screen with a new gap
    pub fn place<R: Rng>(&mut self, rng: &mut R) {
        self.gap_offset = rng.random_range(gap_offset_range());
        self.x = SCREEN_WIDTH + OBSTACLE_STANDOFF;
    }

    /// Right edge (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + OBSTACLE_WIDTH
    }

    /// Bottom of the gap (exclusive)
    #[inline]
    pub fn gap_bottom(&self) -> i32 {
        self.gap_offset + OBSTACLE_GAP
    }

    /// True once the right edge has crossed the left world boundary
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.right() < 0
    }
}

/// Fixed set of obstacle slots forming the upcoming obstacle stream
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstaclePool {
    slots: [ObstacleSlot; OBSTACLE_COUNT],
}

impl ObstaclePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place every slot, then spread them evenly to the right of the screen
    pub fn initialize<R: Rng>(&mut self, rng: &mut R) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.place(rng);
            slot.x += i as i32 * OBSTACLE_SPACING_SPAN / 3;
        }
    }

    /// Scroll every slot left by `delta_x`, recycling the ones that left the world.
    ///
    /// Returns the number of slots recycled this call.
    pub fn advance<R: Rng>(&mut self, delta_x: i32, rng: &mut R) -> usize {
        let mut recycled = 0;
        for slot in &mut self.slots {
            slot.x -= delta_x;
            if slot.is_offscreen() {
                slot.place(rng);
                recycled += 1;
            }
        }
        recycled
    }

    /// The nearest slot whose right edge is still ahead of `flyer_x`.
    ///
    /// # Panics
    ///
    /// Panics if no slot is ahead. Spacing and recycling keep at least one
    /// slot ahead of the flyer at all times, so this is a logic error.
    pub fn next_relevant(&self, flyer_x: i32) -> &ObstacleSlot {
        self.slots
            .iter()
            .filter(|slot| slot.right() > flyer_x)
            .min_by_key(|slot| slot.x)
            .unwrap_or_else(|| {
                panic!(
                    "obstacle pool has no slot ahead of x={}: {:?}",
                    flyer_x, self.slots
                )
            })
    }

    /// Read-only view of the slots (identity order, not lateral order)
    pub fn slots(&self) -> &[ObstacleSlot; OBSTACLE_COUNT] {
        &self.slots
    }

    /// Mutable access for drivers and tests that stage a specific layout
    pub fn slots_mut(&mut self) -> &mut [ObstacleSlot; OBSTACLE_COUNT] {
        &mut self.slots
    }

    /// Horizontal positions of all slots, in identity order
    pub fn positions(&self) -> [i32; OBSTACLE_COUNT] {
        self.slots.map(|slot| slot.x)
    }
}
