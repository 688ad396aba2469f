//! Collision detection for the flyer
//!
//! All checks are plain inequalities on pixel coordinates. Boundaries are
//! inclusive of collision on the gap edges: touching the top or bottom of the
//! gap counts as a hit.

use serde::{Deserialize, Serialize};

use super::flyer::Flyer;
use super::obstacle::{ObstaclePool, ObstacleSlot};
use crate::consts::*;

/// What the flyer collided with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// Bottom edge passed the bottom of the world
    Ground,
    /// Overlapped an obstacle outside its gap
    Obstacle,
}

/// Bottom edge of the flyer is below the world
#[inline]
pub fn hits_ground(flyer: &Flyer) -> bool {
    flyer.bottom() > SCREEN_HEIGHT as f32
}

/// Horizontal extents of the flyer (at `flyer_x`) and the slot overlap
#[inline]
pub fn overlaps_horizontally(slot: &ObstacleSlot, flyer_x: i32) -> bool {
    slot.x < flyer_x + FLYER_SIZE && slot.right() > flyer_x
}

/// Flyer touches or leaves the vertical gap of `slot`
#[inline]
pub fn outside_gap(flyer: &Flyer, slot: &ObstacleSlot) -> bool {
    flyer.y <= slot.gap_offset as f32 || flyer.bottom() >= slot.gap_bottom() as f32
}

/// Check the flyer against the ground first, then the next relevant obstacle
pub fn check_collisions(flyer: &Flyer, pool: &ObstaclePool) -> Option<Collision> {
    if hits_ground(flyer) {
        return Some(Collision::Ground);
    }

    let next = pool.next_relevant(FLYER_X);
    if overlaps_horizontally(next, FLYER_X) && outside_gap(flyer, next) {
        return Some(Collision::Obstacle);
    }

    None
}
