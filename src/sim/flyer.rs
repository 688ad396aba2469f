//! The player-controlled flyer

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Vertical body with one-shot jump semantics.
///
/// The flyer never samples input itself; the simulation forwards the jump
/// edge state through [`Flyer::jump`] and [`Flyer::release_jump`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flyer {
    /// Top edge (pixels, downward positive)
    pub y: f32,
    /// Vertical velocity (pixels per tick, negative = upward)
    pub vy: f32,
    /// Set while the jump input stays held since its last press
    pub jump_latched: bool,
}

impl Default for Flyer {
    fn default() -> Self {
        Self {
            y: ((SCREEN_HEIGHT - FLYER_SIZE) / 2) as f32,
            vy: JUMP_VELOCITY,
            jump_latched: false,
        }
    }
}

impl Flyer {
    /// Override velocity with the jump velocity, unless already latched
    pub fn jump(&mut self) {
        if !self.jump_latched {
            self.vy = JUMP_VELOCITY;
            self.jump_latched = true;
        }
    }

    pub fn release_jump(&mut self) {
        self.jump_latched = false;
    }

    /// Advance one tick.
    ///
    /// Position moves by the capped velocity of this tick; gravity only
    /// affects the displacement of the next tick.
    pub fn integrate(&mut self, gravity: f32, vy_cap: f32) {
        if self.vy > vy_cap {
            self.vy = vy_cap;
        }
        self.y += self.vy;
        self.vy += gravity;
    }

    /// Bottom edge (exclusive)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + FLYER_SIZE as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_default_is_centered_after_jump() {
        let flyer = Flyer::default();
        assert_eq!(flyer.y, 280.0);
        assert_eq!(flyer.vy, JUMP_VELOCITY);
        assert!(!flyer.jump_latched);
    }

    #[test]
    fn test_integrate_uses_pre_gravity_velocity() {
        let mut flyer = Flyer { y: 300.0, vy: 5.0, jump_latched: false };
        flyer.integrate(0.6, VELOCITY_SOFT_CAP);
        assert!(approx(flyer.y, 305.0));
        assert!(approx(flyer.vy, 5.6));
    }

    #[test]
    fn test_integrate_clamps_before_moving() {
        let mut flyer = Flyer { y: 300.0, vy: 15.0, jump_latched: false };
        flyer.integrate(0.6, VELOCITY_SOFT_CAP);
        assert!(approx(flyer.y, 310.0));
        assert!(approx(flyer.vy, 10.6));
    }

    #[test]
    fn test_soft_cap_is_below_fall_speed_cap() {
        // Velocity never settles above the soft cap plus one gravity step
        let mut flyer = Flyer { y: 0.0, vy: 0.0, jump_latched: false };
        for _ in 0..200 {
            flyer.integrate(GRAVITY, VELOCITY_SOFT_CAP);
        }
        assert!(flyer.vy <= VELOCITY_SOFT_CAP + GRAVITY + 1e-4);
        assert!(flyer.vy < FALL_SPEED_CAP);
    }

    #[test]
    fn test_jump_latch() {
        let mut flyer = Flyer { y: 300.0, vy: 3.0, jump_latched: false };
        flyer.jump();
        assert_eq!(flyer.vy, JUMP_VELOCITY);
        assert!(flyer.jump_latched);

        flyer.integrate(GRAVITY, VELOCITY_SOFT_CAP);
        let after_tick = flyer.vy;
        flyer.jump();
        assert_eq!(flyer.vy, after_tick, "held jump must not re-trigger");

        flyer.release_jump();
        flyer.jump();
        assert_eq!(flyer.vy, JUMP_VELOCITY);
    }

    #[test]
    fn test_jump_twice_keeps_first_velocity() {
        let mut flyer = Flyer { y: 300.0, vy: 8.0, jump_latched: false };
        flyer.jump();
        let first = flyer.vy;
        flyer.jump();
        assert_eq!(flyer.vy, first);
        assert!(flyer.jump_latched);
    }
}
