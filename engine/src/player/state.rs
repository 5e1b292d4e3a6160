//! Player State
//!
//! The mutable physical state of the player. Created once at simulation start
//! and mutated in place every tick by the simulation's systems.

use glam::Vec3;

use crate::config::SimConfig;

/// Horizontal speeds below this are treated as standing still.
pub const MOVING_EPSILON: f32 = 1e-4;

/// Physical state of the player.
///
/// Horizontal (x, z) and vertical (y) velocity follow different rules, so the
/// helpers below split and recombine them rather than treating velocity as one
/// vector.
///
/// `velocity` is always the full resolved velocity. The horizontal share owed
/// to explosions is tracked in `knockback_velocity` so movement input only
/// steers the rest, and the blast part decays on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    /// Eye position in world space
    pub position: Vec3,
    /// Velocity in units per second
    pub velocity: Vec3,
    /// Horizontal part of `velocity` that came from knockback (y is always 0)
    pub knockback_velocity: Vec3,
    /// Resting on the floor after the last tick's ground check
    pub grounded: bool,
    /// Seconds left in which a jump is still allowed after leaving the ground
    pub coyote_timer: f32,
    /// Seconds left in which a buffered jump press is still live
    pub jump_buffer_timer: f32,
    /// Current sprint speed ceiling; grows with chained jumps
    pub run_cap: f32,
}

impl PlayerState {
    /// Standing on the floor at the world origin.
    pub fn spawn(config: &SimConfig) -> Self {
        Self {
            position: Vec3::new(0.0, config.world.rest_height(), 0.0),
            velocity: Vec3::ZERO,
            knockback_velocity: Vec3::ZERO,
            grounded: true,
            coyote_timer: 0.0,
            jump_buffer_timer: 0.0,
            run_cap: config.movement.run_speed,
        }
    }

    /// Velocity projected onto the ground plane.
    #[inline]
    pub fn horizontal_velocity(&self) -> Vec3 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z)
    }

    /// Length of the horizontal velocity.
    #[inline]
    pub fn horizontal_speed(&self) -> f32 {
        self.horizontal_velocity().length()
    }

    /// Replace x/z velocity, leaving vertical velocity untouched.
    #[inline]
    pub fn set_horizontal_velocity(&mut self, horizontal: Vec3) {
        self.velocity.x = horizontal.x;
        self.velocity.z = horizontal.z;
    }

    /// Player-driven horizontal velocity: everything except knockback.
    #[inline]
    pub fn movement_velocity(&self) -> Vec3 {
        self.horizontal_velocity() - self.knockback_velocity
    }

    /// Replace the player-driven part, keeping the knockback part.
    #[inline]
    pub fn set_movement_velocity(&mut self, movement: Vec3) {
        self.set_horizontal_velocity(movement + self.knockback_velocity);
    }

    /// Stop all horizontal motion, knockback included.
    pub fn clear_horizontal_velocity(&mut self) {
        self.set_horizontal_velocity(Vec3::ZERO);
        self.knockback_velocity = Vec3::ZERO;
    }

    /// Scale horizontal velocity down to `max_speed` without changing its
    /// direction. Returns `true` if it had to be scaled.
    ///
    /// The knockback part is scaled by the same factor so the split between
    /// movement and knockback survives the cap.
    pub fn cap_horizontal_speed(&mut self, max_speed: f32) -> bool {
        let speed = self.horizontal_speed();
        if speed <= max_speed {
            return false;
        }
        let scale = max_speed / speed;
        self.set_horizontal_velocity(self.horizontal_velocity() * scale);
        self.knockback_velocity *= scale;
        true
    }

    /// Whether the player has any meaningful horizontal motion.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.horizontal_speed() > MOVING_EPSILON
    }
}
