//! Explosion Knockback
//!
//! Turns explosion events into one-off radial velocity impulses. Strength
//! falls off linearly from `blast_power` at the origin to zero at
//! `blast_radius`. The impulse is added straight to velocity on the tick the
//! event is drained. Its horizontal share is also booked into the player's
//! knockback channel, which movement input does not steer and which shrinks
//! by `decay` every tick. The vertical share is left to gravity.

use glam::Vec3;
use tracing::debug;

use crate::config::KnockbackConfig;

use super::state::PlayerState;

/// Distances shorter than this have no usable direction.
const MIN_BLAST_DISTANCE: f32 = 1e-6;

/// Knockback slower than this is dropped instead of decayed further.
const SETTLED_KNOCKBACK_SPEED: f32 = 1e-3;

/// An explosion, consumed once by the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplosionEvent {
    /// World-space blast origin
    pub origin: Vec3,
}

impl ExplosionEvent {
    pub fn new(origin: Vec3) -> Self {
        Self { origin }
    }

    /// A blast `distance` units along `forward` from the eye, as fired from
    /// the player's camera.
    pub fn ahead_of(eye: Vec3, forward: Vec3, distance: f32) -> Self {
        Self::new(eye + forward.normalize_or_zero() * distance)
    }
}

/// Converts explosion events into velocity impulses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnockbackSystem {
    config: KnockbackConfig,
}

impl Default for KnockbackSystem {
    fn default() -> Self {
        Self::new(KnockbackConfig::default())
    }
}

impl KnockbackSystem {
    pub fn new(config: KnockbackConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KnockbackConfig {
        &self.config
    }

    /// Impulse a blast at `origin` would apply to a player at `position`.
    ///
    /// Zero outside the blast radius, and zero when the player sits exactly
    /// on the origin since there is no direction to push in.
    pub fn impulse(&self, position: Vec3, origin: Vec3) -> Vec3 {
        let delta = position - origin;
        let distance = delta.length();
        if !distance.is_finite() || distance >= self.config.blast_radius {
            return Vec3::ZERO;
        }
        if distance < MIN_BLAST_DISTANCE {
            return Vec3::ZERO;
        }

        let force =
            (self.config.blast_radius - distance) / self.config.blast_radius * self.config.blast_power;
        (delta / distance) * force
    }

    /// Add the blast's impulse to the player's velocity.
    ///
    /// Returns `true` if the player was inside the blast and got pushed. The
    /// caller re-caps horizontal speed afterwards.
    pub fn apply(&self, state: &mut PlayerState, event: &ExplosionEvent) -> bool {
        let impulse = self.impulse(state.position, event.origin);
        if impulse == Vec3::ZERO {
            return false;
        }

        state.velocity += impulse;
        state.knockback_velocity += Vec3::new(impulse.x, 0.0, impulse.z);
        debug!(
            origin = ?event.origin,
            impulse = impulse.length(),
            "knockback"
        );
        true
    }

    /// Shrink the knockback channel by one tick of decay, taking the lost
    /// speed out of velocity with it. Movement velocity is untouched.
    pub fn decay(&self, state: &mut PlayerState) {
        if state.knockback_velocity == Vec3::ZERO {
            return;
        }

        let movement = state.movement_velocity();
        let decayed = state.knockback_velocity * self.config.decay;
        state.knockback_velocity = if decayed.length() < SETTLED_KNOCKBACK_SPEED {
            Vec3::ZERO
        } else {
            decayed
        };
        state.set_movement_velocity(movement);
    }
}
