//! Movement Integrator
//!
//! Applies ground/air acceleration, ground friction and gravity to the
//! player's velocity, and runs the end-of-tick speed normalization pass.
//!
//! # Physics Model
//!
//! - Walk target: 3.0 u/s, run target: the current run cap (starts at 6.0 u/s)
//! - Ground acceleration: 100 u/s², air acceleration: 12 u/s²
//! - Ground friction with no input: velocity *= 0.92 per tick
//! - Gravity: -40 u/s², always applied
//!
//! Friction is a fixed per-tick factor, so deceleration depends on tick rate.
//! That is the tuned feel; do not convert it to a time-based decay.
//!
//! # Usage
//!
//! ```rust,ignore
//! let integrator = MovementIntegrator::new(config.movement);
//! integrator.integrate(&mut state, &input, dt);
//! // ... jump, position integration, ground check ...
//! integrator.normalize_speed(&mut state, &input);
//! ```

use crate::config::MovementConfig;
use crate::input::InputSnapshot;

use super::state::PlayerState;

/// Rounding left over from splitting knockback off velocity; a speed within
/// this of the run cap still counts as at the cap.
const RUN_CAP_SLACK: f32 = 1e-3;

/// Result of the end-of-tick speed normalization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpeedNormalization {
    /// Horizontal speed exceeded `max_h_speed` and was scaled down
    pub capped: bool,
    /// Horizontal velocity was snapped to zero
    pub stopped: bool,
    /// The run cap dropped back to `run_speed`
    pub run_cap_reset: bool,
}

/// Horizontal and vertical velocity integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementIntegrator {
    config: MovementConfig,
}

impl Default for MovementIntegrator {
    fn default() -> Self {
        Self::new(MovementConfig::default())
    }
}

impl MovementIntegrator {
    pub fn new(config: MovementConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Speed the player accelerates toward: the run cap when sprinting,
    /// walk speed otherwise.
    #[inline]
    pub fn target_speed(&self, run_cap: f32, running: bool) -> f32 {
        if running {
            run_cap
        } else {
            self.config.walk_speed
        }
    }

    /// Acceleration rate for the current contact state.
    #[inline]
    pub fn acceleration_rate(&self, grounded: bool) -> f32 {
        if grounded {
            self.config.accel
        } else {
            self.config.air_accel
        }
    }

    /// Update horizontal then vertical velocity for one tick.
    pub fn integrate(&self, state: &mut PlayerState, input: &InputSnapshot, dt: f32) {
        self.integrate_horizontal(state, input, dt);
        self.integrate_vertical(state, dt);
    }

    /// Horizontal rule, applied to the player-driven part of the velocity.
    ///
    /// With input, the velocity gains `intent * rate * dt` and then faces the
    /// intent direction. The result is limited to the target speed only if
    /// the player started the tick at or under the run cap: someone moving
    /// faster than that keeps their speed and just gets steered.
    ///
    /// Without input, grounded players lose speed to friction and airborne
    /// players keep their horizontal velocity.
    ///
    /// Knockback is neither steered nor rubbed off here; it rides on top and
    /// decays separately.
    pub fn integrate_horizontal(&self, state: &mut PlayerState, input: &InputSnapshot, dt: f32) {
        let mut horizontal = state.movement_velocity();

        if input.has_intent() {
            let intent = input.move_intent;
            let target = self.target_speed(state.run_cap, input.running);
            let speed_before = horizontal.length();

            horizontal += intent * (self.acceleration_rate(state.grounded) * dt);

            let mut speed = horizontal.length();
            if speed > target && speed_before <= state.run_cap + RUN_CAP_SLACK {
                speed = target;
            }
            horizontal = intent * speed;
        } else if state.grounded {
            horizontal *= self.config.friction;
        }

        state.set_movement_velocity(horizontal);
    }

    /// Gravity, applied unconditionally.
    #[inline]
    pub fn integrate_vertical(&self, state: &mut PlayerState, dt: f32) {
        state.velocity.y += self.config.gravity * dt;
    }

    /// End-of-tick pass: cap horizontal speed, then deal with a player who
    /// has slowed below `walk_speed - stop_margin`.
    ///
    /// Such a player always loses the run cap bonus. Their velocity is only
    /// snapped to zero when there is no movement intent this tick: a single
    /// acceleration step from rest is smaller than the stop threshold, so
    /// snapping while input is held would pin the player in place.
    pub fn normalize_speed(
        &self,
        state: &mut PlayerState,
        input: &InputSnapshot,
    ) -> SpeedNormalization {
        let capped = state.cap_horizontal_speed(self.config.max_h_speed);

        if state.horizontal_speed() > self.config.stop_threshold() {
            return SpeedNormalization {
                capped,
                ..Default::default()
            };
        }

        let run_cap_reset = state.run_cap != self.config.run_speed;
        state.run_cap = self.config.run_speed;

        let stopped = !input.has_intent();
        if stopped {
            state.clear_horizontal_velocity();
        }

        SpeedNormalization {
            capped,
            stopped,
            run_cap_reset,
        }
    }
}
