//! Jump Controller
//!
//! Owns jump-buffer and coyote-time bookkeeping and the jump itself.
//!
//! A press arms the buffer for `jump_buffer` seconds; the jump fires on the
//! first tick the player is grounded or still inside the coyote window. Each
//! jump multiplies horizontal velocity and the run cap by `jump_boost`, so
//! chained hops keep getting faster until the player stops.

use tracing::debug;

use crate::config::JumpConfig;

use super::state::PlayerState;

/// Grounded/Airborne jump state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpController {
    config: JumpConfig,
}

impl Default for JumpController {
    fn default() -> Self {
        Self::new(JumpConfig::default())
    }
}

impl JumpController {
    pub fn new(config: JumpConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &JumpConfig {
        &self.config
    }

    /// Arm the jump buffer. Call once per key press, not while held.
    pub fn press(&self, state: &mut PlayerState) {
        state.jump_buffer_timer = self.config.jump_buffer;
    }

    /// Refresh coyote time while grounded, otherwise count it down; count
    /// the jump buffer down. Neither timer goes below zero.
    pub fn tick_timers(&self, state: &mut PlayerState, dt: f32) {
        if state.grounded {
            state.coyote_timer = self.config.coyote_time;
        } else {
            state.coyote_timer = (state.coyote_timer - dt).max(0.0);
        }

        if state.jump_buffer_timer > 0.0 {
            state.jump_buffer_timer = (state.jump_buffer_timer - dt).max(0.0);
        }
    }

    /// Whether a jump would fire right now.
    #[inline]
    pub fn can_jump(&self, state: &PlayerState) -> bool {
        state.jump_buffer_timer > 0.0 && (state.grounded || state.coyote_timer > 0.0)
    }

    /// Launch speed for a given horizontal speed.
    ///
    /// Faster jumps arc lower and longer:
    /// `jump_power - min(speed * flatten_factor, jump_power * flatten_cap)`.
    pub fn launch_velocity(&self, horizontal_speed: f32) -> f32 {
        let flatten = (horizontal_speed * self.config.flatten_factor)
            .min(self.config.jump_power * self.config.flatten_cap);
        self.config.jump_power - flatten
    }

    /// Execute a buffered jump if eligible. Returns `true` if the player jumped.
    ///
    /// The caller re-caps horizontal speed afterwards; the boost alone can
    /// push it past `max_h_speed`.
    pub fn try_jump(&self, state: &mut PlayerState) -> bool {
        if !self.can_jump(state) {
            return false;
        }

        state.grounded = false;
        state.jump_buffer_timer = 0.0;
        state.coyote_timer = 0.0;

        // Only the player's own momentum is boosted, not knockback
        let boosted = state.movement_velocity() * self.config.jump_boost;
        state.set_movement_velocity(boosted);

        let horizontal_speed = state.horizontal_speed();
        state.velocity.y = self.launch_velocity(horizontal_speed);

        if state.is_moving() {
            state.run_cap *= self.config.jump_boost;
        }

        debug!(
            horizontal_speed,
            vertical_velocity = state.velocity.y,
            run_cap = state.run_cap,
            "jump"
        );
        true
    }
}
