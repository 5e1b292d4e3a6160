//! Simulation
//!
//! The per-tick entry point. A host loop calls [`Simulation::advance`] once per
//! frame with the elapsed time, that frame's input and any explosions
//! triggered since the last call. Nothing here schedules itself, blocks, or
//! touches devices.
//!
//! # Tick order
//!
//! 1. Sanitize `dt`
//! 2. Arm the jump buffer on a fresh press
//! 3. Drain explosions into velocity impulses
//! 4. Coyote / jump-buffer timers
//! 5. Horizontal + vertical velocity integration, then knockback decay
//! 6. Jump
//! 7. Position integration
//! 8. Floor collision and world edge
//! 9. Speed cap and stop snap
//!
//! Horizontal speed is re-capped after every step that can raise it.

use tracing::{debug, trace, warn};

use crate::config::SimConfig;
use crate::input::{InputSnapshot, LookState};
use crate::player::{
    ExplosionEvent, JumpController, KnockbackSystem, MovementIntegrator, PlayerState,
};
use crate::telemetry::Telemetry;
use crate::world::WorldBounds;

/// Clamp an elapsed frame time to something safe to integrate.
///
/// Non-finite values become `max_dt`, negative values become zero.
pub fn sanitize_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() {
        warn!(dt, max_dt, "non-finite frame time, integrating max_dt");
        return max_dt;
    }
    dt.clamp(0.0, max_dt)
}

/// Owns the player state and every system that advances it.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    state: PlayerState,
    look: LookState,
    movement: MovementIntegrator,
    jump: JumpController,
    knockback: KnockbackSystem,
    bounds: WorldBounds,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl Simulation {
    /// Player spawned standing at the origin.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            state: PlayerState::spawn(&config),
            look: LookState::new(),
            movement: MovementIntegrator::new(config.movement),
            jump: JumpController::new(config.jump),
            knockback: KnockbackSystem::new(config.knockback),
            bounds: WorldBounds::new(config.world),
        }
    }

    /// Start from a specific state, e.g. mid-air for a scenario.
    pub fn with_state(config: SimConfig, state: PlayerState) -> Self {
        Self {
            state,
            ..Self::new(config)
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PlayerState {
        &mut self.state
    }

    pub fn look(&self) -> &LookState {
        &self.look
    }

    pub fn look_mut(&mut self) -> &mut LookState {
        &mut self.look
    }

    /// Respawn at the origin, keeping the view angles.
    pub fn reset(&mut self) {
        self.state = PlayerState::spawn(&self.config);
    }

    /// Snapshot for the debug tracker.
    pub fn telemetry(&self) -> Telemetry {
        Telemetry::capture(&self.state, self.look.yaw(), self.look.pitch())
    }

    /// Blast in front of the camera, as fired by the player.
    pub fn explosion_ahead(&self) -> ExplosionEvent {
        ExplosionEvent::ahead_of(
            self.state.position,
            self.look.forward(),
            self.config.knockback.trigger_distance,
        )
    }

    /// Advance the player by one tick.
    ///
    /// Every explosion in `explosions` is applied during this call; none are
    /// carried over to the next tick.
    pub fn advance(
        &mut self,
        dt: f32,
        input: &InputSnapshot,
        explosions: &[ExplosionEvent],
    ) -> &PlayerState {
        let dt = sanitize_dt(dt, self.config.max_dt);
        let max_h_speed = self.config.movement.max_h_speed;
        let state = &mut self.state;

        if input.jump_pressed {
            self.jump.press(state);
        }

        for event in explosions {
            if self.knockback.apply(state, event) {
                state.cap_horizontal_speed(max_h_speed);
            }
        }

        self.jump.tick_timers(state, dt);

        self.movement.integrate(state, input, dt);
        self.knockback.decay(state);
        state.cap_horizontal_speed(max_h_speed);

        if self.jump.try_jump(state) {
            state.cap_horizontal_speed(max_h_speed);
        }

        state.position += state.velocity * dt;

        let contact = self.bounds.resolve(state);
        if contact.landed {
            debug!(position = ?state.position, "landed");
        }

        let run_cap_before = state.run_cap;
        let normalized = self.movement.normalize_speed(state, input);
        if normalized.run_cap_reset {
            debug!(from = run_cap_before, to = state.run_cap, "run cap reset");
        }

        trace!(
            dt,
            position = ?state.position,
            velocity = ?state.velocity,
            knockback = ?state.knockback_velocity,
            grounded = state.grounded,
            run_cap = state.run_cap,
            "tick"
        );

        &self.state
    }
}
