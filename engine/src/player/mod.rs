//! Player Module
//!
//! Player state and the systems that advance it each tick.
//!
//! # Components
//!
//! - [`PlayerState`] - Position, velocity, grounded flag, jump timers, run cap
//! - [`MovementIntegrator`] - Ground/air acceleration, friction, gravity and
//!   the end-of-tick speed normalization pass
//! - [`JumpController`] - Jump buffering, coyote time, boosted jumps that grow
//!   the run cap
//! - [`KnockbackSystem`] - Radial velocity impulses from [`ExplosionEvent`]s

pub mod jump;
pub mod knockback;
pub mod movement_controller;
pub mod state;

pub use jump::JumpController;
pub use knockback::{ExplosionEvent, KnockbackSystem};
pub use movement_controller::{MovementIntegrator, SpeedNormalization};
pub use state::PlayerState;
