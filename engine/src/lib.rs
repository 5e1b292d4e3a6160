//! Bunnyhop Engine Library
//!
//! First-person locomotion core: ground/air acceleration, friction, gravity,
//! buffered jumps with coyote time, jump boosts that compound with a growing
//! run cap, and radial knockback from explosions. Rendering, asset loading
//! and device handling stay with the host; the host feeds one
//! [`InputSnapshot`] per frame and reads back the [`PlayerState`].
//!
//! # Modules
//!
//! - [`config`] - Tuning constants and JSON loading
//! - [`input`] - Key/mouse state folded into per-tick input snapshots
//! - [`player`] - Player state, movement integration, jumping, knockback
//! - [`world`] - Floor collision and world edge handling
//! - [`simulation`] - The `advance` tick entry point
//! - [`telemetry`] - Debug tracker text
//!
//! # Example
//!
//! ```ignore
//! use bunnyhop_engine::{InputState, KeyCode, SimConfig, Simulation};
//!
//! let mut sim = Simulation::new(SimConfig::default());
//! let mut input = InputState::new();
//!
//! // Host event loop
//! input.keyboard.handle_key(KeyCode::W, true);
//! input.keyboard.handle_key(KeyCode::ShiftLeft, true);
//!
//! // Host frame callback
//! let snapshot = input.poll();
//! let state = sim.advance(frame_dt, &snapshot, &[]);
//! camera.set_position(state.position);
//! ```

pub mod config;
pub mod input;
pub mod player;
pub mod simulation;
pub mod telemetry;
pub mod world;

pub use config::{ConfigError, SimConfig};
pub use input::{InputSnapshot, InputState, KeyCode, KeyboardState, LookState};
pub use player::{ExplosionEvent, PlayerState};
pub use simulation::{Simulation, sanitize_dt};
pub use telemetry::Telemetry;
pub use world::WorldBounds;
