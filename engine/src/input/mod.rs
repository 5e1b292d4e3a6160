//! Input Module
//!
//! Produces the per-tick [`InputSnapshot`] the simulation consumes: a
//! normalized, yaw-rotated movement intent plus run and jump flags. Device
//! events are folded into [`KeyboardState`] and [`LookState`] by the host
//! loop; the simulation itself never subscribes to events.
//!
//! # Example
//!
//! ```rust,ignore
//! use bunnyhop_engine::input::{KeyboardState, KeyCode, LookState};
//!
//! let mut keyboard = KeyboardState::new();
//! let mut look = LookState::new();
//!
//! keyboard.handle_key(KeyCode::W, true);
//! keyboard.handle_key(KeyCode::Space, true);
//!
//! look.apply();
//! let input = keyboard.snapshot(look.yaw());
//! assert!(input.jump_pressed);
//! ```

pub mod keyboard;
pub mod mouse_state;
pub mod snapshot;

pub use keyboard::{KeyCode, KeyboardState, MovementKeys};
pub use mouse_state::{DEFAULT_SENSITIVITY, LookState};
pub use snapshot::{InputSnapshot, move_intent};

/// Keyboard and mouse-look state tracked together by the host loop.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub look: LookState,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply pending mouse motion and build this tick's snapshot.
    pub fn poll(&mut self) -> InputSnapshot {
        self.look.apply();
        self.keyboard.snapshot(self.look.yaw())
    }

    /// Reset all input state to defaults, keeping the current view angles.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.look.clear_delta();
    }
}
