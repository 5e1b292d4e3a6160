//! Keyboard Input Module
//!
//! Tracks held movement keys and turns a Space press into a one-shot jump
//! edge. Uses its own key codes; `From<winit::keyboard::KeyCode>` bridges the
//! windowing layer.

use super::snapshot::{InputSnapshot, move_intent};

/// Key codes the locomotion core cares about, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    ShiftLeft,
    ShiftRight,

    /// Catch-all for unhandled keys
    Unknown,
}

impl From<winit::keyboard::KeyCode> for KeyCode {
    fn from(key: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode as Winit;
        match key {
            Winit::KeyW => KeyCode::W,
            Winit::KeyA => KeyCode::A,
            Winit::KeyS => KeyCode::S,
            Winit::KeyD => KeyCode::D,
            Winit::ArrowUp => KeyCode::ArrowUp,
            Winit::ArrowDown => KeyCode::ArrowDown,
            Winit::ArrowLeft => KeyCode::ArrowLeft,
            Winit::ArrowRight => KeyCode::ArrowRight,
            Winit::Space => KeyCode::Space,
            Winit::ShiftLeft => KeyCode::ShiftLeft,
            Winit::ShiftRight => KeyCode::ShiftRight,
            _ => KeyCode::Unknown,
        }
    }
}

/// Tracks the current state of movement keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// W / ArrowUp
    pub forward: bool,
    /// S / ArrowDown
    pub backward: bool,
    /// A / ArrowLeft
    pub left: bool,
    /// D / ArrowRight
    pub right: bool,
    /// Shift - raises the target speed to the run cap
    pub run: bool,
    /// Space
    pub jump: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled,
    /// `false` otherwise.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W | KeyCode::ArrowUp => self.forward = pressed,
            KeyCode::S | KeyCode::ArrowDown => self.backward = pressed,
            KeyCode::A | KeyCode::ArrowLeft => self.left = pressed,
            KeyCode::D | KeyCode::ArrowRight => self.right = pressed,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => self.run = pressed,
            KeyCode::Space => self.jump = pressed,
            KeyCode::Unknown => return false,
        }
        true
    }

    /// Check if any direction key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Get the forward/backward movement direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Get the left/right movement direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }
}

/// Keyboard state plus the latched jump edge.
///
/// Jump requests are edge-triggered: OS key repeat delivers repeated presses
/// while Space is held, and only the first one counts.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pub movement: MovementKeys,
    jump_latched: bool,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the key was handled as a movement key.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if key == KeyCode::Space && pressed && !self.movement.jump {
            self.jump_latched = true;
        }
        self.movement.handle_key(key, pressed)
    }

    /// Build this tick's input and consume the jump edge.
    pub fn snapshot(&mut self, yaw: f32) -> InputSnapshot {
        let intent = move_intent(
            self.movement.forward_axis() as f32,
            self.movement.right_axis() as f32,
            yaw,
        );
        let jump_pressed = std::mem::take(&mut self.jump_latched);
        InputSnapshot::new(intent, self.movement.run, jump_pressed)
    }

    /// Reset all keyboard state, dropping any pending jump.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
