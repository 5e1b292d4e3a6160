//! Mouse Look State
//!
//! Handles captured mouse input with delta accumulation and turns it into the
//! camera yaw/pitch. Yaw also orients the movement intent; pitch is camera
//! only and never reaches the physics.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

/// Radians of rotation per unit of raw mouse motion.
pub const DEFAULT_SENSITIVITY: f32 = 0.0022;

/// Pitch stays this far short of straight up/down.
const PITCH_EPSILON: f32 = 0.01;

/// Mouse look with delta accumulation.
///
/// - **Delta accumulation**: raw deltas accumulate until [`LookState::apply`]
/// - **Capture gating**: motion is ignored while the pointer is not locked
///
/// # Example
///
/// ```rust,ignore
/// let mut look = LookState::new();
/// look.set_captured(true);
///
/// // In event loop
/// look.accumulate_delta(10.0, -5.0);
///
/// // Once per tick, before building the input snapshot
/// look.apply();
/// let input = keyboard.snapshot(look.yaw());
/// ```
#[derive(Debug, Clone)]
pub struct LookState {
    yaw: f32,
    pitch: f32,
    sensitivity: f32,
    delta_x: f32,
    delta_y: f32,
    captured: bool,
}

impl Default for LookState {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: DEFAULT_SENSITIVITY,
            delta_x: 0.0,
            delta_y: 0.0,
            captured: false,
        }
    }
}

impl LookState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate raw mouse motion. Ignored unless the cursor is captured.
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        if !self.captured || !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.delta_x += dx;
        self.delta_y += dy;
    }

    /// Fold the accumulated motion into yaw/pitch and clear it.
    ///
    /// Moving the mouse right turns right (yaw decreases); moving it down
    /// looks down.
    pub fn apply(&mut self) {
        self.yaw -= self.delta_x * self.sensitivity;
        self.set_pitch(self.pitch - self.delta_y * self.sensitivity);
        self.clear_delta();
    }

    /// Drop accumulated motion without applying it.
    #[inline]
    pub fn clear_delta(&mut self) {
        self.delta_x = 0.0;
        self.delta_y = 0.0;
    }

    /// Set whether the cursor is captured (pointer lock).
    ///
    /// Releasing the capture drops any motion not yet applied.
    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
        if !captured {
            self.clear_delta();
        }
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set pitch, clamped just short of vertical.
    pub fn set_pitch(&mut self, pitch: f32) {
        let limit = FRAC_PI_2 - PITCH_EPSILON;
        self.pitch = pitch.clamp(-limit, limit);
    }

    /// Camera look direction: pitch about X, then yaw about Y, applied to -Z.
    pub fn forward(&self) -> Vec3 {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch) * Vec3::NEG_Z
    }
}
