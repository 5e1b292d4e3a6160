//! Per-tick input handed to the simulation.

use glam::{Quat, Vec3};

/// Intent vectors shorter than this are treated as "no movement".
const MIN_INTENT_LENGTH_SQ: f32 = 1e-8;

/// Everything the locomotion core reads from the player for one tick.
///
/// Built once per tick by the input collaborator; the simulation never looks
/// at devices directly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    /// Unit vector in the ground plane, already rotated by camera yaw, or zero
    pub move_intent: Vec3,
    /// Sprint held: target speed becomes the run cap
    pub running: bool,
    /// A jump key went down since the previous tick
    pub jump_pressed: bool,
}

impl InputSnapshot {
    /// Build a snapshot, normalizing the intent.
    ///
    /// The vertical component is discarded. Non-finite or zero-length
    /// intents become zero; anything else is scaled to unit length.
    pub fn new(move_intent: Vec3, running: bool, jump_pressed: bool) -> Self {
        Self {
            move_intent: sanitize_intent(move_intent),
            running,
            jump_pressed,
        }
    }

    /// No movement, no sprint, no jump.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Whether the player is asking to move this tick.
    #[inline]
    pub fn has_intent(&self) -> bool {
        self.move_intent != Vec3::ZERO
    }
}

fn sanitize_intent(intent: Vec3) -> Vec3 {
    let flat = Vec3::new(intent.x, 0.0, intent.z);
    if !flat.is_finite() || flat.length_squared() < MIN_INTENT_LENGTH_SQ {
        return Vec3::ZERO;
    }
    flat.normalize()
}

/// World-space movement direction from key axes and camera yaw.
///
/// Axes are in `[-1, 1]`. Yaw 0 looks down -Z; positive yaw turns left
/// (counter-clockwise seen from above), matching the mouse-look convention.
pub fn move_intent(forward_axis: f32, right_axis: f32, yaw: f32) -> Vec3 {
    let local = Vec3::new(right_axis, 0.0, -forward_axis);
    if local.length_squared() < MIN_INTENT_LENGTH_SQ {
        return Vec3::ZERO;
    }
    Quat::from_rotation_y(yaw) * local.normalize()
}
