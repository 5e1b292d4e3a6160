//! Debug telemetry for the on-screen tracker.

use std::fmt;

use glam::Vec3;
use serde::Serialize;

use crate::player::PlayerState;

/// Read-only view of the player for HUD text and logs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Telemetry {
    pub position: Vec3,
    pub velocity: Vec3,
    pub horizontal_speed: f32,
    pub run_cap: f32,
    pub grounded: bool,
    pub yaw: f32,
    pub pitch: f32,
}

impl Telemetry {
    pub fn capture(state: &PlayerState, yaw: f32, pitch: f32) -> Self {
        Self {
            position: state.position,
            velocity: state.velocity,
            horizontal_speed: state.horizontal_speed(),
            run_cap: state.run_cap,
            grounded: state.grounded,
            yaw,
            pitch,
        }
    }
}

/// Two-line tracker text, e.g. `X:0.00 Y:1.65 Z:0.00` / `Speed:0.00 RunCap:6.00`.
impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X:{:.2} Y:{:.2} Z:{:.2}\nSpeed:{:.2} RunCap:{:.2}",
            self.position.x,
            self.position.y,
            self.position.z,
            self.horizontal_speed,
            self.run_cap
        )
    }
}
