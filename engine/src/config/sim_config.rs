//! Simulation Configuration
//!
//! Centralized tuning for the locomotion core. Every value that shapes how the
//! player moves lives here, grouped by the system that consumes it.
//! `Default` returns the reference tuning; a JSON file may override any subset.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Horizontal/vertical integration tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Target speed when not sprinting (units/s)
    pub walk_speed: f32,
    /// Base sprint speed; the run cap starts here and resets here (units/s)
    pub run_speed: f32,
    /// Ground acceleration (units/s²)
    pub accel: f32,
    /// Air acceleration, much lower than `accel` for reduced air control
    pub air_accel: f32,
    /// Per-tick multiplicative decay applied on the ground with no input
    pub friction: f32,
    /// Vertical acceleration (units/s², negative = down)
    pub gravity: f32,
    /// Hard ceiling on horizontal speed (units/s)
    pub max_h_speed: f32,
    /// Hysteresis below `walk_speed` under which the player is snapped to rest
    pub stop_margin: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_speed: 3.0,
            run_speed: 6.0,
            accel: 100.0,
            air_accel: 12.0,
            friction: 0.92,
            gravity: -40.0,
            max_h_speed: 100.0,
            stop_margin: 0.5,
        }
    }
}

impl MovementConfig {
    /// Horizontal speed at or below which a coasting player comes to rest.
    #[inline]
    pub fn stop_threshold(&self) -> f32 {
        self.walk_speed - self.stop_margin
    }
}

/// Jump tuning, including the bunny-hop boost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpConfig {
    /// Vertical launch speed of a standing jump (units/s)
    pub jump_power: f32,
    /// Multiplier applied to horizontal velocity and the run cap per jump
    pub jump_boost: f32,
    /// How much each unit of horizontal speed flattens the launch
    pub flatten_factor: f32,
    /// Maximum flattening as a fraction of `jump_power`
    pub flatten_cap: f32,
    /// Grace period after leaving the ground (seconds)
    pub coyote_time: f32,
    /// How long an early jump press stays live (seconds)
    pub jump_buffer: f32,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            jump_power: 10.0,
            jump_boost: 1.05,
            flatten_factor: 0.08,
            flatten_cap: 0.6,
            coyote_time: 0.25,
            jump_buffer: 0.2,
        }
    }
}

/// Explosion knockback tuning. Radius and power are global, not per event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnockbackConfig {
    /// Distance beyond which a blast has no effect (units)
    pub blast_radius: f32,
    /// Impulse magnitude at the blast origin (units/s)
    pub blast_power: f32,
    /// How far in front of the camera a triggered blast is placed (units)
    pub trigger_distance: f32,
    /// Per-tick multiplier on the knockback part of horizontal velocity
    pub decay: f32,
}

impl Default for KnockbackConfig {
    fn default() -> Self {
        Self {
            blast_radius: 50.0,
            blast_power: 120.0,
            trigger_distance: 5.0,
            decay: 0.92,
        }
    }
}

/// What happens when the player reaches the horizontal edge of the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Teleport to the opposite edge, preserving velocity.
    Wrap { half_extent: f32 },
    /// Hold the player inside a square room.
    Clamp { half_extent: f32 },
}

impl Default for BoundaryPolicy {
    fn default() -> Self {
        BoundaryPolicy::Wrap { half_extent: 1000.0 }
    }
}

impl BoundaryPolicy {
    /// Half the side length of the playable square.
    pub fn half_extent(&self) -> f32 {
        match *self {
            BoundaryPolicy::Wrap { half_extent } | BoundaryPolicy::Clamp { half_extent } => {
                half_extent
            }
        }
    }
}

/// Floor plane and world extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Height of the flat ground plane
    pub floor_y: f32,
    /// Eye height above the floor; `position.y` rests at `floor_y + eye_height`
    pub eye_height: f32,
    /// Horizontal edge handling
    pub boundary: BoundaryPolicy,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            floor_y: 0.0,
            eye_height: 1.65,
            boundary: BoundaryPolicy::default(),
        }
    }
}

impl WorldConfig {
    /// `position.y` of a player standing on the floor.
    #[inline]
    pub fn rest_height(&self) -> f32 {
        self.floor_y + self.eye_height
    }
}

/// Complete tuning for one simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Largest `dt` a single tick integrates (seconds)
    pub max_dt: f32,
    pub movement: MovementConfig,
    pub jump: JumpConfig,
    pub knockback: KnockbackConfig,
    pub world: WorldConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_dt: 0.1,
            movement: MovementConfig::default(),
            jump: JumpConfig::default(),
            knockback: KnockbackConfig::default(),
            world: WorldConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&data)
    }

    /// Check every value against the ranges the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.movement;
        let j = &self.jump;
        let k = &self.knockback;
        let w = &self.world;

        let values = [
            ("max_dt", self.max_dt),
            ("movement.walk_speed", m.walk_speed),
            ("movement.run_speed", m.run_speed),
            ("movement.accel", m.accel),
            ("movement.air_accel", m.air_accel),
            ("movement.friction", m.friction),
            ("movement.gravity", m.gravity),
            ("movement.max_h_speed", m.max_h_speed),
            ("movement.stop_margin", m.stop_margin),
            ("jump.jump_power", j.jump_power),
            ("jump.jump_boost", j.jump_boost),
            ("jump.flatten_factor", j.flatten_factor),
            ("jump.flatten_cap", j.flatten_cap),
            ("jump.coyote_time", j.coyote_time),
            ("jump.jump_buffer", j.jump_buffer),
            ("knockback.blast_radius", k.blast_radius),
            ("knockback.blast_power", k.blast_power),
            ("knockback.trigger_distance", k.trigger_distance),
            ("knockback.decay", k.decay),
            ("world.floor_y", w.floor_y),
            ("world.eye_height", w.eye_height),
            ("world.boundary.half_extent", w.boundary.half_extent()),
        ];
        for (field, value) in values {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, "must be finite"));
            }
        }

        check(self.max_dt > 0.0, "max_dt", "must be positive")?;

        check(m.walk_speed > 0.0, "movement.walk_speed", "must be positive")?;
        check(
            m.run_speed >= m.walk_speed,
            "movement.run_speed",
            "must be at least walk_speed",
        )?;
        check(m.accel >= 0.0, "movement.accel", "must not be negative")?;
        check(m.air_accel >= 0.0, "movement.air_accel", "must not be negative")?;
        check(
            m.friction > 0.0 && m.friction <= 1.0,
            "movement.friction",
            "must be in (0, 1]",
        )?;
        check(m.gravity < 0.0, "movement.gravity", "must point down (negative)")?;
        check(
            m.max_h_speed >= m.run_speed,
            "movement.max_h_speed",
            "must be at least run_speed",
        )?;
        check(
            m.stop_margin >= 0.0 && m.stop_margin < m.walk_speed,
            "movement.stop_margin",
            "must be in [0, walk_speed)",
        )?;

        check(j.jump_power > 0.0, "jump.jump_power", "must be positive")?;
        check(j.jump_boost >= 1.0, "jump.jump_boost", "must be at least 1")?;
        check(j.flatten_factor >= 0.0, "jump.flatten_factor", "must not be negative")?;
        check(
            (0.0..=1.0).contains(&j.flatten_cap),
            "jump.flatten_cap",
            "must be in [0, 1]",
        )?;
        check(j.coyote_time >= 0.0, "jump.coyote_time", "must not be negative")?;
        check(j.jump_buffer >= 0.0, "jump.jump_buffer", "must not be negative")?;

        check(k.blast_radius > 0.0, "knockback.blast_radius", "must be positive")?;
        check(k.blast_power >= 0.0, "knockback.blast_power", "must not be negative")?;
        check(
            (0.0..=1.0).contains(&k.decay),
            "knockback.decay",
            "must be in [0, 1]",
        )?;

        check(w.eye_height > 0.0, "world.eye_height", "must be positive")?;
        check(
            w.boundary.half_extent() > 0.0,
            "world.boundary.half_extent",
            "must be positive",
        )?;

        Ok(())
    }
}

fn check(ok: bool, field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, reason))
    }
}
