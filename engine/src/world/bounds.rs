//! World Bounds
//!
//! Ground collision against the flat floor plane and the horizontal edge of
//! the world.
//!
//! ## Boundary policies
//! - **Wrap** (default): walking past `+half_extent` puts you at
//!   `-half_extent`; velocity and direction carry across the seam.
//! - **Clamp**: the world is a square room. Position is held inside it and the
//!   velocity component pointing through the wall is dropped.

use tracing::debug;

use crate::config::{BoundaryPolicy, WorldConfig};
use crate::player::PlayerState;

/// What happened during [`WorldBounds::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundsContact {
    /// Player was airborne and is now resting on the floor
    pub landed: bool,
    /// Player crossed the world seam and was moved to the opposite edge
    pub wrapped: bool,
    /// Player was pushed back inside the room
    pub clamped: bool,
}

/// Floor plane and world extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    config: WorldConfig,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

impl WorldBounds {
    pub fn new(config: WorldConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Ground check then boundary policy. Run after position integration.
    ///
    /// `grounded` is recomputed from the position every call: true exactly when
    /// the player is at (or was pushed up to) the rest height.
    pub fn resolve(&self, state: &mut PlayerState) -> BoundsContact {
        let was_grounded = state.grounded;
        let mut contact = BoundsContact::default();

        let rest = self.config.rest_height();
        if state.position.y <= rest {
            state.position.y = rest;
            state.velocity.y = 0.0;
            state.grounded = true;
        } else {
            state.grounded = false;
        }
        contact.landed = state.grounded && !was_grounded;

        match self.config.boundary {
            BoundaryPolicy::Wrap { half_extent } => {
                let x = wrap_coordinate(state.position.x, half_extent);
                let z = wrap_coordinate(state.position.z, half_extent);
                contact.wrapped = x != state.position.x || z != state.position.z;
                state.position.x = x;
                state.position.z = z;
            }
            BoundaryPolicy::Clamp { half_extent } => {
                let hit_x = clamp_axis(
                    &mut state.position.x,
                    &mut state.velocity.x,
                    &mut state.knockback_velocity.x,
                    half_extent,
                );
                let hit_z = clamp_axis(
                    &mut state.position.z,
                    &mut state.velocity.z,
                    &mut state.knockback_velocity.z,
                    half_extent,
                );
                contact.clamped = hit_x || hit_z;
            }
        }

        if contact.wrapped {
            debug!(position = ?state.position, "wrapped across world edge");
        }
        if contact.clamped {
            debug!(position = ?state.position, "held inside room");
        }

        contact
    }
}

/// Wrap one coordinate into `[-half_extent, half_extent]` modulo the world size.
pub fn wrap_coordinate(value: f32, half_extent: f32) -> f32 {
    if value.abs() <= half_extent {
        return value;
    }
    let world_size = half_extent * 2.0;
    (value + half_extent).rem_euclid(world_size) - half_extent
}

/// Clamp one axis to the room. Both the movement and knockback shares of
/// the velocity lose whatever points through the wall. Returns `true` on
/// contact.
fn clamp_axis(position: &mut f32, velocity: &mut f32, knockback: &mut f32, half_extent: f32) -> bool {
    let wall = if *position > half_extent {
        half_extent
    } else if *position < -half_extent {
        -half_extent
    } else {
        return false;
    };
    let inward = |v: f32| if wall > 0.0 { v.min(0.0) } else { v.max(0.0) };

    let movement = *velocity - *knockback;
    *position = wall;
    *knockback = inward(*knockback);
    *velocity = inward(movement) + *knockback;
    true
}
