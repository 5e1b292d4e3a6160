//! World Module
//!
//! The world is a single flat floor plane with a square horizontal extent.
//! By default walking off one edge wraps you to the opposite edge.

pub mod bounds;

pub use bounds::{BoundsContact, WorldBounds, wrap_coordinate};
