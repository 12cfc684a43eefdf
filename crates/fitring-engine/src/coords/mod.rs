//! Geometry shared between the ring model and its renderers.
//!
//! Canonical space:
//! - logical pixels, origin top-left
//! - +X right, +Y down
//! - angles in radians, measured clockwise from 12 o'clock

mod vec2;

pub use vec2::Vec2;
