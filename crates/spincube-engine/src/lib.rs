//! Spincube engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the viewer:
//! window/event loop, device management, frame timing, and the cube renderer
//! with its geometry and transform math.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod color;
pub mod geometry;
pub mod transform;
pub mod render;
