//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipeline, buffers, bind groups) and
//! record passes into the frame encoder via [`RenderTarget`].
//!
//! Convention:
//! - vertex positions are homogeneous object-space coordinates
//! - the vertex shader applies model-view then projection from a uniform
//! - the clear pass runs first; renderer passes load the cleared attachments

mod ctx;

pub mod cube;

pub use ctx::{RenderCtx, RenderTarget};
pub use cube::CubeRenderer;
