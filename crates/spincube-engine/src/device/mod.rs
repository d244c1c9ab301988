//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain) and the depth buffer
//! - acquiring frames and providing encoders/views for rendering
//!
//! Any failure while acquiring the context is fatal: the error chain is
//! returned to the runtime, which logs it and exits before any renderer
//! resources are created.

mod context;
mod error;
mod frame;
mod init;
mod surface;

pub use context::{Gpu, DEPTH_FORMAT};
pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use init::GpuInit;
