use anyhow::Result;

use crate::device::Gpu;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the viewer.
pub trait App {
    /// Called exactly once, after the GPU context is acquired and before the
    /// first frame. Renderer resources and fixed transforms belong here.
    ///
    /// Returning an error aborts the runtime before any frame is drawn.
    fn on_ready(&mut self, gpu: &Gpu<'_>) -> Result<()>;

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
