use anyhow::Result;
use glam::Mat4;

use spincube_engine::color::Color;
use spincube_engine::core::{App, AppControl, FrameCtx};
use spincube_engine::device::Gpu;
use spincube_engine::render::cube::FrameTransforms;
use spincube_engine::render::CubeRenderer;
use spincube_engine::transform::{Camera, Spin};

/// Background color, matching the scene's white canvas.
const CLEAR_COLOR: Color = Color::white();

/// How often the frame cadence is reported at debug level.
const CADENCE_LOG_INTERVAL: u64 = 600;

/// Viewer application: one cube, fixed camera, constant spin.
///
/// Both matrices besides the spin rotation are computed in `on_ready` and
/// never change; resizing the window intentionally leaves the projection
/// (and thus the aspect ratio) at its startup value.
pub struct CubeApp {
    spin: Spin,
    view: Mat4,
    projection: Mat4,
    renderer: Option<CubeRenderer>,
}

impl CubeApp {
    pub fn new() -> Self {
        Self {
            spin: Spin::default(),
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            renderer: None,
        }
    }
}

impl Default for CubeApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for CubeApp {
    fn on_ready(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let size = gpu.size();
        let camera = Camera::for_surface(size.width, size.height);

        self.view = camera.view_matrix();
        self.projection = camera.projection_matrix();

        self.renderer = Some(CubeRenderer::new(
            gpu.device(),
            gpu.surface_format(),
            gpu.depth_format(),
        ));

        log::info!(
            "cube ready: {}x{} surface, aspect {:.3}",
            size.width,
            size.height,
            camera.aspect
        );
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(renderer) = self.renderer.as_ref() else {
            return AppControl::Continue;
        };

        self.spin.advance();
        let transforms = FrameTransforms {
            model_view: self.spin.model_view(self.view),
            projection: self.projection,
        };

        if ctx.time.frame_index % CADENCE_LOG_INTERVAL == 0 {
            log::debug!(
                "frame {}: angle {:.1} deg, dt {:.2} ms",
                ctx.time.frame_index,
                self.spin.angle_degrees(),
                ctx.time.dt * 1000.0
            );
        }

        ctx.render(CLEAR_COLOR, |rctx, target| {
            renderer.render(rctx, target, &transforms);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_color_is_opaque_white() {
        assert_eq!(CLEAR_COLOR, Color::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn new_app_holds_no_gpu_state_before_ready() {
        let app = CubeApp::new();
        assert!(app.renderer.is_none());
        assert_eq!(app.spin.angle_degrees(), 0.0);
        assert_eq!(app.view, Mat4::IDENTITY);
        assert_eq!(app.projection, Mat4::IDENTITY);
    }
}
