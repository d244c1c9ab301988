/// A single acquired frame.
///
/// Short-lived: record passes into `encoder`, then hand the frame back to
/// [`Gpu::submit`](super::Gpu::submit). Holding the surface texture blocks
/// acquisition of subsequent frames.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
