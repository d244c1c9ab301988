use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::geometry::{self, Vertex, CUBE_INDICES, CUBE_VERTICES, FACE_COLORS};
use crate::render::{RenderCtx, RenderTarget};

/// Matrices for one frame of the spinning cube.
///
/// `model_view` is rebuilt by the application every frame; `projection` is
/// fixed at startup and passed through unchanged.
#[derive(Debug, Copy, Clone)]
pub struct FrameTransforms {
    pub model_view: Mat4,
    pub projection: Mat4,
}

/// Transform uniform contents (column-major, tightly packed).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct TransformUniform {
    model_view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
}

impl TransformUniform {
    fn from_transforms(t: &FrameTransforms) -> Self {
        Self {
            model_view: t.model_view.to_cols_array_2d(),
            projection: t.projection.to_cols_array_2d(),
        }
    }
}

/// Per-face color uniform. One 16-byte buffer per face, filled at init.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct FaceColorUniform {
    color: [f32; 4],
}

/// Flat-shaded cube renderer.
///
/// All GPU resources are created once in [`new`](Self::new); the only
/// per-frame GPU write is the transform uniform. Each face is drawn with its
/// own six-index slice of the shared index buffer and its own color bind
/// group, so draw call `i` always pairs face `i`'s indices with face color
/// `i`.
pub struct CubeRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    transform_ubo: wgpu::Buffer,
    transform_bind_group: wgpu::BindGroup,
    face_bind_groups: [wgpu::BindGroup; geometry::FACE_COUNT],
}

impl CubeRenderer {
    /// Builds the pipeline and uploads the static cube data.
    ///
    /// `surface_format` and `depth_format` must match the attachments the
    /// frame passes are recorded against.
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("spincube cube shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/cube.wgsl").into()),
        });

        let transform_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("spincube transform bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: Some(uniform_binding_size::<TransformUniform>()),
                },
                count: None,
            }],
        });

        let face_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("spincube face color bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: Some(uniform_binding_size::<FaceColorUniform>()),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("spincube cube pipeline layout"),
            bind_group_layouts: &[&transform_bgl, &face_bgl],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("spincube cube pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            // The index list mixes windings, so culling must stay off for all
            // six faces to be visible.
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: Some(wgpu::DepthStencilState {
                format: depth_format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("spincube cube vbo"),
            contents: bytemuck::cast_slice(&CUBE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("spincube cube ibo"),
            contents: bytemuck::cast_slice(&CUBE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        let transform_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("spincube transform ubo"),
            size: std::mem::size_of::<TransformUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let transform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("spincube transform bind group"),
            layout: &transform_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: transform_ubo.as_entire_binding(),
            }],
        });

        // One immutable color buffer + bind group per face. The bind group
        // keeps its buffer alive, so only the groups are stored.
        let face_bind_groups = std::array::from_fn(|face| {
            let u = FaceColorUniform {
                color: FACE_COLORS[face].to_array(),
            };

            let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("spincube face {face} color ubo")),
                contents: bytemuck::bytes_of(&u),
                usage: wgpu::BufferUsages::UNIFORM,
            });

            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(&format!("spincube face {face} bind group")),
                layout: &face_bgl,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            })
        });

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            transform_ubo,
            transform_bind_group,
            face_bind_groups,
        }
    }

    /// Uploads this frame's transforms and records the six face draws.
    ///
    /// The pass loads the previously cleared color and depth attachments.
    pub fn render(
        &self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        transforms: &FrameTransforms,
    ) {
        let u = TransformUniform::from_transforms(transforms);
        ctx.queue
            .write_buffer(&self.transform_ubo, 0, bytemuck::bytes_of(&u));

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("spincube cube pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.transform_bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);

        for (face, bind_group) in self.face_bind_groups.iter().enumerate() {
            rpass.set_bind_group(1, bind_group, &[]);
            rpass.draw_indexed(geometry::face_index_range(face), 0, 0..1);
        }
    }
}

fn uniform_binding_size<T>() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<T>() as u64)
        .expect("uniform types have non-zero size by construction")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── uniform layout ────────────────────────────────────────────────────

    #[test]
    fn transform_uniform_is_two_packed_matrices() {
        assert_eq!(std::mem::size_of::<TransformUniform>(), 128);
        assert_eq!(uniform_binding_size::<TransformUniform>().get(), 128);
    }

    #[test]
    fn face_color_uniform_is_one_vec4() {
        assert_eq!(std::mem::size_of::<FaceColorUniform>(), 16);
    }

    #[test]
    fn transform_uniform_keeps_matrix_slots_apart() {
        let t = FrameTransforms {
            model_view: Mat4::from_rotation_y(1.0),
            projection: Mat4::perspective_rh(1.0, 1.0, 0.1, 10.0),
        };

        let u = TransformUniform::from_transforms(&t);
        assert_eq!(Mat4::from_cols_array_2d(&u.model_view), t.model_view);
        assert_eq!(Mat4::from_cols_array_2d(&u.projection), t.projection);
    }

    #[test]
    fn face_color_bytes_match_palette_entry() {
        for face in 0..geometry::FACE_COUNT {
            let expected = FACE_COLORS[face].to_array();
            let u = FaceColorUniform { color: expected };

            let bytes = bytemuck::bytes_of(&u);
            assert_eq!(bytes.len(), 16);

            let back: &[f32] = bytemuck::cast_slice(bytes);
            assert_eq!(back, expected);
        }
    }
}
