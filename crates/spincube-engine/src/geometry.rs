//! Cube mesh data, uploaded to the GPU exactly once at startup.
//!
//! Eight corner vertices are shared by all six faces through a single index
//! buffer. The index list is grouped by face (two triangles each), which is
//! what lets one buffer back six per-face draw calls: face `i` owns the
//! contiguous range `i * 6 .. i * 6 + 6`.

use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::color::Color;

/// Corner vertices in the cube mesh.
pub const VERTEX_COUNT: usize = 8;

/// Faces in the mesh; also the number of draw calls per frame.
pub const FACE_COUNT: usize = 6;

/// Indices consumed by one face (two triangles).
pub const INDICES_PER_FACE: usize = 6;

/// Total index count.
pub const INDEX_COUNT: usize = FACE_COUNT * INDICES_PER_FACE;

/// Homogeneous cube vertex. `w` is always 1.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x4];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const fn v(x: f32, y: f32, z: f32) -> Vertex {
    Vertex {
        position: [x, y, z, 1.0],
    }
}

/// Unit cube centered at the origin, side length 1.
///
/// Corners 0..4 form the near ring (z = +0.5), corners 4..8 the far ring
/// (z = -0.5), each ring wound from the bottom-left corner.
pub const CUBE_VERTICES: [Vertex; VERTEX_COUNT] = [
    v(-0.5, -0.5, 0.5),
    v(-0.5, 0.5, 0.5),
    v(0.5, 0.5, 0.5),
    v(0.5, -0.5, 0.5),
    v(-0.5, -0.5, -0.5),
    v(-0.5, 0.5, -0.5),
    v(0.5, 0.5, -0.5),
    v(0.5, -0.5, -0.5),
];

/// One solid color per face, in face draw order.
pub const FACE_COLORS: [Color; FACE_COUNT] = [
    Color::opaque(0.0, 0.0, 1.0), // front: blue
    Color::opaque(0.0, 1.0, 1.0), // back: cyan
    Color::opaque(1.0, 1.0, 0.0), // right: yellow
    Color::opaque(0.0, 1.0, 0.0), // left: green
    Color::opaque(1.0, 0.0, 0.0), // top: red
    Color::opaque(1.0, 0.0, 1.0), // bottom: magenta
];

/// Triangle indices, grouped by face.
///
/// Each row is one face: two triangles sharing a diagonal edge. The grouping
/// order matches [`FACE_COLORS`].
#[rustfmt::skip]
pub const CUBE_INDICES: [u16; INDEX_COUNT] = [
    0, 1, 2, 0, 2, 3, // front
    4, 5, 6, 4, 6, 7, // back
    1, 5, 6, 1, 6, 2, // right
    0, 4, 7, 0, 7, 3, // left
    3, 2, 6, 3, 6, 7, // top
    0, 1, 5, 0, 5, 4, // bottom
];

/// Index range covered by face `face`, for `draw_indexed`.
///
/// With `u16` indices the range start corresponds to a byte offset of
/// `face * 12` into the index buffer.
#[inline]
pub fn face_index_range(face: usize) -> Range<u32> {
    debug_assert!(face < FACE_COUNT);
    let start = (face * INDICES_PER_FACE) as u32;
    start..start + INDICES_PER_FACE as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face_indices(face: usize) -> &'static [u16] {
        &CUBE_INDICES[face * INDICES_PER_FACE..(face + 1) * INDICES_PER_FACE]
    }

    // ── vertices ──────────────────────────────────────────────────────────

    #[test]
    fn eight_corners_with_unit_w() {
        assert_eq!(CUBE_VERTICES.len(), VERTEX_COUNT);
        for v in &CUBE_VERTICES {
            assert_eq!(v.position[3], 1.0);
        }
    }

    #[test]
    fn cube_is_centered_at_origin() {
        for axis in 0..3 {
            let min = CUBE_VERTICES
                .iter()
                .map(|v| v.position[axis])
                .fold(f32::INFINITY, f32::min);
            let max = CUBE_VERTICES
                .iter()
                .map(|v| v.position[axis])
                .fold(f32::NEG_INFINITY, f32::max);
            assert_eq!(min, -0.5);
            assert_eq!(max, 0.5);
        }
    }

    #[test]
    fn vertex_stride_is_tightly_packed_vec4() {
        assert_eq!(std::mem::size_of::<Vertex>(), 16);
        assert_eq!(Vertex::layout().array_stride, 16);
    }

    // ── indices ───────────────────────────────────────────────────────────

    #[test]
    fn index_count_is_six_faces_of_six() {
        assert_eq!(CUBE_INDICES.len(), INDEX_COUNT);
        assert_eq!(INDEX_COUNT, 36);
    }

    #[test]
    fn all_indices_reference_existing_corners() {
        for &i in &CUBE_INDICES {
            assert!((i as usize) < VERTEX_COUNT);
        }
    }

    #[test]
    fn each_face_is_a_quad_of_four_corners() {
        for face in 0..FACE_COUNT {
            let idx = face_indices(face);
            let mut corners: Vec<u16> = idx.to_vec();
            corners.sort_unstable();
            corners.dedup();
            assert_eq!(corners.len(), 4, "face {face} is not a quad");
        }
    }

    #[test]
    fn face_triangles_share_a_diagonal() {
        // Both triangles of a face repeat the first and third index.
        for face in 0..FACE_COUNT {
            let idx = face_indices(face);
            assert_eq!(idx[0], idx[3], "face {face}");
            assert_eq!(idx[2], idx[4], "face {face}");
        }
    }

    #[test]
    fn every_corner_is_used() {
        for corner in 0..VERTEX_COUNT as u16 {
            assert!(CUBE_INDICES.contains(&corner), "corner {corner} unused");
        }
    }

    // ── face ranges ───────────────────────────────────────────────────────

    #[test]
    fn face_ranges_are_contiguous_groups_of_six() {
        for face in 0..FACE_COUNT {
            let r = face_index_range(face);
            assert_eq!(r.start, (face * 6) as u32);
            assert_eq!(r.len(), 6);
        }
    }

    #[test]
    fn face_ranges_partition_the_index_buffer() {
        let mut covered = 0u32;
        for face in 0..FACE_COUNT {
            let r = face_index_range(face);
            assert_eq!(r.start, covered);
            covered = r.end;
        }
        assert_eq!(covered as usize, INDEX_COUNT);
    }

    #[test]
    fn face_range_start_maps_to_twelve_byte_offset() {
        // u16 indices: 6 per face, 2 bytes each.
        for face in 0..FACE_COUNT {
            let byte_offset = face_index_range(face).start as usize * std::mem::size_of::<u16>();
            assert_eq!(byte_offset, face * 12);
        }
    }

    // ── upload bytes ──────────────────────────────────────────────────────

    #[test]
    fn index_bytes_roundtrip_unchanged() {
        let bytes: &[u8] = bytemuck::cast_slice(&CUBE_INDICES);
        assert_eq!(bytes.len(), INDEX_COUNT * 2);

        let back: &[u16] = bytemuck::cast_slice(bytes);
        assert_eq!(back, &CUBE_INDICES);
    }

    #[test]
    fn vertex_bytes_match_buffer_size() {
        let bytes: &[u8] = bytemuck::cast_slice(&CUBE_VERTICES);
        assert_eq!(bytes.len(), VERTEX_COUNT * 16);
    }

    // ── colors ────────────────────────────────────────────────────────────

    #[test]
    fn one_opaque_color_per_face() {
        assert_eq!(FACE_COLORS.len(), FACE_COUNT);
        for c in &FACE_COLORS {
            assert!(c.is_finite());
            assert_eq!(c.a, 1.0);
        }
    }

    #[test]
    fn face_colors_are_distinct() {
        for (i, a) in FACE_COLORS.iter().enumerate() {
            for b in &FACE_COLORS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
