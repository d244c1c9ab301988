//! View, projection, and spin transforms.
//!
//! The camera is fixed for the lifetime of the program: both matrices are
//! computed once when the surface size is known and never touched again
//! (resizes deliberately do not update the projection). The only moving part
//! is [`Spin`], which steps the rotation angle once per frame.

use glam::{Mat4, Vec3};

/// Per-frame rotation increment, in degrees.
pub const SPIN_STEP_DEGREES: f32 = 0.40;

/// Fixed look-at camera with perspective projection parameters.
///
/// `fov_y` is stored in radians; the aspect ratio is whatever the surface
/// reported at startup.
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(1.0, 1.0, 2.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 45.0_f32.to_radians(),
            aspect: 1.0,
            near: 0.1,
            far: 10.0,
        }
    }
}

impl Camera {
    /// Default camera with the aspect ratio taken from a surface size.
    pub fn for_surface(width: u32, height: u32) -> Self {
        Self {
            aspect: width as f32 / height.max(1) as f32,
            ..Self::default()
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Perspective projection in wgpu clip space (depth 0..1).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }
}

/// Rotation state stepped once per frame.
///
/// The angle is stored in degrees and grows without bound; rotation matrices
/// are periodic, so no wraparound is applied. Each frame's model-view is
/// rebuilt from the fixed view matrix rather than accumulated, so error
/// cannot compound across frames.
#[derive(Debug, Clone)]
pub struct Spin {
    angle_deg: f32,
    step_deg: f32,
}

impl Spin {
    pub fn new(step_deg: f32) -> Self {
        Self {
            angle_deg: 0.0,
            step_deg,
        }
    }

    /// Accumulated angle in degrees.
    #[inline]
    pub fn angle_degrees(&self) -> f32 {
        self.angle_deg
    }

    /// Advances by one frame step and returns the new angle in degrees.
    pub fn advance(&mut self) -> f32 {
        self.angle_deg += self.step_deg;
        self.angle_deg
    }

    /// Rotation about +Y at the current angle.
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.angle_deg.to_radians())
    }

    /// Model-view for the current angle: `view * rotation`.
    ///
    /// The rotation is the inner transform; the cube spins in place while the
    /// camera stays put.
    pub fn model_view(&self, view: Mat4) -> Mat4 {
        view * self.rotation_matrix()
    }
}

impl Default for Spin {
    fn default() -> Self {
        Self::new(SPIN_STEP_DEGREES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    // ── camera ────────────────────────────────────────────────────────────

    #[test]
    fn default_camera_matches_fixed_parameters() {
        let cam = Camera::default();
        assert_eq!(
            cam.view_matrix(),
            Mat4::look_at_rh(Vec3::new(1.0, 1.0, 2.0), Vec3::ZERO, Vec3::Y)
        );
        assert_eq!(
            cam.projection_matrix(),
            Mat4::perspective_rh(45.0_f32.to_radians(), 1.0, 0.1, 10.0)
        );
    }

    #[test]
    fn square_surface_gives_unit_aspect() {
        let cam = Camera::for_surface(512, 512);
        assert_eq!(cam.aspect, 1.0);
    }

    #[test]
    fn projection_aspect_term_matches_surface_ratio() {
        // For a perspective matrix, m11 / m00 recovers the aspect ratio.
        let cam = Camera::for_surface(800, 600);
        let proj = cam.projection_matrix();
        let recovered = proj.col(1).y / proj.col(0).x;
        assert!((recovered - cam.aspect).abs() < EPS);
        assert!((cam.aspect - 800.0 / 600.0).abs() < EPS);
    }

    #[test]
    fn zero_height_surface_does_not_divide_by_zero() {
        let cam = Camera::for_surface(512, 0);
        assert!(cam.aspect.is_finite());
    }

    // ── spin ──────────────────────────────────────────────────────────────

    #[test]
    fn spin_starts_at_zero() {
        assert_eq!(Spin::default().angle_degrees(), 0.0);
    }

    #[test]
    fn angle_after_n_frames_is_step_times_n() {
        let mut spin = Spin::default();
        for _ in 0..10 {
            spin.advance();
        }
        assert!((spin.angle_degrees() - 4.0).abs() < EPS);

        for _ in 0..90 {
            spin.advance();
        }
        assert!((spin.angle_degrees() - 40.0).abs() < 1e-4);
    }

    #[test]
    fn angle_grows_past_full_turns() {
        // 1000 frames at 0.4 deg/frame is more than one revolution; the
        // accumulator must not wrap.
        let mut spin = Spin::default();
        for _ in 0..1000 {
            spin.advance();
        }
        assert!(spin.angle_degrees() > 360.0);
        assert!((spin.angle_degrees() - 400.0).abs() < 1e-3);
    }

    #[test]
    fn rotation_at_zero_angle_is_identity() {
        let spin = Spin::default();
        assert!(spin.rotation_matrix().abs_diff_eq(Mat4::IDENTITY, EPS));
    }

    #[test]
    fn model_view_is_view_times_rotation() {
        let mut spin = Spin::default();
        for _ in 0..25 {
            spin.advance();
        }

        let view = Camera::default().view_matrix();
        let expected = view * Mat4::from_rotation_y(spin.angle_degrees().to_radians());
        assert_eq!(spin.model_view(view), expected);
    }

    #[test]
    fn model_view_is_rebuilt_not_accumulated() {
        // After many steps the composed matrix must equal one built fresh
        // from the final angle; an incrementally multiplied matrix would
        // have drifted.
        let mut spin = Spin::default();
        for _ in 0..5000 {
            spin.advance();
        }

        let view = Camera::default().view_matrix();
        let fresh = view * Mat4::from_rotation_y(spin.angle_degrees().to_radians());
        assert!(spin.model_view(view).abs_diff_eq(fresh, EPS));
    }

    // ── startup scenario ──────────────────────────────────────────────────

    #[test]
    fn ten_frames_on_a_square_surface() {
        let cam = Camera::for_surface(512, 512);
        let view = cam.view_matrix();
        let proj = cam.projection_matrix();

        let mut spin = Spin::default();
        for _ in 0..10 {
            spin.advance();
        }

        assert_eq!(cam.aspect, 1.0);
        assert!((spin.angle_degrees() - 4.0).abs() < EPS);

        let expected = Mat4::look_at_rh(Vec3::new(1.0, 1.0, 2.0), Vec3::ZERO, Vec3::Y)
            * Mat4::from_rotation_y(4.0_f32.to_radians());
        assert!(spin.model_view(view).abs_diff_eq(expected, 1e-4));

        // Projection stays whatever init produced.
        assert_eq!(
            proj,
            Mat4::perspective_rh(45.0_f32.to_radians(), 1.0, 0.1, 10.0)
        );
    }
}
