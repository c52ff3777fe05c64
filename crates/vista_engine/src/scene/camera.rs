//! Perspective camera with exponential glide
//!
//! The backdrop camera never orbits or rolls; it sits near the Z axis,
//! always looks at the origin, and eases toward a pointer-derived target a
//! fixed fraction per frame.

use crate::foundation::math::{utils, Mat4, Point3, Vec3};

/// 3D perspective camera
///
/// Matrices are computed on demand from position, target, and projection
/// parameters; nothing is cached.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Near clipping plane distance
    pub near: f32,

    /// Far clipping plane distance
    pub far: f32,
}

impl Camera {
    /// Create a perspective camera at `position`, looking at the origin
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: fov_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    /// Update the aspect ratio for viewport changes
    ///
    /// Typically called on window resize. Significant changes (> 0.01)
    /// are logged; sub-threshold jitter during live resize is not.
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if (self.aspect - aspect).abs() > 0.01 {
            log::info!(
                "camera aspect ratio changed: {:.3} -> {:.3}",
                self.aspect,
                aspect
            );
        }
        self.aspect = aspect;
    }

    /// Ease the camera position toward `target` by `factor` per call
    ///
    /// Each call shrinks the remaining distance on every axis by exactly
    /// `factor`, which is exponential smoothing when called once per frame
    /// with a fixed factor.
    pub fn glide_toward(&mut self, target: Vec3, factor: f32) {
        self.position = Vec3::new(
            utils::lerp(self.position.x, target.x, factor),
            utils::lerp(self.position.y, target.y, factor),
            utils::lerp(self.position.z, target.z, factor),
        );
    }

    /// World-to-camera view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            &Point3::from(self.position),
            &Point3::from(self.target),
            &self.up,
        )
    }

    /// Perspective projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }

    /// Combined view-projection matrix
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::perspective(Vec3::new(0.0, 0.0, 5.0), 75.0, 16.0 / 9.0, 0.1, 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_glide_shrinks_distance_by_fixed_fraction() {
        let mut camera = Camera::default();
        let target = Vec3::new(2.0, -1.5, 5.0);
        let before = (target - camera.position).norm();

        camera.glide_toward(target, 0.05);
        let after = (target - camera.position).norm();

        assert_relative_eq!(after, before * 0.95, epsilon = 1e-5);
    }

    #[test]
    fn test_glide_converges_monotonically() {
        let mut camera = Camera::default();
        let target = Vec3::new(-2.0, 2.0, 5.0);

        let mut previous = (target - camera.position).norm();
        for _ in 0..200 {
            camera.glide_toward(target, 0.05);
            let distance = (target - camera.position).norm();
            assert!(distance <= previous);
            previous = distance;
        }
        assert!(previous < 1e-3);
    }

    #[test]
    fn test_view_matrix_centers_target() {
        let camera = Camera::default();
        let view = camera.view_matrix();
        let origin = view.transform_point(&Point3::origin());

        // Looking straight at the origin puts it on the view-space Z axis.
        assert_relative_eq!(origin.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(origin.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(origin.z, -5.0, epsilon = 1e-5);
    }
}
