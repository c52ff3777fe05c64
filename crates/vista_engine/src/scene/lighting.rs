//! Backdrop lighting
//!
//! The backdrop needs exactly one ambient term and one point light, so the
//! model here stays that small: no light lists, no shadowing, just enough
//! to lambert-shade the sphere's point cloud.

use crate::foundation::math::Vec3;

/// Point light source
#[derive(Debug, Clone)]
pub struct PointLight {
    /// Light position in world space
    pub position: Vec3,
    /// Light color
    pub color: Vec3,
    /// Light intensity
    pub intensity: f32,
}

/// Lighting environment for the backdrop scene
#[derive(Debug, Clone)]
pub struct Lighting {
    /// Ambient light color
    pub ambient_color: Vec3,
    /// Ambient light intensity
    pub ambient_intensity: f32,
    /// The single point light
    pub point: PointLight,
}

impl Lighting {
    /// The backdrop's fixed lighting rig: half-intensity white ambient plus
    /// a white point light up and to the side of the scene
    pub fn backdrop_default() -> Self {
        Self {
            ambient_color: Vec3::new(1.0, 1.0, 1.0),
            ambient_intensity: 0.5,
            point: PointLight {
                position: Vec3::new(10.0, 10.0, 10.0),
                color: Vec3::new(1.0, 1.0, 1.0),
                intensity: 1.0,
            },
        }
    }

    /// Lambert-shade a surface point with the given albedo
    ///
    /// Returns a linear RGB color, clamped channel-wise to [0, 1].
    pub fn shade(&self, surface_point: Vec3, normal: Vec3, albedo: Vec3) -> Vec3 {
        let to_light = (self.point.position - surface_point).normalize();
        let diffuse = normal.normalize().dot(&to_light).max(0.0) * self.point.intensity;

        let lit = Vec3::new(
            albedo.x * (self.ambient_color.x * self.ambient_intensity + self.point.color.x * diffuse),
            albedo.y * (self.ambient_color.y * self.ambient_intensity + self.point.color.y * diffuse),
            albedo.z * (self.ambient_color.z * self.ambient_intensity + self.point.color.z * diffuse),
        );

        Vec3::new(lit.x.min(1.0), lit.y.min(1.0), lit.z.min(1.0))
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self::backdrop_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_light_is_brighter_than_facing_away() {
        let lighting = Lighting::backdrop_default();
        let albedo = Vec3::new(0.5, 0.5, 0.5);
        let point = Vec3::zeros();

        let toward = lighting.shade(point, Vec3::new(1.0, 1.0, 1.0), albedo);
        let away = lighting.shade(point, Vec3::new(-1.0, -1.0, -1.0), albedo);

        assert!(toward.x > away.x);
        // Facing away still receives the ambient term.
        assert!(away.x > 0.0);
    }

    #[test]
    fn test_shade_clamps_channels() {
        let lighting = Lighting::backdrop_default();
        let shaded = lighting.shade(
            Vec3::zeros(),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(5.0, 5.0, 5.0),
        );
        assert!(shaded.x <= 1.0 && shaded.y <= 1.0 && shaded.z <= 1.0);
    }
}
