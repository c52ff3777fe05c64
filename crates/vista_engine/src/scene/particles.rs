//! Decorative particle field

use crate::foundation::math::{Rotation3, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of particles in the field
pub const PARTICLE_COUNT: usize = 2000;

/// Edge length of the cube the particles are scattered in, centered at origin
pub const FIELD_EXTENT: f32 = 20.0;

/// A fixed cloud of points scattered uniformly in a cube around the origin
///
/// Point positions are generated once at construction and never move; the
/// whole field rotates rigidly via the per-frame rotation angles.
pub struct ParticleField {
    points: Vec<Vec3>,
    rotation: Vec2,
}

impl ParticleField {
    /// Scatter [`PARTICLE_COUNT`] points using the given RNG
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let points = (0..PARTICLE_COUNT)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * FIELD_EXTENT,
                    (rng.gen::<f32>() - 0.5) * FIELD_EXTENT,
                    (rng.gen::<f32>() - 0.5) * FIELD_EXTENT,
                )
            })
            .collect();

        Self {
            points,
            rotation: Vec2::zeros(),
        }
    }

    /// Scatter points from a fixed seed, for reproducible fields
    pub fn seeded(seed: u64) -> Self {
        Self::generate(&mut StdRng::seed_from_u64(seed))
    }

    /// Number of particles (always [`PARTICLE_COUNT`])
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the field is empty (never, after construction)
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Unrotated particle positions
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Current rotation angles (X and Y axes, radians)
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    /// Set the field's rigid rotation angles
    pub fn set_rotation(&mut self, x: f32, y: f32) {
        self.rotation = Vec2::new(x, y);
    }

    /// Iterate over particle positions with the current rotation applied
    pub fn rotated_points(&self) -> impl Iterator<Item = Vec3> + '_ {
        let rotation = Rotation3::from_euler_angles(self.rotation.x, self.rotation.y, 0.0);
        self.points.iter().map(move |p| rotation * p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_field_has_exact_count() {
        let field = ParticleField::seeded(7);
        assert_eq!(field.len(), PARTICLE_COUNT);
        assert!(!field.is_empty());
    }

    #[test]
    fn test_points_lie_within_cube() {
        let field = ParticleField::seeded(7);
        let half = FIELD_EXTENT * 0.5;
        for point in field.points() {
            assert!(point.x >= -half && point.x <= half);
            assert!(point.y >= -half && point.y <= half);
            assert!(point.z >= -half && point.z <= half);
        }
    }

    #[test]
    fn test_same_seed_reproduces_field() {
        let a = ParticleField::seeded(42);
        let b = ParticleField::seeded(42);
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn test_rotation_preserves_distance_from_origin() {
        let mut field = ParticleField::seeded(3);
        field.set_rotation(0.7, -1.3);
        for (original, rotated) in field.points().iter().zip(field.rotated_points()) {
            assert_relative_eq!(original.norm(), rotated.norm(), epsilon = 1e-4);
        }
    }
}
