//! The backdrop scene: sphere, particle field, lighting, camera
//!
//! All motion is a pure function of total elapsed time except the camera,
//! which carries smoothing state between frames.

use crate::foundation::math::{Rotation3, Vec2, Vec3};
use crate::input::PointerSample;
use crate::render::{FramePacket, PointSprite};
use crate::scene::{Camera, Lighting, ParticleField};

/// Fixed camera distance from the origin along Z
pub const CAMERA_DEPTH: f32 = 5.0;

/// World units of camera offset per unit of normalized pointer travel
pub const POINTER_SCALE: f32 = 2.0;

/// Per-frame exponential smoothing factor for the camera glide
pub const CAMERA_SMOOTHING: f32 = 0.05;

/// Sphere rotation rates around the X and Y axes, radians per second
const SPHERE_SPIN: Vec2 = Vec2::new(0.2, 0.3);

/// Particle field rotation rates, radians per second
const PARTICLE_SPIN: Vec2 = Vec2::new(0.05, 0.075);

/// Sphere albedo (cyan) and particle color (violet)
const SPHERE_ALBEDO: Vec3 = Vec3::new(0.024, 0.714, 0.831);
const PARTICLE_COLOR: Vec3 = Vec3::new(0.545, 0.361, 0.965);

/// Both primitives render at 60% opacity over the page background
const BACKDROP_OPACITY: f32 = 0.6;

/// Point-cloud resolution of the sphere surface
const SPHERE_RINGS: usize = 24;
const SPHERE_SEGMENTS: usize = 48;

/// The rotating sphere at the scene center
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Base radius before scaling
    pub radius: f32,
    /// Uniform scale factor
    pub scale: f32,
    /// Rotation angles around the X and Y axes, radians
    pub rotation: Vec2,
}

impl Sphere {
    /// Unit sphere scaled up to backdrop size
    pub fn backdrop_default() -> Self {
        Self {
            radius: 1.0,
            scale: 2.0,
            rotation: Vec2::zeros(),
        }
    }

    /// Iterate over surface sample points with their outward normals,
    /// current rotation applied
    pub fn surface_points(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        let rotation = Rotation3::from_euler_angles(self.rotation.x, self.rotation.y, 0.0);
        let extent = self.radius * self.scale;

        (1..SPHERE_RINGS).flat_map(move |ring| {
            let theta = std::f32::consts::PI * ring as f32 / SPHERE_RINGS as f32;
            (0..SPHERE_SEGMENTS).map(move |segment| {
                let phi = std::f32::consts::TAU * segment as f32 / SPHERE_SEGMENTS as f32;
                let normal = rotation
                    * Vec3::new(
                        theta.sin() * phi.cos(),
                        theta.cos(),
                        theta.sin() * phi.sin(),
                    );
                (normal * extent, normal)
            })
        })
    }
}

/// The complete backdrop scene state
pub struct BackdropScene {
    camera: Camera,
    sphere: Sphere,
    particles: ParticleField,
    lighting: Lighting,
}

impl BackdropScene {
    /// Build the scene with a freshly scattered particle field
    pub fn new(aspect: f32) -> Self {
        Self::with_particles(aspect, ParticleField::generate(&mut rand::thread_rng()))
    }

    /// Build the scene around an existing particle field
    pub fn with_particles(aspect: f32, particles: ParticleField) -> Self {
        Self {
            camera: Camera::perspective(
                Vec3::new(0.0, 0.0, CAMERA_DEPTH),
                75.0,
                aspect,
                0.1,
                1000.0,
            ),
            sphere: Sphere::backdrop_default(),
            particles,
            lighting: Lighting::backdrop_default(),
        }
    }

    /// Advance scene state for one frame
    ///
    /// Rotations are linear in total elapsed time, so a dropped frame never
    /// accumulates drift; only the camera glide is stateful.
    pub fn advance(&mut self, elapsed_secs: f32, pointer: PointerSample) {
        self.sphere.rotation = SPHERE_SPIN * elapsed_secs;
        self.particles
            .set_rotation(PARTICLE_SPIN.x * elapsed_secs, PARTICLE_SPIN.y * elapsed_secs);

        let glide_target = Vec3::new(
            pointer.x * POINTER_SCALE,
            -pointer.y * POINTER_SCALE,
            CAMERA_DEPTH,
        );
        self.camera.glide_toward(glide_target, CAMERA_SMOOTHING);
        // Target stays pinned to the origin; only the eye moves.
    }

    /// Collect the frame's draw data
    pub fn frame_packet(&self) -> FramePacket {
        let mut packet = FramePacket::new(self.camera.view_projection_matrix());
        packet.sprites.reserve(
            self.particles.len() + (SPHERE_RINGS - 1) * SPHERE_SEGMENTS,
        );

        for (position, normal) in self.sphere.surface_points() {
            let lit = self.lighting.shade(position, normal, SPHERE_ALBEDO);
            packet.sprites.push(PointSprite {
                position,
                color: [lit.x, lit.y, lit.z, BACKDROP_OPACITY],
                size: 2.0,
            });
        }

        for position in self.particles.rotated_points() {
            packet.sprites.push(PointSprite {
                position,
                color: [
                    PARTICLE_COLOR.x,
                    PARTICLE_COLOR.y,
                    PARTICLE_COLOR.z,
                    BACKDROP_OPACITY,
                ],
                size: 1.5,
            });
        }

        packet
    }

    /// The scene camera
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access (aspect updates on resize)
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The particle field
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    /// The sphere
    pub fn sphere(&self) -> &Sphere {
        &self.sphere
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_scene() -> BackdropScene {
        BackdropScene::with_particles(16.0 / 9.0, ParticleField::seeded(1))
    }

    #[test]
    fn test_rotation_is_linear_in_elapsed_time() {
        let mut scene = test_scene();
        scene.advance(10.0, PointerSample::centered());

        assert_relative_eq!(scene.sphere().rotation.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(scene.sphere().rotation.y, 3.0, epsilon = 1e-5);
        assert_relative_eq!(scene.particles().rotation().x, 0.5, epsilon = 1e-5);
        assert_relative_eq!(scene.particles().rotation().y, 0.75, epsilon = 1e-5);
    }

    #[test]
    fn test_camera_moves_toward_pointer_target() {
        let mut scene = test_scene();
        let pointer = PointerSample::new(1.0, 1.0);
        let target = Vec3::new(POINTER_SCALE, -POINTER_SCALE, CAMERA_DEPTH);

        let mut previous = (target - scene.camera().position).norm();
        for frame in 1..=5 {
            scene.advance(frame as f32 / 60.0, pointer);
            let distance = (target - scene.camera().position).norm();
            assert_relative_eq!(distance, previous * (1.0 - CAMERA_SMOOTHING), epsilon = 1e-5);
            previous = distance;
        }
    }

    #[test]
    fn test_camera_target_stays_at_origin() {
        let mut scene = test_scene();
        scene.advance(1.0, PointerSample::new(0.8, -0.3));
        assert_eq!(scene.camera().target, Vec3::zeros());
    }

    #[test]
    fn test_frame_packet_carries_sphere_and_particles() {
        let scene = test_scene();
        let packet = scene.frame_packet();
        let sphere_points = (SPHERE_RINGS - 1) * SPHERE_SEGMENTS;
        assert_eq!(packet.sprites.len(), sphere_points + scene.particles().len());
    }

    #[test]
    fn test_sphere_normals_are_unit_length() {
        let sphere = Sphere::backdrop_default();
        for (_, normal) in sphere.surface_points() {
            assert_relative_eq!(normal.norm(), 1.0, epsilon = 1e-4);
        }
    }
}
