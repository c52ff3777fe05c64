//! Pointer-reactive backdrop scene
//!
//! One rotating sphere, one particle field, lighting, and a camera that
//! glides toward the latest pointer sample. The scene itself is plain data
//! updated once per frame; [`SceneDriver`] owns the lifecycle
//! (`Running -> TornDown`) and the frame-ticket bookkeeping.

mod backdrop;
mod camera;
mod driver;
mod lighting;
mod particles;

pub use backdrop::{BackdropScene, Sphere, CAMERA_DEPTH, CAMERA_SMOOTHING, POINTER_SCALE};
pub use camera::Camera;
pub use driver::{FrameScheduler, FrameTicket, SceneDriver, TickScheduler};
pub use lighting::{Lighting, PointLight};
pub use particles::{ParticleField, FIELD_EXTENT, PARTICLE_COUNT};

use thiserror::Error;

/// Scene lifecycle errors
#[derive(Error, Debug)]
pub enum SceneError {
    /// Surface error propagated from the render backend
    #[error("render error: {0}")]
    Render(#[from] crate::render::RenderError),

    /// A frame callback fired without a matching scheduled ticket
    #[error("frame fired with no pending ticket")]
    FrameNotScheduled,
}
