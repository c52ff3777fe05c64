//! # Vista Engine
//!
//! A small presentation engine with two independent subsystems:
//!
//! - **Backdrop scene**: a decorative 3D scene (rotating sphere, particle
//!   field, lighting) driven by a cancellable frame loop whose camera glides
//!   toward the current pointer position.
//! - **Skill diagram**: a radial tree of named nodes drawn as circles and
//!   parent-child edges, with per-node hover highlighting and SVG output.
//!
//! Both subsystems are single-threaded and callback-driven; neither holds
//! state across mounts beyond an externally persisted theme preference.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vista_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let viewport = Viewport::new(1280, 720);
//!     let surface = OffscreenSurface::new(viewport)?;
//!     let mut driver = SceneDriver::initialize(viewport, surface, TickScheduler::new())?;
//!
//!     driver.on_frame(0.016, PointerSample::centered())?;
//!     driver.teardown();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod content;
pub mod diagram;
pub mod foundation;
pub mod input;
pub mod render;
pub mod scene;
pub mod settings;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        diagram::{DisplayList, Gradient, NodePath, Shape, SkillNode, TreeDiagram},
        foundation::{
            math::{Mat4, Point2, Vec2, Vec3},
            time::Timer,
        },
        input::{PointerSample, PointerTracker},
        render::{OffscreenSurface, RenderError, RenderSurface, Viewport},
        scene::{
            BackdropScene, FrameScheduler, FrameTicket, SceneDriver, SceneError, TickScheduler,
        },
        settings::ThemeSettings,
    };
}
