//! Rendering surface abstraction and frame data
//!
//! The scene emits a [`FramePacket`] per frame and hands it to whatever
//! [`RenderSurface`] the host mounted. The only backend shipped here is a
//! software rasterizer writing into an offscreen RGBA buffer; anything
//! window- or GPU-backed plugs in behind the same trait.

mod commands;
mod surface;

pub use commands::{FramePacket, PointSprite, Rgba};
pub use surface::{OffscreenSurface, RenderSurface};

use thiserror::Error;

/// Viewport dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Create a viewport from pixel dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Aspect ratio (width / height)
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Whether both dimensions are at least one pixel
    pub fn is_renderable(&self) -> bool {
        self.width >= 1 && self.height >= 1
    }
}

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// The host could not provide a renderable surface
    #[error("no renderable surface for {width}x{height} viewport")]
    SurfaceUnavailable {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// A frame was presented to a surface that was already released
    #[error("surface already released")]
    SurfaceReleased,

    /// IO error while writing frame output
    #[error("frame output error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding error
    #[error("frame encoding error: {0}")]
    Encode(String),
}
