//! Frame data handed from the scene to a surface

use crate::foundation::math::{Mat4, Vec3};
use bytemuck::{Pod, Zeroable};

/// One pre-lit point to splat onto the surface
#[derive(Debug, Clone, Copy)]
pub struct PointSprite {
    /// World-space position
    pub position: Vec3,
    /// Linear RGBA color, each channel in [0, 1]
    pub color: [f32; 4],
    /// Splat size in pixels
    pub size: f32,
}

/// Everything a surface needs to draw one frame
#[derive(Debug, Clone)]
pub struct FramePacket {
    /// Combined view-projection matrix for the frame
    pub view_projection: Mat4,
    /// Point sprites in world space, unsorted
    pub sprites: Vec<PointSprite>,
}

impl FramePacket {
    /// Create an empty packet for the given camera transform
    pub fn new(view_projection: Mat4) -> Self {
        Self {
            view_projection,
            sprites: Vec::new(),
        }
    }
}

/// One framebuffer pixel, RGBA8
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    /// Fully transparent black
    pub const CLEAR: Rgba = Rgba([0, 0, 0, 0]);

    /// Quantize a linear [0, 1] color to RGBA8
    pub fn from_linear(color: [f32; 4]) -> Self {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba([q(color[0]), q(color[1]), q(color[2]), q(color[3])])
    }
}
