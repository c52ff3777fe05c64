//! Render surface trait and the offscreen software backend

use std::path::Path;

use crate::foundation::math::Vec4;
use crate::render::{FramePacket, RenderError, Rgba, Viewport};

/// Pixel count of a framebuffer, widened so the multiply cannot wrap
/// for dimensions whose product exceeds `u32::MAX`
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Output surface a scene presents frames to
///
/// Implementations own their pixel storage (or GPU swapchain) and must
/// tolerate `release` being called exactly once, after which `resize`
/// becomes a no-op and `present` reports an error.
pub trait RenderSurface {
    /// Current surface dimensions in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Resize the surface; idempotent, no-op after release
    fn resize(&mut self, width: u32, height: u32);

    /// Draw one frame
    fn present(&mut self, frame: &FramePacket) -> Result<(), RenderError>;

    /// Release all surface resources
    fn release(&mut self);
}

/// Software surface rasterizing point sprites into an RGBA8 buffer
///
/// Projects each sprite through the frame's view-projection matrix and
/// splats it as an alpha-blended square, far-to-near. Deliberately simple:
/// the backdrop is decorative and a painter's sort is plenty.
pub struct OffscreenSurface {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
    released: bool,
}

impl OffscreenSurface {
    /// Create an offscreen surface for the given viewport
    ///
    /// Fails if either dimension is zero; the caller is expected to fall
    /// back to a static presentation in that case.
    pub fn new(viewport: Viewport) -> Result<Self, RenderError> {
        if !viewport.is_renderable() {
            return Err(RenderError::SurfaceUnavailable {
                width: viewport.width,
                height: viewport.height,
            });
        }

        log::debug!(
            "offscreen surface created: {}x{}",
            viewport.width,
            viewport.height
        );

        Ok(Self {
            width: viewport.width,
            height: viewport.height,
            pixels: vec![Rgba::CLEAR; pixel_count(viewport.width, viewport.height)],
            released: false,
        })
    }

    /// Raw pixel access for inspection and encoding
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Whether the surface has been released
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Encode the current framebuffer contents as a PNG file
    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        if self.released {
            return Err(RenderError::SurfaceReleased);
        }

        let raw: Vec<u8> = bytemuck::cast_slice(&self.pixels).to_vec();
        let img = image::RgbaImage::from_raw(self.width, self.height, raw)
            .ok_or_else(|| RenderError::Encode("framebuffer size mismatch".to_string()))?;
        img.save(path).map_err(|e| RenderError::Encode(e.to_string()))
    }

    fn blend(&mut self, x: i32, y: i32, color: [f32; 4]) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        let dst = self.pixels[idx].0;
        let src_a = color[3].clamp(0.0, 1.0);
        let mix = |s: f32, d: u8| -> u8 {
            let d = d as f32 / 255.0;
            ((s * src_a + d * (1.0 - src_a)).clamp(0.0, 1.0) * 255.0).round() as u8
        };
        let out_a = src_a + (dst[3] as f32 / 255.0) * (1.0 - src_a);
        self.pixels[idx] = Rgba([
            mix(color[0], dst[0]),
            mix(color[1], dst[1]),
            mix(color[2], dst[2]),
            (out_a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]);
    }

    fn splat(&mut self, cx: f32, cy: f32, size: f32, color: [f32; 4]) {
        let half = (size * 0.5).max(0.5);
        let x0 = (cx - half).floor() as i32;
        let x1 = (cx + half).ceil() as i32;
        let y0 = (cy - half).floor() as i32;
        let y1 = (cy + half).ceil() as i32;
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.blend(x, y, color);
            }
        }
    }
}

impl RenderSurface for OffscreenSurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        if self.released {
            return;
        }
        if width == self.width && height == self.height {
            return;
        }
        self.width = width.max(1);
        self.height = height.max(1);
        self.pixels = vec![Rgba::CLEAR; pixel_count(self.width, self.height)];
        log::debug!("offscreen surface resized: {}x{}", self.width, self.height);
    }

    fn present(&mut self, frame: &FramePacket) -> Result<(), RenderError> {
        if self.released {
            return Err(RenderError::SurfaceReleased);
        }

        self.pixels.fill(Rgba::CLEAR);

        // Project to NDC once, then paint far-to-near.
        let mut projected: Vec<(f32, f32, f32, f32, [f32; 4])> = Vec::new();
        for sprite in &frame.sprites {
            let clip = frame.view_projection
                * Vec4::new(sprite.position.x, sprite.position.y, sprite.position.z, 1.0);
            if clip.w <= 1e-5 {
                continue;
            }
            let ndc_x = clip.x / clip.w;
            let ndc_y = clip.y / clip.w;
            let ndc_z = clip.z / clip.w;
            if ndc_x.abs() > 1.1 || ndc_y.abs() > 1.1 || !(-1.0..=1.0).contains(&ndc_z) {
                continue;
            }
            let sx = (ndc_x * 0.5 + 0.5) * self.width as f32;
            let sy = (1.0 - (ndc_y * 0.5 + 0.5)) * self.height as f32;
            projected.push((ndc_z, sx, sy, sprite.size, sprite.color));
        }

        projected.sort_by(|a, b| b.0.total_cmp(&a.0));

        for (_, sx, sy, size, color) in projected {
            self.splat(sx, sy, size, color);
        }

        Ok(())
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.pixels = Vec::new();
        log::debug!("offscreen surface released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Mat4, Vec3};
    use crate::render::PointSprite;

    fn packet_with_point() -> FramePacket {
        // Identity transform puts a point at NDC origin, screen center.
        let mut packet = FramePacket::new(Mat4::identity());
        packet.sprites.push(PointSprite {
            position: Vec3::new(0.0, 0.0, 0.5),
            color: [1.0, 1.0, 1.0, 1.0],
            size: 2.0,
        });
        packet
    }

    #[test]
    fn test_pixel_count_survives_u32_overflow() {
        // 65536 x 65536 overflows a u32 multiply; the widened count must
        // come out exact.
        assert_eq!(pixel_count(65_536, 65_536), 4_294_967_296);
        assert_eq!(pixel_count(u32::MAX, 1), u32::MAX as usize);
    }

    #[test]
    fn test_zero_viewport_is_rejected() {
        let err = OffscreenSurface::new(Viewport::new(0, 720));
        assert!(matches!(
            err,
            Err(RenderError::SurfaceUnavailable { width: 0, .. })
        ));
    }

    #[test]
    fn test_present_writes_center_pixel() {
        let mut surface = OffscreenSurface::new(Viewport::new(64, 64)).unwrap();
        surface.present(&packet_with_point()).unwrap();

        let center = surface.pixels()[32 * 64 + 32];
        assert_eq!(center, Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_present_after_release_fails() {
        let mut surface = OffscreenSurface::new(Viewport::new(8, 8)).unwrap();
        surface.release();
        assert!(matches!(
            surface.present(&packet_with_point()),
            Err(RenderError::SurfaceReleased)
        ));
    }

    #[test]
    fn test_resize_after_release_is_noop() {
        let mut surface = OffscreenSurface::new(Viewport::new(8, 8)).unwrap();
        surface.release();
        surface.resize(1920, 1080);
        assert_eq!(surface.dimensions(), (8, 8));
        assert!(surface.pixels().is_empty());
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut surface = OffscreenSurface::new(Viewport::new(8, 8)).unwrap();
        surface.release();
        surface.release();
        assert!(surface.is_released());
    }
}
