//! Pointer input tracking
//!
//! The scene only ever reads the most recent pointer sample; events that
//! arrive between frames overwrite each other (last-value-wins). Samples
//! are normalized offsets from the viewport center, each axis in [-1, 1].

use crate::foundation::math::utils;

/// A normalized pointer position
///
/// `x` and `y` are offsets from the viewport center, each in [-1, 1].
/// Positive `x` is right of center, positive `y` is below center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Horizontal offset from center, in [-1, 1]
    pub x: f32,
    /// Vertical offset from center, in [-1, 1]
    pub y: f32,
}

impl PointerSample {
    /// A sample at the exact viewport center
    pub fn centered() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Build a sample from already-normalized coordinates, clamping to range
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: utils::clamp(x, -1.0, 1.0),
            y: utils::clamp(y, -1.0, 1.0),
        }
    }
}

/// Tracks the latest pointer position reported by the host
pub struct PointerTracker {
    latest: PointerSample,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    /// Create a tracker with the pointer assumed at the viewport center
    pub fn new() -> Self {
        Self {
            latest: PointerSample::centered(),
        }
    }

    /// Record a pointer-move event in viewport pixel coordinates
    pub fn handle_pointer_move(&mut self, px: f32, py: f32, width: u32, height: u32) {
        let center_x = width.max(1) as f32 * 0.5;
        let center_y = height.max(1) as f32 * 0.5;
        self.latest = PointerSample::new((px - center_x) / center_x, (py - center_y) / center_y);
        log::trace!("pointer sample: {:?}", self.latest);
    }

    /// Record an already-normalized pointer sample
    pub fn set_normalized(&mut self, x: f32, y: f32) {
        self.latest = PointerSample::new(x, y);
    }

    /// Get the most recent sample
    pub fn latest(&self) -> PointerSample {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_normalizes_to_zero() {
        let mut tracker = PointerTracker::new();
        tracker.handle_pointer_move(640.0, 360.0, 1280, 720);
        assert_eq!(tracker.latest(), PointerSample::centered());
    }

    #[test]
    fn test_corners_normalize_to_unit_range() {
        let mut tracker = PointerTracker::new();
        tracker.handle_pointer_move(0.0, 0.0, 1280, 720);
        assert_eq!(tracker.latest(), PointerSample::new(-1.0, -1.0));

        tracker.handle_pointer_move(1280.0, 720.0, 1280, 720);
        assert_eq!(tracker.latest(), PointerSample::new(1.0, 1.0));
    }

    #[test]
    fn test_out_of_viewport_samples_clamp() {
        let mut tracker = PointerTracker::new();
        tracker.handle_pointer_move(2560.0, -500.0, 1280, 720);
        let sample = tracker.latest();
        assert_eq!(sample.x, 1.0);
        assert_eq!(sample.y, -1.0);
    }

    #[test]
    fn test_last_value_wins() {
        let mut tracker = PointerTracker::new();
        tracker.set_normalized(0.5, 0.5);
        tracker.set_normalized(-0.25, 0.75);
        assert_eq!(tracker.latest(), PointerSample::new(-0.25, 0.75));
    }
}
