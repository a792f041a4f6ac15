//! Blue object tracker.

use super::mask::{in_range_into, HsvRange};
use super::moments::Moments;
use crate::camera::Frame;
use crate::game::Point;

/// Tracks the centroid of pixels inside an HSV range.
///
/// Holds its mask buffer between calls so per-frame detection doesn't
/// allocate.
#[derive(Debug, Clone)]
pub struct BlueDetector {
    range: HsvRange,
    min_pixels: usize,
    mask: Vec<u8>,
}

impl Default for BlueDetector {
    fn default() -> Self {
        Self::new(HsvRange::BLUE, 1)
    }
}

impl BlueDetector {
    /// `min_pixels` is clamped to at least 1 so an empty mask never yields
    /// a point.
    pub fn new(range: HsvRange, min_pixels: usize) -> Self {
        Self {
            range,
            min_pixels: min_pixels.max(1),
            mask: Vec::new(),
        }
    }

    pub fn range(&self) -> &HsvRange {
        &self.range
    }

    /// Locate the tracked object.
    ///
    /// Returns `None` when fewer than `min_pixels` pixels match.
    pub fn detect(&mut self, frame: &Frame) -> Option<Point> {
        let matched = in_range_into(frame, &self.range, &mut self.mask);
        if matched < self.min_pixels {
            return None;
        }
        Moments::of_mask(&self.mask, frame.width).centroid()
    }

    /// The mask produced by the last call to [`detect`](Self::detect).
    pub fn last_mask(&self) -> &[u8] {
        &self.mask
    }
}
