//! Binary thresholding of a frame against an HSV box.

use super::hsv::{rgb_to_hsv, Hsv};
use crate::camera::Frame;

/// Inclusive HSV bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsvRange {
    pub lower: Hsv,
    pub upper: Hsv,
}

impl HsvRange {
    /// Hue 90-130, saturation and value 50-255.
    pub const BLUE: HsvRange = HsvRange {
        lower: Hsv { h: 90, s: 50, v: 50 },
        upper: Hsv { h: 130, s: 255, v: 255 },
    };

    pub fn new(lower: Hsv, upper: Hsv) -> Self {
        Self { lower, upper }
    }

    /// True when every channel of `hsv` lies within the bounds.
    pub fn contains(&self, hsv: Hsv) -> bool {
        (self.lower.h..=self.upper.h).contains(&hsv.h)
            && (self.lower.s..=self.upper.s).contains(&hsv.s)
            && (self.lower.v..=self.upper.v).contains(&hsv.v)
    }
}

impl Default for HsvRange {
    fn default() -> Self {
        Self::BLUE
    }
}

/// Threshold an RGB frame: 255 where the pixel's HSV is inside `range`, else 0.
pub fn in_range(frame: &Frame, range: &HsvRange) -> Vec<u8> {
    let mut mask = Vec::new();
    in_range_into(frame, range, &mut mask);
    mask
}

/// Allocation-free variant of [`in_range`]. Returns the number of set pixels.
pub fn in_range_into(frame: &Frame, range: &HsvRange, mask: &mut Vec<u8>) -> usize {
    mask.clear();
    mask.reserve((frame.width as usize) * (frame.height as usize));

    let mut set = 0;
    for rgb in frame.data.chunks_exact(frame.bytes_per_pixel()) {
        if range.contains(rgb_to_hsv(rgb[0], rgb[1], rgb[2])) {
            mask.push(255);
            set += 1;
        } else {
            mask.push(0);
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blue_range_bounds_are_inclusive() {
        let range = HsvRange::BLUE;
        assert!(range.contains(Hsv { h: 90, s: 50, v: 50 }));
        assert!(range.contains(Hsv { h: 130, s: 255, v: 255 }));
        assert!(!range.contains(Hsv { h: 89, s: 200, v: 200 }));
        assert!(!range.contains(Hsv { h: 131, s: 200, v: 200 }));
        assert!(!range.contains(Hsv { h: 110, s: 49, v: 200 }));
        assert!(!range.contains(Hsv { h: 110, s: 200, v: 49 }));
    }

    #[test]
    fn test_in_range_marks_only_blue() {
        let mut frame = Frame::filled(3, 1, [200, 30, 30]);
        frame.put_pixel(1, 0, [10, 40, 220]);
        let mask = in_range(&frame, &HsvRange::BLUE);
        assert_eq!(mask, vec![0, 255, 0]);
    }

    #[test]
    fn test_dark_blue_is_rejected_by_value_floor() {
        // Hue is blue but V = 40 < 50
        let frame = Frame::filled(1, 1, [0, 0, 40]);
        assert_eq!(in_range(&frame, &HsvRange::BLUE), vec![0]);
    }

    #[test]
    fn test_in_range_into_reuses_buffer() {
        let frame = Frame::filled(4, 2, [0, 0, 255]);
        let mut mask = vec![7; 100];
        let set = in_range_into(&frame, &HsvRange::BLUE, &mut mask);
        assert_eq!(set, 8);
        assert_eq!(mask.len(), 8);
        assert!(mask.iter().all(|&m| m == 255));
    }
}
