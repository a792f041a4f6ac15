//! Color tracking: find the centroid of the blue object in a frame.
//!
//! The pipeline mirrors the classic OpenCV recipe:
//!
//! 1. **HSV conversion** - RGB to 8-bit HSV (hue 0-179)
//! 2. **Thresholding** - binary mask of pixels inside an [`HsvRange`]
//! 3. **Moments** - zeroth and first order sums of the mask
//! 4. **Centroid** - `(m10/m00, m01/m00)`, or nothing for an empty mask

mod detector;
mod hsv;
mod mask;
mod moments;

pub use detector::BlueDetector;
pub use hsv::{rgb_to_hsv, Hsv, HUE_MAX};
pub use mask::{in_range, in_range_into, HsvRange};
pub use moments::Moments;
