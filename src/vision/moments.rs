//! Spatial moments of a binary mask.

use crate::game::Point;

/// Zeroth and first order moments of a binary image.
///
/// Every non-zero mask pixel counts as 1, so `m00` is the pixel count and
/// `(m10, m01)` are the coordinate sums.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Moments {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
}

impl Moments {
    /// Compute moments of a row-major mask `width` pixels wide.
    pub fn of_mask(mask: &[u8], width: u32) -> Self {
        let mut m = Moments::default();
        if width == 0 {
            return m;
        }

        for (y, row) in mask.chunks(width as usize).enumerate() {
            let mut count = 0u64;
            let mut sum_x = 0u64;
            for (x, &px) in row.iter().enumerate() {
                if px != 0 {
                    count += 1;
                    sum_x += x as u64;
                }
            }
            m.m00 += count as f64;
            m.m10 += sum_x as f64;
            m.m01 += (count * y as u64) as f64;
        }
        m
    }

    /// Centroid rounded to the nearest pixel, `None` for an empty mask.
    pub fn centroid(&self) -> Option<Point> {
        if self.m00 <= 0.0 {
            return None;
        }
        Some(Point::new(
            (self.m10 / self.m00).round() as i32,
            (self.m01 / self.m00).round() as i32,
        ))
    }
}
