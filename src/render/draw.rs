//! Drawing primitives. Everything is clipped to the frame.

use crate::camera::Frame;
use crate::game::Point;

/// Draw a straight segment from `from` to `to` with the given stroke width.
///
/// Uses Bresenham stepping and stamps a `thickness`-sized square at every
/// step. A thickness of 0 draws nothing.
pub fn line(frame: &mut Frame, from: Point, to: Point, rgb: [u8; 3], thickness: u32) {
    if thickness == 0 {
        return;
    }
    // Square brush centered on the path; even widths lean up/left
    let lo = -((thickness as i32) / 2);
    let hi = lo + thickness as i32 - 1;

    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (from.x, from.y);

    loop {
        for by in lo..=hi {
            for bx in lo..=hi {
                frame.put_pixel(x + bx, y + by, rgb);
            }
        }
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Fill a disc of `radius` pixels around `center`.
pub fn fill_circle(frame: &mut Frame, center: Point, radius: u32, rgb: [u8; 3]) {
    let r = radius as i32;
    let r2 = r * r;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r2 {
                frame.put_pixel(center.x + dx, center.y + dy, rgb);
            }
        }
    }
}
