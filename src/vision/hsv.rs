//! RGB to HSV conversion on the 8-bit scale used by OpenCV.

/// Largest hue value. Hue is stored halved so it fits in a byte.
pub const HUE_MAX: u8 = 179;

/// An HSV triple: hue 0-179, saturation 0-255, value 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

/// Convert one RGB pixel to HSV.
///
/// V = max(R,G,B); S = 255·(V − min)/V; H is the usual 0-360° hue divided
/// by two and rounded. Grays (V == min) have hue 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = (max - min) as f32;

    let v = max;
    let s = if max == 0 {
        0
    } else {
        (255.0 * delta / max as f32).round() as u8
    };

    if delta == 0.0 {
        return Hsv { h: 0, s, v };
    }

    let (r, g, b) = (r as f32, g as f32, b as f32);
    let mut degrees = if max as f32 == r {
        60.0 * (g - b) / delta
    } else if max as f32 == g {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };
    if degrees < 0.0 {
        degrees += 360.0;
    }

    // 360° rounds to 180, which wraps back to red
    let h = ((degrees / 2.0).round() as u16 % 180) as u8;
    Hsv { h, s, v }
}
