//! RGB luminance (ITU-R BT.601).

/// `Y = 0.299 R + 0.587 G + 0.114 B`, in integer math (coefficients ×1000).
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}
