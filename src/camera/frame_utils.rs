//! Frame conversion and transformation utilities.

use nokhwa::pixel_format::RgbFormat;

use super::types::Frame;

/// Decode a nokhwa buffer (MJPEG, YUYV, NV12, ...) into an RGB [`Frame`].
///
/// Returns `None` if the conversion fails (unsupported format or corrupt data).
pub fn convert_to_rgb(buffer: &nokhwa::Buffer) -> Option<Frame> {
    let decoded = buffer.decode_image::<RgbFormat>().ok()?;
    let (width, height) = decoded.dimensions();
    Frame::from_rgb(decoded.into_raw(), width, height)
}

/// Mirror a frame horizontally (flip left-right) for selfie mode.
///
/// With a mirrored picture, moving the blue object to the right moves the
/// crosshair to the right, which is what players expect.
pub fn mirror_horizontal(frame: &mut Frame) {
    let width = frame.width as usize;
    let bpp = frame.bytes_per_pixel();
    let stride = width * bpp;
    if stride == 0 {
        return;
    }

    for row in frame.data.chunks_exact_mut(stride) {
        for x in 0..width / 2 {
            let left = x * bpp;
            let right = (width - 1 - x) * bpp;
            for i in 0..bpp {
                row.swap(left + i, right + i);
            }
        }
    }
}
