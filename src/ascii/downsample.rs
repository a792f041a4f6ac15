//! Cell averaging: many pixels in, one color + brightness per cell out.

use super::grayscale::luminance;
use crate::camera::Frame;

/// Mean color of a character cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Pixel bounds `[x0, x1) x [y0, y1)` covered by one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x0: u32,
    pub x1: u32,
    pub y0: u32,
    pub y1: u32,
}

impl CellRect {
    /// Bounds of cell `(col, row)` in a `cols` x `rows` grid over a
    /// `width` x `height` image. Every cell covers at least one pixel.
    pub fn of(col: u16, row: u16, cols: u16, rows: u16, width: u32, height: u32) -> Self {
        let cell_w = width as f32 / cols as f32;
        let cell_h = height as f32 / rows as f32;
        let x0 = ((col as f32 * cell_w) as u32).min(width.saturating_sub(1));
        let y0 = ((row as f32 * cell_h) as u32).min(height.saturating_sub(1));
        let x1 = (((col + 1) as f32 * cell_w) as u32).clamp(x0 + 1, width.max(1));
        let y1 = (((row + 1) as f32 * cell_h) as u32).clamp(y0 + 1, height.max(1));
        Self { x0, x1, y0, y1 }
    }

    /// Cell containing pixel `(x, y)`, or `None` for off-frame pixels.
    pub fn cell_of(x: i32, y: i32, cols: u16, rows: u16, width: u32, height: u32) -> Option<(u16, u16)> {
        if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height || cols == 0 || rows == 0 {
            return None;
        }
        let col = (x as u64 * cols as u64 / width as u64) as u16;
        let row = (y as u64 * rows as u64 / height as u64) as u16;
        Some((col.min(cols - 1), row.min(rows - 1)))
    }
}

/// Average `frame` down to a `cols` x `rows` grid.
///
/// Fills `colors` and `brightness` (row-major, `cols * rows` entries each)
/// and returns the number of cells. Buffers are reused between frames.
pub fn downsample_cells_into(
    frame: &Frame,
    cols: u16,
    rows: u16,
    colors: &mut Vec<CellColor>,
    brightness: &mut Vec<u8>,
) -> usize {
    colors.clear();
    brightness.clear();

    if cols == 0 || rows == 0 || frame.width == 0 || frame.height == 0 || frame.data.is_empty() {
        return 0;
    }

    let cells = cols as usize * rows as usize;
    colors.reserve(cells);
    brightness.reserve(cells);
    let bpp = frame.bytes_per_pixel();
    let stride = frame.width as usize * bpp;

    for row in 0..rows {
        for col in 0..cols {
            let rect = CellRect::of(col, row, cols, rows, frame.width, frame.height);
            let (mut r, mut g, mut b, mut n) = (0u32, 0u32, 0u32, 0u32);

            for y in rect.y0..rect.y1 {
                let line = &frame.data[y as usize * stride..(y as usize + 1) * stride];
                for px in line[rect.x0 as usize * bpp..rect.x1 as usize * bpp].chunks_exact(bpp) {
                    r += px[0] as u32;
                    g += px[1] as u32;
                    b += px[2] as u32;
                    n += 1;
                }
            }

            let color = if n > 0 {
                CellColor {
                    r: (r / n) as u8,
                    g: (g / n) as u8,
                    b: (b / n) as u8,
                }
            } else {
                CellColor::default()
            };
            brightness.push(luminance(color.r, color.g, color.b));
            colors.push(color);
        }
    }

    cells
}
