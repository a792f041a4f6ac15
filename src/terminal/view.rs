//! Scene to character grid.

use super::frame::AsciiFrame;
use crate::ascii::{calculate_dimensions, downsample_cells_into, map_to_chars_into, CellColor, CellRect, CharSet};
use crate::game::{Point, Scene};
use crate::render::{CROSSHAIR_COLOR, TARGET_COLOR};

pub const TARGET_GLYPH: char = '●';
pub const CROSSHAIR_GLYPH: char = '+';

/// Converts scenes into [`AsciiFrame`]s, keeping conversion buffers alive
/// between frames.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    pub charset: CharSet,
    pub invert: bool,
    colors: Vec<CellColor>,
    brightness: Vec<u8>,
    chars: Vec<char>,
}

fn cell_color(rgb: [u8; 3]) -> CellColor {
    CellColor {
        r: rgb[0],
        g: rgb[1],
        b: rgb[2],
    }
}

impl GameView {
    pub fn new(charset: CharSet, invert: bool) -> Self {
        Self {
            charset,
            invert,
            ..Self::default()
        }
    }

    /// Render `scene` into the largest aspect-correct grid that fits in
    /// `max_cols` x `max_rows`.
    ///
    /// Targets and the crosshair are also stamped as glyphs, since a 10 px
    /// disc averages away inside a cell of a 640 px frame.
    pub fn render(&mut self, scene: &Scene<'_>, max_cols: u16, max_rows: u16) -> AsciiFrame {
        let frame = scene.frame;
        let (cols, rows) = calculate_dimensions(frame.width, frame.height, max_cols, max_rows);
        if cols == 0 || rows == 0 {
            return AsciiFrame::default();
        }

        downsample_cells_into(frame, cols, rows, &mut self.colors, &mut self.brightness);
        map_to_chars_into(&self.brightness, self.charset.chars(), self.invert, &mut self.chars);
        let mut grid = AsciiFrame::from_parts(self.chars.clone(), self.colors.clone(), cols, rows);

        let marker = |grid: &mut AsciiFrame, p: Point, glyph: char, rgb: [u8; 3]| {
            if let Some((col, row)) = CellRect::cell_of(p.x, p.y, cols, rows, frame.width, frame.height) {
                grid.stamp(col, row, glyph, cell_color(rgb));
            }
        };
        for target in scene.targets {
            marker(&mut grid, target.position, TARGET_GLYPH, TARGET_COLOR);
        }
        marker(&mut grid, scene.crosshair, CROSSHAIR_GLYPH, CROSSHAIR_COLOR);

        grid
    }
}
