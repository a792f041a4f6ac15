//! Character grid produced from a camera frame.

use crate::ascii::CellColor;

/// A colored character grid, row-major.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AsciiFrame {
    pub chars: Vec<char>,
    /// One color per character (same length as `chars`)
    pub colors: Vec<CellColor>,
    /// Width in characters
    pub width: u16,
    /// Height in characters
    pub height: u16,
}

impl AsciiFrame {
    /// A blank grid.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            chars: vec![' '; size],
            colors: vec![CellColor::default(); size],
            width,
            height,
        }
    }

    /// Build from parallel char/color buffers. Missing colors become black.
    pub fn from_parts(chars: Vec<char>, mut colors: Vec<CellColor>, width: u16, height: u16) -> Self {
        colors.resize(chars.len(), CellColor::default());
        Self {
            chars,
            colors,
            width,
            height,
        }
    }

    fn index(&self, col: u16, row: u16) -> Option<usize> {
        (col < self.width && row < self.height).then(|| row as usize * self.width as usize + col as usize)
    }

    pub fn get(&self, col: u16, row: u16) -> Option<(char, CellColor)> {
        let i = self.index(col, row)?;
        Some((self.chars[i], self.colors[i]))
    }

    /// Overwrite one cell; out-of-grid writes are ignored.
    pub fn stamp(&mut self, col: u16, row: u16, ch: char, color: CellColor) {
        if let Some(i) = self.index(col, row) {
            self.chars[i] = ch;
            self.colors[i] = color;
        }
    }

    /// Plain text, rows joined by newlines.
    pub fn to_string_display(&self) -> String {
        if self.width == 0 || self.height == 0 {
            return String::new();
        }
        self.chars
            .chunks(self.width as usize)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
