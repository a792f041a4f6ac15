//! Frame to character-grid conversion for the terminal view.
//!
//! 1. **Cell averaging** - each character cell gets the mean color of the
//!    pixels it covers, plus BT.601 luminance
//! 2. **Character mapping** - gamma-corrected luminance picks a glyph from
//!    a density ramp ([`CharSet`])
//!
//! Aspect-correct grid sizes come from [`calculate_dimensions`].

mod charset;
mod dimensions;
mod downsample;
mod grayscale;
mod mapping;

pub use charset::{CharSet, BLOCKS_CHARSET, MINIMAL_CHARSET, STANDARD_CHARSET};
pub use dimensions::{calculate_dimensions, calculate_dimensions_with_aspect, DEFAULT_CHAR_ASPECT_RATIO};
pub use downsample::{downsample_cells_into, CellColor, CellRect};
pub use grayscale::luminance;
pub use mapping::{gamma_correct, glyph_for, map_to_chars_into};
