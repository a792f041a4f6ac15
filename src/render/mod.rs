//! Pixel-space drawing on camera frames.
//!
//! Overlays are drawn straight into the RGB frame before it is handed to
//! the display, so any output surface shows the same picture.

mod backdrop;
mod draw;
mod overlay;

pub use backdrop::Backdrop;
pub use draw::{fill_circle, line};
pub use overlay::{draw_crosshair, draw_targets, CROSSHAIR_COLOR, HUD_COLOR, TARGET_COLOR};
