//! Terminal presentation: ratatui/crossterm lifecycle, the ASCII game view
//! and the HUD.

mod display;
mod frame;
mod hud;
mod rendering;
mod tui;
mod view;

pub use display::TerminalDisplay;
pub use frame::AsciiFrame;
pub use hud::Hud;
pub use tui::Tui;
pub use view::{GameView, CROSSHAIR_GLYPH, TARGET_GLYPH};
