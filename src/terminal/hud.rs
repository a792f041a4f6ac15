//! Heads-up display text.

use crate::ascii::CharSet;

/// Formats the score, countdown and status line.
#[derive(Debug, Clone)]
pub struct Hud {
    /// Whether the bottom status line is shown
    pub status_line: bool,
}

impl Default for Hud {
    fn default() -> Self {
        Self { status_line: true }
    }
}

impl Hud {
    pub fn score_label(&self, score: u32) -> String {
        format!("Score: {}", score)
    }

    pub fn time_label(&self, countdown: u64) -> String {
        format!("Time: {}", countdown)
    }

    /// Format: " charset | c: charset | q: quit "
    pub fn status_text(&self, charset: CharSet) -> String {
        format!(" {} | c: charset | q: quit ", charset.name())
    }
}
