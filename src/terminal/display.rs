//! The terminal as a [`GameDisplay`].

use ratatui::layout::Rect;
use std::io;

use super::hud::Hud;
use super::rendering::{picture_area, HudText};
use super::tui::Tui;
use super::view::GameView;
use crate::ascii::CharSet;
use crate::game::{GameDisplay, GameInput, Scene};

/// Full-screen ASCII rendering of the game.
pub struct TerminalDisplay {
    tui: Tui,
    view: GameView,
    hud: Hud,
}

impl TerminalDisplay {
    /// Take over the terminal.
    pub fn new(charset: CharSet, invert: bool) -> io::Result<Self> {
        Ok(Self {
            tui: Tui::new()?,
            view: GameView::new(charset, invert),
            hud: Hud::default(),
        })
    }

    pub fn charset(&self) -> CharSet {
        self.view.charset
    }

    /// Give the terminal back. Safe to call more than once.
    pub fn restore(&mut self) -> io::Result<()> {
        self.tui.restore()
    }
}

impl GameDisplay for TerminalDisplay {
    fn present(&mut self, scene: &Scene<'_>) -> io::Result<()> {
        let (cols, rows) = self.tui.size()?;
        let area = picture_area(Rect::new(0, 0, cols, rows), self.hud.status_line);
        let grid = self.view.render(scene, area.width, area.height);

        let text = HudText {
            score: self.hud.score_label(scene.score),
            time: self.hud.time_label(scene.countdown()),
            status: self
                .hud
                .status_line
                .then(|| self.hud.status_text(self.view.charset)),
        };
        self.tui.draw_game(&grid, &text)
    }

    fn apply(&mut self, input: GameInput) {
        if input == GameInput::CycleCharset {
            self.view.charset = self.view.charset.next();
            log::debug!("charset switched to {}", self.view.charset.name());
        }
    }
}
