//! Keyboard input: crossterm key events to game commands.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use crate::game::{GameInput, InputSource};

/// Map a key press to a game command.
///
/// - `q` / `Q` / `Esc` / `Ctrl+C`: quit (raw mode swallows SIGINT, so
///   Ctrl+C arrives here as a key)
/// - `c` / `C`: cycle the ASCII character set
pub fn handle_key_event(event: KeyEvent) -> Option<GameInput> {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;

    if kind == KeyEventKind::Release {
        return None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(GameInput::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameInput::Quit),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(GameInput::CycleCharset),
        _ => None,
    }
}

/// Combine a command already queued this poll with a newer one.
fn merge_commands(queued: Option<GameInput>, next: Option<GameInput>) -> Option<GameInput> {
    match (queued, next) {
        (_, Some(GameInput::Quit)) => Some(GameInput::Quit),
        (Some(command), _) => Some(command),
        (None, next) => next,
    }
}

/// Polls the terminal for key presses.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for CrosstermInput {
    /// Wait up to `timeout` for the first event, then drain whatever else is
    /// queued so resize/mouse noise doesn't pile up. A quit anywhere in the
    /// queue wins; otherwise the first recognised command is returned.
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        let mut command = None;
        let mut wait = timeout;
        while event::poll(wait)? {
            wait = Duration::ZERO;
            if let Event::Key(key) = event::read()? {
                command = merge_commands(command, handle_key_event(key));
            }
        }
        Ok(command)
    }
}
