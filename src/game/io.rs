//! Seams between the game loop and the outside world.

use std::io;
use std::time::{Duration, Instant};

use super::geometry::Point;
use super::rules::GameRules;
use super::state::Target;
use crate::camera::Frame;

/// Supplies one frame per loop iteration.
pub trait FrameSource {
    /// Block until the next frame is available. `None` means the stream is
    /// gone and the session must end.
    fn next_frame(&mut self) -> Option<Frame>;
}

/// Player commands recognised by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// End the session now
    Quit,
    /// Switch the terminal character set
    CycleCharset,
}

/// Keyboard (or scripted) input, polled once per frame.
pub trait InputSource {
    /// Wait at most `timeout` for a command.
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<GameInput>>;
}

/// Everything the display needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    /// Camera frame with pixel overlays already drawn
    pub frame: &'a Frame,
    pub crosshair: Point,
    pub targets: &'a [Target],
    pub score: u32,
    pub remaining_secs: i64,
    pub rules: &'a GameRules,
}

impl Scene<'_> {
    /// Countdown as shown to the player, never below zero.
    pub fn countdown(&self) -> u64 {
        self.remaining_secs.max(0) as u64
    }
}

/// Output surface for composed frames.
pub trait GameDisplay {
    fn present(&mut self, scene: &Scene<'_>) -> io::Result<()>;

    /// Display-level commands (e.g. charset switching). Default: ignore.
    fn apply(&mut self, _input: GameInput) {}
}

impl<T: FrameSource + ?Sized> FrameSource for &mut T {
    fn next_frame(&mut self) -> Option<Frame> {
        (**self).next_frame()
    }
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        (**self).poll(timeout)
    }
}

impl<T: GameDisplay + ?Sized> GameDisplay for &mut T {
    fn present(&mut self, scene: &Scene<'_>) -> io::Result<()> {
        (**self).present(scene)
    }

    fn apply(&mut self, input: GameInput) {
        (**self).apply(input)
    }
}

/// Monotonic time source for the session.
pub trait Clock {
    /// Time since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_clamps_at_zero() {
        let frame = Frame::filled(1, 1, [0, 0, 0]);
        let rules = GameRules::default();
        let mut scene = Scene {
            frame: &frame,
            crosshair: Point::new(0, 0),
            targets: &[],
            score: 0,
            remaining_secs: 4,
            rules: &rules,
        };
        assert_eq!(scene.countdown(), 4);
        scene.remaining_secs = -2;
        assert_eq!(scene.countdown(), 0);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
