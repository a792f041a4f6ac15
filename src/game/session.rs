//! The game loop: one iteration per captured frame until the session ends.

use rand::rngs::StdRng;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::geometry::Point;
use super::io::{Clock, FrameSource, GameDisplay, GameInput, InputSource, Scene};
use super::rules::GameRules;
use super::state::GameState;
use crate::error::GameError;
use crate::render::{draw_crosshair, draw_targets, Backdrop};
use crate::vision::BlueDetector;

/// How long each iteration waits for a key press.
const INPUT_POLL: Duration = Duration::from_millis(1);

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The frame source returned nothing
    FrameUnavailable,
    /// The countdown reached zero
    TimeUp,
    /// The player pressed the quit key
    Quit,
    /// SIGINT/SIGTERM arrived
    Interrupted,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            EndReason::FrameUnavailable => "camera stopped delivering frames",
            EndReason::TimeUp => "time is up",
            EndReason::Quit => "quit by player",
            EndReason::Interrupted => "interrupted",
        };
        f.write_str(text)
    }
}

/// Session lifecycle. `Over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Over(EndReason),
}

impl SessionState {
    pub fn is_over(&self) -> bool {
        matches!(self, SessionState::Over(_))
    }
}

/// Summary of a finished (or running) session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub score: u32,
    /// Targets removed by the crosshair over the whole session
    pub hits: u32,
    pub spawned: u32,
    pub frames: u64,
    /// Frames on which a blue object was found and the crosshair followed it
    pub tracked_frames: u64,
    pub end_reason: Option<EndReason>,
}

/// One game, from first frame to final score.
///
/// Generic over its collaborators so tests can drive it with synthetic
/// frames, scripted keys and a fake clock.
pub struct Session<F, I, D, C> {
    frames: F,
    input: I,
    display: D,
    clock: C,
    detector: BlueDetector,
    backdrop: Option<Backdrop>,
    rng: StdRng,
    shutdown: Option<Arc<AtomicBool>>,
    state: GameState,
    phase: SessionState,
    hits: u32,
    spawned: u32,
    frame_count: u64,
    tracked_frames: u64,
}

impl<F, I, D, C> Session<F, I, D, C>
where
    F: FrameSource,
    I: InputSource,
    D: GameDisplay,
    C: Clock,
{
    /// Start a session at the clock's current reading with the crosshair at
    /// `start`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rules: GameRules,
        start: Point,
        frames: F,
        input: I,
        display: D,
        clock: C,
        detector: BlueDetector,
        rng: StdRng,
    ) -> Self {
        let state = GameState::new(rules, start, clock.now());
        Self {
            frames,
            input,
            display,
            clock,
            detector,
            backdrop: None,
            rng,
            shutdown: None,
            state,
            phase: SessionState::Running,
            hits: 0,
            spawned: 0,
            frame_count: 0,
            tracked_frames: 0,
        }
    }

    /// Blend `backdrop` under every camera frame before drawing overlays.
    pub fn with_backdrop(mut self, backdrop: Option<Backdrop>) -> Self {
        self.backdrop = backdrop;
        self
    }

    /// End the session when `flag` becomes true (e.g. from a signal handler).
    pub fn with_shutdown_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.shutdown = Some(flag);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> SessionState {
        self.phase
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn report(&self) -> SessionReport {
        SessionReport {
            score: self.state.score(),
            hits: self.hits,
            spawned: self.spawned,
            frames: self.frame_count,
            tracked_frames: self.tracked_frames,
            end_reason: match self.phase {
                SessionState::Running => None,
                SessionState::Over(reason) => Some(reason),
            },
        }
    }

    fn finish(&mut self, reason: EndReason) -> SessionState {
        log::info!(
            "session over after {} frame(s), {} tracked: {} (score {})",
            self.frame_count,
            self.tracked_frames,
            reason,
            self.state.score()
        );
        self.phase = SessionState::Over(reason);
        self.phase
    }

    /// Run one loop iteration. A no-op once the session is over.
    pub fn step(&mut self) -> Result<SessionState, GameError> {
        if self.phase.is_over() {
            return Ok(self.phase);
        }

        let Some(mut frame) = self.frames.next_frame() else {
            return Ok(self.finish(EndReason::FrameUnavailable));
        };
        self.frame_count += 1;
        let now = self.clock.now();

        // Detection sees the raw camera picture, never the blended backdrop
        let detection = self.detector.detect(&frame);
        let report = self.state.advance(
            now,
            detection,
            (frame.width, frame.height),
            &mut self.rng,
        );

        if report.aimed {
            self.tracked_frames += 1;
        } else {
            log::trace!("no blue object, crosshair held at {}", self.state.crosshair());
        }
        for target in &report.hits {
            log::debug!(
                "hit target at {} ({:.1}s after spawn)",
                target.position,
                now.saturating_sub(target.spawned_at).as_secs_f64()
            );
        }
        if let Some(target) = report.spawned {
            log::debug!("spawned target at {}", target.position);
            self.spawned += 1;
        }
        self.hits += report.hits.len() as u32;

        if let Some(backdrop) = self.backdrop.as_mut() {
            backdrop.blend_under(&mut frame);
        }
        let rules = self.state.rules();
        draw_crosshair(&mut frame, self.state.crosshair(), rules);
        draw_targets(&mut frame, self.state.targets(), rules);

        let scene = Scene {
            frame: &frame,
            crosshair: self.state.crosshair(),
            targets: self.state.targets(),
            score: self.state.score(),
            remaining_secs: report.remaining_secs,
            rules,
        };
        self.display.present(&scene)?;

        // The last frame is shown before the session ends on time
        if report.remaining_secs <= 0 {
            return Ok(self.finish(EndReason::TimeUp));
        }

        match self.input.poll(INPUT_POLL)? {
            Some(GameInput::Quit) => return Ok(self.finish(EndReason::Quit)),
            Some(other) => self.display.apply(other),
            None => {}
        }

        if self
            .shutdown
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
        {
            return Ok(self.finish(EndReason::Interrupted));
        }

        Ok(self.phase)
    }

    /// Step until the session is over and return the final report.
    pub fn run(&mut self) -> Result<SessionReport, GameError> {
        while !self.step()?.is_over() {}
        Ok(self.report())
    }
}
