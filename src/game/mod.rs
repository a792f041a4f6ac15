//! Game core: crosshair, targets, scoring and the session state machine.
//!
//! Everything in here is hardware-free. The camera, terminal and keyboard
//! plug in through the [`FrameSource`], [`GameDisplay`] and
//! [`InputSource`] traits, and time comes from a [`Clock`].

mod geometry;
mod io;
mod rules;
mod session;
mod state;

pub use geometry::Point;
pub use io::{Clock, FrameSource, GameDisplay, GameInput, InputSource, Scene, SystemClock};
pub use rules::GameRules;
pub use session::{EndReason, Session, SessionReport, SessionState};
pub use state::{FrameReport, GameState, Target};
