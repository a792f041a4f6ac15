//! blue-sniper library crate.
//!
//! A webcam target game: a blue object held in front of the camera steers a
//! crosshair, and targets that spawn on the picture score when the crosshair
//! reaches them. Rendered as ASCII art in the terminal.
//!
//! This module exposes the components for integration testing.

pub mod ascii;
pub mod camera;
pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod terminal;
pub mod vision;

pub use error::{GameError, Result};
