//! Crate-level error type.

use std::path::PathBuf;
use thiserror::Error;

use crate::camera::CameraError;
use crate::config::ConfigError;

/// Anything that can stop the game from starting or running.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Camera(#[from] CameraError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to load background image '{}': {source}", path.display())]
    Background {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to install signal handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
