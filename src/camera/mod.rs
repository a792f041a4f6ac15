//! Webcam access: device enumeration and a background capture thread.
//!
//! - Device enumeration via [`list_devices`]
//! - Camera capture via [`CameraCapture`], which also acts as the game's
//!   [`FrameSource`](crate::game::FrameSource)
//! - Configuration via [`CameraSettings`] and [`Resolution`]

mod capture;
mod capture_loop;
mod device;
mod frame_utils;
mod types;

pub use capture::CameraCapture;
pub use device::list_devices;
pub use frame_utils::mirror_horizontal;
pub use types::{CameraError, CameraInfo, CameraSettings, Frame, FrameFormat, Resolution};
