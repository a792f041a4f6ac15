//! Background capture thread implementation.

use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{
    CameraFormat, CameraIndex, FrameFormat as NokhwaFrameFormat, RequestedFormat,
    RequestedFormatType,
};
use nokhwa::Camera;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use super::frame_utils::{convert_to_rgb, mirror_horizontal};
use super::types::{CameraError, CameraSettings, Frame, Resolution};

/// Open the camera, report the negotiated format on `info_tx`, then keep
/// the latest decoded frame in `buffer` until `stop` is raised.
///
/// The nokhwa camera is created on this thread and never leaves it.
pub fn run_capture_loop(
    settings: CameraSettings,
    buffer: Arc<Mutex<Option<Frame>>>,
    stop: Arc<AtomicBool>,
    info_tx: Sender<Result<(Resolution, u32), CameraError>>,
) {
    let index = CameraIndex::Index(settings.device_index);

    let mut camera = match open_camera_with_fallback(&index, &settings) {
        Ok(cam) => cam,
        Err(e) => {
            let _ = info_tx.send(Err(e));
            return;
        }
    };

    if let Err(e) = camera.open_stream() {
        let _ = info_tx.send(Err(CameraError::StreamFailed(e.to_string())));
        return;
    }

    let res = camera.resolution();
    let actual_res = Resolution {
        width: res.width(),
        height: res.height(),
    };
    let actual_fps = camera.frame_rate();
    let _ = info_tx.send(Ok((actual_res, actual_fps)));

    let mut dropped = 0u64;
    while !stop.load(Ordering::Relaxed) {
        match camera.frame() {
            Ok(raw_frame) => match convert_to_rgb(&raw_frame) {
                Some(mut frame) => {
                    if settings.mirror {
                        mirror_horizontal(&mut frame);
                    }
                    if let Ok(mut slot) = buffer.lock() {
                        *slot = Some(frame);
                    }
                }
                None => {
                    dropped += 1;
                    log::debug!("dropped undecodable frame ({} so far)", dropped);
                }
            },
            Err(e) => log::debug!("camera frame read failed: {}", e),
        }

        // Lets the stop flag be observed between blocking reads
        thread::sleep(Duration::from_millis(1));
    }

    if let Err(e) = camera.stop_stream() {
        log::warn!("failed to stop camera stream: {}", e);
    }
}

/// Try to open a camera with multiple format fallback strategies.
///
/// Order: NV12 closest to the requested mode (macOS native), MJPEG closest
/// match, then whatever the highest resolution format is.
fn open_camera_with_fallback(
    index: &CameraIndex,
    settings: &CameraSettings,
) -> Result<Camera, CameraError> {
    let wanted = nokhwa::utils::Resolution::new(settings.resolution.width, settings.resolution.height);
    let format_attempts = [
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(CameraFormat::new(
            wanted,
            NokhwaFrameFormat::NV12,
            settings.fps,
        ))),
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(CameraFormat::new(
            wanted,
            NokhwaFrameFormat::MJPEG,
            settings.fps,
        ))),
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution),
    ];

    let mut last_error = String::from("no camera format could be negotiated");

    for requested in format_attempts {
        match Camera::new(index.clone(), requested) {
            Ok(cam) => return Ok(cam),
            Err(e) => {
                log::debug!("camera format attempt failed: {}", e);
                last_error = e.to_string();
            }
        }
    }

    let msg = last_error.to_lowercase();
    if msg.contains("permission")
        || msg.contains("denied")
        || msg.contains("authorization")
        || msg.contains("access")
    {
        Err(CameraError::PermissionDenied)
    } else {
        Err(CameraError::OpenFailed(last_error))
    }
}
