//! Camera capture handle and public API.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::capture_loop::run_capture_loop;
use super::device::ensure_device;
use super::types::{CameraError, CameraSettings, Frame, Resolution};
use crate::game::FrameSource;

/// Camera capture handle.
///
/// A background thread continuously captures frames and keeps the latest
/// one in a shared slot. The game pulls frames with
/// [`FrameSource::next_frame`], which waits for a frame newer than the last
/// one it handed out.
pub struct CameraCapture {
    /// Latest captured frame (shared with capture thread)
    frame_buffer: Arc<Mutex<Option<Frame>>>,
    /// Capture thread handle
    capture_thread: Option<JoinHandle<()>>,
    /// Signal to stop capture thread
    stop_signal: Arc<AtomicBool>,
    /// Current settings
    settings: CameraSettings,
    /// Actual resolution (set after camera opens)
    actual_resolution: Option<Resolution>,
    /// Actual FPS (set after camera opens)
    actual_fps: Option<u32>,
    /// Timestamp of the last frame returned by `next_frame`
    last_delivered: Option<Instant>,
}

impl std::fmt::Debug for CameraCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraCapture")
            .field("settings", &self.settings)
            .field("is_running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl CameraCapture {
    /// Validate that the configured device exists.
    ///
    /// The stream itself is opened by `start()` inside the capture thread.
    ///
    /// # Errors
    /// * `CameraError::DeviceNotFound` - If the device index doesn't exist
    /// * `CameraError::QueryFailed` - If the device list can't be read
    pub fn open(settings: CameraSettings) -> Result<Self, CameraError> {
        ensure_device(settings.device_index)?;

        Ok(Self {
            frame_buffer: Arc::new(Mutex::new(None)),
            capture_thread: None,
            stop_signal: Arc::new(AtomicBool::new(false)),
            settings,
            actual_resolution: None,
            actual_fps: None,
            last_delivered: None,
        })
    }

    /// Get the current camera settings.
    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    /// Resolution negotiated with the device, once started.
    pub fn actual_resolution(&self) -> Option<Resolution> {
        self.actual_resolution
    }

    /// Frame rate negotiated with the device, once started.
    pub fn actual_fps(&self) -> Option<u32> {
        self.actual_fps
    }

    /// Start capturing frames in a background thread.
    ///
    /// Blocks until the thread reports whether the stream opened.
    ///
    /// # Errors
    /// * `CameraError::AlreadyRunning` - If capture is already running
    /// * `CameraError::StreamFailed` - If the camera stream fails to start
    /// * `CameraError::PermissionDenied` - If camera access is denied (macOS)
    /// * `CameraError::OpenFailed` - If camera fails to open for other reasons
    pub fn start(&mut self) -> Result<(), CameraError> {
        if self.is_running() {
            return Err(CameraError::AlreadyRunning);
        }

        self.stop_signal.store(false, Ordering::SeqCst);

        let buffer = Arc::clone(&self.frame_buffer);
        let stop = Arc::clone(&self.stop_signal);
        let settings = self.settings.clone();
        let (info_tx, info_rx) = mpsc::channel::<Result<(Resolution, u32), CameraError>>();

        let handle = thread::spawn(move || {
            run_capture_loop(settings, buffer, stop, info_tx);
        });
        self.capture_thread = Some(handle);

        match info_rx.recv() {
            Ok(Ok((res, fps))) => {
                log::info!(
                    "camera {} streaming at {}x{} @ {} fps",
                    self.settings.device_index,
                    res.width,
                    res.height,
                    fps
                );
                self.actual_resolution = Some(res);
                self.actual_fps = Some(fps);
                Ok(())
            }
            Ok(Err(e)) => {
                self.stop();
                Err(e)
            }
            Err(_) => {
                self.stop();
                Err(CameraError::StreamFailed(
                    "Capture thread terminated unexpectedly".to_string(),
                ))
            }
        }
    }

    /// Stop the capture thread and wait for it to finish. Idempotent.
    pub fn stop(&mut self) {
        self.stop_signal.store(true, Ordering::SeqCst);

        if let Some(handle) = self.capture_thread.take() {
            let _ = handle.join();
            log::debug!("camera capture thread joined");
        }
    }

    /// Get the latest captured frame without waiting.
    pub fn get_frame(&self) -> Option<Frame> {
        let buffer = self.frame_buffer.lock().ok()?;
        buffer.clone()
    }

    /// Wait up to `timeout` for a frame newer than the last delivered one.
    pub fn wait_for_frame(&mut self, timeout: Duration) -> Option<Frame> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(frame) = self.get_frame() {
                let fresh = self.last_delivered.map_or(true, |t| frame.timestamp > t);
                if fresh {
                    self.last_delivered = Some(frame.timestamp);
                    return Some(frame);
                }
            }
            if !self.is_running() || Instant::now() >= deadline {
                return None;
            }
            thread::sleep(Duration::from_millis(1));
        }
    }

    /// Check if the capture thread is currently running.
    pub fn is_running(&self) -> bool {
        self.capture_thread
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }
}

impl FrameSource for CameraCapture {
    fn next_frame(&mut self) -> Option<Frame> {
        let timeout = self.settings.frame_timeout;
        let frame = self.wait_for_frame(timeout);
        if frame.is_none() {
            log::warn!("no camera frame within {:?}", timeout);
        }
        frame
    }
}

impl Drop for CameraCapture {
    fn drop(&mut self) {
        self.stop();
    }
}
