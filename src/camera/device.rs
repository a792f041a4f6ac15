//! Camera device enumeration.

use nokhwa::query;
use nokhwa::utils::ApiBackend;

use super::types::{CameraError, CameraInfo};

/// List all available camera devices on the system.
///
/// An empty list is not an error; callers decide whether "no camera" is fatal.
pub fn list_devices() -> Result<Vec<CameraInfo>, CameraError> {
    let devices = query(ApiBackend::Auto).map_err(|e| CameraError::QueryFailed(e.to_string()))?;
    log::debug!("camera query returned {} device(s)", devices.len());

    Ok(devices
        .into_iter()
        .map(|d| CameraInfo {
            index: d.index().as_index().unwrap_or(0),
            name: d.human_name(),
            description: d.description().to_string(),
        })
        .collect())
}

/// Check that `index` names an attached camera.
pub fn ensure_device(index: u32) -> Result<(), CameraError> {
    let devices = list_devices()?;
    if devices.iter().any(|d| d.index == index) {
        Ok(())
    } else {
        Err(CameraError::DeviceNotFound(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed_devices_display_their_name() {
        // Machines without a camera backend can't be queried at all
        let Ok(devices) = list_devices() else {
            return;
        };
        for device in &devices {
            assert!(device.to_string().contains(&device.name));
        }
    }

    #[test]
    fn test_ensure_device_rejects_absurd_index() {
        match ensure_device(999) {
            Err(CameraError::DeviceNotFound(idx)) => assert_eq!(idx, 999),
            Err(CameraError::QueryFailed(_)) => {}
            other => panic!("Expected DeviceNotFound, got {:?}", other),
        }
    }
}
