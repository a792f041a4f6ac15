//! Optional background picture blended under the camera image.

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use std::path::Path;

use crate::camera::Frame;
use crate::error::GameError;

/// A background image, resized lazily to whatever size the camera delivers.
#[derive(Debug, Clone)]
pub struct Backdrop {
    source: DynamicImage,
    /// Weight of the background in the blend, 0.0-1.0
    opacity: f32,
    resized: Option<RgbImage>,
}

impl Backdrop {
    /// Load an image file (JPEG or PNG).
    pub fn load(path: &Path, opacity: f32) -> Result<Self, GameError> {
        let source = image::open(path).map_err(|source| GameError::Background {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!(
            "loaded background {} ({}x{})",
            path.display(),
            source.width(),
            source.height()
        );
        Ok(Self::from_image(source, opacity))
    }

    pub fn from_image(source: DynamicImage, opacity: f32) -> Self {
        Self {
            source,
            opacity: opacity.clamp(0.0, 1.0),
            resized: None,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Blend the background into `frame` in place: `cam·(1−a) + bg·a`.
    pub fn blend_under(&mut self, frame: &mut Frame) {
        if self.opacity <= 0.0 || frame.width == 0 || frame.height == 0 {
            return;
        }

        let stale = self
            .resized
            .as_ref()
            .map_or(true, |img| img.dimensions() != (frame.width, frame.height));
        if stale {
            self.resized = Some(
                self.source
                    .resize_exact(frame.width, frame.height, FilterType::Triangle)
                    .to_rgb8(),
            );
        }
        let Some(background) = self.resized.as_ref() else {
            return;
        };

        let a = self.opacity;
        for (cam, bg) in frame.data.iter_mut().zip(background.as_raw()) {
            *cam = (*cam as f32 * (1.0 - a) + *bg as f32 * a).round() as u8;
        }
    }
}
