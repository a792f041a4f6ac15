//! Configuration file handling for blue-sniper.
//!
//! Loads configuration from the platform config dir
//! (`~/.config/blue-sniper/config.toml` on Linux) or a custom path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ascii::CharSet;
use crate::camera::{CameraSettings, Resolution};
use crate::game::GameRules;
use crate::vision::{BlueDetector, Hsv, HsvRange, HUE_MAX};

/// Longest session accepted from the config file or the command line.
pub const MAX_DURATION_SECS: u64 = 3600;

/// Configuration file structure for blue-sniper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub device: u32,
    pub mirror: bool,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    /// Give up on the stream after this long without a new frame
    pub frame_timeout_ms: u64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let settings = CameraSettings::default();
        Self {
            device: settings.device_index,
            mirror: settings.mirror,
            width: settings.resolution.width,
            height: settings.resolution.height,
            fps: settings.fps,
            frame_timeout_ms: settings.frame_timeout.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub duration_secs: u64,
    pub hit_radius: f64,
    pub target_radius: u32,
    pub spawn_interval_secs: f64,
    pub crosshair_size: u32,
    /// Fixed RNG seed for reproducible target positions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let rules = GameRules::default();
        Self {
            duration_secs: rules.duration.as_secs(),
            hit_radius: rules.hit_radius,
            target_radius: rules.target_radius,
            spawn_interval_secs: rules.spawn_interval.as_secs_f64(),
            crosshair_size: rules.crosshair_size,
            seed: None,
        }
    }
}

/// HSV thresholds, inclusive, on the 0-179 / 0-255 / 0-255 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub hue_min: u8,
    pub hue_max: u8,
    pub sat_min: u8,
    pub sat_max: u8,
    pub val_min: u8,
    pub val_max: u8,
    /// Fewer matching pixels than this counts as "no blue object"
    pub min_pixels: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        let HsvRange { lower, upper } = HsvRange::BLUE;
        Self {
            hue_min: lower.h,
            hue_max: upper.h,
            sat_min: lower.s,
            sat_max: upper.s,
            val_min: lower.v,
            val_max: upper.v,
            min_pixels: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub charset: String,
    pub invert: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<PathBuf>,
    pub background_opacity: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            charset: CharSet::default().name().to_string(),
            invert: false,
            background: None,
            background_opacity: 0.35,
        }
    }
}

/// Commented template written by `blue-sniper config init`.
pub const DEFAULT_CONFIG: &str = r#"# blue-sniper configuration

[camera]
# Camera device index (see `blue-sniper list-cameras`)
device = 0
# Mirror horizontally (selfie mode)
mirror = true
width = 640
height = 480
fps = 30
# End the game after this long without a new frame
frame_timeout_ms = 2000

[game]
duration_secs = 30
# A target is hit when the crosshair is within this many pixels
hit_radius = 20.0
target_radius = 10
spawn_interval_secs = 3.0
crosshair_size = 20
# Fixed seed for reproducible target positions
# seed = 42

[detection]
# Inclusive HSV range; hue is 0-179
hue_min = 90
hue_max = 130
sat_min = 50
sat_max = 255
val_min = 50
val_max = 255
min_pixels = 1

[display]
# standard, blocks or minimal
charset = "blocks"
# Invert brightness (for light terminals)
invert = false
# Image blended under the camera picture
# background = "/path/to/background.jpg"
background_opacity = 0.35
"#;

impl Config {
    /// Load configuration from a file path, or the default path when `None`.
    ///
    /// A missing file yields the defaults. A file that exists but cannot be
    /// read, parsed or validated is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            path: path.clone(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| match e {
            ConfigError::ParseError { source, .. } => ConfigError::ParseError {
                path: path.clone(),
                source,
            },
            other => other,
        })?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML text. Parse errors carry an empty path.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: PathBuf::new(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the game cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cam = &self.camera;
        if cam.width == 0 || cam.height == 0 {
            return Err(invalid("camera.width/height", "must be positive"));
        }
        if cam.fps == 0 {
            return Err(invalid("camera.fps", "must be positive"));
        }
        if cam.frame_timeout_ms == 0 {
            return Err(invalid("camera.frame_timeout_ms", "must be positive"));
        }

        let game = &self.game;
        if !(1..=MAX_DURATION_SECS).contains(&game.duration_secs) {
            return Err(invalid("game.duration_secs", "must be within 1..=3600"));
        }
        if !(game.spawn_interval_secs > 0.0
            && Duration::try_from_secs_f64(game.spawn_interval_secs).is_ok())
        {
            return Err(invalid(
                "game.spawn_interval_secs",
                "must be a positive number of seconds",
            ));
        }
        if !(game.hit_radius.is_finite() && game.hit_radius >= 0.0) {
            return Err(invalid("game.hit_radius", "must be zero or positive"));
        }

        let det = &self.detection;
        if det.hue_max > HUE_MAX {
            return Err(invalid("detection.hue_max", "hue is at most 179"));
        }
        for (field, lo, hi) in [
            ("detection.hue_min/hue_max", det.hue_min, det.hue_max),
            ("detection.sat_min/sat_max", det.sat_min, det.sat_max),
            ("detection.val_min/val_max", det.val_min, det.val_max),
        ] {
            if lo > hi {
                return Err(invalid(field, "minimum is above maximum"));
            }
        }

        let disp = &self.display;
        if CharSet::from_name(&disp.charset).is_none() {
            return Err(invalid(
                "display.charset",
                "expected standard, blocks or minimal",
            ));
        }
        if !(0.0..=1.0).contains(&disp.background_opacity) {
            return Err(invalid("display.background_opacity", "must be within 0..1"));
        }

        Ok(())
    }

    pub fn rules(&self) -> GameRules {
        GameRules {
            duration: Duration::from_secs(self.game.duration_secs),
            hit_radius: self.game.hit_radius,
            target_radius: self.game.target_radius,
            spawn_interval: Duration::try_from_secs_f64(self.game.spawn_interval_secs)
                .unwrap_or(Duration::MAX),
            crosshair_size: self.game.crosshair_size,
            ..GameRules::default()
        }
    }

    pub fn camera_settings(&self) -> CameraSettings {
        CameraSettings {
            device_index: self.camera.device,
            resolution: Resolution {
                width: self.camera.width,
                height: self.camera.height,
            },
            fps: self.camera.fps,
            mirror: self.camera.mirror,
            frame_timeout: Duration::from_millis(self.camera.frame_timeout_ms),
        }
    }

    pub fn hsv_range(&self) -> HsvRange {
        let d = &self.detection;
        HsvRange::new(
            Hsv {
                h: d.hue_min,
                s: d.sat_min,
                v: d.val_min,
            },
            Hsv {
                h: d.hue_max,
                s: d.sat_max,
                v: d.val_max,
            },
        )
    }

    pub fn detector(&self) -> BlueDetector {
        BlueDetector::new(self.hsv_range(), self.detection.min_pixels)
    }

    /// Configured charset, falling back to the default for unknown names.
    pub fn charset(&self) -> CharSet {
        CharSet::from_name(&self.display.charset).unwrap_or_default()
    }

    /// Render as TOML for `config show`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::Invalid { field, reason } => {
                write!(f, "Invalid config value for {}: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::Invalid { .. } => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    directories::ProjectDirs::from("com", "blue-sniper", "blue-sniper")
        .map(|d| d.config_dir().to_path_buf().join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/blue-sniper/config.toml")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_matches_defaults() {
        let parsed = Config::parse(DEFAULT_CONFIG).expect("template should parse");
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_defaults_convert_to_runtime_types() {
        let config = Config::default();
        assert_eq!(config.rules(), GameRules::default());
        assert_eq!(config.hsv_range(), HsvRange::BLUE);
        assert_eq!(config.charset(), CharSet::Blocks);

        let cam = config.camera_settings();
        assert_eq!(cam.resolution, Resolution::MEDIUM);
        assert_eq!(cam.frame_timeout, Duration::from_millis(2000));
        assert!(cam.mirror);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = Config::parse("[game]\nduration_secs = 60\n").unwrap();
        assert_eq!(config.game.duration_secs, 60);
        assert_eq!(config.game.hit_radius, 20.0);
        assert_eq!(config.detection, DetectionConfig::default());
    }

    #[test]
    fn test_validate_rejects_inverted_hue() {
        let err = Config::parse("[detection]\nhue_min = 140\nhue_max = 100\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_validate_rejects_hue_above_179() {
        let err = Config::parse("[detection]\nhue_max = 200\n").unwrap_err();
        assert!(err.to_string().contains("detection.hue_max"));
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        assert!(Config::parse("[game]\nduration_secs = 0\n").is_err());
        assert!(Config::parse("[game]\nspawn_interval_secs = 0.0\n").is_err());
    }

    #[test]
    fn test_validate_rejects_huge_interval() {
        let err = Config::parse("[game]\nspawn_interval_secs = 1e30\n").unwrap_err();
        assert!(err.to_string().contains("game.spawn_interval_secs"));
        assert!(Config::parse("[game]\nspawn_interval_secs = nan\n").is_err());
        assert!(Config::parse("[game]\nspawn_interval_secs = inf\n").is_err());
    }

    #[test]
    fn test_validate_rejects_huge_duration() {
        let err =
            Config::parse("[game]\nduration_secs = 9223372036854775807\n").unwrap_err();
        assert!(err.to_string().contains("game.duration_secs"));
        assert!(Config::parse("[game]\nduration_secs = 3601\n").is_err());
        assert_eq!(
            Config::parse("[game]\nduration_secs = 3600\n")
                .unwrap()
                .rules()
                .remaining_secs(Duration::ZERO),
            3600
        );
    }

    #[test]
    fn test_rules_never_panic_on_unvalidated_interval() {
        let mut config = Config::default();
        config.game.spawn_interval_secs = 1e30;
        assert_eq!(config.rules().spawn_interval, Duration::MAX);
    }

    #[test]
    fn test_validate_rejects_bad_opacity_and_charset() {
        assert!(Config::parse("[display]\nbackground_opacity = 1.5\n").is_err());
        assert!(Config::parse("[display]\ncharset = \"braille\"\n").is_err());
    }

    #[test]
    fn test_to_toml_round_trips() {
        let mut config = Config::default();
        config.game.seed = Some(7);
        let text = config.to_toml().unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_default_path_ends_with_config_toml() {
        let path = default_path();
        assert!(path.ends_with("config.toml"));
    }
}
