//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::CharacterSet;
use crate::config::{Config, MAX_DURATION_SECS};

/// Parse and validate opacity (0.0-1.0)
fn parse_opacity(s: &str) -> Result<f32, String> {
    let opacity: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(0.0..=1.0).contains(&opacity) {
        return Err(format!(
            "Opacity must be between 0.0 and 1.0, got {}",
            opacity
        ));
    }
    Ok(opacity)
}

/// Shoot targets on your webcam feed by waving something blue
#[derive(Parser, Debug)]
#[command(name = "blue-sniper")]
#[command(version, about = "Webcam target game steered by a blue object", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Camera device index (from list-cameras)
    #[arg(long)]
    pub camera: Option<u32>,

    /// Session length in seconds
    #[arg(long, short, value_parser = clap::value_parser!(u64).range(1..=MAX_DURATION_SECS))]
    pub duration: Option<u64>,

    /// Seed for reproducible target positions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Image to blend under the camera picture
    #[arg(long, short)]
    pub background: Option<PathBuf>,

    /// Background opacity (0.0-1.0)
    #[arg(long, value_parser = parse_opacity)]
    pub opacity: Option<f32>,

    /// ASCII character set
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Don't mirror the camera horizontally
    #[arg(long)]
    pub no_mirror: bool,

    /// Invert brightness (for light terminals)
    #[arg(long)]
    pub invert: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Write log output to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Overlay command-line flags onto a loaded config. Flags win.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(camera) = self.camera {
            config.camera.device = camera;
        }
        if let Some(duration) = self.duration {
            config.game.duration_secs = duration;
        }
        if let Some(seed) = self.seed {
            config.game.seed = Some(seed);
        }
        if let Some(background) = &self.background {
            config.display.background = Some(background.clone());
        }
        if let Some(opacity) = self.opacity {
            config.display.background_opacity = opacity as f64;
        }
        if let Some(charset) = self.charset {
            config.display.charset = crate::ascii::CharSet::from(charset).name().to_string();
        }
        if self.no_mirror {
            config.camera.mirror = false;
        }
        if self.invert {
            config.display.invert = true;
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available cameras
    ListCameras,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["blue-sniper"]);
        assert!(args.camera.is_none());
        assert!(args.duration.is_none());
        assert!(args.seed.is_none());
        assert!(args.background.is_none());
        assert!(args.charset.is_none());
        assert!(!args.no_mirror);
        assert!(!args.invert);
        assert!(args.config.is_none());
        assert!(args.log_file.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn test_args_duration_range() {
        let args = Args::parse_from(["blue-sniper", "--duration", "60"]);
        assert_eq!(args.duration, Some(60));

        assert!(Args::try_parse_from(["blue-sniper", "--duration", "0"]).is_err());
        assert!(Args::try_parse_from(["blue-sniper", "-d", "3601"]).is_err());
    }

    #[test]
    fn test_args_opacity_validated() {
        let args = Args::parse_from(["blue-sniper", "--opacity", "0.5"]);
        assert_eq!(args.opacity, Some(0.5));
        assert!(Args::try_parse_from(["blue-sniper", "--opacity", "2"]).is_err());
        assert!(Args::try_parse_from(["blue-sniper", "--opacity", "abc"]).is_err());
    }

    #[test]
    fn test_args_charset_values() {
        let args = Args::parse_from(["blue-sniper", "--charset", "standard"]);
        assert_eq!(args.charset, Some(CharacterSet::Standard));

        let args = Args::parse_from(["blue-sniper", "--charset", "minimal"]);
        assert_eq!(args.charset, Some(CharacterSet::Minimal));

        assert!(Args::try_parse_from(["blue-sniper", "--charset", "braille"]).is_err());
    }

    #[test]
    fn test_args_config_option() {
        let args = Args::parse_from(["blue-sniper", "-c", "/tmp/test.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/test.toml")));
    }

    #[test]
    fn test_args_list_cameras_subcommand() {
        let args = Args::parse_from(["blue-sniper", "list-cameras"]);
        assert!(matches!(args.command, Some(Command::ListCameras)));
    }

    #[test]
    fn test_args_config_subcommands() {
        let args = Args::parse_from(["blue-sniper", "config", "show"]);
        assert!(matches!(
            args.command,
            Some(Command::Config {
                action: ConfigAction::Show
            })
        ));

        let args = Args::parse_from(["blue-sniper", "config", "init"]);
        assert!(matches!(
            args.command,
            Some(Command::Config {
                action: ConfigAction::Init
            })
        ));
    }

    #[test]
    fn test_apply_to_overrides_config() {
        let args = Args::parse_from([
            "blue-sniper",
            "--camera",
            "2",
            "--duration",
            "45",
            "--seed",
            "9",
            "--charset",
            "minimal",
            "--no-mirror",
            "--invert",
        ]);
        let mut config = Config::default();
        args.apply_to(&mut config);

        assert_eq!(config.camera.device, 2);
        assert_eq!(config.game.duration_secs, 45);
        assert_eq!(config.game.seed, Some(9));
        assert_eq!(config.display.charset, "minimal");
        assert!(!config.camera.mirror);
        assert!(config.display.invert);
    }

    #[test]
    fn test_apply_to_leaves_unset_fields() {
        let args = Args::parse_from(["blue-sniper"]);
        let mut config = Config::default();
        config.game.duration_secs = 90;
        args.apply_to(&mut config);
        assert_eq!(config.game.duration_secs, 90);
        assert!(config.camera.mirror);
    }
}
