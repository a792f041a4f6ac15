//! Subcommand handlers for list-cameras and config actions.

use std::path::Path;
use std::process::ExitCode;

use super::args::ConfigAction;
use crate::camera;
use crate::config::{default_path as get_config_path, Config, DEFAULT_CONFIG};

/// List available cameras and print them to stdout.
pub fn list_cameras() -> ExitCode {
    match camera::list_devices() {
        Ok(devices) => {
            if devices.is_empty() {
                println!("No cameras found.");
                println!();
                println!("Make sure your camera is connected and permissions are granted.");
                println!(
                    "On macOS, grant access in System Settings > Privacy & Security > Camera."
                );
            } else {
                println!("Available cameras:");
                for device in devices {
                    println!("  {}", device);
                }
                println!();
                println!("Use --camera <index> to select a camera.");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Handle config subcommand actions. `path` overrides the default location.
pub fn handle_config_action(action: ConfigAction, path: Option<&Path>) -> ExitCode {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(get_config_path);

    match action {
        ConfigAction::Show => {
            let config = match Config::load(Some(&config_path)) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            if config_path.exists() {
                println!("# Config file: {} (exists)", config_path.display());
            } else {
                println!("# Config file: {} (not found, showing defaults)", config_path.display());
            }
            println!();
            match config.to_toml() {
                Ok(text) => print!("{}", text),
                Err(e) => {
                    eprintln!("Error rendering config: {}", e);
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        ConfigAction::Init => {
            if config_path.exists() {
                eprintln!("Config file already exists: {}", config_path.display());
                eprintln!("Use 'blue-sniper config show' to view current settings.");
                return ExitCode::FAILURE;
            }

            if let Some(parent) = config_path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Error creating config directory: {}", e);
                    return ExitCode::FAILURE;
                }
            }

            if let Err(e) = std::fs::write(&config_path, DEFAULT_CONFIG) {
                eprintln!("Error writing config file: {}", e);
                return ExitCode::FAILURE;
            }

            println!("Created config file: {}", config_path.display());
            ExitCode::SUCCESS
        }
    }
}
