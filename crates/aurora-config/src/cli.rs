//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Aurora LOD demo command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "aurora", about = "Aurora LOD blend demo")]
pub struct CliArgs {
    /// Initial camera-to-object distance.
    #[arg(long)]
    pub start_distance: Option<f32>,

    /// Camera retreat speed in distance units per second.
    #[arg(long)]
    pub camera_speed: Option<f32>,

    /// Demo duration in seconds.
    #[arg(long)]
    pub duration: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(d) = args.start_distance {
            self.scene.start_distance = d;
        }
        if let Some(speed) = args.camera_speed {
            self.scene.camera_speed = speed;
        }
        if let Some(duration) = args.duration {
            self.scene.duration_s = duration;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            camera_speed: Some(50.0),
            log_level: Some("trace".to_string()),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.scene.camera_speed, 50.0);
        assert_eq!(config.debug.log_level, "trace");
        // Non-overridden fields retain defaults
        assert_eq!(config.scene.start_distance, 10.0);
        assert_eq!(config.scene.duration_s, 8.0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from(["aurora", "--camera-speed", "12.5", "--duration", "3"]);
        assert_eq!(args.camera_speed, Some(12.5));
        assert_eq!(args.duration, Some(3.0));
        assert!(args.config.is_none());
    }
}
