use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::audio::AudioConfig;

pub const CONFIG_FILE: &str = "config.json";

pub const WINDOW_TITLE: &str = "concertforyou.exe";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub audio: AudioConfig,
    /// Directory for the rolling log file. Logs go to stdout only when unset.
    pub log_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 640,
            window_height: 480,
            audio: AudioConfig::default(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Loads config from a specified path.
    /// Returns default config if file doesn't exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Window size in the signed form the windowing layer expects.
    /// Values too large for `i32` saturate.
    pub fn window_size(&self) -> (i32, i32) {
        (
            i32::try_from(self.window_width).unwrap_or(i32::MAX),
            i32::try_from(self.window_height).unwrap_or(i32::MAX),
        )
    }

    /// Saves config to a specified path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.window_width, 640);
        assert_eq!(config.window_height, 480);
        assert_eq!(config.audio, AudioConfig::default());
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_file_io() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test_config.json");

        let config = AppConfig {
            window_width: 800,
            window_height: 600,
            audio: AudioConfig {
                master_volume: 0.5,
                main_sample_path: "samples/organ.ogg".to_string(),
                ..Default::default()
            },
            log_dir: Some("logs".to_string()),
        };

        config.save_to(&file_path).unwrap();
        let loaded = AppConfig::load_from(&file_path).unwrap();

        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nonexistent.json");

        let config = AppConfig::load_from(&file_path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("partial.json");
        fs::write(&file_path, r#"{"audio": {"easter_egg_voice_lifetime_ms": 1000}}"#).unwrap();

        let config = AppConfig::load_from(&file_path).unwrap();
        assert_eq!(config.window_width, 640);
        assert_eq!(config.audio.easter_egg_voice_lifetime_ms, 1000);
        assert_eq!(config.audio.main_voice_lifetime_ms, 1500);
    }

    #[test]
    fn test_window_size_saturates() {
        let config = AppConfig {
            window_width: u32::MAX,
            window_height: 600,
            ..Default::default()
        };
        assert_eq!(config.window_size(), (i32::MAX, 600));
        assert_eq!(AppConfig::default().window_size(), (640, 480));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("broken.json");
        fs::write(&file_path, "{ not json").unwrap();

        let err = AppConfig::load_from(&file_path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }
}
