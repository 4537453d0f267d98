use serde::{Deserialize, Serialize};

/// Audio configuration: sample locations, output volume and voice lifetimes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    /// The note every pitch is derived from.
    pub main_sample_path: String,
    /// Played unmodified by the easter-egg key.
    pub easter_egg_sample_path: String,
    /// Master volume (0.0 - 1.0).
    pub master_volume: f32,
    /// Main voices are released this long after starting.
    pub main_voice_lifetime_ms: u64,
    /// Easter-egg voices are released this long after starting.
    pub easter_egg_voice_lifetime_ms: u64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            main_sample_path: "assets/base_note.wav".to_string(),
            easter_egg_sample_path: "assets/track78.wav".to_string(),
            master_volume: 1.0,
            main_voice_lifetime_ms: 1500,
            easter_egg_voice_lifetime_ms: 3000,
        }
    }
}

impl AudioConfig {
    /// Master volume clamped to the valid range.
    pub fn clamped_volume(&self) -> f32 {
        self.master_volume.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AudioConfig::default();
        assert_eq!(config.main_voice_lifetime_ms, 1500);
        assert_eq!(config.easter_egg_voice_lifetime_ms, 3000);
        assert!((config.master_volume - 1.0).abs() < f32::EPSILON);
        assert!(config.main_sample_path.ends_with("base_note.wav"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AudioConfig = serde_json::from_str(r#"{"master_volume": 0.25}"#).unwrap();
        assert!((config.master_volume - 0.25).abs() < f32::EPSILON);
        assert_eq!(config.main_voice_lifetime_ms, 1500);
    }

    #[test]
    fn test_volume_clamp() {
        let config = AudioConfig {
            master_volume: 3.0,
            ..Default::default()
        };
        assert!((config.clamped_volume() - 1.0).abs() < f32::EPSILON);
    }
}
