use std::path::Path;

/// User-facing messages for startup failures.
pub struct UserError;

impl UserError {
    pub fn config_load_error(path: &Path) -> String {
        format!("Failed to load config file: {}", path.display())
    }

    pub fn audio_init_error() -> &'static str {
        "Failed to initialize audio output. Check that a sound device is available."
    }

    pub fn logging_init_error() -> &'static str {
        "Failed to initialize logging"
    }

    pub fn sample_missing(path: &Path) -> String {
        format!(
            "Sample not found: {}. The matching key will stay silent.",
            path.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_load_error() {
        let msg = UserError::config_load_error(Path::new("/tmp/config.json"));
        assert!(msg.contains("config.json"));
    }

    #[test]
    fn test_sample_missing() {
        let msg = UserError::sample_missing(Path::new("assets/base_note.wav"));
        assert!(msg.contains("base_note.wav"));
        assert!(msg.contains("silent"));
    }
}
