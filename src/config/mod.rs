mod app_config;

pub use app_config::{AppConfig, CONFIG_FILE, WINDOW_TITLE};
