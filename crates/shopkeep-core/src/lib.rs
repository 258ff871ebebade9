pub mod app_config;
pub mod config;

pub use app_config::{AppConfig, ConfigError};
pub use config::{load_app_config, load_app_config_from_env};
