//! Application configuration

mod app_config;

pub use app_config::{
    mask_password, AppConfig, AppSettings, ConfigValidationError, DatabaseConfig, LogFormat,
    LoggingConfig, ServerConfig,
};
