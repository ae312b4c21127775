use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub app: AppSettings,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database connection settings
///
/// `url` wins over the discrete fields when it is set and non-empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
    pub sslmode: String,
    pub url: Option<String>,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

/// Informational settings echoed by the root endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub test_message: String,
    pub environment: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Configuration problems detected before anything starts
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigValidationError {
    #[error("server port is required")]
    MissingServerPort,

    #[error("database host is required")]
    MissingDatabaseHost,

    #[error("database user is required")]
    MissingDatabaseUser,

    #[error("database name is required")]
    MissingDatabaseName,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "password".to_string(),
            dbname: "testdb".to_string(),
            sslmode: "disable".to_string(),
            url: None,
            max_connections: 10,
            connect_timeout_secs: 30,
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            test_message: String::new(),
            environment: "development".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Flat environment variables kept for existing deployments, applied last
const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("HOST", "server.host"),
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.dbname"),
    ("DB_SSLMODE", "database.sslmode"),
    ("DATABASE_URL", "database.url"),
    ("TEST_MSG", "app.test_message"),
    ("ENVIRONMENT", "app.environment"),
];

impl AppConfig {
    /// Load from config files, `APP__*` variables and the legacy flat variables
    pub fn load() -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            );

        apply_legacy_env(builder, |key| std::env::var(key).ok())?
            .build()?
            .try_deserialize()
    }

    /// Build from defaults plus the legacy variables resolved by `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        apply_legacy_env(config::Config::builder(), lookup)?
            .build()?
            .try_deserialize()
    }

    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.port == 0 {
            return Err(ConfigValidationError::MissingServerPort);
        }

        if self.database.configured_url().is_none() {
            if self.database.host.is_empty() {
                return Err(ConfigValidationError::MissingDatabaseHost);
            }
            if self.database.user.is_empty() {
                return Err(ConfigValidationError::MissingDatabaseUser);
            }
            if self.database.dbname.is_empty() {
                return Err(ConfigValidationError::MissingDatabaseName);
            }
        }

        Ok(())
    }

    /// Log the effective configuration without secrets
    pub fn log_summary(&self) {
        info!(
            host = %self.server.host,
            port = self.server.port,
            "Server configuration"
        );

        match self.database.configured_url() {
            Some(url) => info!(url = %mask_password(url), "Database configuration"),
            None => info!(
                host = %self.database.host,
                port = self.database.port,
                user = %self.database.user,
                database = %self.database.dbname,
                sslmode = %self.database.sslmode,
                "Database configuration"
            ),
        }

        let test_message = if self.app.test_message.is_empty() {
            "(not set)"
        } else {
            self.app.test_message.as_str()
        };
        info!(
            environment = %self.app.environment,
            test_message = %test_message,
            "App configuration"
        );
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    /// Connection URL, if one was configured
    pub fn configured_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

fn apply_legacy_env<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<ConfigBuilder<DefaultState>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for (var, key) in LEGACY_ENV_KEYS {
        let value = lookup(var).filter(|v| !v.is_empty());
        builder = builder.set_override_option(*key, value)?;
    }

    Ok(builder)
}

/// Replace the password in a connection URL with `***`
pub fn mask_password(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((userinfo, host)) = rest.rsplit_once('@') else {
        return url.to_string();
    };

    match userinfo.split_once(':') {
        Some((user, _)) => format!("{}://{}:***@{}", scheme, user, host),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        AppConfig::from_lookup(|key| env.get(key).cloned()).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.dbname, "testdb");
        assert_eq!(config.database.sslmode, "disable");
        assert!(config.database.configured_url().is_none());
        assert_eq!(config.app.environment, "development");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_legacy_variables_override_defaults() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6543"),
            ("TEST_MSG", "hello"),
            ("ENVIRONMENT", "production"),
        ]);

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.app.test_message, "hello");
        assert_eq!(config.app.environment, "production");
    }

    #[test]
    fn test_empty_legacy_variable_is_ignored() {
        let config = config_from(&[("DB_HOST", "")]);
        assert_eq!(config.database.host, "localhost");
    }

    #[test]
    fn test_database_url() {
        let config = config_from(&[("DATABASE_URL", "postgres://u:p@h:5432/d")]);
        assert_eq!(
            config.database.configured_url(),
            Some("postgres://u:p@h:5432/d")
        );
    }

    #[test]
    fn test_validate_missing_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;

        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::MissingServerPort)
        );
    }

    #[test]
    fn test_validate_database_components() {
        let mut config = AppConfig::default();
        config.database.host.clear();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::MissingDatabaseHost)
        );

        let mut config = AppConfig::default();
        config.database.user.clear();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::MissingDatabaseUser)
        );

        let mut config = AppConfig::default();
        config.database.dbname.clear();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::MissingDatabaseName)
        );
    }

    #[test]
    fn test_validate_url_skips_component_checks() {
        let mut config = AppConfig::default();
        config.database.host.clear();
        config.database.user.clear();
        config.database.url = Some("postgres://u:p@h/d".to_string());

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_address() {
        let config = AppConfig::default();
        assert_eq!(config.server.address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_mask_password() {
        assert_eq!(
            mask_password("postgres://admin:s3cret@db:5432/app"),
            "postgres://admin:***@db:5432/app"
        );
        assert_eq!(
            mask_password("postgres://admin@db/app"),
            "postgres://admin@db/app"
        );
        assert_eq!(mask_password("not a url"), "not a url");
    }
}
