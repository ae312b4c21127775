//! PostgreSQL connection pool construction

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::domain::DomainError;

/// Build connection options from the URL, or from the discrete fields when no URL is set
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, DomainError> {
    if let Some(url) = config.configured_url() {
        return PgConnectOptions::from_str(url)
            .map_err(|e| DomainError::storage(format!("Invalid database URL: {}", e)));
    }

    let ssl_mode = PgSslMode::from_str(&config.sslmode).map_err(|e| {
        DomainError::storage(format!("Invalid sslmode '{}': {}", config.sslmode, e))
    })?;

    Ok(PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.dbname)
        .ssl_mode(ssl_mode))
}

/// Open a connection pool
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let options = connect_options(config)?;

    info!("Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect_with(options)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;
    info!("PostgreSQL connection established");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_options_from_components() {
        let config = DatabaseConfig {
            host: "db.internal".to_string(),
            port: 6543,
            user: "app".to_string(),
            dbname: "users".to_string(),
            ..Default::default()
        };

        let options = connect_options(&config).unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "app");
        assert_eq!(options.get_database(), Some("users"));
        assert!(matches!(options.get_ssl_mode(), PgSslMode::Disable));
    }

    #[test]
    fn test_connect_options_from_url() {
        let config = DatabaseConfig {
            url: Some("postgres://svc:pw@pg.example:5433/main".to_string()),
            ..Default::default()
        };

        let options = connect_options(&config).unwrap();
        assert_eq!(options.get_host(), "pg.example");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_database(), Some("main"));
    }

    #[test]
    fn test_connect_options_invalid_sslmode() {
        let config = DatabaseConfig {
            sslmode: "sometimes".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            connect_options(&config),
            Err(DomainError::Storage { .. })
        ));
    }
}
