//! Serve command - runs the HTTP server

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::api::{create_router, AppInfo, AppState};
use crate::config::{AppConfig, ServerConfig};
use crate::domain::SeedStore;
use crate::infrastructure::seed::setup_seeders;
use crate::infrastructure::user::PostgresUserRepository;

/// Arguments for the serve command
#[derive(Debug, Args, Clone)]
pub struct ServeArgs {
    /// Run all seeders before serving
    #[arg(long)]
    pub seed: bool,

    /// Run all seeders and exit without serving
    #[arg(long)]
    pub seed_only: bool,
}

/// Run the HTTP server
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let config = super::load_config()?;
    let pool = super::open_database(&config).await?;
    let repository = Arc::new(PostgresUserRepository::new(pool));

    if args.seed || args.seed_only {
        let manager = setup_seeders(SeedStore::new(repository.clone()));
        manager.run_all().await.context("Database seeding failed")?;

        if args.seed_only {
            info!("Seeding completed, exiting");
            return Ok(());
        }
    }

    serve(&config, repository).await
}

async fn serve(config: &AppConfig, repository: Arc<PostgresUserRepository>) -> anyhow::Result<()> {
    let state = AppState::new(repository, AppInfo::from_settings(&config.app));
    let app = create_router(state);

    let addr = build_socket_addr(&config.server)?;
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

fn build_socket_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    let ip = server
        .host
        .parse::<IpAddr>()
        .with_context(|| format!("Invalid server host '{}'", server.host))?;

    Ok(SocketAddr::from((ip, server.port)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_socket_addr() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };

        let addr = build_socket_addr(&server).unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_build_socket_addr_rejects_hostnames() {
        let server = ServerConfig {
            host: "not an ip".to_string(),
            port: 8080,
        };

        assert!(build_socket_addr(&server).is_err());
    }
}
