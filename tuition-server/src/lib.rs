//! tuition-server: HTTP intake API for tuition enrollments
//!
//! Accepts enrollment submissions over HTTP, persists them to a
//! SQLite-backed store, and notifies an administrator by email on a
//! best-effort basis.

pub mod db;
pub mod error;
pub mod models;
pub mod notify;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::{Error, Result};
pub use notify::MailerConfig;
pub use state::AppState;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8000)
    pub bind_addr: SocketAddr,
    pub database_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            database_url: db::database_url_from_env(),
        }
    }
}

/// Build the application router with all routes.
pub fn build_router(state: AppState) -> Router {
    // The enrollment form is served from a different origin, so every
    // endpoint answers cross-origin requests without credentials.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::router())
        .merge(routes::enrollments::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server.
///
/// Connects the pool, bootstraps the schema, then serves until
/// Ctrl+C/SIGTERM. A malformed database URL fails here, before the
/// listener is bound.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let pool = db::create_pool(&config.database_url).await?;
    db::migrations::run(&pool).await?;

    let mailer = MailerConfig::from_env();
    if mailer.is_none() {
        tracing::info!("SMTP not configured, enrollment notices disabled");
    }

    let state = AppState::new(pool, mailer);
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8000);
    }
}
