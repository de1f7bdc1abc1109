//! tuitionctl - tuition enrollment intake server
//!
//! Boots the HTTP service: loads a local .env, initializes tracing,
//! resolves the database target, and serves until Ctrl+C/SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use tuition_server::ServerConfig;

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "tuitionctl",
    author,
    version,
    about = "HTTP intake API for tuition enrollments"
)]
struct Cli {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    bind: SocketAddr,

    /// Database URL (defaults to a local SQLite file)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Local overrides for DATABASE_URL and the SMTP_* variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_setup::init_tracing(&tracing_setup::TracingConfig { debug: cli.debug })?;

    let database_url = cli
        .database_url
        .unwrap_or_else(|| tuition_server::db::DEFAULT_DATABASE_URL.to_string());

    tracing::info!("Starting tuition enrollment server on {}", cli.bind);

    let config = ServerConfig {
        bind_addr: cli.bind,
        database_url,
    };

    tuition_server::serve(config).await.context("Server error")
}
