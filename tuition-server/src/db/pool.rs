//! Database connection pool management
//!
//! SQLite via sqlx. The pool doubles as the session factory: each
//! acquisition hands a request-private connection back on drop,
//! whatever the exit path.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Store used when `DATABASE_URL` is unset: a file next to the binary.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://tuition.db";

/// Default maximum connections for the pool.
/// Kept low for a single-admin intake service.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Wait this long on a locked database file before failing a query.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolve the connection string from the environment.
pub fn database_url_from_env() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Rewrite the legacy `sqlite3:` scheme to the canonical `sqlite:` one.
///
/// Some ORMs and hosting dashboards still emit `sqlite3://...`; sqlx
/// only accepts `sqlite:`.
fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("sqlite3:") {
        Some(rest) => format!("sqlite:{rest}"),
        None => url.to_owned(),
    }
}

/// Create the SQLite connection pool.
///
/// The database file is created on first run. WAL mode and a busy
/// timeout let pooled connections be used concurrently from request
/// handlers on any runtime thread.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the file cannot be
/// opened. Callers treat this as fatal at boot.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let url = normalize_database_url(database_url);
    let options = SqliteConnectOptions::from_str(&url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    SqlitePoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_with(options)
        .await
}
