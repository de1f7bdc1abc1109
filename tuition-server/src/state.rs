//! Application state shared across handlers

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::notify::MailerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: SqlitePool,
    mailer: Option<MailerConfig>,
}

impl AppState {
    pub fn new(pool: SqlitePool, mailer: Option<MailerConfig>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { pool, mailer }),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    /// Mailer configuration, when SMTP was configured at startup.
    pub fn mailer(&self) -> Option<&MailerConfig> {
        self.inner.mailer.as_ref()
    }
}
