//! Storage bootstrap: connection pool and schema setup

pub mod migrations;
pub mod pool;

pub use pool::{create_pool, database_url_from_env, DEFAULT_DATABASE_URL};
