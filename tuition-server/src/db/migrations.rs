//! Schema bootstrap for the enrollments table
//!
//! Executed at every boot; all statements are IF NOT EXISTS so repeated
//! starts against the same store are no-ops.

use sqlx::SqlitePool;

/// Create the enrollments table and its index.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running enrollment migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS enrollments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            student_name TEXT NOT NULL,
            student_class TEXT NOT NULL,
            board TEXT,
            subjects TEXT NOT NULL,
            area TEXT NOT NULL,
            phone TEXT NOT NULL,
            preferred_time TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // The list endpoint reads newest-first
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_enrollments_created ON enrollments(created_at DESC)",
    )
    .execute(pool)
    .await?;

    tracing::info!("Enrollment migrations complete");
    Ok(())
}
