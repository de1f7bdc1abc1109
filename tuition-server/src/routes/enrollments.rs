//! Enrollment endpoints: submission intake and listing

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;

use crate::error::Error;
use crate::models::{Enrollment, EnrollmentResponse, EnrollmentSubmission};
use crate::notify;
use crate::state::AppState;

/// POST /api/enroll - accept a new enrollment submission
async fn create_enrollment(
    State(state): State<AppState>,
    Json(submission): Json<EnrollmentSubmission>,
) -> Result<(StatusCode, Json<EnrollmentResponse>), Error> {
    let new = submission.into_validated()?;

    let enrollment: Enrollment = sqlx::query_as(
        r#"
        INSERT INTO enrollments
            (student_name, student_class, board, subjects, area, phone, preferred_time, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(&new.student_name)
    .bind(&new.student_class)
    .bind(&new.board)
    .bind(&new.subjects)
    .bind(&new.area)
    .bind(&new.phone)
    .bind(&new.preferred_time)
    .bind(Utc::now())
    .fetch_one(state.pool())
    .await?;

    // The record is committed; the notice runs off the response path
    // and any failure stays inside the task
    let mailer = state.mailer().cloned();
    tokio::spawn(notify::notify_enrollment(mailer, enrollment.clone()));

    Ok((StatusCode::CREATED, Json(EnrollmentResponse::from(enrollment))))
}

/// GET /api/enrollments - every enrollment, newest first
async fn list_enrollments(
    State(state): State<AppState>,
) -> Result<Json<Vec<EnrollmentResponse>>, Error> {
    let enrollments: Vec<Enrollment> =
        sqlx::query_as("SELECT * FROM enrollments ORDER BY created_at DESC")
            .fetch_all(state.pool())
            .await?;

    Ok(Json(
        enrollments
            .into_iter()
            .map(EnrollmentResponse::from)
            .collect(),
    ))
}

/// Enrollment routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/enroll", post(create_enrollment))
        .route("/api/enrollments", get(list_enrollments))
}

#[cfg(test)]
mod tests {
    // Full request-cycle coverage lives in tests/api.rs against an
    // in-memory store.
}
