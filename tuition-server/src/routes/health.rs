//! Liveness endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Liveness response
#[derive(Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
}

/// GET /
async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Tuition enrollment API is running",
    })
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn home_reports_running() {
        let Json(body) = home().await;
        assert_eq!(body.message, "Tuition enrollment API is running");
    }
}
