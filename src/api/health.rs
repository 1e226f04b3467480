//! Health check endpoint.

use axum::Json;

use super::StatusResponse;

pub const APP_TITLE: &str = "Portfolio API";

/// GET /api/health - Liveness only; never touches the document store.
pub async fn health_check() -> Json<StatusResponse> {
    Json(StatusResponse::new(
        "healthy",
        format!("{} is running!", APP_TITLE),
    ))
}
