//! Talk API endpoints.

use axum::{extract::State, Json};

use super::ApiResult;
use crate::models::Talk;
use crate::AppState;

/// GET /api/talks - List all talks.
pub async fn list_talks(State(state): State<AppState>) -> ApiResult<Vec<Talk>> {
    Ok(Json(state.repo.list_talks().await?))
}
