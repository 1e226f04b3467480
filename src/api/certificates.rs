//! Certificate API endpoints.

use axum::{extract::State, Json};

use super::ApiResult;
use crate::models::Certificate;
use crate::AppState;

/// GET /api/certificates - List all certificates.
pub async fn list_certificates(State(state): State<AppState>) -> ApiResult<Vec<Certificate>> {
    Ok(Json(state.repo.list_certificates().await?))
}
