//! Project API endpoints.

use axum::{extract::State, Json};

use super::ApiResult;
use crate::models::{Project, ProjectFilter};
use crate::AppState;

/// GET /api/projects - List all projects.
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Vec<Project>> {
    let projects = state.repo.list_projects(ProjectFilter::default()).await?;
    Ok(Json(projects))
}

/// GET /api/projects/featured - List projects flagged as featured.
pub async fn list_featured_projects(State(state): State<AppState>) -> ApiResult<Vec<Project>> {
    let projects = state.repo.list_projects(ProjectFilter::featured()).await?;
    Ok(Json(projects))
}
