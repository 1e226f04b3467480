//! Contact form endpoint.

use axum::{extract::State, Json};
use serde_json::Value;

use super::{ApiResult, JsonBody, StatusResponse};
use crate::errors::AppError;
use crate::models::{field_errors_to_json, ContactSubmission};
use crate::AppState;

pub const CONTACT_SUCCESS_MESSAGE: &str = "Contact message sent successfully!";

/// POST /api/contact - Store a contact form submission.
pub async fn submit_contact(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> ApiResult<StatusResponse> {
    // Validate required fields before anything touches the store
    let submission = ContactSubmission::from_json(&body).map_err(|errors| {
        tracing::debug!(?errors, "Rejected contact submission");
        AppError::Validation {
            message: "Invalid contact message".to_string(),
            details: field_errors_to_json(&errors),
        }
    })?;

    state.repo.create_contact_message(submission).await?;

    Ok(Json(StatusResponse::new("success", CONTACT_SUCCESS_MESSAGE)))
}
