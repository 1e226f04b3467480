//! REST API module.
//!
//! Read routes return bare JSON arrays; writes and health return a status object.

mod certificates;
mod contact;
mod health;
mod projects;
mod talks;

pub use certificates::*;
pub use contact::*;
pub use health::*;
pub use projects::*;
pub use talks::*;

use axum::extract::{rejection::JsonRejection, FromRequest};
use axum::http::Uri;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Handler result: JSON body on success, error envelope otherwise.
pub type ApiResult<T> = Result<axum::Json<T>, AppError>;

/// `{"status": ..., "message": ...}` acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    pub fn new(status: &str, message: impl Into<String>) -> Self {
        Self {
            status: status.to_string(),
            message: message.into(),
        }
    }
}

/// JSON extractor whose rejections use the application error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
