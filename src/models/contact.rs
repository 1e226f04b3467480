//! Contact message model and request validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request body for the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl FieldError {
    fn missing(field: &str) -> Self {
        Self {
            field: field.to_string(),
            reason: "field required".to_string(),
        }
    }

    fn not_a_string(field: &str, found: &Value) -> Self {
        Self {
            field: field.to_string(),
            reason: format!("expected a string, found {}", json_type_name(found)),
        }
    }
}

impl ContactSubmission {
    /// Validate an arbitrary JSON body, collecting every bad field instead of
    /// stopping at the first one. No format or length checks are applied.
    pub fn from_json(body: &Value) -> Result<Self, Vec<FieldError>> {
        let Some(object) = body.as_object() else {
            return Err(vec![FieldError {
                field: "body".to_string(),
                reason: format!("expected an object, found {}", json_type_name(body)),
            }]);
        };

        let mut errors = Vec::new();
        let mut take = |field: &str| match object.get(field) {
            None | Some(Value::Null) => {
                errors.push(FieldError::missing(field));
                String::new()
            }
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                errors.push(FieldError::not_a_string(field, other));
                String::new()
            }
        };

        let submission = Self {
            name: take("name"),
            email: take("email"),
            subject: take("subject"),
            message: take("message"),
        };

        if errors.is_empty() {
            Ok(submission)
        } else {
            Err(errors)
        }
    }
}

/// A stored contact message. Written once, never read back by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ContactMessage {
    /// Stamp a validated submission with a fresh id and the current time.
    pub fn from_submission(submission: ContactSubmission) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: submission.name,
            email: submission.email,
            subject: submission.subject,
            message: submission.message,
            timestamp: Utc::now(),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Render field errors as `{"field": "reason", ...}` for the error envelope.
pub fn field_errors_to_json(errors: &[FieldError]) -> Value {
    let map: Map<String, Value> = errors
        .iter()
        .map(|e| (e.field.clone(), Value::String(e.reason.clone())))
        .collect();
    Value::Object(map)
}
