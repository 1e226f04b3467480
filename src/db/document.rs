//! Document store abstraction.
//!
//! Documents are JSON objects grouped into named collections. Results come back
//! in insertion order and never carry the backend's own row identifiers.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::ProjectFilter;

/// The collections this service knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Projects,
    Certificates,
    Talks,
    ContactMessages,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Projects => "projects",
            Collection::Certificates => "certificates",
            Collection::Talks => "talks",
            Collection::ContactMessages => "contact_messages",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar value a filter condition compares against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl FilterValue {
    /// Exact, type-sensitive match: `true` never equals `1`.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FilterValue::Bool(b) => value.as_bool() == Some(*b),
            FilterValue::Int(i) => value.as_i64() == Some(*i),
            FilterValue::Str(s) => value.as_str() == Some(s.as_str()),
        }
    }
}

/// Conjunction of exact-match conditions on top-level fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    conditions: Vec<(&'static str, FilterValue)>,
}

impl Filter {
    /// Matches every document.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: &'static str, value: FilterValue) -> Self {
        self.conditions.push((field, value));
        self
    }

    pub fn conditions(&self) -> &[(&'static str, FilterValue)] {
        &self.conditions
    }

    /// A field absent from the document never matches.
    pub fn matches(&self, document: &Value) -> bool {
        self.conditions.iter().all(|(field, expected)| {
            document
                .get(field)
                .map(|actual| expected.matches(actual))
                .unwrap_or(false)
        })
    }
}

impl From<ProjectFilter> for Filter {
    fn from(filter: ProjectFilter) -> Self {
        let mut out = Filter::all();
        if let Some(featured) = filter.featured {
            out = out.eq("featured", FilterValue::Bool(featured));
        }
        out
    }
}

/// Persistence seam shared by every handler and the seeder.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn count(&self, collection: Collection, filter: &Filter) -> Result<u64, AppError>;

    async fn find(&self, collection: Collection, filter: &Filter) -> Result<Vec<Value>, AppError>;

    async fn insert_one(&self, collection: Collection, document: Value) -> Result<(), AppError>;

    /// Inserting an empty batch is a no-op.
    async fn insert_many(
        &self,
        collection: Collection,
        documents: Vec<Value>,
    ) -> Result<(), AppError>;
}

/// Reject anything that is not a JSON object before it reaches a backend.
pub(crate) fn ensure_document(collection: Collection, document: &Value) -> Result<(), AppError> {
    if document.is_object() {
        Ok(())
    } else {
        Err(AppError::Internal(format!(
            "Refusing to store non-object document in {}",
            collection
        )))
    }
}
