//! Typed repository over the document store.
//!
//! Handlers talk to this instead of raw documents, so each route is one call.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::document::{Collection, DocumentStore, Filter};
use crate::errors::AppError;
use crate::models::{Certificate, ContactMessage, ContactSubmission, Project, ProjectFilter, Talk};

/// Repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn DocumentStore>,
}

impl Repository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// The underlying store, for the seeder and tests.
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// List projects in insertion order.
    pub async fn list_projects(&self, filter: ProjectFilter) -> Result<Vec<Project>, AppError> {
        self.find_as(Collection::Projects, &filter.into()).await
    }

    pub async fn list_certificates(&self) -> Result<Vec<Certificate>, AppError> {
        self.find_as(Collection::Certificates, &Filter::all()).await
    }

    pub async fn list_talks(&self) -> Result<Vec<Talk>, AppError> {
        self.find_as(Collection::Talks, &Filter::all()).await
    }

    /// Persist a contact submission with a server-assigned id and timestamp.
    pub async fn create_contact_message(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactMessage, AppError> {
        let message = ContactMessage::from_submission(submission);
        let document = serde_json::to_value(&message)?;

        self.store
            .insert_one(Collection::ContactMessages, document)
            .await?;

        tracing::info!(id = %message.id, "Stored contact message");
        Ok(message)
    }

    async fn find_as<T: DeserializeOwned>(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Vec<T>, AppError> {
        self.store
            .find(collection, filter)
            .await?
            .into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(AppError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            subject: "Speaking invite".to_string(),
            message: "Would you present at our meetup?".to_string(),
        }
    }

    #[tokio::test]
    async fn test_contact_message_round_trips_through_store() {
        let repo = Repository::new(Arc::new(MemoryStore::new()));

        let stored = repo.create_contact_message(submission()).await.unwrap();

        let docs = repo
            .store()
            .find(Collection::ContactMessages, &Filter::all())
            .await
            .unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["id"], stored.id.as_str());
        assert_eq!(docs[0]["subject"], "Speaking invite");
        assert!(docs[0]["timestamp"].is_string());

        let decoded: ContactMessage = serde_json::from_value(docs[0].clone()).unwrap();
        assert_eq!(decoded, stored);
    }

    #[tokio::test]
    async fn test_undecodable_document_is_an_error() {
        let store = Arc::new(MemoryStore::new());
        store
            .insert_one(Collection::Talks, serde_json::json!({ "id": "t1" }))
            .await
            .unwrap();

        let repo = Repository::new(store);
        let err = repo.list_talks().await.unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }
}
