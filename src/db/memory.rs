//! Process-local document store, selected with `memory://`.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::document::{ensure_document, Collection, DocumentStore, Filter};
use crate::errors::AppError;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn count(&self, collection: Collection, filter: &Filter) -> Result<u64, AppError> {
        let collections = self.collections.read().await;
        let n = collections
            .get(&collection)
            .map(|docs| docs.iter().filter(|doc| filter.matches(doc)).count())
            .unwrap_or(0);
        Ok(n as u64)
    }

    async fn find(&self, collection: Collection, filter: &Filter) -> Result<Vec<Value>, AppError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| filter.matches(doc))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn insert_one(&self, collection: Collection, document: Value) -> Result<(), AppError> {
        ensure_document(collection, &document)?;
        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(document);
        Ok(())
    }

    async fn insert_many(
        &self,
        collection: Collection,
        documents: Vec<Value>,
    ) -> Result<(), AppError> {
        for document in &documents {
            ensure_document(collection, document)?;
        }
        if documents.is_empty() {
            return Ok(());
        }
        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .extend(documents);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::FilterValue;
    use serde_json::json;

    #[tokio::test]
    async fn test_insert_find_count() {
        let store = MemoryStore::new();
        assert_eq!(store.count(Collection::Talks, &Filter::all()).await.unwrap(), 0);
        assert!(store
            .find(Collection::Talks, &Filter::all())
            .await
            .unwrap()
            .is_empty());

        store
            .insert_many(
                Collection::Talks,
                vec![json!({ "id": "1", "video": true }), json!({ "id": "2" })],
            )
            .await
            .unwrap();
        store
            .insert_one(Collection::Talks, json!({ "id": "3", "video": true }))
            .await
            .unwrap();

        let with_video = Filter::all().eq("video", FilterValue::Bool(true));
        let found = store.find(Collection::Talks, &with_video).await.unwrap();
        assert_eq!(found, vec![json!({ "id": "1", "video": true }), json!({ "id": "3", "video": true })]);
        assert_eq!(store.count(Collection::Talks, &Filter::all()).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_empty_batch_is_noop() {
        let store = MemoryStore::new();
        store.insert_many(Collection::Projects, Vec::new()).await.unwrap();
        assert_eq!(
            store.count(Collection::Projects, &Filter::all()).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_batch_with_bad_document_stores_nothing() {
        let store = MemoryStore::new();
        let result = store
            .insert_many(Collection::Projects, vec![json!({ "id": "1" }), json!(7)])
            .await;
        assert!(result.is_err());
        assert_eq!(
            store.count(Collection::Projects, &Filter::all()).await.unwrap(),
            0
        );
    }
}
