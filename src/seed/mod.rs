//! Startup seeding of the read-only collections.
//!
//! Each collection is filled only while it is empty. The count and the insert
//! are separate calls, so two instances booting against the same empty store
//! can both insert; that case is not detected.

pub mod data;

use serde::Serialize;
use serde_json::Value;

use crate::db::{Collection, DocumentStore, Filter};
use crate::errors::AppError;

/// Outcome for one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOutcome {
    pub collection: Collection,
    /// Number of documents inserted; zero when the collection already had data.
    pub inserted: usize,
}

/// Outcome of a seeding pass, in seeding order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub outcomes: Vec<SeedOutcome>,
}

impl SeedReport {
    pub fn inserted(&self, collection: Collection) -> usize {
        self.outcomes
            .iter()
            .find(|o| o.collection == collection)
            .map(|o| o.inserted)
            .unwrap_or(0)
    }

    pub fn total_inserted(&self) -> usize {
        self.outcomes.iter().map(|o| o.inserted).sum()
    }
}

/// Seed projects, certificates and talks if they are empty.
pub async fn run(store: &dyn DocumentStore) -> Result<SeedReport, AppError> {
    let mut report = SeedReport::default();

    report
        .outcomes
        .push(seed_collection(store, Collection::Projects, data::projects()).await?);
    report
        .outcomes
        .push(seed_collection(store, Collection::Certificates, data::certificates()).await?);
    report
        .outcomes
        .push(seed_collection(store, Collection::Talks, data::talks()).await?);

    Ok(report)
}

async fn seed_collection<T: Serialize>(
    store: &dyn DocumentStore,
    collection: Collection,
    records: Vec<T>,
) -> Result<SeedOutcome, AppError> {
    let existing = store.count(collection, &Filter::all()).await?;
    if existing > 0 {
        tracing::info!(%collection, existing, "Collection already populated, skipping seed");
        return Ok(SeedOutcome {
            collection,
            inserted: 0,
        });
    }

    let documents = records
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<Value>, _>>()?;
    let inserted = documents.len();

    store.insert_many(collection, documents).await?;
    tracing::info!(%collection, inserted, "Seeded collection");

    Ok(SeedOutcome {
        collection,
        inserted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use serde_json::json;
    use std::collections::HashSet;

    async fn count(store: &MemoryStore, collection: Collection) -> u64 {
        store.count(collection, &Filter::all()).await.unwrap()
    }

    #[tokio::test]
    async fn test_seeds_empty_store() {
        let store = MemoryStore::new();
        let report = run(&store).await.unwrap();

        assert_eq!(report.inserted(Collection::Projects), 4);
        assert_eq!(report.inserted(Collection::Certificates), 4);
        assert_eq!(report.inserted(Collection::Talks), 3);
        assert_eq!(report.total_inserted(), 11);

        assert_eq!(count(&store, Collection::Projects).await, 4);
        assert_eq!(count(&store, Collection::Certificates).await, 4);
        assert_eq!(count(&store, Collection::Talks).await, 3);
        assert_eq!(count(&store, Collection::ContactMessages).await, 0);
    }

    #[tokio::test]
    async fn test_second_run_is_noop() {
        let store = MemoryStore::new();
        run(&store).await.unwrap();

        let report = run(&store).await.unwrap();
        assert_eq!(report.total_inserted(), 0);
        assert_eq!(count(&store, Collection::Projects).await, 4);
        assert_eq!(count(&store, Collection::Certificates).await, 4);
        assert_eq!(count(&store, Collection::Talks).await, 3);
    }

    #[tokio::test]
    async fn test_populated_collection_is_left_alone() {
        let store = MemoryStore::new();
        store
            .insert_one(Collection::Talks, json!({ "id": "custom" }))
            .await
            .unwrap();

        let report = run(&store).await.unwrap();
        assert_eq!(report.inserted(Collection::Talks), 0);
        assert_eq!(report.inserted(Collection::Projects), 4);
        assert_eq!(count(&store, Collection::Talks).await, 1);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let ids: HashSet<String> = data::projects()
            .into_iter()
            .map(|p| p.id)
            .chain(data::certificates().into_iter().map(|c| c.id))
            .chain(data::talks().into_iter().map(|t| t.id))
            .collect();
        assert_eq!(ids.len(), 11);
    }

    #[test]
    fn test_two_projects_are_featured() {
        let featured = data::projects().iter().filter(|p| p.featured).count();
        assert_eq!(featured, 2);
    }
}
