//! SQLite-backed document store.
//!
//! Every collection lives in the single `documents` table; the autoincrement
//! `seq` column gives insertion order and is never exposed.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

use super::document::{ensure_document, Collection, DocumentStore, Filter, FilterValue};
use crate::errors::AppError;

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append `WHERE collection = ? AND <conditions>` to a query.
    fn push_where<'a>(
        builder: &mut QueryBuilder<'a, Sqlite>,
        collection: Collection,
        filter: &'a Filter,
    ) {
        builder.push(" WHERE collection = ");
        builder.push_bind(collection.as_str());

        for (field, expected) in filter.conditions() {
            let path = format!("$.{}", field);
            builder.push(" AND json_type(body, ");
            builder.push_bind(path.clone());
            builder.push(") = ");
            match expected {
                FilterValue::Bool(b) => {
                    builder.push_bind(if *b { "true" } else { "false" });
                }
                FilterValue::Int(i) => {
                    builder.push_bind("integer");
                    builder.push(" AND json_extract(body, ");
                    builder.push_bind(path);
                    builder.push(") = ");
                    builder.push_bind(*i);
                }
                FilterValue::Str(s) => {
                    builder.push_bind("text");
                    builder.push(" AND json_extract(body, ");
                    builder.push_bind(path);
                    builder.push(") = ");
                    builder.push_bind(s.as_str());
                }
            }
        }
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn count(&self, collection: Collection, filter: &Filter) -> Result<u64, AppError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) AS n FROM documents");
        Self::push_where(&mut builder, collection, filter);

        let row = builder.build().fetch_one(&self.pool).await?;
        let n: i64 = row.get("n");
        Ok(n as u64)
    }

    async fn find(&self, collection: Collection, filter: &Filter) -> Result<Vec<Value>, AppError> {
        let mut builder = QueryBuilder::new("SELECT body FROM documents");
        Self::push_where(&mut builder, collection, filter);
        builder.push(" ORDER BY seq");

        let rows = builder.build().fetch_all(&self.pool).await?;

        rows.iter()
            .map(|row| {
                let body: String = row.get("body");
                serde_json::from_str(&body).map_err(AppError::from)
            })
            .collect()
    }

    async fn insert_one(&self, collection: Collection, document: Value) -> Result<(), AppError> {
        ensure_document(collection, &document)?;

        sqlx::query("INSERT INTO documents (collection, body) VALUES (?, ?)")
            .bind(collection.as_str())
            .bind(document.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn insert_many(
        &self,
        collection: Collection,
        documents: Vec<Value>,
    ) -> Result<(), AppError> {
        if documents.is_empty() {
            return Ok(());
        }
        for document in &documents {
            ensure_document(collection, document)?;
        }

        // All or nothing, so a failed seed leaves the collection empty and retriable
        let mut tx = self.pool.begin().await?;
        for document in &documents {
            sqlx::query("INSERT INTO documents (collection, body) VALUES (?, ?)")
                .bind(collection.as_str())
                .bind(document.to_string())
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use serde_json::json;
    use tempfile::TempDir;

    async fn open_store(dir: &TempDir) -> SqliteStore {
        let url = format!("sqlite://{}", dir.path().join("docs.sqlite").display());
        SqliteStore::new(init_database(&url).await.unwrap())
    }

    #[tokio::test]
    async fn test_find_preserves_insertion_order() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;

        store
            .insert_many(
                Collection::Talks,
                vec![json!({ "id": "b" }), json!({ "id": "a" })],
            )
            .await
            .unwrap();
        store
            .insert_one(Collection::Talks, json!({ "id": "c" }))
            .await
            .unwrap();

        let ids: Vec<Value> = store
            .find(Collection::Talks, &Filter::all())
            .await
            .unwrap()
            .into_iter()
            .map(|doc| doc["id"].clone())
            .collect();
        assert_eq!(ids, vec![json!("b"), json!("a"), json!("c")]);
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;

        store
            .insert_one(Collection::Projects, json!({ "id": "p" }))
            .await
            .unwrap();

        assert_eq!(
            store.count(Collection::Projects, &Filter::all()).await.unwrap(),
            1
        );
        assert_eq!(
            store.count(Collection::Certificates, &Filter::all()).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_filters_compile_to_typed_matches() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;

        store
            .insert_many(
                Collection::Projects,
                vec![
                    json!({ "id": "1", "featured": true, "category": "NLP", "rank": 1 }),
                    json!({ "id": "2", "featured": false, "category": "NLP", "rank": 2 }),
                    json!({ "id": "3", "featured": 1, "category": "CV", "rank": "1" }),
                    json!({ "id": "4" }),
                ],
            )
            .await
            .unwrap();

        let featured = Filter::all().eq("featured", FilterValue::Bool(true));
        let found = store.find(Collection::Projects, &featured).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["id"], "1");

        let not_featured = Filter::all().eq("featured", FilterValue::Bool(false));
        assert_eq!(
            store.count(Collection::Projects, &not_featured).await.unwrap(),
            1
        );

        let nlp_rank_two = Filter::all()
            .eq("category", FilterValue::Str("NLP".to_string()))
            .eq("rank", FilterValue::Int(2));
        let found = store.find(Collection::Projects, &nlp_rank_two).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["id"], "2");

        let rank_one = Filter::all().eq("rank", FilterValue::Int(1));
        assert_eq!(store.count(Collection::Projects, &rank_one).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_documents_survive_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = open_store(&dir).await;
            store
                .insert_one(Collection::ContactMessages, json!({ "id": "m1" }))
                .await
                .unwrap();
        }

        let store = open_store(&dir).await;
        let found = store
            .find(Collection::ContactMessages, &Filter::all())
            .await
            .unwrap();
        assert_eq!(found, vec![json!({ "id": "m1" })]);
    }

    #[tokio::test]
    async fn test_non_object_documents_rejected() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;

        let result = store
            .insert_many(Collection::Talks, vec![json!({ "id": "ok" }), json!("nope")])
            .await;
        assert!(result.is_err());
        assert_eq!(store.count(Collection::Talks, &Filter::all()).await.unwrap(), 0);
    }
}
