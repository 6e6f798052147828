use crate::models::document::{Collection, Document, UpdateOutcome};
use async_trait::async_trait;
use log::warn;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The store refused the document or patch as submitted.
    #[error("{0}")]
    Rejected(String),

    #[error("store persistence failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Collection-oriented access to a document database. Filters are single
/// field-equality matches.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find_all(&self, collection: Collection) -> StoreResult<Vec<Document>>;

    async fn find_many(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> StoreResult<Vec<Document>>;

    async fn find_one(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> StoreResult<Option<Document>>;

    /// Stores `document` and returns the identity assigned to it.
    async fn insert_one(&self, collection: Collection, document: Document) -> StoreResult<String>;

    /// Merges `patch` into the first matching document.
    async fn update_one(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
        patch: Document,
    ) -> StoreResult<UpdateOutcome>;

    /// Returns the number of documents removed (0 or 1).
    async fn delete_one(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> StoreResult<u64>;

    async fn increment_field(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
        target_field: &str,
        delta: i64,
    ) -> StoreResult<UpdateOutcome>;

    /// Inserts `record`, then bumps `counter_field` by one on the `parent`
    /// document whose `key_field` equals the record's own `key_field`.
    ///
    /// The two steps are not atomic: if the increment fails the record stays.
    /// Stores with multi-document transactions should override this.
    async fn record_and_increment(
        &self,
        collection: Collection,
        record: Document,
        parent: Collection,
        key_field: &str,
        counter_field: &str,
    ) -> StoreResult<String> {
        let key = record.get(key_field).cloned();
        let id = self.insert_one(collection, record).await?;

        match key {
            Some(key) => {
                let outcome = self
                    .increment_field(parent, key_field, &key, counter_field, 1)
                    .await?;
                if outcome.matched == 0 {
                    warn!("No {} matched {}={} while counting {}", parent, key_field, key, collection);
                }
            }
            None => warn!("{} record {} has no {}, counter left unchanged", collection, id, key_field),
        }

        Ok(id)
    }
}
