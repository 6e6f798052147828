use crate::models::document::{Collection, Document, UpdateOutcome, IDENTITY_FIELD};
use crate::services::store::{DocumentStore, StoreError, StoreResult};
use anyhow::Result;
use async_trait::async_trait;
use log::{debug, error};
use serde_json::{Number, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::{RwLock, RwLockWriteGuard};
use uuid::Uuid;

type Collections = HashMap<String, Vec<Document>>;

/// In-process document store. Documents keep insertion order inside their
/// collection; with a backing file every write is flushed to disk as JSON
/// before it becomes visible.
pub struct MemoryStore {
    file_path: Option<PathBuf>,
    collections: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            file_path: None,
            collections: RwLock::new(HashMap::new()),
        }
    }

    pub fn open(file_path: &str) -> Result<Self> {
        let collections = if Path::new(file_path).exists() {
            let content = fs::read_to_string(file_path)?;
            serde_json::from_str(&content)?
        } else {
            HashMap::new()
        };

        Ok(Self {
            file_path: Some(PathBuf::from(file_path)),
            collections: RwLock::new(collections),
        })
    }

    async fn persist(&self, collections: &Collections) -> StoreResult<()> {
        if let Some(path) = &self.file_path {
            let json = serde_json::to_string_pretty(collections)?;
            tokio::fs::write(path, json).await?;
            debug!("Flushed store to {}", path.display());
        }
        Ok(())
    }

    /// Replaces the live collections with `staged` once it is on disk. A
    /// failed flush leaves the live state untouched.
    async fn commit(
        &self,
        live: &mut RwLockWriteGuard<'_, Collections>,
        staged: Collections,
    ) -> StoreResult<()> {
        if let Err(e) = self.persist(&staged).await {
            error!("Discarding write, store flush failed: {}", e);
            return Err(e);
        }
        **live = staged;
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn matches(doc: &Document, field: &str, value: &Value) -> bool {
    doc.get(field) == Some(value)
}

fn find_mut<'a>(
    collections: &'a mut Collections,
    collection: Collection,
    field: &str,
    value: &Value,
) -> Option<&'a mut Document> {
    collections
        .get_mut(collection.name())
        .and_then(|docs| docs.iter_mut().find(|d| matches(d, field, value)))
}

fn incremented(current: Option<&Value>, field: &str, delta: i64) -> StoreResult<Value> {
    let rejected = || StoreError::Rejected(format!("Cannot increment non-numeric field '{}'", field));

    match current {
        None | Some(Value::Null) => Ok(Value::from(delta)),
        Some(Value::Number(n)) => {
            if let Some(sum) = n.as_i64().and_then(|i| i.checked_add(delta)) {
                return Ok(Value::from(sum));
            }
            n.as_f64()
                .and_then(|f| Number::from_f64(f + delta as f64))
                .map(Value::Number)
                .ok_or_else(rejected)
        }
        Some(_) => Err(rejected()),
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_all(&self, collection: Collection) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection.name()).cloned().unwrap_or_default())
    }

    async fn find_many(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection.name())
            .map(|docs| docs.iter().filter(|d| matches(d, field, value)).cloned().collect())
            .unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection.name())
            .and_then(|docs| docs.iter().find(|d| matches(d, field, value)))
            .cloned())
    }

    async fn insert_one(&self, collection: Collection, mut document: Document) -> StoreResult<String> {
        let mut collections = self.collections.write().await;
        let mut staged = collections.clone();
        let docs = staged.entry(collection.name().to_string()).or_default();

        let id = match document.get(IDENTITY_FIELD) {
            None => Uuid::new_v4().to_string(),
            Some(Value::String(id)) => {
                let taken = Value::String(id.clone());
                if docs.iter().any(|d| matches(d, IDENTITY_FIELD, &taken)) {
                    return Err(StoreError::Rejected(format!(
                        "Duplicate key: {} already contains {}={}",
                        collection, IDENTITY_FIELD, id
                    )));
                }
                id.clone()
            }
            Some(_) => {
                return Err(StoreError::Rejected(format!("{} must be a string", IDENTITY_FIELD)));
            }
        };

        document.insert(IDENTITY_FIELD.to_string(), Value::String(id.clone()));
        docs.push(document);
        self.commit(&mut collections, staged).await?;

        debug!("Inserted {} into {}", id, collection);
        Ok(id)
    }

    async fn update_one(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
        patch: Document,
    ) -> StoreResult<UpdateOutcome> {
        if patch.is_empty() {
            return Err(StoreError::Rejected("Update patch must not be empty".to_string()));
        }
        if patch.contains_key(IDENTITY_FIELD) {
            return Err(StoreError::Rejected(format!("Field '{}' is immutable", IDENTITY_FIELD)));
        }

        let mut collections = self.collections.write().await;
        let mut staged = collections.clone();
        let Some(doc) = find_mut(&mut staged, collection, field, value) else {
            return Ok(UpdateOutcome::default());
        };

        let changed = patch.iter().any(|(k, v)| doc.get(k) != Some(v));
        if !changed {
            return Ok(UpdateOutcome { matched: 1, modified: 0 });
        }

        doc.extend(patch);
        self.commit(&mut collections, staged).await?;
        Ok(UpdateOutcome { matched: 1, modified: 1 })
    }

    async fn delete_one(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> StoreResult<u64> {
        let mut collections = self.collections.write().await;
        let mut staged = collections.clone();
        let Some(docs) = staged.get_mut(collection.name()) else {
            return Ok(0);
        };
        let Some(pos) = docs.iter().position(|d| matches(d, field, value)) else {
            return Ok(0);
        };

        docs.remove(pos);
        self.commit(&mut collections, staged).await?;
        Ok(1)
    }

    async fn increment_field(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
        target_field: &str,
        delta: i64,
    ) -> StoreResult<UpdateOutcome> {
        let mut collections = self.collections.write().await;
        let mut staged = collections.clone();
        let Some(doc) = find_mut(&mut staged, collection, field, value) else {
            return Ok(UpdateOutcome::default());
        };

        let next = incremented(doc.get(target_field), target_field, delta)?;
        doc.insert(target_field.to_string(), next);
        self.commit(&mut collections, staged).await?;

        Ok(UpdateOutcome {
            matched: 1,
            modified: u64::from(delta != 0),
        })
    }
}
