use crate::models::document::{Collection, Document, UpdateOutcome, IDENTITY_FIELD};
use crate::services::store::DocumentStore;
use crate::utils::errors::ApiError;
use serde_json::Value;

pub struct Resource {
    pub collection: Collection,
    /// Domain key matched against the path segment.
    pub key: &'static str,
    /// Human-readable name used in messages.
    pub label: &'static str,
}

pub const USERS: Resource = Resource {
    collection: Collection::Users,
    key: "userId",
    label: "User",
};

pub const REPOSITORIES: Resource = Resource {
    collection: Collection::Repositories,
    key: "repoId",
    label: "Repository",
};

pub const ISSUES: Resource = Resource {
    collection: Collection::Issues,
    key: "issueId",
    label: "Issue",
};

pub const PULL_REQUESTS: Resource = Resource {
    collection: Collection::PullRequests,
    key: "prId",
    label: "Pull request",
};

pub const COMMITS: Resource = Resource {
    collection: Collection::Commits,
    key: "commitId",
    label: "Commit",
};

/// Foreign key children use to point at their repository.
pub const REPO_REF: &str = "repoId";

fn path_key(raw: String) -> Value {
    Value::String(raw)
}

pub async fn list(store: &dyn DocumentStore, collection: Collection) -> Result<Vec<Document>, ApiError> {
    Ok(store.find_all(collection).await?)
}

pub async fn list_for_repository(
    store: &dyn DocumentStore,
    collection: Collection,
    repo_id: String,
) -> Result<Vec<Document>, ApiError> {
    Ok(store.find_many(collection, REPO_REF, &path_key(repo_id)).await?)
}

pub async fn get(store: &dyn DocumentStore, resource: &Resource, key: String) -> Result<Document, ApiError> {
    store
        .find_one(resource.collection, resource.key, &path_key(key))
        .await?
        .ok_or(ApiError::NotFound(resource.label))
}

/// Inserts `body` as-is and returns it the way it was stored.
pub async fn create(
    store: &dyn DocumentStore,
    collection: Collection,
    body: Document,
) -> Result<Document, ApiError> {
    let mut stored = body.clone();
    let id = store.insert_one(collection, body).await?;
    stored.insert(IDENTITY_FIELD.to_string(), Value::String(id));
    Ok(stored)
}

pub async fn update(
    store: &dyn DocumentStore,
    resource: &Resource,
    key: String,
    patch: Document,
) -> Result<UpdateOutcome, ApiError> {
    let outcome = store
        .update_one(resource.collection, resource.key, &path_key(key), patch)
        .await?;
    if outcome.matched == 0 {
        return Err(ApiError::NotFound(resource.label));
    }
    Ok(outcome)
}

pub async fn delete(store: &dyn DocumentStore, resource: &Resource, key: String) -> Result<(), ApiError> {
    let deleted = store
        .delete_one(resource.collection, resource.key, &path_key(key))
        .await?;
    if deleted == 0 {
        return Err(ApiError::NotFound(resource.label));
    }
    Ok(())
}

/// Creation bodies must name their own domain key; the storage identity is
/// never reused for it.
pub fn require_key(body: &Document, resource: &Resource) -> Result<(), ApiError> {
    match body.get(resource.key) {
        Some(Value::String(s)) if !s.is_empty() => Ok(()),
        _ => Err(ApiError::BadRequest(format!("{} is required", resource.key))),
    }
}
