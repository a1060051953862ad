//! Storage layout and typed access to JSON collections.

use serde::Serialize;
use serde::de::DeserializeOwned;

use blogspace_core::domain::PostId;
use blogspace_core::ports::KeyValueStore;
use blogspace_core::{DomainError, StoreError};

/// Fixed storage keys.
pub mod keys {
    use super::PostId;

    pub const USERS: &str = "blogspace_users";
    pub const POSTS: &str = "blogspace_posts";

    pub fn comments(post_id: &PostId) -> String {
        format!("comments_{post_id}")
    }

    pub fn likes(post_id: &PostId) -> String {
        format!("post_likes_{post_id}")
    }
}

/// Result of reading a collection.
#[derive(Debug)]
pub enum Loaded<T> {
    Found(T),
    Missing,
    /// The stored value did not parse; it is left in place for the caller
    /// to overwrite.
    Corrupt(String),
}

/// Read and decode the collection stored under `key`.
pub async fn load<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Loaded<T>, StoreError> {
    let Some(raw) = store.get(key).await? else {
        return Ok(Loaded::Missing);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Loaded::Found(value)),
        Err(e) => Ok(Loaded::Corrupt(e.to_string())),
    }
}

/// Read the collection, replacing a missing or corrupt value with
/// `default()` and writing that back.
pub async fn load_or_init<T, F>(
    store: &dyn KeyValueStore,
    key: &str,
    default: F,
) -> Result<T, DomainError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> T,
{
    match load(store, key).await? {
        Loaded::Found(value) => Ok(value),
        Loaded::Missing => {
            let value = default();
            save(store, key, &value).await?;
            Ok(value)
        }
        Loaded::Corrupt(reason) => {
            tracing::warn!(key = %key, error = %reason, "Stored collection is corrupt, reinitializing");
            let value = default();
            save(store, key, &value).await?;
            Ok(value)
        }
    }
}

/// Encode and write the full collection under `key`.
pub async fn save<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), DomainError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).await?;
    tracing::debug!(key = %key, bytes = raw.len(), "Collection persisted");
    Ok(())
}
