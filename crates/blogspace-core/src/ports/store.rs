use async_trait::async_trait;

use crate::error::StoreError;

/// Durable key-value store holding JSON-serialized collections.
///
/// The browser's local storage is the model: string keys, string values,
/// no transactions and no schema.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
