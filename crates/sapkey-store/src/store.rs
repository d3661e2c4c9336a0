//! The store seam handed to the retrieval endpoint

use crate::error::StoreError;
use crate::record::KeyRecord;
use async_trait::async_trait;
use std::sync::Arc;

/// Shared handle to any store backend
pub type SharedKeyStore = Arc<dyn KeyStore>;

/// A collection of unique key records
#[async_trait]
pub trait KeyStore: Send + Sync {
    /// The most recently created record, if any
    async fn latest(&self) -> Result<Option<KeyRecord>, StoreError>;

    /// Add a record.
    ///
    /// Operator tooling only; the endpoint never writes.
    ///
    /// # Errors
    /// - `StoreError::EmptyKey` if the key is blank
    /// - `StoreError::DuplicateKey` if the key already exists
    async fn insert(&self, record: KeyRecord) -> Result<(), StoreError>;

    /// Number of stored records
    async fn len(&self) -> Result<usize, StoreError>;

    /// Check if the collection holds no records
    async fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len().await? == 0)
    }
}
