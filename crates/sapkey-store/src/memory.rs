//! In-memory key store

use crate::error::StoreError;
use crate::record::{select_latest, KeyRecord};
use crate::store::KeyStore;
use async_trait::async_trait;
use parking_lot::RwLock;

/// Key store held in process memory
#[derive(Debug, Default)]
pub struct MemoryKeyStore {
    records: RwLock<Vec<KeyRecord>>,
}

impl MemoryKeyStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given records
    ///
    /// # Errors
    /// Same as [`KeyStore::insert`] for the first offending record.
    pub fn with_records<I>(records: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = KeyRecord>,
    {
        let store = Self::new();
        for record in records {
            store.insert_sync(record)?;
        }
        Ok(store)
    }

    /// Snapshot of all records in insertion order
    #[must_use]
    pub fn records(&self) -> Vec<KeyRecord> {
        self.records.read().clone()
    }

    fn insert_sync(&self, record: KeyRecord) -> Result<(), StoreError> {
        record.validate()?;
        let mut records = self.records.write();
        if records.iter().any(|r| r.key == record.key) {
            return Err(StoreError::DuplicateKey(record.key));
        }
        records.push(record);
        Ok(())
    }
}

#[async_trait]
impl KeyStore for MemoryKeyStore {
    async fn latest(&self) -> Result<Option<KeyRecord>, StoreError> {
        let records = self.records.read();
        Ok(select_latest(records.iter()).cloned())
    }

    async fn insert(&self, record: KeyRecord) -> Result<(), StoreError> {
        self.insert_sync(record)
    }

    async fn len(&self) -> Result<usize, StoreError> {
        Ok(self.records.read().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_empty() {
        let store = MemoryKeyStore::new();

        assert!(store.latest().await.unwrap().is_none());
        assert!(store.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn memory_store_insert_and_latest() {
        let store = MemoryKeyStore::new();
        store.insert(KeyRecord::new("K1")).await.unwrap();

        let latest = store.latest().await.unwrap().unwrap();
        assert_eq!(latest.key, "K1");
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn memory_store_rejects_duplicate() {
        let store = MemoryKeyStore::with_records([KeyRecord::new("K1")]).unwrap();

        let err = store.insert(KeyRecord::new("K1")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(ref k) if k == "K1"));
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn memory_store_rejects_empty_key() {
        let store = MemoryKeyStore::new();

        let err = store.insert(KeyRecord::new("")).await.unwrap_err();
        assert!(matches!(err, StoreError::EmptyKey));
    }

    #[tokio::test]
    async fn memory_store_reads_do_not_mutate() {
        let store = MemoryKeyStore::with_records([KeyRecord::new("K1")]).unwrap();
        let before = store.records();

        for _ in 0..5 {
            store.latest().await.unwrap();
        }

        assert_eq!(store.records(), before);
    }
}
