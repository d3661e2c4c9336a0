//! JSON file key store
//!
//! The collection lives in a single file holding a JSON array of records:
//!
//! ```text
//! [
//!   { "key": "VB900001", "createdAt": "2024-05-01T09:30:00Z" }
//! ]
//! ```
//!
//! Every query re-reads the file, so records added out of band are served
//! without a restart. Writes land in a uniquely named sibling temporary file
//! which is then renamed over the original. Inserts from one `FileKeyStore`
//! are serialized; separate processes seeding the same file at once may lose
//! each other's records.

use crate::error::StoreError;
use crate::record::{select_latest, validate_records, KeyRecord};
use crate::store::KeyStore;
use async_trait::async_trait;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::sync::Mutex;

/// Key store backed by a JSON file
#[derive(Debug)]
pub struct FileKeyStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles
    write_lock: Mutex<()>,
}

impl FileKeyStore {
    /// Open a store at `path`. The file is not touched until first use.
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the backing file
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate every record.
    ///
    /// A missing file is an unavailable store unless `missing_is_empty`.
    async fn load(&self, missing_is_empty: bool) -> Result<Vec<KeyRecord>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if missing_is_empty && e.kind() == ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::unavailable(&self.path, e)),
        };

        let records: Vec<KeyRecord> = serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::Corrupt(format!("{}: {e}", self.path.display())))?;
        validate_records(&records)?;

        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "loaded key records"
        );
        Ok(records)
    }

    async fn persist(&self, records: &[KeyRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(records)
            .map_err(|e| StoreError::Backend(format!("serialize records: {e}")))?;
        let target = self.path.clone();

        tokio::task::spawn_blocking(move || write_replacing(&target, &json))
            .await
            .map_err(|e| StoreError::Backend(format!("persist task failed: {e}")))?
    }
}

/// Write `bytes` to a fresh temporary file beside `target`, then rename it over `target`
fn write_replacing(target: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::unavailable(dir, e))?;
    tmp.write_all(bytes)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| StoreError::unavailable(tmp.path(), e))?;
    tmp.persist(target)
        .map_err(|e| StoreError::unavailable(target, e.error))?;
    Ok(())
}

#[async_trait]
impl KeyStore for FileKeyStore {
    async fn latest(&self) -> Result<Option<KeyRecord>, StoreError> {
        let records = self.load(false).await?;
        Ok(select_latest(&records).cloned())
    }

    async fn insert(&self, record: KeyRecord) -> Result<(), StoreError> {
        record.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut records = self.load(true).await?;
        if records.iter().any(|r| r.key == record.key) {
            return Err(StoreError::DuplicateKey(record.key));
        }

        tracing::info!(key = %record.key, path = %self.path.display(), "inserting key record");
        records.push(record);
        self.persist(&records).await
    }

    async fn len(&self) -> Result<usize, StoreError> {
        Ok(self.load(false).await?.len())
    }
}
