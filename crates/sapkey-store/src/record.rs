//! Key records and the collection rules shared by every backend

use crate::error::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One stored key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyRecord {
    /// Unique, non-empty key
    pub key: String,
    /// Creation time; records stored without one sort as the oldest
    #[serde(default = "unstamped")]
    pub created_at: DateTime<Utc>,
}

/// Timestamp given to records loaded without `createdAt`
fn unstamped() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

impl KeyRecord {
    /// Create a record stamped with the current time
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            created_at: Utc::now(),
        }
    }

    /// With explicit creation time
    #[inline]
    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Reject records whose key is blank
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.key.trim().is_empty() {
            return Err(StoreError::EmptyKey);
        }
        Ok(())
    }
}

/// Pick the record the endpoint serves.
///
/// Most recently created wins; equal timestamps fall back to the smallest key.
pub fn select_latest<'a, I>(records: I) -> Option<&'a KeyRecord>
where
    I: IntoIterator<Item = &'a KeyRecord>,
{
    records.into_iter().max_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| b.key.cmp(&a.key))
    })
}

/// Check a loaded collection for blank or repeated keys
pub fn validate_records(records: &[KeyRecord]) -> Result<(), StoreError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if record.validate().is_err() {
            return Err(StoreError::Corrupt("record with empty key".to_string()));
        }
        if !seen.insert(record.key.as_str()) {
            return Err(StoreError::Corrupt(format!(
                "duplicate key in collection: {}",
                record.key
            )));
        }
    }
    Ok(())
}
