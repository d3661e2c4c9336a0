//! Operator seeding of the key store

use crate::error::ServerError;
use sapkey_store::{KeyRecord, KeyStore};

/// Insert `key` stamped with the current time and return the stored record
///
/// # Errors
/// - `ServerError::Rejected` for a blank or already stored key
/// - `ServerError::Store` if the store cannot be read or written
pub async fn seed_key(store: &dyn KeyStore, key: &str) -> Result<KeyRecord, ServerError> {
    let record = KeyRecord::new(key);
    store.insert(record.clone()).await?;
    tracing::info!(key = %record.key, "seeded key record");
    Ok(record)
}
