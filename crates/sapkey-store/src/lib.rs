//! SAP Key Store
//!
//! The persistent collection read by the retrieval endpoint:
//! - `KeyRecord`: one unique key plus its creation timestamp
//! - `KeyStore`: the async seam the endpoint is handed at construction
//! - `MemoryKeyStore`: in-process backend for tests and demos
//! - `FileKeyStore`: JSON file backend, re-read on every query
//!
//! # Example
//!
//! ```rust,ignore
//! use sapkey_store::{KeyRecord, KeyStore, MemoryKeyStore};
//!
//! # async fn example() -> Result<(), sapkey_store::StoreError> {
//! let store = MemoryKeyStore::new();
//! store.insert(KeyRecord::new("VB900001")).await?;
//!
//! let latest = store.latest().await?;
//! assert_eq!(latest.map(|r| r.key), Some("VB900001".to_string()));
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod file;
pub mod memory;
pub mod record;
pub mod store;

// Re-exports for convenience
pub use error::StoreError;
pub use file::FileKeyStore;
pub use memory::MemoryKeyStore;
pub use record::{select_latest, validate_records, KeyRecord};
pub use store::{KeyStore, SharedKeyStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
