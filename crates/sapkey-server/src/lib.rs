//! SAP Key Retrieval Endpoint
//!
//! A single read-only route over an injected [`KeyStore`]:
//!
//! ```text
//! GET /api/sapkey
//!   200 {"sapKey": "<key>"}
//!   404 {"message": "SAP key not found"}
//!   500 {"message": "Server error"}
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use sapkey_server::{serve, ServerConfig};
//! use sapkey_store::FileKeyStore;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), sapkey_server::ServerError> {
//! let config = ServerConfig::new().with_port(5000);
//! let store = Arc::new(FileKeyStore::new(config.store_path.clone()));
//! serve(&config, store, async { let _ = tokio::signal::ctrl_c().await; }).await
//! # }
//! ```
//!
//! [`KeyStore`]: sapkey_store::KeyStore

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod routes;
pub mod seed;
pub mod server;

// Re-exports for convenience
pub use api::{MessageResponse, SapKeyResponse, NOT_FOUND_MESSAGE, SERVER_ERROR_MESSAGE};
pub use config::ServerConfig;
pub use error::ServerError;
pub use routes::{get_sap_key, routes, sap_key_route};
pub use seed::seed_key;
pub use server::{serve, spawn, RunningServer};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
