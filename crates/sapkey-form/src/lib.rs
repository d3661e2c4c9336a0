//! SAP Key Form Client
//!
//! Collects the six credit memo fields, refuses to submit while any is blank,
//! fetches the key from `GET /api/sapkey`, and shows it next to the submitted
//! values.
//!
//! # Example
//!
//! ```rust,ignore
//! use sapkey_form::{ClientConfig, Field, FormSession, HttpKeyClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpKeyClient::new(&ClientConfig::new())?;
//!
//! let mut session = FormSession::new();
//! session.set_field(Field::Auart, "OR");
//! // ... remaining fields
//!
//! let result = session.submit(&client).await?;
//! println!("Generated VBELN: {}", result.sap_key);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod client;
pub mod error;
pub mod fields;
pub mod render;
pub mod session;

// Re-exports for convenience
pub use client::{ClientConfig, HttpKeyClient, KeyClient, DEFAULT_API_URL};
pub use error::{ClientError, FormError};
pub use fields::{Field, FormData};
pub use render::{render_confirmation, render_form, render_session};
pub use session::{FormPhase, FormSession, SubmissionResult};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
