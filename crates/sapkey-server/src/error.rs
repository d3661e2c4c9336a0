//! Error types for the retrieval server

use sapkey_store::StoreError;
use std::net::SocketAddr;

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Listening socket could not be bound
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: warp::Error,
    },

    /// Store refused the record being seeded
    #[error("refusing key: {0}")]
    Rejected(#[source] StoreError),

    /// Key store failure outside request handling
    #[error("store error: {0}")]
    Store(#[source] StoreError),
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        if err.is_rejected_record() {
            Self::Rejected(err)
        } else {
            Self::Store(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    #[test]
    fn rejected_records_are_kept_apart() {
        let err = ServerError::from(StoreError::DuplicateKey("K1".to_string()));
        assert!(matches!(err, ServerError::Rejected(_)));
        assert_eq!(err.to_string(), "refusing key: duplicate key: K1");

        assert!(matches!(
            ServerError::from(StoreError::EmptyKey),
            ServerError::Rejected(_)
        ));
    }

    #[test]
    fn other_store_failures_are_store_errors() {
        let io = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = ServerError::from(StoreError::unavailable(Path::new("keys.json"), io));
        assert!(matches!(err, ServerError::Store(_)));
    }
}
