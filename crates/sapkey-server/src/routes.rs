//! Warp filters for the retrieval endpoint

use crate::api::{MessageResponse, SapKeyResponse};
use sapkey_store::SharedKeyStore;
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::reply::{self, Response};
use warp::{Filter, Rejection, Reply};

/// All routes with CORS and request tracing applied
pub fn routes(
    store: SharedKeyStore,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    sap_key_route(store)
        .with(cors())
        .with(warp::trace::request())
}

/// `GET /api/sapkey`
pub fn sap_key_route(
    store: SharedKeyStore,
) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone {
    warp::path!("api" / "sapkey")
        .and(warp::get())
        .and(with_store(store))
        .and_then(get_sap_key)
}

/// Serve the most recently created key.
///
/// Store failures are logged and answered with a generic 500; their detail
/// never reaches the client.
pub async fn get_sap_key(store: SharedKeyStore) -> Result<Response, Infallible> {
    let response = match store.latest().await {
        Ok(Some(record)) => {
            tracing::debug!(key = %record.key, "serving SAP key");
            json_with_status(
                &SapKeyResponse {
                    sap_key: record.key,
                },
                StatusCode::OK,
            )
        }
        Ok(None) => {
            tracing::warn!("SAP key requested but store is empty");
            json_with_status(&MessageResponse::not_found(), StatusCode::NOT_FOUND)
        }
        Err(e) => {
            tracing::error!(error = %e, "Error retrieving SAP key");
            json_with_status(
                &MessageResponse::server_error(),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    };
    Ok(response)
}

fn with_store(
    store: SharedKeyStore,
) -> impl Filter<Extract = (SharedKeyStore,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&store))
}

fn json_with_status<T: serde::Serialize>(body: &T, status: StatusCode) -> Response {
    reply::with_status(reply::json(body), status).into_response()
}

fn cors() -> warp::cors::Builder {
    warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "OPTIONS"])
        .allow_headers(vec!["content-type"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{NOT_FOUND_MESSAGE, SERVER_ERROR_MESSAGE};
    use sapkey_test_utils::{empty_store, seeded_store, FailingKeyStore, LogCapture};

    async fn get(store: SharedKeyStore) -> warp::http::Response<warp::hyper::body::Bytes> {
        warp::test::request()
            .method("GET")
            .path("/api/sapkey")
            .reply(&routes(store))
            .await
    }

    #[tokio::test]
    async fn sap_key_found() {
        let res = get(seeded_store(&["K1"])).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.body().as_ref(), br#"{"sapKey":"K1"}"#);
    }

    #[tokio::test]
    async fn sap_key_not_found() {
        let res = get(empty_store()).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: MessageResponse = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body.message, NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn sap_key_store_failure_is_logged() {
        let logs = LogCapture::new();
        let _guard = logs.install();

        let res = get(Arc::new(FailingKeyStore::new("connection refused"))).await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: MessageResponse = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body.message, SERVER_ERROR_MESSAGE);
        assert!(!String::from_utf8_lossy(res.body()).contains("connection refused"));

        let output = logs.contents();
        assert!(output.contains("Error retrieving SAP key"));
        assert!(output.contains("connection refused"));
    }

    #[tokio::test]
    async fn sap_key_rejects_other_methods() {
        let res = warp::test::request()
            .method("POST")
            .path("/api/sapkey")
            .reply(&routes(seeded_store(&["K1"])))
            .await;

        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let res = warp::test::request()
            .path("/api/other")
            .reply(&routes(seeded_store(&["K1"])))
            .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(res.body().is_empty());
    }

    #[tokio::test]
    async fn cors_header_present_for_browser_origin() {
        let res = warp::test::request()
            .path("/api/sapkey")
            .header("origin", "http://localhost:5173")
            .reply(&routes(seeded_store(&["K1"])))
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key("access-control-allow-origin"));
    }
}
