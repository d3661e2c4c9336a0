use pretty_assertions::assert_eq;
use sapkey_form::{
    render_session, ClientConfig, Field, FormData, FormError, FormPhase, FormSession,
    HttpKeyClient,
};
use sapkey_server::{spawn, RunningServer};
use sapkey_store::SharedKeyStore;
use sapkey_test_utils::{empty_store, seeded_store, FailingKeyStore, SAMPLE_FIELDS};
use std::net::SocketAddr;
use std::sync::Arc;

fn start(store: SharedKeyStore) -> (RunningServer, HttpKeyClient) {
    let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let server = spawn(addr, store).unwrap();
    let config = ClientConfig::new().with_api_url(server.sap_key_url());
    let client = HttpKeyClient::new(&config).unwrap();
    (server, client)
}

fn sample_form() -> FormData {
    SAMPLE_FIELDS
        .iter()
        .fold(FormData::new(), |data, (code, value)| {
            data.with(code.parse::<Field>().unwrap(), *value)
        })
}

#[tokio::test]
async fn test_submission_shows_key_and_values() {
    let (server, client) = start(seeded_store(&["VB900001"]));

    let mut session = FormSession::with_data(sample_form());
    let result = session.submit(&client).await.unwrap().clone();

    assert_eq!(result.sap_key, "VB900001");
    assert_eq!(result.form_data, sample_form());

    let view = render_session(&session);
    assert!(view.contains("Generated VBELN: VB900001\n"));
    for (code, value) in SAMPLE_FIELDS {
        assert!(view.contains(&format!("({code}): {value}\n")), "{code} missing");
    }

    server.shutdown().await;
}

#[tokio::test]
async fn test_empty_store_shows_generic_error() {
    let (server, client) = start(empty_store());

    let mut session = FormSession::with_data(sample_form());
    let err = session.submit(&client).await.unwrap_err();

    assert!(matches!(err, FormError::Client(_)));
    assert_eq!(session.phase(), FormPhase::Error);
    assert_eq!(
        session.error_message(),
        Some("Error calling API: Failed to fetch SAP key")
    );
    assert_eq!(session.data(), &sample_form());

    server.shutdown().await;
}

#[tokio::test]
async fn test_store_failure_shows_same_generic_error() {
    let (server, client) = start(Arc::new(FailingKeyStore::new("disk on fire")));

    let mut session = FormSession::with_data(sample_form());
    session.submit(&client).await.unwrap_err();

    assert_eq!(
        session.error_message(),
        Some("Error calling API: Failed to fetch SAP key")
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_blank_field_sends_no_request() {
    let store = Arc::new(FailingKeyStore::new("should not be queried"));
    let (server, client) = start(store.clone());

    let mut session = FormSession::with_data(sample_form().with(Field::Vtweg, " "));
    let err = session.submit(&client).await.unwrap_err();

    assert_eq!(err, FormError::MissingFields(vec![Field::Vtweg]));
    assert_eq!(store.calls(), 0);

    server.shutdown().await;
}

#[tokio::test]
async fn test_dismiss_and_resubmit_returns_same_key() {
    let (server, client) = start(seeded_store(&["VB900001", "VB900002"]));

    let mut session = FormSession::with_data(sample_form());
    let first = session.submit(&client).await.unwrap().sap_key.clone();
    session.dismiss().unwrap();
    assert_eq!(session.data(), &sample_form());

    let second = session.submit(&client).await.unwrap().sap_key.clone();
    assert_eq!(first, "VB900002");
    assert_eq!(first, second);

    server.shutdown().await;
}

#[tokio::test]
async fn test_server_down_reports_transport_error() {
    let (server, client) = start(seeded_store(&["VB900001"]));
    server.shutdown().await;

    let mut session = FormSession::with_data(sample_form());
    session.submit(&client).await.unwrap_err();

    let message = session.error_message().unwrap();
    assert!(message.starts_with("Error calling API: "));
    assert_ne!(message, "Error calling API: Failed to fetch SAP key");
}
