//! Client-against-store submission tests
//!
//! Runs the real sheetstore endpoint on an ephemeral port and drives it
//! with the wizard's SubmitClient, covering both acceptance and the
//! remote-rejection path the client now surfaces.

use std::net::SocketAddr;

use tempfile::TempDir;

use sheetstore::SheetStore;
use sheetstore::server::{AppState, router};
use surveywizard::answers::{AnswerSet, ScalarField, SetField};
use surveywizard::badge::Badge;
use surveywizard::config::Config;
use surveywizard::submit::{SubmitClient, SubmitError};

async fn spawn_store(temp: &TempDir, secret: &str) -> SocketAddr {
    let store = SheetStore::open(temp.path()).unwrap();
    let mut config = sheetstore::config::Config::default();
    config.secret = secret.to_string();
    let state = AppState::new(store, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });
    addr
}

fn client(addr: SocketAddr, secret: &str) -> SubmitClient {
    let mut config = Config::default();
    config.endpoint = format!("http://{addr}/submit");
    config.secret = secret.to_string();
    SubmitClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_submit_lands_as_one_row() {
    let temp = TempDir::new().unwrap();
    let addr = spawn_store(&temp, "s3cret").await;

    let mut answers = AnswerSet::default();
    answers.set(ScalarField::Age, "19");
    answers.toggle(SetField::Skills, "music");
    let badge = Badge::compute(&answers);
    assert_eq!(badge, Badge::Worshipper);

    client(addr, "s3cret").submit(&answers, badge).await.unwrap();

    let store = SheetStore::open(temp.path()).unwrap();
    let rows = store.rows("Responses").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][1], "19"); // age column
    assert_eq!(rows[0][17], "Worshipper"); // badge column
}

#[tokio::test]
async fn test_remote_rejection_is_surfaced() {
    let temp = TempDir::new().unwrap();
    let addr = spawn_store(&temp, "rightsecret").await;

    let err = client(addr, "wrongsecret")
        .submit(&AnswerSet::default(), Badge::Worshipper)
        .await
        .unwrap_err();
    match err {
        SubmitError::Rejected(message) => assert_eq!(message, "Invalid token"),
        other => panic!("expected rejection, got {other:?}"),
    }

    // Nothing appended on the store side
    let store = SheetStore::open(temp.path()).unwrap();
    assert!(store.rows("Responses").is_err());
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_network_error() {
    // Nothing listens on this port
    let client = client("127.0.0.1:1".parse().unwrap(), "s");
    let err = client
        .submit(&AnswerSet::default(), Badge::Worshipper)
        .await
        .unwrap_err();
    assert!(matches!(err, SubmitError::Network(_)));
}
