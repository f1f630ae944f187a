//! Drives a real server over TCP with the typed client.
//!
//! This test requires the `sqlite` feature flag.

#![cfg(feature = "sqlite")]

use payments_client::{ClientError, PaymentsClient};
use payments_hex::{PaymentService, inbound::HttpServer};
use payments_repo::build_repo;
use payments_types::{Payment, PaymentId, Validator};
use tokio::net::TcpListener;

const PAYMENT: &str = include_str!("../../testdata/valid_payment.json");

/// Starts a server on an ephemeral port and returns a client pointed at it.
async fn spawn_server(db_url: &str) -> PaymentsClient {
    let repo = build_repo(db_url).await.unwrap();
    let router = HttpServer::new(PaymentService::new(repo, Validator::new())).router();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service())
            .await
            .unwrap();
    });

    PaymentsClient::new(format!("http://{addr}"))
}

fn payment() -> Payment {
    let mut payment = Payment::from_bytes(PAYMENT.as_bytes()).unwrap();
    payment.organisation_id = "org-1".to_string();
    payment.attributes.amount = "100.12".to_string();
    payment.attributes.currency = "USD".to_string();
    payment
}

#[tokio::test]
async fn test_payment_lifecycle() {
    let client = spawn_server("sqlite::memory:").await;
    assert!(client.health().await.unwrap());

    let id = client.create_payment(&payment()).await.unwrap();
    assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());

    let mut stored = client.get_payment(&id).await.unwrap();
    let mut expected = payment();
    expected.id = id.clone();
    assert_eq!(stored, expected);

    stored.attributes.amount = "150.00".to_string();
    client.update_payment(&stored).await.unwrap();
    assert_eq!(
        client.get_payment(&id).await.unwrap().attributes.amount,
        "150.00"
    );

    client.delete_payment(&id).await.unwrap();
    let second = client.delete_payment(&id).await;
    assert!(matches!(second, Err(ClientError::Api { status: 404, .. })));
}

#[tokio::test]
async fn test_create_with_id_is_rejected() {
    let client = spawn_server("sqlite::memory:").await;
    let mut payment = payment();
    payment.id = PaymentId::from("abc");

    let result = client.create_payment(&payment).await;

    assert!(matches!(result, Err(ClientError::Api { status: 400, .. })));
    assert!(client.list_payments().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_unknown_payment_is_not_found() {
    let client = spawn_server("sqlite::memory:").await;
    let mut payment = payment();
    payment.id = PaymentId::generate();

    let result = client.update_payment(&payment).await;

    assert!(matches!(result, Err(ClientError::Api { status: 404, .. })));
}

#[tokio::test]
async fn test_list_after_ten_creates() {
    let client = spawn_server("sqlite::memory:").await;
    for _ in 0..10 {
        client.create_payment(&payment()).await.unwrap();
    }

    assert_eq!(client.list_payments().await.unwrap().len(), 10);
}

#[tokio::test]
async fn test_payments_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("payments.db").display());

    let id = {
        let client = spawn_server(&db_url).await;
        client.create_payment(&payment()).await.unwrap()
    };

    let client = spawn_server(&db_url).await;
    assert_eq!(client.get_payment(&id).await.unwrap().id, id);
}
