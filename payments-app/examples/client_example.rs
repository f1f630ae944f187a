//! Client example walking a payment through its whole lifecycle against a running server.
//!
//! Run with: cargo run -p payments-app --example client_example

use std::net::SocketAddr;

use payments_client::{ClientError, PaymentsClient};
use payments_hex::{PaymentService, inbound::HttpServer};
use payments_repo::build_repo;
use payments_types::{Payment, PaymentId, Validator};
use tempfile::tempdir;
use tokio::net::TcpListener;

const PAYMENT: &str = include_str!("../../testdata/valid_payment.json");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Use a temp file-backed SQLite DB
    let tmp = tempdir()?;
    let db_path = tmp.path().join("payments.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    // Build repository (handles connection and table creation)
    let repo = build_repo(&db_url).await?;
    let service = PaymentService::new(repo, Validator::new());
    let router = HttpServer::new(service).router();

    // Bind to an ephemeral port and serve in the background
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    println!("🚀 Server on {addr}, database {db_url}");

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router.into_make_service()).await {
            eprintln!("server stopped: {e}");
        }
    });

    let client = PaymentsClient::new(format!("http://{addr}"));

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: payment lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    println!("✅ Server health: {}", client.health().await?);

    let mut payment = Payment::from_bytes(PAYMENT.as_bytes())?;
    payment.organisation_id = "org-1".to_string();
    payment.attributes.amount = "100.12".to_string();
    payment.attributes.currency = "USD".to_string();

    let id = client.create_payment(&payment).await?;
    println!("✅ Created payment {id}");

    let mut stored = client.get_payment(&id).await?;
    println!(
        "   {} {} for {}",
        stored.attributes.amount, stored.attributes.currency, stored.organisation_id
    );

    stored.attributes.amount = "150.00".to_string();
    client.update_payment(&stored).await?;
    let stored = client.get_payment(&id).await?;
    println!("✅ Updated amount to {}", stored.attributes.amount);

    // A caller-supplied id is refused
    let mut with_id = payment.clone();
    with_id.id = PaymentId::from("abc");
    match client.create_payment(&with_id).await {
        Err(ClientError::Api { status, message }) => {
            println!("✅ Refused caller id: {status} {message}")
        }
        other => anyhow::bail!("expected a 400, got {other:?}"),
    }

    // Broken fields are reported one by one
    let mut broken = payment.clone();
    broken.attributes.currency = "US".to_string();
    broken.attributes.fx.contract_reference = "FX-1".to_string();
    if let Err(e) = client.create_payment(&broken).await {
        println!("✅ Validation failure: {e}");
    }

    for _ in 0..9 {
        client.create_payment(&payment).await?;
    }
    println!("✅ Listing: {} payments", client.list_payments().await?.len());

    client.delete_payment(&id).await?;
    println!("✅ Deleted {id}");
    if let Err(e) = client.delete_payment(&id).await {
        println!("✅ Second delete: {e}");
    }

    println!("🎉 Done");
    Ok(())
}
