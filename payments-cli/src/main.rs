//! Payments CLI
//!
//! Command-line interface for the Payments API.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use payments_client::PaymentsClient;
use payments_types::{Payment, PaymentId};

#[derive(Parser)]
#[command(name = "payments")]
#[command(author, version, about = "Payments API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Payments API
    #[arg(
        long,
        env = "PAYMENTS_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API health
    Health,
    /// List all payments
    List,
    /// Get payment details
    Get {
        /// Payment ID
        id: String,
    },
    /// Create a payment from a JSON document (without `id`)
    Create {
        /// Path to the payment JSON file
        #[arg(long)]
        file: PathBuf,
    },
    /// Replace a payment with a JSON document (with `id`)
    Update {
        /// Path to the payment JSON file
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a payment
    Delete {
        /// Payment ID
        id: String,
    },
}

fn read_payment(path: &Path) -> Result<Payment> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Cannot read {}", path.display()))?;
    Payment::from_bytes(&bytes)
        .with_context(|| format!("{} is not a payment document", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = PaymentsClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }
        Commands::List => {
            let payments = client.list_payments().await?;
            println!("{}", serde_json::to_string_pretty(&payments)?);
        }
        Commands::Get { id } => {
            let payment = client.get_payment(&PaymentId::from(id)).await?;
            println!("{}", serde_json::to_string_pretty(&payment)?);
        }
        Commands::Create { file } => {
            let payment = read_payment(&file)?;
            let id = client.create_payment(&payment).await?;
            println!("{}", serde_json::json!({ "id": id }));
        }
        Commands::Update { file } => {
            let payment = read_payment(&file)?;
            client.update_payment(&payment).await?;
            println!("{}", serde_json::json!({ "id": payment.id, "updated": true }));
        }
        Commands::Delete { id } => {
            let id = PaymentId::from(id);
            client.delete_payment(&id).await?;
            println!("{}", serde_json::json!({ "id": id, "deleted": true }));
        }
    }

    Ok(())
}
