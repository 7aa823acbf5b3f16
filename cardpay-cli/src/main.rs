//! Cardpay CLI
//!
//! Command-line interface for the cardpay API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use cardpay_client::CardpayClient;
use cardpay_types::Decimal;

#[derive(Parser)]
#[command(name = "cardpay")]
#[command(author, version, about = "Cardpay API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the cardpay API
    #[arg(long, env = "CARDPAY_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize card details
    Tokenize {
        /// Card number (12-19 digits)
        card_number: String,
        /// Expiry date (MM/YY or MM/YYYY)
        expiry_date: String,
    },
    /// Charge a tokenized card
    Sale {
        /// Token returned by `tokenize`
        token: String,
        /// Amount, e.g. 100.50
        amount: Decimal,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = CardpayClient::new(&cli.api_url);

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

        Commands::Tokenize {
            card_number,
            expiry_date,
        } => {
            let token = client.tokenize(&card_number, &expiry_date).await?;
            println!("{}", serde_json::json!({ "token": token }));
        }

        Commands::Sale { token, amount } => {
            let sale = client.sale(&token, amount).await?;
            println!("{}", serde_json::to_string_pretty(&sale)?);
        }
    }

    Ok(())
}
