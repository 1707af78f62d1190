//! Currency CLI
//!
//! Command-line interface for the Currency Conversion API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use currency_client::CurrencyClient;

#[derive(Parser)]
#[command(name = "currency")]
#[command(author, version, about = "Currency conversion API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Currency Conversion API
    #[arg(
        long,
        env = "CURRENCY_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount between two currencies
    Convert {
        /// Base currency code (e.g. USD)
        from: String,
        /// Target currency code (e.g. EUR)
        to: String,
        /// Amount to convert
        amount: String,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = CurrencyClient::new(&cli.api_url);

    match cli.command {
        Commands::Convert { from, to, amount } => {
            let result = client.convert(&from, &to, &amount).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("API is healthy");
            } else {
                anyhow::bail!("API is not healthy");
            }
        }
    }

    Ok(())
}
