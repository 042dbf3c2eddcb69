//! ShipStation CLI - Read-only inspection of a ShipStation account.
//!
//! # Usage
//!
//! ```bash
//! # List connected carriers
//! ss-cli carriers
//!
//! # List a carrier's packages or services
//! ss-cli packages fedex
//! ss-cli services fedex
//!
//! # List orders awaiting shipment, second page
//! ss-cli orders --status awaiting_shipment --page 2
//!
//! # Include inactive stores
//! ss-cli stores --show-inactive
//!
//! # Log every request and response body
//! ss-cli --debug warehouses
//! ```
//!
//! # Environment Variables
//!
//! Credentials are read from `SHIPSTATION_API_KEY` and `SHIPSTATION_API_SECRET`
//! (a `.env` file is loaded if present). `RUST_LOG` controls log output.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use shipstation_client::{ClientConfig, ShipStationClient};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::orders::OrderFilter;

#[derive(Parser)]
#[command(name = "ss-cli")]
#[command(author, version, about = "ShipStation account inspection tool")]
struct Cli {
    /// Log method, URL, status, and body of every request
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List connected carriers
    Carriers,
    /// List the package types a carrier offers
    Packages {
        /// Carrier code, e.g. `fedex`
        carrier: String,
    },
    /// List the services a carrier offers
    Services {
        /// Carrier code, e.g. `fedex`
        carrier: String,
    },
    /// List orders
    Orders {
        /// Order status filter (e.g. `awaiting_shipment`, `shipped`)
        #[arg(short, long)]
        status: Option<String>,

        /// Page number (1-indexed)
        #[arg(short, long)]
        page: Option<i64>,

        /// Orders per page
        #[arg(long)]
        page_size: Option<i64>,
    },
    /// List stores
    Stores {
        /// Include inactive stores
        #[arg(long)]
        show_inactive: bool,
    },
    /// List warehouses
    Warehouses,
    /// List webhook subscriptions
    Webhooks,
    /// List supported marketplaces
    Marketplaces,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.debug { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?.with_debug(cli.debug);
    let client = ShipStationClient::new(config)?;

    match cli.command {
        Commands::Carriers => commands::carriers::list(&client).await?,
        Commands::Packages { carrier } => commands::carriers::packages(&client, &carrier).await?,
        Commands::Services { carrier } => commands::carriers::services(&client, &carrier).await?,
        Commands::Orders {
            status,
            page,
            page_size,
        } => {
            let filter = OrderFilter {
                status,
                page,
                page_size,
            };
            commands::orders::list(&client, &filter).await?;
        }
        Commands::Stores { show_inactive } => {
            commands::account::stores(&client, show_inactive).await?;
        }
        Commands::Warehouses => commands::account::warehouses(&client).await?,
        Commands::Webhooks => commands::account::webhooks(&client).await?,
        Commands::Marketplaces => commands::account::marketplaces(&client).await?,
    }
    Ok(())
}
