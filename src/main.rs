//! Command-line interface for shopstream
//!
//! # Usage Examples
//!
//! ```bash
//! export SHOPSTREAM_BROKERS=localhost:9092
//!
//! # Publish base customer records and a burst of updates
//! shopstream seed-customers
//!
//! # Stream simulated customer updates until interrupted
//! shopstream customer-updates
//!
//! # Publish bursts of synthetic orders every few seconds
//! shopstream orders
//!
//! # One-shot fixtures
//! shopstream sample-orders
//! shopstream targeted-updates
//! shopstream smoke-test
//! ```
//!
//! Customer events go to the `customers` topic keyed by `customer_id` so a
//! downstream consumer can upsert by identity; order events go to `orders`.
//! A missing broker configuration exits with status 1 before any work; any
//! later failure is printed and the process exits 0, matching the scripts
//! this tool replaces.

use clap::{Parser, Subcommand};
use shopstream::commands;

#[derive(Parser)]
#[command(name = "shopstream")]
#[command(about = "Synthetic retail event generator publishing keyed JSON events to Kafka")]
struct Cli {
    /// Kafka brokers (comma-separated, e.g., "localhost:9092")
    #[arg(long, env = "SHOPSTREAM_BROKERS", global = true)]
    brokers: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish all base customer records, then a burst of simulated updates
    SeedCustomers {
        /// Number of update events to publish after the base records
        #[arg(long, default_value = "15")]
        updates: u64,

        /// Random seed for deterministic generation
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Continuously publish simulated customer updates until interrupted
    CustomerUpdates {
        /// Random seed for deterministic generation
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Continuously publish bursts of synthetic orders until interrupted
    Orders {
        /// Orders generated per burst
        #[arg(long, default_value = "10")]
        burst: usize,

        /// Random seed for deterministic generation
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Publish the fixed sample order records once
    SampleOrders,

    /// Publish hand-written customer upserts demonstrating keyed consumption
    TargetedUpdates,

    /// Publish a single test order and exit
    SmokeTest,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let Some(brokers) = cli.brokers else {
        eprintln!("Error: SHOPSTREAM_BROKERS environment variable not set");
        eprintln!("Export it or pass --brokers, e.g. SHOPSTREAM_BROKERS=localhost:9092");
        std::process::exit(1);
    };

    match run(cli.command, &brokers).await {
        Ok(_) => println!("Done"),
        Err(e) => {
            eprintln!("Error: {e:?}");
        }
    }
}

async fn run(command: Commands, brokers: &str) -> anyhow::Result<()> {
    match command {
        Commands::SeedCustomers { updates, seed } => {
            commands::seed_customers::run(brokers, updates, seed).await
        }
        Commands::CustomerUpdates { seed } => commands::customer_updates::run(brokers, seed).await,
        Commands::Orders { burst, seed } => commands::orders::run(brokers, burst, seed).await,
        Commands::SampleOrders => commands::sample_orders::run(brokers).await,
        Commands::TargetedUpdates => commands::targeted_updates::run(brokers).await,
        Commands::SmokeTest => commands::smoke_test::run(brokers).await,
    }
}
