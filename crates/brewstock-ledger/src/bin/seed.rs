//! # Seed & Demo
//!
//! Builds a ledger, seeds it, and fires a burst of concurrent purchases at
//! it so the locking can be watched in the logs.
//!
//! ## Usage
//! ```bash
//! # Sample menu, 10 concurrent buyers
//! cargo run -p brewstock-ledger --bin seed
//!
//! # Custom menu and more buyers, with debug logs from the ledger
//! BREWSTOCK_CATALOG=./menu.toml BREWSTOCK_DEMO_BUYERS=40 \
//!     BREWSTOCK_LOG=info,brewstock_ledger=debug \
//!     cargo run -p brewstock-ledger --bin seed
//! ```
//!
//! Configuration is read from `BREWSTOCK_*` variables (see
//! `brewstock_ledger::config`).

use std::env;

use anyhow::Context;
use brewstock_ledger::{catalog, Ledger, LedgerConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if env::args().skip(1).any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return Ok(());
    }

    let config = LedgerConfig::from_env().context("invalid BREWSTOCK_* configuration")?;
    init_tracing(&config.log_filter);

    info!(?config, "Starting Brewstock seed");

    let ledger = Ledger::new();
    let coffees = match &config.catalog_path {
        Some(path) => catalog::load_catalog(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None if config.seed_sample => catalog::sample_catalog(),
        None => {
            warn!("No catalog file and sample seeding disabled; ledger stays empty");
            Vec::new()
        }
    };
    let seeded = catalog::seed(&ledger, coffees).await;

    println!("☕ Brewstock Ledger");
    println!("==================");
    for coffee in ledger.queries().coffees().await {
        println!(
            "  [{}] {:<20} {:<7} {:>7}  stock {}",
            coffee.id,
            coffee.name,
            coffee.size,
            coffee.price.to_string(),
            coffee.quantity_available
        );
    }
    println!();

    let Some(target) = ledger.list().await.into_iter().next() else {
        println!("Nothing to buy ({} coffees seeded).", seeded);
        return Ok(());
    };

    run_demo(&ledger, &target.id, config.demo_buyers).await?;

    let after = ledger.queries().coffee(&target.id).await?;
    println!(
        "{}: {} → {} after {} concurrent buyers",
        after.name, target.quantity_available, after.quantity_available, config.demo_buyers
    );

    Ok(())
}

/// Spawns `buyers` tasks that each try to buy one unit of `id`.
async fn run_demo(ledger: &Ledger, id: &str, buyers: usize) -> anyhow::Result<()> {
    let handles: Vec<_> = (0..buyers)
        .map(|_| {
            let mutations = ledger.mutations();
            let id = id.to_string();
            tokio::spawn(async move { mutations.purchase_coffee(&id, 1).await })
        })
        .collect();

    let mut sold = 0;
    for handle in handles {
        let result = handle.await.context("demo buyer task panicked")?;
        if result.success {
            sold += 1;
        }
    }

    info!(id = %id, buyers, sold, rejected = buyers - sold, "Demo purchases finished");
    Ok(())
}

/// `RUST_LOG` wins over the configured default filter.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn print_help() {
    println!("Brewstock seed & demo");
    println!();
    println!("Usage: seed [-h|--help]");
    println!();
    println!("Environment:");
    println!("  BREWSTOCK_CATALOG       Catalog file (.toml or .json)");
    println!("  BREWSTOCK_SEED_SAMPLE   Seed the sample menu when no catalog is set (default: true)");
    println!("  BREWSTOCK_LOG           Default log filter (default: info)");
    println!("  BREWSTOCK_DEMO_BUYERS   Concurrent one-unit purchases to run (default: 10)");
}
