//! Prepare District Data
//!
//! Builds the Belagavi Division district table and prints a confirmation
//! line. Merging into `data.json` is done separately.
//! Run with: cargo run --bin prepare_districts

use district_profiles::{districts, DistrictIndex, PREPARED_MESSAGE};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries only the confirmation line
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "district_profiles=warn,prepare_districts=warn,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let index = DistrictIndex::new();
    tracing::info!("Prepared {} district records", index.len());
    for record in districts() {
        tracing::debug!(
            "{}: {} historical places, {} attractions",
            record.name,
            record.historical_places.len(),
            record.tourist_attractions.len()
        );
    }

    println!("{}", PREPARED_MESSAGE);
    Ok(())
}
