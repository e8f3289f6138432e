//! Sync a real seller's catalog into an in-memory sink.
//!
//! ```sh
//! RUST_LOG=info cargo run --example sync_store -- MLA TIENDA_OFICIAL
//! ```

use meli_source::{client::RestApi, sinks::MemorySink, source_nodes, SourceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let site_id = args.next().unwrap_or_else(|| "MLA".to_string());
    let username = args.next().unwrap_or_default();

    let config = SourceConfig::new(site_id, username);
    let api = RestApi::new(&config.api_host);
    let sink = MemorySink::new();

    let report = source_nodes(&config, &api, &sink).await?;

    println!(
        "{} of {} products imported, {} nodes created, {} failures",
        report.products_imported,
        report.products_total,
        report.nodes_created,
        report.failures.len()
    );
    for failure in &report.failures {
        println!("  dropped {failure}");
    }

    Ok(())
}
