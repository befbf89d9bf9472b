//! Depgraph CLI binary.

use anyhow::Result;
use depgraph::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the depgraph CLI.
fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=depgraph=debug,depgraph_core=trace cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("depgraph=info,depgraph_core=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting depgraph CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    tracing::debug!("Depgraph CLI completed successfully");
    Ok(())
}
