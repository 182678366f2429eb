//! Rapport CLI - compute pairwise compatibility recommendations.

use clap::Parser;
use rapport_cli::Cli;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; the output file is the only thing written
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = rapport_cli::run(cli).await {
        error!("{}", e);
        process::exit(1);
    }
}
