//! Rapport CLI library.
//!
//! This library provides the core functionality for the `rapport` binary:
//! argument parsing, configuration layering, and the read → run → write
//! cycle around the recommendation pipeline.

pub mod cli;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};

use rapport_domain::traits::LlmProvider;
use rapport_llm::OllamaProvider;
use rapport_pipeline::{records, Pipeline};
use std::fs;
use std::path::Path;
use tracing::info;

/// Run the CLI against a local Ollama server.
pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?.with_overrides(&cli)?;

    let provider = OllamaProvider::new(&config.ollama.endpoint, &config.ollama.model)
        .with_max_attempts(config.ollama.max_attempts);

    info!(
        endpoint = provider.endpoint(),
        model = provider.model(),
        "Using Ollama provider"
    );

    run_with_provider(&cli.input, &cli.output, provider, config).await
}

/// Read the corpus, run the pipeline and write the recommendations.
///
/// The output file is written once, only after the whole run succeeded.
pub async fn run_with_provider<L>(
    input: &Path,
    output: &Path,
    provider: L,
    config: Config,
) -> Result<()>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    let corpus = fs::read_to_string(input).map_err(|e| CliError::io(input, e))?;

    let pipeline = Pipeline::new(provider, config.pipeline);
    let recommendations = pipeline.run_json(&corpus).await?;

    let json = records::to_json_pretty(&recommendations)?;
    fs::write(output, json).map_err(|e| CliError::io(output, e))?;

    info!(
        "Wrote {} recommendations to {}",
        recommendations.len(),
        output.display()
    );
    Ok(())
}
