//! CLI argument parsing.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Rapport - compute pairwise compatibility recommendations for a group of people.
///
/// Reads a JSON array of people, classifies every pair with a local LLM,
/// keeps each person's best matches and writes explained recommendations.
#[derive(Debug, Parser)]
#[command(name = "rapport")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the people JSON file
    pub input: PathBuf,

    /// Path the recommendations JSON is written to
    pub output: PathBuf,

    /// Recommendations kept per person
    #[arg(short = 'k', long, env = "RAPPORT_TOP_K")]
    pub top_k: Option<usize>,

    /// Ollama model name
    #[arg(short, long, env = "RAPPORT_MODEL")]
    pub model: Option<String>,

    /// Ollama API endpoint
    #[arg(long, env = "OLLAMA_HOST")]
    pub endpoint: Option<String>,

    /// Per-call timeout in seconds (no timeout by default)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Attempts per LLM call before giving up
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
