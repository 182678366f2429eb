//! Configuration management for the CLI.
//!
//! Settings come from three layers, highest precedence first: command-line
//! flags (and their environment variables), the TOML config file, built-in
//! defaults.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use rapport_llm::ollama::{DEFAULT_ENDPOINT, DEFAULT_MAX_ATTEMPTS, DEFAULT_MODEL};
use rapport_pipeline::PipelineConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Pipeline settings
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Ollama connection settings
    #[serde(default)]
    pub ollama: OllamaSettings,
}

/// Ollama connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaSettings {
    /// API endpoint
    pub endpoint: String,

    /// Model name
    pub model: String,

    /// Attempts per call (1 = no retry)
    pub max_attempts: u32,
}

impl Default for OllamaSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".rapport").join("config.toml"))
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        let config: Config = toml::from_str(&contents)?;
        config.pipeline.validate()?;
        Ok(config)
    }

    /// Load the configuration a run should start from.
    ///
    /// An explicit path must exist; the default path is used only if present.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Apply command-line overrides on top of this configuration.
    pub fn with_overrides(mut self, cli: &Cli) -> Result<Self> {
        if let Some(top_k) = cli.top_k {
            self.pipeline.top_k = top_k;
        }
        if let Some(timeout) = cli.timeout {
            self.pipeline.call_timeout_secs = Some(timeout);
        }
        if let Some(model) = &cli.model {
            self.ollama.model = model.clone();
        }
        if let Some(endpoint) = &cli.endpoint {
            self.ollama.endpoint = endpoint.clone();
        }
        if let Some(max_attempts) = cli.max_attempts {
            self.ollama.max_attempts = max_attempts;
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate the combined configuration.
    pub fn validate(&self) -> Result<()> {
        self.pipeline.validate()?;
        if self.ollama.model.trim().is_empty() {
            return Err(CliError::Config("model must not be empty".into()));
        }
        if self.ollama.endpoint.trim().is_empty() {
            return Err(CliError::Config("endpoint must not be empty".into()));
        }
        if self.ollama.max_attempts == 0 {
            return Err(CliError::Config(
                "max_attempts must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
