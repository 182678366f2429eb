//! Error types for the recommendation pipeline

use thiserror::Error;

/// Errors that abort a pipeline run
///
/// Every variant is fatal: the run stops and no output is produced.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The corpus does not have the expected shape
    #[error("Validation error: {0}")]
    Validation(String),

    /// The classifier answered with none of the known keywords
    #[error("Unexpected ranking {0:?}")]
    Classification(String),

    /// The generator's structured answer does not match the schema
    #[error("Invalid recommendation: {0}")]
    Generation(String),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// An external call exceeded the configured timeout
    #[error("LLM call timed out after {0}s")]
    Timeout(u64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<serde_json::Error> for PipelineError {
    fn from(e: serde_json::Error) -> Self {
        PipelineError::JsonParse(e.to_string())
    }
}
