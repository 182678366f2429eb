//! Configuration for the recommendation pipeline

use crate::error::PipelineError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of rankings kept per person
pub const DEFAULT_TOP_K: usize = 2;

/// Configuration for a pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Rankings kept per person before explanation
    pub top_k: usize,

    /// Maximum time for a single LLM call (seconds); unset means wait forever
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_timeout_secs: Option<u64>,
}

impl PipelineConfig {
    /// Set the number of rankings kept per person
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Bound every LLM call by a timeout
    pub fn with_call_timeout_secs(mut self, secs: u64) -> Self {
        self.call_timeout_secs = Some(secs);
        self
    }

    /// Get the per-call timeout as a Duration
    pub fn call_timeout(&self) -> Option<Duration> {
        self.call_timeout_secs.map(Duration::from_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.call_timeout_secs == Some(0) {
            return Err(PipelineError::Config(
                "call_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, PipelineError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| PipelineError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, PipelineError> {
        toml::to_string_pretty(self)
            .map_err(|e| PipelineError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            call_timeout_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.top_k, 2);
        assert_eq!(config.call_timeout(), None);
    }

    #[test]
    fn test_zero_timeout_is_invalid() {
        let config = PipelineConfig::default().with_call_timeout_secs(0);
        assert!(matches!(config.validate(), Err(PipelineError::Config(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = PipelineConfig::from_toml("call_timeout_secs = 90").unwrap();
        assert_eq!(config.top_k, DEFAULT_TOP_K);
        assert_eq!(config.call_timeout(), Some(Duration::from_secs(90)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PipelineConfig::default()
            .with_top_k(3)
            .with_call_timeout_secs(120);
        let toml_str = config.to_toml().unwrap();
        let parsed = PipelineConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_invalid_toml() {
        let result = PipelineConfig::from_toml("top_k = \"two\"");
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }
}
