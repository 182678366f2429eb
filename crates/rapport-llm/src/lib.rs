//! Rapport LLM Provider Layer
//!
//! Pluggable LLM provider implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `LlmProvider` trait from `rapport-domain`.
//! The pipeline uses one provider for both of its language capabilities:
//! free-text classification (`generate`) and schema-constrained explanation
//! (`generate_structured`).
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OllamaProvider`: Local Ollama chat API integration
//!
//! # Examples
//!
//! ```
//! use rapport_llm::MockProvider;
//! use rapport_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new("high");
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let result = rt.block_on(provider.generate("system", "input")).unwrap();
//! assert_eq!(result, "high");
//! ```

#![warn(missing_docs)]

pub mod ollama;

use rapport_domain::traits::LlmProvider as LlmProviderTrait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

pub use ollama::OllamaProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Marker response that makes the mock fail the call
const ERROR_MARKER: &str = "ERROR";

/// A call recorded by [`MockProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    /// System instruction passed to the provider
    pub system: String,

    /// User input passed to the provider
    pub input: String,

    /// Schema for structured calls, `None` for free-text calls
    pub schema: Option<String>,
}

/// Mock LLM provider for deterministic testing
///
/// Responses are resolved in this order:
///
/// 1. a response registered for the exact input with [`add_response`](Self::add_response)
/// 2. the next scripted response queued with [`push_response`](Self::push_response)
/// 3. the default response
///
/// Every call is recorded so tests can assert on prompts and call order.
///
/// # Examples
///
/// ```
/// use rapport_llm::MockProvider;
/// use rapport_domain::traits::LlmProvider;
///
/// let provider = MockProvider::default();
/// provider.push_response("high");
/// provider.push_response("low");
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// assert_eq!(rt.block_on(provider.generate("sys", "a")).unwrap(), "high");
/// assert_eq!(rt.block_on(provider.generate("sys", "b")).unwrap(), "low");
/// assert_eq!(provider.call_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    script: Arc<Mutex<VecDeque<String>>>,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            script: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a MockProvider that answers with the given responses in order
    pub fn scripted<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let provider = Self::default();
        for response in responses {
            provider.push_response(response);
        }
        provider
    }

    /// Add a specific response for a given input
    pub fn add_response(&self, input: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(input.into(), response.into());
    }

    /// Queue a response for the next call without a registered input
    pub fn push_response(&self, response: impl Into<String>) {
        lock(&self.script).push_back(response.into());
    }

    /// Configure to return an error for a specific input
    pub fn add_error(&self, input: impl Into<String>) {
        self.add_response(input, ERROR_MARKER);
    }

    /// Queue an error for the next call without a registered input
    pub fn push_error(&self) {
        self.push_response(ERROR_MARKER);
    }

    /// Get the number of calls made so far
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Get a copy of every call made so far, in order
    pub fn calls(&self) -> Vec<MockCall> {
        lock(&self.calls).clone()
    }

    /// Forget recorded calls
    pub fn reset_calls(&self) {
        lock(&self.calls).clear();
    }

    fn respond(&self, call: MockCall) -> Result<String, LlmError> {
        let response = lock(&self.responses)
            .get(&call.input)
            .cloned()
            .or_else(|| lock(&self.script).pop_front())
            .unwrap_or_else(|| self.default_response.clone());

        lock(&self.calls).push(call);

        if response == ERROR_MARKER {
            return Err(LlmError::Other("Mock error".to_string()));
        }
        Ok(response)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    async fn generate(&self, system: &str, input: &str) -> Result<String, Self::Error> {
        self.respond(MockCall {
            system: system.to_string(),
            input: input.to_string(),
            schema: None,
        })
    }

    async fn generate_structured(
        &self,
        system: &str,
        input: &str,
        schema: &str,
    ) -> Result<String, Self::Error> {
        self.respond(MockCall {
            system: system.to_string(),
            input: input.to_string(),
            schema: Some(schema.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate("sys", "any prompt").await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_specific_responses() {
        let provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.generate("sys", "hello").await.unwrap(), "world");
        assert_eq!(provider.generate("sys", "foo").await.unwrap(), "bar");
        assert_eq!(
            provider.generate("sys", "unknown").await.unwrap(),
            "Default mock response"
        );
    }

    #[tokio::test]
    async fn test_mock_provider_script_then_default() {
        let provider = MockProvider::scripted(["one", "two"]);
        provider.add_response("pinned", "pinned response");

        assert_eq!(provider.generate("s", "x").await.unwrap(), "one");
        // Registered inputs do not consume the script
        assert_eq!(provider.generate("s", "pinned").await.unwrap(), "pinned response");
        assert_eq!(provider.generate("s", "y").await.unwrap(), "two");
        assert_eq!(provider.generate("s", "z").await.unwrap(), "Default mock response");
    }

    #[tokio::test]
    async fn test_mock_provider_records_calls() {
        let provider = MockProvider::new("ok");

        provider.generate("classify", "pair 1").await.unwrap();
        provider
            .generate_structured("explain", "pair 1", "{}")
            .await
            .unwrap();

        let calls = provider.calls();
        assert_eq!(provider.call_count(), 2);
        assert_eq!(calls[0].system, "classify");
        assert_eq!(calls[0].schema, None);
        assert_eq!(calls[1].system, "explain");
        assert_eq!(calls[1].schema.as_deref(), Some("{}"));

        provider.reset_calls();
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_provider_error() {
        let provider = MockProvider::default();
        provider.add_error("bad prompt");
        provider.push_error();

        let result = provider.generate("sys", "bad prompt").await;
        assert!(matches!(result.unwrap_err(), LlmError::Other(_)));

        let result = provider.generate("sys", "anything").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate("sys", "test").await.unwrap();

        // Both should share the same call log due to Arc
        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
