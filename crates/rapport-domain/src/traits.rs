//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the pipeline and the language
//! capability it delegates to. Implementations live in other crates.

use std::future::Future;

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (rapport-llm). Every call is a
/// single round trip; callers await one call at a time.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate free-form text from a system instruction and a user input
    fn generate(
        &self,
        system: &str,
        input: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;

    /// Generate output constrained to a JSON schema (if supported)
    ///
    /// `schema` is the JSON schema document as text. The returned string is
    /// the raw model output; validating it is the caller's job.
    fn generate_structured(
        &self,
        system: &str,
        input: &str,
        schema: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
