//! Pipeline driver

use crate::config::PipelineConfig;
use crate::corpus::parse_people;
use crate::error::PipelineError;
use crate::selector::select_top_k;
use rapport_domain::traits::LlmProvider;
use rapport_domain::{Person, Recommendation};
use std::future::Future;
use std::time::Instant;
use tokio::time::timeout;
use tracing::info;

/// The recommendation pipeline
///
/// Owns the language provider and runs the stages strictly in sequence:
/// pairwise ranking, per-person top-K selection, then explanation. Exactly
/// one LLM call is in flight at any time.
pub struct Pipeline<L>
where
    L: LlmProvider,
{
    pub(crate) llm_provider: L,
    pub(crate) config: PipelineConfig,
}

impl<L> Pipeline<L>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    /// Create a new Pipeline
    pub fn new(llm_provider: L, config: PipelineConfig) -> Self {
        Self {
            llm_provider,
            config,
        }
    }

    /// Borrow the language provider
    pub fn provider(&self) -> &L {
        &self.llm_provider
    }

    /// Validate a raw JSON corpus and run the pipeline over it
    ///
    /// Validation failures are reported before any LLM call is made.
    pub async fn run_json(&self, json: &str) -> Result<Vec<Recommendation>, PipelineError> {
        let people = parse_people(json)?;
        self.run(&people).await
    }

    /// Run the full pipeline over a validated corpus
    ///
    /// Any failure aborts the run; there is no partial result.
    pub async fn run(&self, people: &[Person]) -> Result<Vec<Recommendation>, PipelineError> {
        self.config.validate()?;
        let start_time = Instant::now();

        info!(
            "Starting run over {} people, top_k {}",
            people.len(),
            self.config.top_k
        );

        let rankings = self.rank_pairs(people).await?;
        let selected = select_top_k(people, &rankings, self.config.top_k);

        info!(
            "Selected {} of {} rankings for explanation",
            selected.len(),
            rankings.len()
        );

        let recommendations = self.generate_recommendations(&selected).await?;

        info!(
            rankings = rankings.len(),
            selected = selected.len(),
            recommendations = recommendations.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Run complete"
        );

        Ok(recommendations)
    }

    /// Await one LLM call, bounded by the configured timeout
    pub(crate) async fn call_llm<F>(&self, call: F) -> Result<String, PipelineError>
    where
        F: Future<Output = Result<String, L::Error>>,
    {
        let result = match self.config.call_timeout() {
            Some(limit) => timeout(limit, call)
                .await
                .map_err(|_| PipelineError::Timeout(limit.as_secs()))?,
            None => call.await,
        };

        result.map_err(|e| PipelineError::Llm(e.to_string()))
    }
}
