//! Rapport Recommendation Pipeline
//!
//! Computes curated pairwise compatibility recommendations for a closed set
//! of people, delegating judgement to an LLM provider.
//!
//! # Architecture
//!
//! ```text
//! Corpus → Ranker (N·(N−1)/2 classifier calls) → Top-K Selector → Generator → Recommendations
//! ```
//!
//! # Key Features
//!
//! - **Corpus Validation**: Malformed input is rejected before any LLM call
//! - **Exhaustive Ranking**: Every unordered pair is classified low, medium or high
//! - **Top-K Selection**: Each person keeps their best K matches, deduplicated across people
//! - **Structured Explanation**: Each selected pair gets a reason and talking points
//! - **Fail-Fast**: Any error aborts the whole run with no partial output
//!
//! # Example Usage
//!
//! ```no_run
//! use rapport_pipeline::{Pipeline, PipelineConfig, records};
//! use rapport_llm::OllamaProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = OllamaProvider::default_endpoint("llama3.2");
//! let pipeline = Pipeline::new(llm, PipelineConfig::default());
//!
//! let corpus = std::fs::read_to_string("people.json")?;
//! let recommendations = pipeline.run_json(&corpus).await?;
//!
//! std::fs::write("recommendations.json", records::to_json_pretty(&recommendations)?)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod generator;
mod parser;
mod pipeline;
mod ranker;
mod selector;

pub mod corpus;
pub mod prompt;
pub mod records;


pub use config::{PipelineConfig, DEFAULT_TOP_K};
pub use error::PipelineError;
pub use parser::{parse_explanation, parse_score, Explanation};
pub use pipeline::Pipeline;
pub use ranker::pair_count;
pub use selector::select_top_k;
