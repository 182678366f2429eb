//! Rapport Domain Layer
//!
//! This crate contains the core data model for Rapport. It has ZERO external
//! dependencies and defines the value objects and trait interfaces that the
//! pipeline, provider and CLI layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Person**: A participant described by values, visions and vehicles
//! - **Score**: Coarse compatibility of a pair (low, medium, high)
//! - **Ranking**: The classified compatibility of one unordered pair of people
//! - **Recommendation**: A ranking enriched with a reason and talking points
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and invariants only
//! - Serialization and transport live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod person;
pub mod ranking;
pub mod recommendation;
pub mod score;
pub mod traits;

// Re-exports for convenience
pub use person::{Person, PersonId, Vehicle};
pub use ranking::{Ranking, RankingId};
pub use recommendation::Recommendation;
pub use score::Score;
