//! Pairwise ranking
//!
//! Classifies every unordered pair of people. This is the dominant cost of a
//! run: `N·(N−1)/2` classifier calls, issued one at a time.

use crate::error::PipelineError;
use crate::parser::parse_score;
use crate::pipeline::Pipeline;
use crate::prompt::{classifier_instructions, pair_input};
use rapport_domain::traits::LlmProvider;
use rapport_domain::{Person, Ranking, RankingId, Score};
use std::sync::Arc;
use tracing::{debug, info};

/// Number of unordered pairs among `n` people
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

impl<L> Pipeline<L>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    /// Rank every unordered pair of people
    ///
    /// Pairs are enumerated as `(i, j)` with `i < j`, `i` in the outer loop;
    /// `person1` is always the lower index and ranking ids follow the same
    /// order.
    pub async fn rank_pairs(&self, people: &[Person]) -> Result<Vec<Ranking>, PipelineError> {
        let shared: Vec<Arc<Person>> = people.iter().cloned().map(Arc::new).collect();
        let total = pair_count(shared.len());
        let mut rankings = Vec::with_capacity(total);

        for i in 0..shared.len() {
            for j in (i + 1)..shared.len() {
                let person1 = &shared[i];
                let person2 = &shared[j];
                let score = self.classify_pair(person1, person2).await?;

                let id = RankingId::new(rankings.len());
                info!("Ranked pair {}/{}", id.index() + 1, total);

                rankings.push(Ranking {
                    id,
                    person1: Arc::clone(person1),
                    person2: Arc::clone(person2),
                    score,
                });
            }
        }

        Ok(rankings)
    }

    /// Ask the classifier how compatible two people are
    pub async fn classify_pair(
        &self,
        person1: &Person,
        person2: &Person,
    ) -> Result<Score, PipelineError> {
        let input = pair_input(person1, person2);
        let response = self
            .call_llm(self.llm_provider.generate(classifier_instructions(), &input))
            .await?;

        let score = parse_score(&response)?;
        debug!(
            person1 = person1.id,
            person2 = person2.id,
            score = score.as_str(),
            "Classified pair"
        );
        Ok(score)
    }
}
