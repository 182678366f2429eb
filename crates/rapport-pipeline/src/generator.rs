//! Recommendation generation
//!
//! Turns each selected ranking into an explained recommendation.

use crate::error::PipelineError;
use crate::parser::parse_explanation;
use crate::pipeline::Pipeline;
use crate::prompt::{explanation_input, GENERATOR_INSTRUCTIONS, RECOMMENDATION_SCHEMA};
use rapport_domain::traits::LlmProvider;
use rapport_domain::{Ranking, Recommendation};
use tracing::{debug, info};

impl<L> Pipeline<L>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    /// Explain each ranking, in order, one call at a time
    pub async fn generate_recommendations(
        &self,
        rankings: &[&Ranking],
    ) -> Result<Vec<Recommendation>, PipelineError> {
        let mut recommendations = Vec::with_capacity(rankings.len());

        for (idx, ranking) in rankings.iter().enumerate() {
            let recommendation = self.explain(ranking).await?;
            info!("Explained ranking {}/{}", idx + 1, rankings.len());
            recommendations.push(recommendation);
        }

        Ok(recommendations)
    }

    /// Ask the generator for a reason and talking points for one ranking
    pub async fn explain(&self, ranking: &Ranking) -> Result<Recommendation, PipelineError> {
        let input = explanation_input(&ranking.person1, &ranking.person2, ranking.score);
        let response = self
            .call_llm(self.llm_provider.generate_structured(
                GENERATOR_INSTRUCTIONS,
                &input,
                RECOMMENDATION_SCHEMA,
            ))
            .await?;

        let explanation = parse_explanation(&response)?;
        debug!(
            ranking = %ranking.id,
            potential = explanation.potential.len(),
            "Generated explanation"
        );

        Ok(Recommendation::from_ranking(
            ranking,
            explanation.reason,
            explanation.potential,
        ))
    }
}
