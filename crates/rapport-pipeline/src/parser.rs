//! Parse LLM output into scores and explanations

use crate::error::PipelineError;
use once_cell::sync::Lazy;
use rapport_domain::Score;
use regex::Regex;
use serde::Deserialize;

/// Whole-word keyword patterns, in matching priority order
static SCORE_PATTERNS: Lazy<Vec<(Score, Regex)>> = Lazy::new(|| {
    Score::priority_order()
        .into_iter()
        .map(|score| {
            let pattern = format!(r"(?-u:\b){}(?-u:\b)", score.as_str());
            (score, Regex::new(&pattern).expect("Invalid score keyword regex"))
        })
        .collect()
});

/// Map a classifier response to a score
///
/// The response is lower-cased and tested for the whole words "low",
/// "medium" and "high" in that order; the first hit wins, so a response
/// mentioning both "low" and "high" is low.
pub fn parse_score(response: &str) -> Result<Score, PipelineError> {
    let lowered = response.to_lowercase();

    let matched = SCORE_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(&lowered))
        .map(|(score, _)| *score);

    match matched {
        Some(score) => Ok(score),
        None => Err(PipelineError::Classification(lowered)),
    }
}

/// Structured explanation returned by the generator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Explanation {
    /// Why the pair received its ranking
    pub reason: String,

    /// Conversation starters for the pair
    pub potential: Vec<String>,
}

/// Validate a generator response against the `{reason, potential[]}` shape
pub fn parse_explanation(response: &str) -> Result<Explanation, PipelineError> {
    let json_str = extract_json(response)?;

    serde_json::from_str(&json_str).map_err(|e| PipelineError::Generation(e.to_string()))
}

/// Extract JSON from response, handling markdown code blocks
fn extract_json(response: &str) -> Result<String, PipelineError> {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(PipelineError::Generation("Empty code block".to_string()));
        }

        // Skip the opening fence and, if present, the closing one
        let end = if lines[lines.len() - 1].trim() == "```" {
            lines.len() - 1
        } else {
            lines.len()
        };
        Ok(lines[1..end].join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}
