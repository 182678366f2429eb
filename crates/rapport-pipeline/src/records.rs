//! Serialized form of recommendations
//!
//! Recommendations leave the pipeline as a pretty-printed JSON array of
//! `{person1Id, person2Id, ranking, reason, potential}` records.

use crate::error::PipelineError;
use rapport_domain::{PersonId, Recommendation, Score};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire record for one recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRecord {
    /// First participant
    pub person1_id: PersonId,

    /// Second participant
    pub person2_id: PersonId,

    /// Score as the number 0, 0.5 or 1
    #[serde(serialize_with = "serialize_score", deserialize_with = "deserialize_score")]
    pub ranking: Score,

    /// Why the pair was ranked this way
    pub reason: String,

    /// Talking points
    pub potential: Vec<String>,
}

impl From<&Recommendation> for RecommendationRecord {
    fn from(rec: &Recommendation) -> Self {
        Self {
            person1_id: rec.person1_id,
            person2_id: rec.person2_id,
            ranking: rec.ranking,
            reason: rec.reason.clone(),
            potential: rec.potential.clone(),
        }
    }
}

impl From<RecommendationRecord> for Recommendation {
    fn from(record: RecommendationRecord) -> Self {
        Self {
            person1_id: record.person1_id,
            person2_id: record.person2_id,
            ranking: record.ranking,
            reason: record.reason,
            potential: record.potential,
        }
    }
}

/// Integral scores are written without a fractional part (`0`, `1`)
fn serialize_score<S: Serializer>(score: &Score, serializer: S) -> Result<S::Ok, S::Error> {
    match score {
        Score::Low => serializer.serialize_u8(0),
        Score::Medium => serializer.serialize_f64(0.5),
        Score::High => serializer.serialize_u8(1),
    }
}

fn deserialize_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Score, D::Error> {
    let value = f64::deserialize(deserializer)?;
    Score::priority_order()
        .into_iter()
        .find(|score| score.value() == value)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid ranking {}", value)))
}

/// Render recommendations as pretty-printed JSON (2-space indent)
pub fn to_json_pretty(recommendations: &[Recommendation]) -> Result<String, PipelineError> {
    let records: Vec<RecommendationRecord> = recommendations.iter().map(Into::into).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Read recommendations back from their JSON form
pub fn from_json(json: &str) -> Result<Vec<Recommendation>, PipelineError> {
    let records: Vec<RecommendationRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(Into::into).collect())
}
