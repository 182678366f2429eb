//! Recommendation module - the pipeline's terminal output

use crate::{PersonId, Ranking, Score};

/// An explained pairwise recommendation
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// First participant (lower corpus index)
    pub person1_id: PersonId,

    /// Second participant (higher corpus index)
    pub person2_id: PersonId,

    /// Classified compatibility of the pair
    pub ranking: Score,

    /// Why the pair received this ranking
    pub reason: String,

    /// Things the two could talk about
    pub potential: Vec<String>,
}

impl Recommendation {
    /// Build a recommendation for a ranking from a generated explanation
    pub fn from_ranking(ranking: &Ranking, reason: String, potential: Vec<String>) -> Self {
        let (person1_id, person2_id) = ranking.person_ids();
        Self {
            person1_id,
            person2_id,
            ranking: ranking.score,
            reason,
            potential,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Person, RankingId};
    use std::sync::Arc;

    #[test]
    fn test_from_ranking_keeps_pair_order() {
        let ranking = Ranking {
            id: RankingId::new(3),
            person1: Arc::new(Person::new(10, "Alice")),
            person2: Arc::new(Person::new(4, "Bob")),
            score: Score::Medium,
        };

        let rec = Recommendation::from_ranking(
            &ranking,
            "Shared love of sweets".to_string(),
            vec!["candy".to_string()],
        );

        assert_eq!(rec.person1_id, 10);
        assert_eq!(rec.person2_id, 4);
        assert_eq!(rec.ranking, Score::Medium);
        assert_eq!(rec.potential, vec!["candy"]);
    }
}
