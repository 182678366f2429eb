//! Per-person top-K selection
//!
//! Culls the full set of pairwise rankings down to the few best matches per
//! person before the (more expensive) explanation step.

use rapport_domain::{Person, PersonId, Ranking, RankingId};
use std::collections::{HashMap, HashSet};

/// Select each person's `k` best rankings and union the selections
///
/// Each person's rankings are sorted by descending score with a stable sort,
/// so ties keep pair-enumeration order. A ranking picked by both of its
/// participants appears once, deduplicated by [`RankingId`]. Output order is
/// order of first selection while scanning people in corpus order.
pub fn select_top_k<'a>(
    people: &[Person],
    rankings: &'a [Ranking],
    k: usize,
) -> Vec<&'a Ranking> {
    let mut by_person: HashMap<PersonId, Vec<&'a Ranking>> = HashMap::new();
    for ranking in rankings {
        let (person1, person2) = ranking.person_ids();
        by_person.entry(person1).or_default().push(ranking);
        by_person.entry(person2).or_default().push(ranking);
    }

    let mut seen: HashSet<RankingId> = HashSet::new();
    let mut selected = Vec::new();

    for person in people {
        let Some(candidates) = by_person.get_mut(&person.id) else {
            continue;
        };

        candidates.sort_by(|a, b| b.score.cmp(&a.score));

        for ranking in candidates.iter().take(k) {
            if seen.insert(ranking.id) {
                selected.push(*ranking);
            }
        }
    }

    selected
}
