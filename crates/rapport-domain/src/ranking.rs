//! Ranking module - one classified pair of people

use crate::{Person, PersonId, Score};
use std::fmt;
use std::sync::Arc;

/// Identity of a ranking within one pipeline run
///
/// Assigned sequentially in pair-enumeration order, so the id doubles as the
/// ranking's index in the ranker's output. Two rankings with identical
/// people and score are still distinct rankings if their ids differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RankingId(usize);

impl RankingId {
    /// Create a ranking id from its enumeration index
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the enumeration index
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for RankingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The classified compatibility of an unordered pair of people
///
/// `person1` always comes before `person2` in corpus order.
#[derive(Debug, Clone)]
pub struct Ranking {
    /// Identity of this ranking
    pub id: RankingId,

    /// Participant with the lower corpus index
    pub person1: Arc<Person>,

    /// Participant with the higher corpus index
    pub person2: Arc<Person>,

    /// Classified compatibility
    pub score: Score,
}

impl Ranking {
    /// Whether the given person takes part in this ranking
    pub fn involves(&self, person_id: PersonId) -> bool {
        self.person1.id == person_id || self.person2.id == person_id
    }

    /// Ids of both participants, in enumeration order
    pub fn person_ids(&self) -> (PersonId, PersonId) {
        (self.person1.id, self.person2.id)
    }
}
