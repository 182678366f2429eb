//! Score module - coarse pairwise compatibility

use std::fmt;

/// Compatibility of two people as judged by the classifier
///
/// Ordered `Low < Medium < High`, so sorting by score is sorting by
/// compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    /// Little in common (0)
    Low,

    /// Some overlap (0.5)
    Medium,

    /// Strong overlap (1)
    High,
}

impl Score {
    /// Numeric value of the score: 0, 0.5 or 1
    pub fn value(&self) -> f64 {
        match self {
            Score::Low => 0.0,
            Score::Medium => 0.5,
            Score::High => 1.0,
        }
    }

    /// Keyword used by the classifier for this score
    pub fn as_str(&self) -> &'static str {
        match self {
            Score::Low => "low",
            Score::Medium => "medium",
            Score::High => "high",
        }
    }

    /// All scores in keyword-matching priority order
    pub fn priority_order() -> [Score; 3] {
        [Score::Low, Score::Medium, Score::High]
    }
}

/// Renders the numeric value the way it appears in prompts and output:
/// `0`, `0.5` or `1`.
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Low => write!(f, "0"),
            Score::Medium => write!(f, "0.5"),
            Score::High => write!(f, "1"),
        }
    }
}
