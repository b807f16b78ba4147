//! Outcome of a ranking run.

use platewise_core::{RankingSource, RecommendationResult};

use crate::RankingFailure;

/// Ordered recommendations plus the reason the fallback path ran, if it did.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecommendationReport {
    /// Recommendations, best first.
    pub results: Vec<RecommendationResult>,
    /// Why the completion service's ranking was not used; `None` when it was
    /// or when there was nothing to rank.
    pub fallback: Option<RankingFailure>,
}

impl RecommendationReport {
    /// Number of recommendations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the report holds no recommendations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Path that produced the recommendations, `None` when there are none.
    #[must_use]
    pub fn source(&self) -> Option<RankingSource> {
        self.results.first().map(|result| result.source)
    }
}
