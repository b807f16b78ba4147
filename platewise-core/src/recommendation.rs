//! Ranking decisions and the results handed to presentation layers.

use crate::{FeatureScores, Restaurant};

/// One entry of the ranking returned by the completion service.
///
/// The service refers to restaurants by name only; [`RankingDecision::rank`]
/// stays `None` when the service omitted it or sent something unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankingDecision {
    /// Restaurant name as echoed by the service.
    pub name: String,
    /// One-based position assigned by the service.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub rank: Option<u32>,
    /// Justification shown to the user.
    pub reason: String,
}

/// Which path produced a [`RecommendationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RankingSource {
    /// Merged from the completion service's decisions.
    Llm,
    /// Produced by the deterministic rating/popularity/price ordering.
    Fallback,
}

/// A recommended restaurant with its justification.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendationResult {
    /// The full catalog record.
    pub restaurant: Restaurant,
    /// Feature breakdown, when the record came from a scored pool.
    pub features: Option<FeatureScores>,
    /// Combined recommendation score, when known.
    pub recommendation: Option<f64>,
    /// Why the restaurant was recommended.
    pub reason: String,
    /// Position assigned by the completion service; `None` on the fallback
    /// path.
    pub llm_rank: Option<u32>,
    /// Path that produced the result.
    pub source: RankingSource,
}

impl RecommendationResult {
    /// Restaurant name shortcut.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.restaurant.name
    }
}
