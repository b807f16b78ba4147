//! Restaurants annotated with deterministic feature scores.

use crate::Restaurant;

/// Normalised sub-scores for one restaurant, each in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureScores {
    /// Rating relative to the best-rated candidate.
    pub rating: f64,
    /// Log-scaled vote count relative to the most-voted candidate.
    pub popularity: f64,
    /// Affordability relative to the most expensive candidate.
    pub price: f64,
    /// Share of descriptive attributes that are populated.
    pub completeness: f64,
}

/// A catalog record paired with its scores.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredRestaurant {
    /// The underlying catalog record.
    pub restaurant: Restaurant,
    /// Per-feature breakdown.
    pub features: FeatureScores,
    /// Weighted combination of [`ScoredRestaurant::features`].
    pub recommendation: f64,
}
