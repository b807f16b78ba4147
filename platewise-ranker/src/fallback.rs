//! Deterministic ordering used whenever the completion service cannot rank.

use std::cmp::Ordering;

use platewise_core::{RankingSource, RecommendationResult, ScoredRestaurant};

/// Reason attached to every fallback recommendation.
pub const FALLBACK_REASON: &str = "Best match based on rating and popularity.";

/// Order `pool` by rating, then votes (both descending), then price
/// (ascending) and keep the first `top_k`.
///
/// Missing values sort after present ones for every key. The sort is stable,
/// so entries with identical keys keep their pool order.
#[must_use]
pub fn fallback_rank(pool: &[ScoredRestaurant], top_k: usize) -> Vec<RecommendationResult> {
    let mut ordered: Vec<&ScoredRestaurant> = pool.iter().collect();
    ordered.sort_by(|lhs, rhs| compare(lhs, rhs));
    ordered
        .into_iter()
        .take(top_k)
        .map(|entry| RecommendationResult {
            restaurant: entry.restaurant.clone(),
            features: Some(entry.features),
            recommendation: Some(entry.recommendation),
            reason: FALLBACK_REASON.to_owned(),
            llm_rank: None,
            source: RankingSource::Fallback,
        })
        .collect()
}

fn compare(lhs: &ScoredRestaurant, rhs: &ScoredRestaurant) -> Ordering {
    let (left, right) = (&lhs.restaurant, &rhs.restaurant);
    present_first(left.rating, right.rating, |a, b| b.total_cmp(&a))
        .then_with(|| present_first(left.votes, right.votes, |a, b| b.cmp(&a)))
        .then_with(|| present_first(left.price, right.price, |a, b| a.total_cmp(&b)))
}

fn present_first<T>(lhs: Option<T>, rhs: Option<T>, cmp: impl FnOnce(T, T) -> Ordering) -> Ordering {
    match (lhs, rhs) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
