//! Summary figures for a candidate pool.

use platewise_core::ScoredRestaurant;
use serde::Serialize;

/// Cheapest and dearest price in a pool.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PriceRange {
    /// Lowest known price.
    pub min: f64,
    /// Highest known price.
    pub max: f64,
}

/// Aggregate figures shown alongside recommendations.
///
/// Means and the price range only consider records where the value is
/// known. Every numeric field is zero for an empty pool.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PoolStatistics {
    /// Number of candidates.
    pub count: usize,
    /// Mean rating of rated candidates.
    pub mean_rating: f64,
    /// Mean price of priced candidates.
    pub mean_price: f64,
    /// Price span of priced candidates.
    pub price_range: PriceRange,
}

/// Summarise `pool`.
///
/// # Examples
/// ```
/// use platewise_scorer::statistics;
///
/// let stats = statistics(&[]);
/// assert_eq!(stats.count, 0);
/// assert_eq!(stats.mean_price, 0.0);
/// ```
#[must_use]
pub fn statistics(pool: &[ScoredRestaurant]) -> PoolStatistics {
    let ratings: Vec<f64> = pool
        .iter()
        .filter_map(|entry| entry.restaurant.rating)
        .collect();
    let prices: Vec<f64> = pool
        .iter()
        .filter_map(|entry| entry.restaurant.price)
        .collect();
    let price_range = match (
        prices.iter().copied().reduce(f64::min),
        prices.iter().copied().reduce(f64::max),
    ) {
        (Some(min), Some(max)) => PriceRange { min, max },
        _ => PriceRange::default(),
    };
    PoolStatistics {
        count: pool.len(),
        mean_rating: mean(&ratings),
        mean_price: mean(&prices),
        price_range,
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "averaging divides a float sum by a small element count"
)]
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
