//! Deterministic feature scoring for a filtered subset.
//!
//! Each restaurant receives four sub-scores normalised against the rest of
//! the subset, then a weighted combination:
//!
//! | feature      | weight | derivation                                   |
//! |--------------|--------|----------------------------------------------|
//! | rating       | 0.4    | `rating / max rating` (floor normaliser 5.0) |
//! | popularity   | 0.3    | `ln(1 + votes) / max ln(1 + votes)`          |
//! | price        | 0.2    | `1 - price / max price`                      |
//! | completeness | 0.1    | populated descriptive fields out of six      |
//!
//! When no record in the subset carries a feature at all, every record gets
//! the neutral score `0.5` for it.

use platewise_core::{FeatureScores, Restaurant, ScoredRestaurant};

/// Weight of the rating sub-score.
pub const RATING_WEIGHT: f64 = 0.4;
/// Weight of the popularity sub-score.
pub const POPULARITY_WEIGHT: f64 = 0.3;
/// Weight of the price sub-score.
pub const PRICE_WEIGHT: f64 = 0.2;
/// Weight of the completeness sub-score.
pub const COMPLETENESS_WEIGHT: f64 = 0.1;
/// Score assigned when a feature is unavailable across the whole subset.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Normaliser used when the best rating in the subset is not positive.
const RATING_SCALE: f64 = 5.0;
/// Rating, votes, price, cuisines, category, liked dishes.
const DESCRIPTIVE_FIELDS: u8 = 6;

/// Score every record of `subset`, preserving its order.
///
/// # Examples
/// ```
/// use platewise_core::Restaurant;
/// use platewise_scorer::score;
///
/// # fn main() -> Result<(), platewise_core::RestaurantError> {
/// let cheap = Restaurant::new("Vidyarthi Bhavan", "Basavanagudi")?
///     .with_price(200.0)
///     .with_rating(4.5);
/// let dear = Restaurant::new("Karavalli", "Residency Road")?
///     .with_price(2_000.0)
///     .with_rating(4.5);
/// let scored = score(&[&cheap, &dear]);
/// assert!(scored[0].features.price > scored[1].features.price);
/// assert_eq!(scored[0].features.rating, 1.0);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn score(subset: &[&Restaurant]) -> Vec<ScoredRestaurant> {
    let normalisers = Normalisers::from_subset(subset);
    subset
        .iter()
        .map(|restaurant| score_one(restaurant, &normalisers))
        .collect()
}

/// Clamp a raw score into `0.0..=1.0`, mapping non-finite values to `0.0`.
#[must_use]
pub fn sanitise(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

/// Subset-wide maxima; `None` marks a feature absent from every record.
#[derive(Debug, Clone, Copy)]
struct Normalisers {
    rating: Option<f64>,
    popularity: Option<f64>,
    price: Option<f64>,
}

impl Normalisers {
    fn from_subset(subset: &[&Restaurant]) -> Self {
        let rating = max_of(subset.iter().filter_map(|r| r.rating)).map(|max| {
            if max > 0.0 { max } else { RATING_SCALE }
        });
        let popularity = max_of(subset.iter().filter_map(|r| r.votes).map(log_votes));
        let price = max_of(subset.iter().filter_map(|r| r.price)).filter(|max| *max > 0.0);
        Self {
            rating,
            popularity,
            price,
        }
    }
}

fn max_of(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.filter(|value| value.is_finite()).reduce(f64::max)
}

#[expect(
    clippy::cast_precision_loss,
    reason = "vote counts far beyond 2^52 do not occur; log scaling absorbs any loss"
)]
fn log_votes(votes: u64) -> f64 {
    (votes as f64).ln_1p()
}

fn score_one(restaurant: &Restaurant, normalisers: &Normalisers) -> ScoredRestaurant {
    let features = FeatureScores {
        rating: rating_score(restaurant, normalisers.rating),
        popularity: popularity_score(restaurant, normalisers.popularity),
        price: price_score(restaurant, normalisers.price),
        completeness: completeness_score(restaurant),
    };
    ScoredRestaurant {
        restaurant: restaurant.clone(),
        recommendation: combine(&features),
        features,
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "rating normalisation divides by the subset maximum"
)]
fn rating_score(restaurant: &Restaurant, max: Option<f64>) -> f64 {
    max.map_or(NEUTRAL_SCORE, |max| {
        sanitise(restaurant.rating.unwrap_or(0.0) / max)
    })
}

#[expect(
    clippy::float_arithmetic,
    reason = "popularity normalisation divides by the subset maximum"
)]
fn popularity_score(restaurant: &Restaurant, max: Option<f64>) -> f64 {
    let Some(max) = max else {
        return NEUTRAL_SCORE;
    };
    if max <= 0.0 {
        return 0.0;
    }
    sanitise(restaurant.votes.map_or(0.0, log_votes) / max)
}

#[expect(
    clippy::float_arithmetic,
    reason = "price affordability is the complement of a normalised price"
)]
fn price_score(restaurant: &Restaurant, max: Option<f64>) -> f64 {
    max.map_or(NEUTRAL_SCORE, |max| {
        sanitise(1.0 - restaurant.price.unwrap_or(max) / max)
    })
}

#[expect(
    clippy::float_arithmetic,
    reason = "completeness is a ratio of populated fields"
)]
fn completeness_score(restaurant: &Restaurant) -> f64 {
    let present = [
        restaurant.rating.is_some(),
        restaurant.votes.is_some(),
        restaurant.price.is_some(),
        !restaurant.cuisines.is_empty(),
        restaurant
            .category
            .as_deref()
            .is_some_and(|category| !category.trim().is_empty()),
        !restaurant.dishes_liked.is_empty(),
    ]
    .into_iter()
    .filter(|flag| *flag)
    .fold(0_u8, |count, _| count.saturating_add(1));
    sanitise(f64::from(present) / f64::from(DESCRIPTIVE_FIELDS))
}

#[expect(
    clippy::float_arithmetic,
    reason = "the recommendation score is a weighted sum"
)]
fn combine(features: &FeatureScores) -> f64 {
    sanitise(
        RATING_WEIGHT * features.rating
            + POPULARITY_WEIGHT * features.popularity
            + PRICE_WEIGHT * features.price
            + COMPLETENESS_WEIGHT * features.completeness,
    )
}
