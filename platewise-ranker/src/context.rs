//! Compact text rendering of the candidate pool for the completion prompt.

use std::fmt::Display;

use platewise_core::{Restaurant, ScoredRestaurant};

/// Most pool entries included in one prompt.
pub const MAX_CONTEXT_ENTRIES: usize = 50;

const MISSING: &str = "N/A";

/// Render up to [`MAX_CONTEXT_ENTRIES`] pool entries, one per line.
///
/// Lines follow the pool order:
/// `"{name} | Rating: {rating} | Votes: {votes} | Price: {price} | Type: {category} | Cuisines: {cuisines}"`.
/// Absent values render as `N/A`.
#[must_use]
pub fn build_context(pool: &[ScoredRestaurant]) -> String {
    pool.iter()
        .take(MAX_CONTEXT_ENTRIES)
        .map(|entry| context_line(&entry.restaurant))
        .collect::<Vec<_>>()
        .join("\n")
}

fn context_line(restaurant: &Restaurant) -> String {
    let cuisines = if restaurant.cuisines.is_empty() {
        MISSING.to_owned()
    } else {
        restaurant.cuisines.join(", ")
    };
    format!(
        "{} | Rating: {} | Votes: {} | Price: {} | Type: {} | Cuisines: {}",
        restaurant.name,
        or_missing(restaurant.rating),
        or_missing(restaurant.votes),
        or_missing(restaurant.price),
        or_missing(restaurant.category.as_deref().filter(|c| !c.trim().is_empty())),
        cuisines,
    )
}

fn or_missing<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING.to_owned(), |value| value.to_string())
}
