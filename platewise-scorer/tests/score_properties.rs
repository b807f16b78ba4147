//! Property-based tests for candidate selection and scoring.
//!
//! # Invariants tested
//!
//! - **Score range:** every sub-score and recommendation lies in `[0, 1]`.
//! - **Budget monotonicity:** raising the budget never removes a candidate.
//! - **Known prices only:** restaurants without a price never pass the filter.
//! - **No duplicates:** a pool never repeats a `(name, location)` pair.
//! - **Ordering:** pools are sorted by descending recommendation score.

use std::collections::HashSet;

use platewise_core::{Catalog, Restaurant, UserCriteria};
use platewise_scorer::{Integrator, filter, score};
use proptest::prelude::*;

const LOCALITIES: [&str; 3] = ["Banashankari", "Jayanagar", "Koramangala"];

/// Strategy for one restaurant with optional numeric fields.
fn restaurant_strategy() -> impl Strategy<Value = Restaurant> {
    (
        0_usize..6,
        0_usize..LOCALITIES.len(),
        proptest::option::of(-100.0_f64..3_000.0),
        proptest::option::of(0.0_f64..5.0),
        proptest::option::of(0_u64..50_000),
        any::<bool>(),
    )
        .prop_map(|(name, locality, price, rating, votes, described)| {
            let mut restaurant = Restaurant {
                name: format!("Restaurant {name}"),
                location: LOCALITIES[locality].to_owned(),
                city: "Bangalore".to_owned(),
                price,
                rating,
                votes,
                ..Restaurant::default()
            };
            if described {
                restaurant = restaurant
                    .with_cuisines(["South Indian"])
                    .with_category("Quick Bites");
            }
            restaurant
        })
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    proptest::collection::vec(restaurant_strategy(), 0..24).prop_map(|records| {
        #[expect(clippy::expect_used, reason = "generated records always carry a name")]
        Catalog::new(records).expect("generated catalog is valid")
    })
}

fn criteria(city: &str, budget: f64) -> UserCriteria {
    #[expect(clippy::expect_used, reason = "test budgets are positive")]
    UserCriteria::new(city, budget).expect("criteria should be valid")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: every score stays within the unit interval.
    #[test]
    fn scores_are_bounded(records in proptest::collection::vec(restaurant_strategy(), 0..24)) {
        let subset: Vec<&Restaurant> = records.iter().collect();
        for entry in score(&subset) {
            for value in [
                entry.features.rating,
                entry.features.popularity,
                entry.features.price,
                entry.features.completeness,
                entry.recommendation,
            ] {
                prop_assert!((0.0..=1.0).contains(&value), "score {value} out of range");
            }
        }
    }

    /// Property: a larger budget admits a superset of restaurants.
    #[test]
    fn filter_is_monotonic_in_budget(
        catalog in catalog_strategy(),
        locality in 0_usize..LOCALITIES.len(),
        low in 1_u32..1_500,
        extra in 0_u32..1_500,
    ) {
        let city = LOCALITIES[locality];
        let narrow: HashSet<*const Restaurant> = filter(&catalog, &criteria(city, f64::from(low)))
            .into_iter()
            .map(std::ptr::from_ref)
            .collect();
        let wide: HashSet<*const Restaurant> = filter(&catalog, &criteria(city, f64::from(low.saturating_add(extra))))
            .into_iter()
            .map(std::ptr::from_ref)
            .collect();
        prop_assert!(narrow.is_subset(&wide));
    }

    /// Property: unpriced restaurants never survive filtering.
    #[test]
    fn unpriced_restaurants_are_excluded(
        catalog in catalog_strategy(),
        locality in 0_usize..LOCALITIES.len(),
        budget in 1.0_f64..5_000.0,
    ) {
        let matched = filter(&catalog, &criteria(LOCALITIES[locality], budget));
        prop_assert!(matched.iter().all(|restaurant| restaurant
            .price
            .is_some_and(|price| price <= budget)));
    }

    /// Property: pools are duplicate-free and ordered by score.
    #[test]
    fn pools_are_unique_and_sorted(
        catalog in catalog_strategy(),
        budget in 1.0_f64..5_000.0,
    ) {
        let pool = Integrator::new(catalog).integrate(&criteria("Bangalore", budget));

        let mut seen = HashSet::new();
        for entry in &pool {
            prop_assert!(
                seen.insert((entry.restaurant.name.clone(), entry.restaurant.location.clone())),
                "duplicate {} in {}",
                entry.restaurant.name,
                entry.restaurant.location
            );
        }
        prop_assert!(
            pool.windows(2)
                .all(|pair| pair[0].recommendation >= pair[1].recommendation)
        );
    }
}
