//! Filter, score, deduplicate and order the candidate pool.

use std::collections::HashSet;

use log::{info, warn};
use platewise_core::{Catalog, ScoredRestaurant, UserCriteria};

use crate::{PoolStatistics, filter, score, statistics};

/// Builds candidate pools from a shared catalog.
///
/// The integrator holds the catalog read-only; each call to
/// [`Integrator::integrate`] produces an independent pool.
///
/// # Examples
/// ```
/// use platewise_core::{Catalog, Restaurant, UserCriteria};
/// use platewise_scorer::Integrator;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = Catalog::new(vec![
///     Restaurant::new("Jalsa", "Banashankari")?.with_price(800.0).with_rating(4.1),
///     Restaurant::new("Spice Elephant", "Banashankari")?.with_price(600.0).with_rating(4.0),
/// ])?;
/// let integrator = Integrator::new(catalog);
/// let pool = integrator.integrate(&UserCriteria::new("Banashankari", 800.0)?);
/// assert_eq!(pool.len(), 2);
/// assert!(pool[0].recommendation >= pool[1].recommendation);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Integrator {
    catalog: Catalog,
}

impl Integrator {
    /// Wrap a catalog.
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Borrow the underlying catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Produce the scored candidate pool for `criteria`.
    ///
    /// Records are filtered by locality and budget and scored against the
    /// whole filtered subset. Duplicates sharing a name and primary locality
    /// keep their first catalog occurrence. The pool is ordered by
    /// recommendation score, highest first; equal scores keep catalog order.
    #[must_use]
    pub fn integrate(&self, criteria: &UserCriteria) -> Vec<ScoredRestaurant> {
        let subset = filter(&self.catalog, criteria);
        if subset.is_empty() {
            warn!(
                "no restaurants in {} within a budget of {}",
                criteria.city(),
                criteria.max_price()
            );
            return Vec::new();
        }

        let mut pool = dedup_first(score(&subset));
        pool.sort_by(|lhs, rhs| rhs.recommendation.total_cmp(&lhs.recommendation));
        info!(
            "integrated {} candidates for {} (budget {})",
            pool.len(),
            criteria.city(),
            criteria.max_price()
        );
        pool
    }

    /// Summarise a pool produced by [`Integrator::integrate`].
    #[must_use]
    pub fn statistics(pool: &[ScoredRestaurant]) -> PoolStatistics {
        statistics(pool)
    }
}

/// Drop entries whose `(name, location)` pair was already seen.
fn dedup_first(scored: Vec<ScoredRestaurant>) -> Vec<ScoredRestaurant> {
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(scored.len());
    scored
        .into_iter()
        .filter(|entry| {
            seen.insert((
                entry.restaurant.name.clone(),
                entry.restaurant.location.clone(),
            ))
        })
        .collect()
}
