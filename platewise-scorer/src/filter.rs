//! Select catalog records matching a locality and budget.

use log::debug;
use platewise_core::{Catalog, Restaurant, UserCriteria};

/// Return the records in `catalog` that sit in the requested locality and
/// fit the budget, in catalog order.
///
/// A record matches the locality when either its primary or secondary
/// locality equals the requested city, ignoring case. Records without a
/// price never pass the budget check: an unknown price is not assumed
/// affordable.
///
/// # Examples
/// ```
/// use platewise_core::{Catalog, Restaurant, UserCriteria};
/// use platewise_scorer::filter;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = Catalog::new(vec![
///     Restaurant::new("Jalsa", "Banashankari")?.with_price(800.0),
///     Restaurant::new("Onesta", "Banashankari")?,
/// ])?;
/// let criteria = UserCriteria::new("banashankari", 900.0)?;
/// let matches = filter(&catalog, &criteria);
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].name, "Jalsa");
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn filter<'a>(catalog: &'a Catalog, criteria: &UserCriteria) -> Vec<&'a Restaurant> {
    let in_city: Vec<&Restaurant> = catalog
        .iter()
        .filter(|restaurant| restaurant.is_in_locality(criteria.city()))
        .collect();
    debug!(
        "{} of {} restaurants are in {}",
        in_city.len(),
        catalog.len(),
        criteria.city()
    );

    let affordable: Vec<&Restaurant> = in_city
        .into_iter()
        .filter(|restaurant| within_budget(restaurant, criteria.max_price()))
        .collect();
    debug!(
        "{} restaurants in {} cost at most {}",
        affordable.len(),
        criteria.city(),
        criteria.max_price()
    );
    affordable
}

/// Report whether the record has a known price no greater than `max_price`.
#[must_use]
pub fn within_budget(restaurant: &Restaurant, max_price: f64) -> bool {
    restaurant.price.is_some_and(|price| price <= max_price)
}
