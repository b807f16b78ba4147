//! Read-only restaurant catalog shared across requests.

use std::sync::Arc;

use crate::{Restaurant, RestaurantError};

/// Immutable, cheaply clonable collection of restaurants.
///
/// Catalog order is significant: every stable tie-break downstream falls back
/// to the position a record holds here. Clones share the same backing
/// storage, so concurrent requests read one copy without locking.
///
/// # Examples
/// ```
/// use platewise_core::{Catalog, Restaurant};
///
/// # fn main() -> Result<(), platewise_core::RestaurantError> {
/// let catalog = Catalog::new(vec![
///     Restaurant::new("Truffles", "Koramangala")?,
///     Restaurant::new("Toit", "Indiranagar")?,
/// ])?;
/// let shared = catalog.clone();
/// assert_eq!(shared.len(), 2);
/// assert_eq!(catalog.localities(), vec!["Indiranagar", "Koramangala"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    restaurants: Arc<[Restaurant]>,
}

impl Catalog {
    /// Validate and wrap a list of restaurants.
    ///
    /// # Errors
    /// Returns the first [`RestaurantError`] raised by
    /// [`Restaurant::validate`].
    pub fn new(restaurants: Vec<Restaurant>) -> Result<Self, RestaurantError> {
        for restaurant in &restaurants {
            restaurant.validate()?;
        }
        Ok(Self {
            restaurants: restaurants.into(),
        })
    }

    /// Borrow the records in catalog order.
    #[must_use]
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Iterate over the records in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Restaurant> {
        self.restaurants.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    /// Report whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Distinct, non-blank localities sorted case-insensitively.
    ///
    /// Both the primary `location` and the secondary `city` of every record
    /// are listed, since either one can be searched. Localities differing
    /// only by case collapse onto the first spelling seen in catalog order.
    #[must_use]
    pub fn localities(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut localities: Vec<&str> = self
            .restaurants
            .iter()
            .flat_map(|restaurant| [restaurant.location.trim(), restaurant.city.trim()])
            .filter(|location| !location.is_empty())
            .filter(|location| seen.insert(location.to_lowercase()))
            .collect();
        localities.sort_by_cached_key(|location| location.to_lowercase());
        localities
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Restaurant;
    type IntoIter = std::slice::Iter<'a, Restaurant>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
