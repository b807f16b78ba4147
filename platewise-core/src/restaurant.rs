//! Catalog records describing a single restaurant.
//!
//! Numeric attributes are optional: an absent rating, vote count or price is
//! kept as `None` so scorers can tell "unknown" apart from "zero".

use thiserror::Error;

/// One restaurant as supplied by the upstream catalog producer.
///
/// `location` is the primary locality (usually the neighbourhood) and `city`
/// the secondary locality the listing was filed under. Either may hold the
/// locality a user searches for.
///
/// # Examples
/// ```
/// use platewise_core::Restaurant;
///
/// # fn main() -> Result<(), platewise_core::RestaurantError> {
/// let restaurant = Restaurant::new("Truffles", "Koramangala")?
///     .with_city("Bangalore")
///     .with_price(900.0)
///     .with_rating(4.6);
/// assert_eq!(restaurant.price, Some(900.0));
/// assert!(restaurant.votes.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Restaurant {
    /// Display name, also used to match ranking decisions.
    pub name: String,
    /// Primary locality.
    pub location: String,
    /// Secondary locality.
    pub city: String,
    /// Approximate cost for two people.
    pub price: Option<f64>,
    /// Aggregate rating on a 0–5 scale.
    pub rating: Option<f64>,
    /// Number of votes behind the rating.
    pub votes: Option<u64>,
    /// Cuisine tags, in catalog order.
    pub cuisines: Vec<String>,
    /// Dishes patrons mention most often.
    pub dishes_liked: Vec<String>,
    /// Restaurant type, e.g. "Casual Dining".
    pub category: Option<String>,
    /// Whether online ordering is offered.
    pub online_order: bool,
    /// Whether tables can be booked.
    pub book_table: bool,
    /// Phone or other contact string.
    pub contact: Option<String>,
    /// Street address.
    pub address: Option<String>,
}

/// Errors returned by [`Restaurant::new`] and [`Restaurant::validate`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RestaurantError {
    /// The name was empty or whitespace.
    #[error("restaurant name must not be empty")]
    EmptyName,
}

impl Restaurant {
    /// Construct a restaurant with a name and primary locality.
    ///
    /// Every other attribute starts absent.
    ///
    /// # Errors
    /// Returns [`RestaurantError::EmptyName`] when `name` is blank.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<Self, RestaurantError> {
        let restaurant = Self {
            name: name.into(),
            location: location.into(),
            ..Self::default()
        };
        restaurant.validate()?;
        Ok(restaurant)
    }

    /// Check the record invariants.
    ///
    /// Deserialised records bypass [`Restaurant::new`], so loaders call this
    /// explicitly.
    ///
    /// # Errors
    /// Returns [`RestaurantError::EmptyName`] when the name is blank.
    pub fn validate(&self) -> Result<(), RestaurantError> {
        if self.name.trim().is_empty() {
            return Err(RestaurantError::EmptyName);
        }
        Ok(())
    }

    /// Set the secondary locality.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Set the cost for two.
    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the rating.
    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the vote count.
    #[must_use]
    pub fn with_votes(mut self, votes: u64) -> Self {
        self.votes = Some(votes);
        self
    }

    /// Replace the cuisine tags.
    #[must_use]
    pub fn with_cuisines<I, S>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cuisines = cuisines.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the liked-dish tags.
    #[must_use]
    pub fn with_dishes_liked<I, S>(mut self, dishes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dishes_liked = dishes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the restaurant type.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Report whether the record lists `locality` as either of its
    /// localities, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    /// ```
    /// use platewise_core::Restaurant;
    ///
    /// let restaurant = Restaurant::new("Truffles", "Koramangala")
    ///     .expect("valid restaurant")
    ///     .with_city("Bangalore");
    /// assert!(restaurant.is_in_locality("bangalore"));
    /// assert!(restaurant.is_in_locality("KORAMANGALA"));
    /// assert!(!restaurant.is_in_locality("Indiranagar"));
    /// ```
    #[must_use]
    pub fn is_in_locality(&self, locality: &str) -> bool {
        let wanted = locality.trim().to_lowercase();
        [&self.location, &self.city]
            .into_iter()
            .any(|field| field.trim().to_lowercase() == wanted)
    }
}
