//! The user's search request.

use thiserror::Error;

/// A locality and budget supplied by the caller.
///
/// # Examples
/// ```
/// use platewise_core::UserCriteria;
///
/// # fn main() -> Result<(), platewise_core::CriteriaError> {
/// let criteria = UserCriteria::new("  Banashankari ", 800.0)?;
/// assert_eq!(criteria.city(), "Banashankari");
/// assert_eq!(criteria.max_price(), 800.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UserCriteria {
    city: String,
    max_price: f64,
}

/// Errors returned by [`UserCriteria::new`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CriteriaError {
    /// The city was empty after trimming.
    #[error("city must not be empty")]
    EmptyCity,
    /// The budget was not a finite, strictly positive number.
    #[error("maximum price must be a positive number, got {value}")]
    InvalidMaxPrice {
        /// Rejected value.
        value: f64,
    },
}

impl UserCriteria {
    /// Validate and construct criteria.
    ///
    /// # Errors
    /// Returns [`CriteriaError::EmptyCity`] for a blank city and
    /// [`CriteriaError::InvalidMaxPrice`] when `max_price` is not finite or
    /// not above zero.
    pub fn new(city: impl Into<String>, max_price: f64) -> Result<Self, CriteriaError> {
        let raw = city.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CriteriaError::EmptyCity);
        }
        if !max_price.is_finite() || max_price <= 0.0 {
            return Err(CriteriaError::InvalidMaxPrice { value: max_price });
        }
        Ok(Self {
            city: trimmed.to_owned(),
            max_price,
        })
    }

    /// Requested locality.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Maximum cost for two.
    #[must_use]
    pub const fn max_price(&self) -> f64 {
        self.max_price
    }
}
