//! Facade crate for the Platewise restaurant recommender.
//!
//! This crate re-exports the core domain types, the candidate scorer and the
//! ranking engine, and exposes the HTTP completion provider behind the
//! `llm-http` feature flag.
//!
//! # Examples
//! ```
//! use platewise::{Catalog, Integrator, RankingEngine, RankingSource, Restaurant, UserCriteria};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::new(vec![
//!     Restaurant::new("Jalsa", "Banashankari")?.with_price(800.0).with_rating(4.1),
//!     Restaurant::new("Spice Elephant", "Banashankari")?.with_price(600.0).with_rating(4.0),
//! ])?;
//! let criteria = UserCriteria::new("Banashankari", 800.0)?;
//! let pool = Integrator::new(catalog).integrate(&criteria);
//!
//! let report = RankingEngine::without_provider().rank(&pool, &criteria, 5);
//! assert_eq!(report.len(), 2);
//! assert_eq!(report.source(), Some(RankingSource::Fallback));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use platewise_core::{
    Catalog, CompletionError, CompletionProvider, CompletionRequest, CriteriaError,
    FeatureScores, RankingDecision, RankingSource, RecommendationResult, Restaurant,
    RestaurantError, ScoredRestaurant, UserCriteria,
};

pub use platewise_scorer::{Integrator, PoolStatistics, PriceRange};

pub use platewise_ranker::{RankingEngine, RankingFailure, RecommendationReport};

#[cfg(feature = "llm-http")]
pub use platewise_llm::{CompletionConfig, HttpCompletionProvider, ProviderBuildError};
