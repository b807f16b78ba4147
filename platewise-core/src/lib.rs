//! Core domain types for the Platewise recommendation engine.
//!
//! The crate defines the restaurant catalog, the user's search criteria, the
//! scored and ranked views derived from them, and the
//! [`CompletionProvider`] seam through which the ranking engine talks to an
//! external language model. Constructors validate their invariants and
//! return `Result` so malformed input surfaces early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalog;
pub mod completion;
mod criteria;
mod recommendation;
mod restaurant;
mod scored;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::Catalog;
pub use completion::{CompletionError, CompletionProvider, CompletionRequest};
pub use criteria::{CriteriaError, UserCriteria};
pub use recommendation::{RankingDecision, RankingSource, RecommendationResult};
pub use restaurant::{Restaurant, RestaurantError};
pub use scored::{FeatureScores, ScoredRestaurant};
