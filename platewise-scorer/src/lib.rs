//! Candidate selection and scoring for Platewise.
//!
//! The crate turns a [`Catalog`](platewise_core::Catalog) and a
//! [`UserCriteria`](platewise_core::UserCriteria) into an ordered candidate
//! pool:
//! - **Filtering** keeps records in the requested locality whose known price
//!   fits the budget ([`filter`]).
//! - **Feature scoring** derives rating, popularity, price and completeness
//!   sub-scores normalised across the filtered subset and blends them into a
//!   recommendation score ([`score`]).
//! - **Integration** composes both, removes duplicate listings and sorts the
//!   pool by score ([`Integrator`]), with [`statistics`] summarising the
//!   result for display.
//!
//! Everything here is deterministic and side-effect free apart from logging.

#![forbid(unsafe_code)]

mod features;
mod filter;
mod integrator;
mod statistics;

pub use features::{
    COMPLETENESS_WEIGHT, NEUTRAL_SCORE, POPULARITY_WEIGHT, PRICE_WEIGHT, RATING_WEIGHT, sanitise,
    score,
};
pub use filter::{filter, within_budget};
pub use integrator::Integrator;
pub use statistics::{PoolStatistics, PriceRange, statistics};
