//! Ranking of candidate pools for Platewise.
//!
//! [`RankingEngine`] asks a [`CompletionProvider`](platewise_core::CompletionProvider)
//! to order the best candidates and justify each choice, then maps the
//! answer back onto full catalog records by name. Whenever that is not
//! possible (no provider, a failed call, unusable text or no matching names)
//! it falls back to a deterministic rating, popularity and price ordering.
//! Ranking never returns an error; [`RecommendationReport::fallback`] says
//! why the fallback ran.

#![forbid(unsafe_code)]

mod context;
mod engine;
mod error;
mod fallback;
mod parser;
mod prompt;
mod report;

pub use context::{MAX_CONTEXT_ENTRIES, build_context};
pub use engine::{DEFAULT_LLM_RANK, RankingEngine, merge};
pub use error::RankingFailure;
pub use fallback::{FALLBACK_REASON, fallback_rank};
pub use parser::{DEFAULT_REASON, parse};
pub use prompt::ranking_request;
pub use report::RecommendationReport;
