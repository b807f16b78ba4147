//! Reasons the ranking engine did not use the completion service's ranking.

use platewise_core::CompletionError;
use thiserror::Error;

/// Why a ranking ran on the deterministic path or produced nothing.
///
/// These are never returned as errors: the engine logs them and records the
/// one that applied in [`crate::RecommendationReport::fallback`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingFailure {
    /// The candidate pool was empty, so there was nothing to rank.
    #[error("candidate pool is empty")]
    EmptyPool,
    /// No completion provider is configured.
    #[error("no completion service is configured")]
    ServiceUnavailable,
    /// The completion service call failed.
    ///
    /// The completion error is part of the message rather than the source
    /// chain, so reporters print it once.
    #[error("completion service call failed: {0}")]
    ServiceCallFailed(CompletionError),
    /// The completion text held no usable ranking decisions.
    #[error("completion response contained no ranking decisions")]
    MalformedResponse,
    /// None of the returned decisions named a restaurant in the pool.
    #[error("no ranking decision matched a candidate ({decisions} returned)")]
    NoMergeMatches {
        /// Number of decisions the service returned.
        decisions: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error as _;

    #[rstest]
    fn service_failures_report_the_cause_once() {
        let failure = RankingFailure::ServiceCallFailed(CompletionError::EmptyResponse);
        let rendered = failure.to_string();
        let cause = CompletionError::EmptyResponse.to_string();

        assert_eq!(rendered.matches(cause.as_str()).count(), 1);
        assert!(failure.source().is_none());
    }
}
