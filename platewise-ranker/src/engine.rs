//! The ranking state machine: context, completion call, merge, fallback.

use std::collections::HashSet;
use std::fmt;

use log::{debug, info, warn};
use platewise_core::{
    CompletionProvider, RankingDecision, RankingSource, RecommendationResult, ScoredRestaurant,
    UserCriteria,
};

use crate::{RankingFailure, RecommendationReport, build_context, fallback_rank, parse, ranking_request};

/// Rank assigned to merged decisions that arrived without one.
pub const DEFAULT_LLM_RANK: u32 = 99;

/// Ranks candidate pools, preferring the completion service's judgement.
///
/// Each call to [`RankingEngine::rank`] makes at most one completion request
/// and never fails: any problem on the service path downgrades to the
/// deterministic fallback ordering and is reported in
/// [`RecommendationReport::fallback`].
///
/// # Examples
/// ```
/// use platewise_core::{Catalog, Restaurant, UserCriteria};
/// use platewise_ranker::RankingEngine;
/// use platewise_scorer::Integrator;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = Catalog::new(vec![
///     Restaurant::new("Jalsa", "Banashankari")?.with_price(800.0).with_rating(4.1),
///     Restaurant::new("San Churro Cafe", "Banashankari")?.with_price(700.0).with_rating(3.8),
/// ])?;
/// let criteria = UserCriteria::new("Banashankari", 800.0)?;
/// let pool = Integrator::new(catalog).integrate(&criteria);
///
/// let report = RankingEngine::without_provider().rank(&pool, &criteria, 5);
/// assert_eq!(report.results[0].name(), "Jalsa");
/// assert!(report.fallback.is_some());
/// # Ok(())
/// # }
/// ```
pub struct RankingEngine {
    provider: Option<Box<dyn CompletionProvider>>,
}

impl fmt::Debug for RankingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RankingEngine")
            .field("provider", &self.provider.as_ref().map(|_| "configured"))
            .finish()
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::without_provider()
    }
}

impl RankingEngine {
    /// Create an engine around an optional completion provider.
    ///
    /// Without a provider every ranking takes the fallback path.
    #[must_use]
    pub fn new(provider: Option<Box<dyn CompletionProvider>>) -> Self {
        if provider.is_none() {
            warn!("no completion provider configured; rankings will use the fallback order");
        }
        Self { provider }
    }

    /// Create an engine that always uses the fallback ordering.
    #[must_use]
    pub const fn without_provider() -> Self {
        Self { provider: None }
    }

    /// Whether a completion provider is configured.
    #[must_use]
    pub const fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Rank `pool` for `criteria`, returning at most `top_k` results.
    ///
    /// An empty pool or a `top_k` of zero yields an empty report without
    /// contacting the completion service.
    #[must_use]
    pub fn rank(
        &self,
        pool: &[ScoredRestaurant],
        criteria: &UserCriteria,
        top_k: usize,
    ) -> RecommendationReport {
        if pool.is_empty() {
            info!("{}; nothing to rank", RankingFailure::EmptyPool);
            return RecommendationReport::default();
        }
        if top_k == 0 {
            debug!("zero recommendations requested");
            return RecommendationReport::default();
        }
        match self.rank_with_service(pool, criteria, top_k) {
            Ok(results) => {
                info!("completion service ranked {} restaurants", results.len());
                RecommendationReport {
                    results,
                    fallback: None,
                }
            }
            Err(failure) => {
                warn!("falling back to deterministic ranking: {failure}");
                RecommendationReport {
                    results: fallback_rank(pool, top_k),
                    fallback: Some(failure),
                }
            }
        }
    }

    fn rank_with_service(
        &self,
        pool: &[ScoredRestaurant],
        criteria: &UserCriteria,
        top_k: usize,
    ) -> Result<Vec<RecommendationResult>, RankingFailure> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(RankingFailure::ServiceUnavailable)?;
        let request = ranking_request(criteria, &build_context(pool), top_k);
        let text = provider
            .complete(&request)
            .map_err(RankingFailure::ServiceCallFailed)?;
        let decisions = parse(&text);
        if decisions.is_empty() {
            return Err(RankingFailure::MalformedResponse);
        }
        let merged = merge(pool, &decisions, top_k);
        if merged.is_empty() {
            return Err(RankingFailure::NoMergeMatches {
                decisions: decisions.len(),
            });
        }
        Ok(merged)
    }
}

/// Map decisions back onto pool records by case-insensitive name.
///
/// Decision order is kept. Unmatched decisions are dropped, later decisions
/// naming an already merged restaurant are ignored, and the list is capped
/// at `top_k`.
#[must_use]
pub fn merge(
    pool: &[ScoredRestaurant],
    decisions: &[RankingDecision],
    top_k: usize,
) -> Vec<RecommendationResult> {
    let mut merged = Vec::with_capacity(decisions.len().min(top_k));
    let mut seen: HashSet<String> = HashSet::new();
    for decision in decisions {
        if merged.len() >= top_k {
            break;
        }
        let key = normalise(&decision.name);
        let mut matches = pool
            .iter()
            .filter(|entry| normalise(&entry.restaurant.name) == key);
        let Some(entry) = matches.next() else {
            debug!("dropping decision for unknown restaurant {:?}", decision.name);
            continue;
        };
        if matches.next().is_some() {
            debug!(
                "several candidates are named {:?}; using the highest scored",
                decision.name
            );
        }
        if !seen.insert(key) {
            debug!("ignoring repeated decision for {:?}", decision.name);
            continue;
        }
        merged.push(RecommendationResult {
            restaurant: entry.restaurant.clone(),
            features: Some(entry.features),
            recommendation: Some(entry.recommendation),
            reason: decision.reason.clone(),
            llm_rank: Some(decision.rank.unwrap_or(DEFAULT_LLM_RANK)),
            source: RankingSource::Llm,
        });
    }
    merged
}

fn normalise(name: &str) -> String {
    name.trim().to_lowercase()
}
