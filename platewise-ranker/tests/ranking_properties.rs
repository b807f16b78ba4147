//! Property-based tests for response parsing and ranking.
//!
//! # Invariants tested
//!
//! - **Round trip:** serialised decision lists parse back unchanged, fenced
//!   or not.
//! - **Garbage tolerance:** arbitrary text never panics the parser.
//! - **Result cap:** ranking never returns more than `top_k` results,
//!   whatever the completion service replies.

use platewise_core::test_support::{StubCompletionProvider, restaurant};
use platewise_core::{FeatureScores, RankingDecision, ScoredRestaurant, UserCriteria};
use platewise_ranker::{RankingEngine, parse};
use proptest::prelude::*;

fn decision_strategy() -> impl Strategy<Value = RankingDecision> {
    (
        "[A-Za-z][A-Za-z0-9 ]{0,20}[A-Za-z0-9]",
        proptest::option::of(1_u32..1_000),
        "[A-Za-z][A-Za-z0-9 ,.]{0,40}[A-Za-z.]",
    )
        .prop_map(|(name, rank, reason)| RankingDecision { name, rank, reason })
}

fn pool_strategy() -> impl Strategy<Value = Vec<ScoredRestaurant>> {
    proptest::collection::vec((0_usize..12, proptest::option::of(0.0_f64..5.0)), 0..15).prop_map(
        |entries| {
            entries
                .into_iter()
                .map(|(name, rating)| {
                    let mut record = restaurant(&format!("R{name}"), "Banashankari");
                    record.rating = rating;
                    ScoredRestaurant {
                        restaurant: record,
                        features: FeatureScores::default(),
                        recommendation: 0.5,
                    }
                })
                .collect()
        },
    )
}

/// Replies that mention pool names, nonsense and broken JSON.
fn reply_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::collection::vec((0_usize..15, 0_u32..20), 0..20).prop_map(|picks| {
            let items: Vec<String> = picks
                .into_iter()
                .map(|(name, rank)| format!(r#"{{"name":"r{name}","rank":{rank},"reason":"ok"}}"#))
                .collect();
            format!("```json\n[{}]\n```", items.join(","))
        }),
        ".*",
        Just("[{\"name\":".to_owned()),
    ]
}

fn criteria() -> UserCriteria {
    #[expect(clippy::expect_used, reason = "fixed criteria are valid")]
    UserCriteria::new("Banashankari", 800.0).expect("criteria")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: serialising decisions and parsing them back is lossless.
    #[test]
    fn parse_round_trips(
        decisions in proptest::collection::vec(decision_strategy(), 0..10),
        fenced in any::<bool>(),
    ) {
        #[expect(clippy::expect_used, reason = "decisions always serialise")]
        let json = serde_json::to_string(&decisions).expect("serialise decisions");
        let raw = if fenced { format!("```json\n{json}\n```") } else { json };
        prop_assert_eq!(parse(&raw), decisions);
    }

    /// Property: the parser accepts any text without panicking.
    #[test]
    fn parse_tolerates_garbage(raw in ".*") {
        let decisions = parse(&raw);
        prop_assert!(decisions.iter().all(|d| !d.name.trim().is_empty()));
    }

    /// Property: ranking respects `top_k` on every path.
    #[test]
    fn rank_is_capped(
        pool in pool_strategy(),
        reply in reply_strategy(),
        top_k in 0_usize..8,
        with_service in any::<bool>(),
    ) {
        let engine = if with_service {
            RankingEngine::new(Some(Box::new(StubCompletionProvider::with_text(reply))))
        } else {
            RankingEngine::without_provider()
        };
        let report = engine.rank(&pool, &criteria(), top_k);
        prop_assert!(report.len() <= top_k);
        prop_assert!(report.len() <= pool.len());
        if !pool.is_empty() && top_k > 0 {
            prop_assert!(!report.is_empty());
        }
    }
}
