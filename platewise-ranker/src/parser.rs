//! Lenient decoding of ranking decisions from completion text.
//!
//! Language models frequently wrap JSON in markdown fences or omit fields.
//! Parsing therefore never fails: anything unusable yields an empty list or
//! drops the offending element.

use log::{debug, warn};
use platewise_core::RankingDecision;
use serde_json::{Map, Value};

/// Reason attached to decisions that arrive without one.
pub const DEFAULT_REASON: &str = "Recommended by AI.";

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// Decode the ranking decisions contained in `raw`.
///
/// Returns an empty list when the text is not a JSON array. Array elements
/// without a non-blank string `name` are skipped.
///
/// # Examples
/// ```
/// use platewise_ranker::parse;
///
/// let decisions = parse("```json\n[{\"name\":\"Jalsa\",\"rank\":1,\"reason\":\"Buffet\"}]\n```");
/// assert_eq!(decisions.len(), 1);
/// assert_eq!(decisions[0].rank, Some(1));
///
/// assert!(parse("not json").is_empty());
/// ```
#[must_use]
pub fn parse(raw: &str) -> Vec<RankingDecision> {
    let payload = strip_fence(raw.trim());
    let value: Value = match serde_json::from_str(payload) {
        Ok(value) => value,
        Err(err) => {
            warn!("completion text is not valid JSON: {err}");
            debug!("raw completion text: {raw}");
            return Vec::new();
        }
    };
    let Value::Array(elements) = value else {
        warn!("completion JSON is not an array");
        return Vec::new();
    };
    let total = elements.len();
    let decisions: Vec<RankingDecision> = elements.iter().filter_map(decision_from).collect();
    if decisions.len() < total {
        debug!(
            "skipped {} of {total} ranking entries without a usable name",
            total.saturating_sub(decisions.len())
        );
    }
    decisions
}

/// Return the body of the first markdown fence, preferring one tagged `json`.
///
/// Unterminated fences leave the text untouched.
fn strip_fence(text: &str) -> &str {
    if text.contains(JSON_FENCE) {
        return fenced_body(text, JSON_FENCE).unwrap_or(text);
    }
    if text.contains(FENCE) {
        return fenced_body(text, FENCE).map_or(text, drop_info_string);
    }
    text
}

fn fenced_body<'a>(text: &'a str, opening: &str) -> Option<&'a str> {
    let (_, rest) = text.split_once(opening)?;
    let (body, _) = rest.split_once(FENCE)?;
    Some(body.trim())
}

/// Drop a leading language tag such as `JSON` or `text` from a fence body.
fn drop_info_string(body: &str) -> &str {
    match body.split_once('\n') {
        Some((first, rest)) if is_info_string(first) => rest.trim(),
        _ => body,
    }
}

fn is_info_string(line: &str) -> bool {
    let tag = line.trim();
    !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+'))
}

fn decision_from(element: &Value) -> Option<RankingDecision> {
    let fields = element.as_object()?;
    let name = fields.get("name")?.as_str()?.trim();
    if name.is_empty() {
        return None;
    }
    Some(RankingDecision {
        name: name.to_owned(),
        rank: fields.get("rank").and_then(rank_from),
        reason: reason_from(fields),
    })
}

/// Accept positive integers given as numbers, integral floats or strings.
fn rank_from(value: &Value) -> Option<u32> {
    let rank = match value {
        Value::Number(number) => number.as_u64().or_else(|| integral(number.as_f64()?)),
        Value::String(text) => text.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    u32::try_from(rank).ok().filter(|rank| *rank > 0)
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "only positive integral values inside the u32 range are converted"
)]
fn integral(value: f64) -> Option<u64> {
    let whole = value.fract().abs() < f64::EPSILON;
    (whole && value > 0.0 && value <= f64::from(u32::MAX)).then_some(value as u64)
}

fn reason_from(fields: &Map<String, Value>) -> String {
    fields
        .get("reason")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|reason| !reason.is_empty())
        .unwrap_or(DEFAULT_REASON)
        .to_owned()
}
