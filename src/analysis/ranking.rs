use crate::models::ConditionEstimate;

/// Sort conditions by confidence, descending.
///
/// Pure function over the set — nothing is added or removed. Tie order
/// for equal confidences is unspecified (unstable sort); callers must
/// not depend on it.
pub fn rank_conditions(mut conditions: Vec<ConditionEstimate>) -> Vec<ConditionEstimate> {
    conditions.sort_unstable_by(|a, b| b.confidence.total_cmp(&a.confidence));
    conditions
}

/// Check the ranking invariant: adjacent confidences never increase.
pub fn is_ranked(conditions: &[ConditionEstimate]) -> bool {
    conditions
        .windows(2)
        .all(|pair| pair[0].confidence >= pair[1].confidence)
}
