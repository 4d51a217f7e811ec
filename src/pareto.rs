//! Pareto ranking and cut.
//!
//! One routine serves both levels of the analysis: territories against the
//! grand total, and brands against their own territory's total. Callers pass
//! the group they want ranked; totals are never shared between calls.

use crate::config::ParetoParams;
use crate::types::RankedShare;

/// Slack for comparing running shares against the threshold.
pub const SHARE_TOLERANCE: f64 = 1e-9;

/// Rank every item, descending by value, ties by key ascending.
///
/// Shares are fractions of the group total. When the total is zero or
/// negative every share is 0.
pub fn rank<K: Ord>(mut items: Vec<(K, f64)>) -> Vec<RankedShare<K>> {
    items.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let total: f64 = items.iter().map(|(_, v)| *v).sum();
    let share = |v: f64| if total > 0.0 { v / total } else { 0.0 };

    let mut running = 0.0;
    items
        .into_iter()
        .enumerate()
        .map(|(idx, (key, value))| {
            running += value;
            RankedShare {
                key,
                value,
                rank: idx + 1,
                contribution_pct: share(value),
                cumulative_pct: share(running),
            }
        })
        .collect()
}

/// Rank the items and keep the Pareto prefix.
///
/// An item is kept when its rank is within `min_count`, when its cumulative
/// share is within `threshold`, or when the running share before it has not
/// yet reached `threshold`. The last branch admits the item that crosses the
/// threshold, so a single dominant item is still selected. The scan stops at
/// the first item no branch admits, which keeps the result a prefix of the
/// ranking even when some values are negative.
pub fn select<K: Ord>(items: Vec<(K, f64)>, params: &ParetoParams) -> Vec<RankedShare<K>> {
    let mut reached = false;
    let mut out = Vec::new();
    for share in rank(items) {
        let within = share.cumulative_pct <= params.threshold + SHARE_TOLERANCE;
        let by_threshold = within || !reached;
        let by_count = share.rank <= params.min_count;
        if !(by_threshold || by_count) {
            break;
        }
        if share.cumulative_pct >= params.threshold - SHARE_TOLERANCE {
            reached = true;
        }
        out.push(share);
    }
    out
}
