use crate::aggregate::CellKey;
use crate::config::ActualBasis;
use crate::types::{AggregateCell, GapEntry, TerritoryTotal};
use crate::util::safe_ratio;
use std::collections::{BTreeMap, HashMap};

/// Under-performers only: entries at or above 100% achievement are dropped.
pub const ACHIEVEMENT_CUTOFF: f64 = 100.0;

/// Derive gap and achievement per cell, keeping under-performing cells.
///
/// A non-positive target gives an achievement of 0, so such cells are always
/// kept; their gap is negative whenever anything was sold. Gaps are not clamped.
pub fn compute_gaps(cells: &HashMap<CellKey, AggregateCell>, basis: ActualBasis) -> Vec<GapEntry> {
    let mut out: Vec<GapEntry> = cells
        .iter()
        .filter_map(|((territory, brand), cell)| {
            let actual = match basis {
                ActualBasis::Primary => cell.primary_sum,
                ActualBasis::Secondary => cell.secondary_sum,
            };
            let achievement_pct = safe_ratio(actual, cell.target_sum) * 100.0;
            if achievement_pct >= ACHIEVEMENT_CUTOFF {
                return None;
            }
            Some(GapEntry {
                territory: territory.clone(),
                brand: brand.clone(),
                gap: cell.target_sum - actual,
                achievement_pct,
            })
        })
        .collect();
    // HashMap iteration order is arbitrary; pin it so float sums downstream repeat exactly.
    out.sort_by(|a, b| a.territory.cmp(&b.territory).then_with(|| a.brand.cmp(&b.brand)));
    out
}

/// Sum entry gaps per territory, in territory order.
pub fn territory_totals(entries: &[GapEntry]) -> Vec<TerritoryTotal> {
    let mut map: BTreeMap<&str, f64> = BTreeMap::new();
    for e in entries {
        *map.entry(e.territory.as_str()).or_insert(0.0) += e.gap;
    }
    map.into_iter()
        .map(|(territory, gap)| TerritoryTotal {
            territory: territory.to_string(),
            gap,
        })
        .collect()
}
