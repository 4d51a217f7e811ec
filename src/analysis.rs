//! Two-level gap analysis: territories first, then brands inside each
//! selected territory.

use crate::aggregate::{aggregate, RecordFilter};
use crate::compose::{compose, BrandSelection};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::gap::{compute_gaps, territory_totals};
use crate::pareto::select;
use crate::types::{GapEntry, RankedShare, Record, ResultRow, RunStats};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub rows: Vec<ResultRow>,
    pub stats: RunStats,
}

pub fn run(records: &[Record], cfg: &AnalysisConfig) -> Result<AnalysisOutcome> {
    cfg.validate()?;

    let filter = RecordFilter::from_config(cfg);
    let cells = aggregate(records, &filter, cfg.measure);
    let records_matched: usize = cells.values().map(|c| c.record_count).sum();
    let entries = compute_gaps(&cells, cfg.actual_basis);
    info!(
        "Aggregated {} matching records into {} cells, {} under target",
        records_matched,
        cells.len(),
        entries.len()
    );

    // Step A
    let totals = territory_totals(&entries);
    let total_gap: f64 = totals.iter().map(|t| t.gap).sum();
    let territories_considered = totals.len();
    let selected_territories = select(
        totals.into_iter().map(|t| (t.territory, t.gap)).collect(),
        &cfg.territory,
    );

    // Step B
    let brands = select_brands(&entries, &selected_territories, cfg);

    let stats = RunStats {
        records_read: records.len(),
        records_matched,
        aggregate_cells: cells.len(),
        under_performing_entries: entries.len(),
        territories_considered,
        territories_selected: selected_territories.len(),
        brands_selected: brands.iter().map(|b| b.brands.len()).sum(),
        total_gap,
    };
    info!(
        "Selected {} of {} territories and {} brands",
        stats.territories_selected, stats.territories_considered, stats.brands_selected
    );

    let rows = compose(&selected_territories, &brands);
    Ok(AnalysisOutcome { rows, stats })
}

/// Pareto-cut the brands of each selected territory against that
/// territory's own gap total.
fn select_brands(
    entries: &[GapEntry],
    territories: &[RankedShare<String>],
    cfg: &AnalysisConfig,
) -> Vec<BrandSelection> {
    let wanted: HashSet<&str> = territories.iter().map(|t| t.key.as_str()).collect();
    let mut groups: BTreeMap<&str, Vec<(String, f64)>> = BTreeMap::new();
    for e in entries.iter().filter(|e| wanted.contains(e.territory.as_str())) {
        groups
            .entry(e.territory.as_str())
            .or_default()
            .push((e.brand.clone(), e.gap));
    }

    groups
        .into_iter()
        .map(|(territory, items)| {
            let considered = items.len();
            let brands = select(items, &cfg.brand);
            debug!(
                "Territory {}: {} of {} brands selected",
                territory,
                brands.len(),
                considered
            );
            BrandSelection {
                territory: territory.to_string(),
                brands,
            }
        })
        .collect()
}
