use crate::types::{Level, RankedShare, ResultRow};
use std::cmp::Ordering;

/// Brands selected within one territory, shares relative to that territory.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandSelection {
    pub territory: String,
    pub brands: Vec<RankedShare<String>>,
}

/// Merge both levels into one table.
///
/// Ordering: territory rows first, then territory code ascending, gap
/// descending, brand ascending.
pub fn compose(territories: &[RankedShare<String>], brands: &[BrandSelection]) -> Vec<ResultRow> {
    let mut rows: Vec<ResultRow> = territories
        .iter()
        .map(|t| ResultRow {
            level: Level::Territory,
            territory: t.key.clone(),
            brand: None,
            rank: t.rank,
            gap: t.value,
            contribution_pct: t.contribution_pct,
            cumulative_pct: t.cumulative_pct,
        })
        .collect();

    for sel in brands {
        rows.extend(sel.brands.iter().map(|b| ResultRow {
            level: Level::Brand,
            territory: sel.territory.clone(),
            brand: Some(b.key.clone()),
            rank: b.rank,
            gap: b.value,
            contribution_pct: b.contribution_pct,
            cumulative_pct: b.cumulative_pct,
        }));
    }

    rows.sort_by(compare_rows);
    rows
}

fn compare_rows(a: &ResultRow, b: &ResultRow) -> Ordering {
    a.level
        .cmp(&b.level)
        .then_with(|| a.territory.cmp(&b.territory))
        .then_with(|| b.gap.total_cmp(&a.gap))
        .then_with(|| a.brand.cmp(&b.brand))
}
