use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Column names as they appear in the sales analyzer export.
pub const COL_MONTH: &str = "Mth";
pub const COL_ZONE: &str = "Zone";
pub const COL_TERRITORY: &str = "Terr_Code";
pub const COL_BRAND: &str = "Brand";
pub const COL_TARGET: &str = "Tgt_Value";
pub const COL_SECONDARY: &str = "Sec_Value";
pub const COL_PRIMARY: &str = "Prim_Value";
pub const COL_TARGET_UNITS: &str = "Tgt_Units";
pub const COL_SECONDARY_UNITS: &str = "Sec_Units";
pub const COL_PRIMARY_UNITS: &str = "Prim_Units";

pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_MONTH,
    COL_ZONE,
    COL_TERRITORY,
    COL_BRAND,
    COL_TARGET,
    COL_SECONDARY,
    COL_PRIMARY,
];

/// Only required when the analysis runs on units.
pub const UNIT_COLUMNS: [&str; 3] = [COL_TARGET_UNITS, COL_SECONDARY_UNITS, COL_PRIMARY_UNITS];

#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Mth")]
    pub month: Option<String>,
    #[serde(rename = "Zone")]
    pub zone: Option<String>,
    #[serde(rename = "Terr_Code")]
    pub territory: Option<String>,
    #[serde(rename = "Brand")]
    pub brand: Option<String>,
    #[serde(rename = "Tgt_Value")]
    pub target_value: Option<String>,
    #[serde(rename = "Sec_Value")]
    pub secondary_value: Option<String>,
    #[serde(rename = "Prim_Value")]
    pub primary_value: Option<String>,
    #[serde(rename = "Tgt_Units", default)]
    pub target_units: Option<String>,
    #[serde(rename = "Sec_Units", default)]
    pub secondary_units: Option<String>,
    #[serde(rename = "Prim_Units", default)]
    pub primary_units: Option<String>,
}

/// Unit columns are 0 when the export does not carry them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub territory: String,
    pub brand: String,
    pub month: String,
    pub zone: String,
    pub target_value: f64,
    pub secondary_value: f64,
    pub primary_value: f64,
    pub target_units: f64,
    pub secondary_units: f64,
    pub primary_units: f64,
}

/// Summed values for one (territory, brand) pair after filtering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateCell {
    pub target_sum: f64,
    pub secondary_sum: f64,
    pub primary_sum: f64,
    pub record_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GapEntry {
    pub territory: String,
    pub brand: String,
    pub gap: f64,
    pub achievement_pct: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TerritoryTotal {
    pub territory: String,
    pub gap: f64,
}

/// A keyed value placed within its group's descending ranking.
///
/// Percentages are fractions of the group total (0.25 means 25%).
#[derive(Debug, Clone, PartialEq)]
pub struct RankedShare<K> {
    pub key: K,
    pub value: f64,
    pub rank: usize,
    pub contribution_pct: f64,
    pub cumulative_pct: f64,
}

/// Territory rows sort ahead of brand rows; variant order is relied upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Level {
    Territory,
    Brand,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Territory => write!(f, "Territory"),
            Level::Brand => write!(f, "Brand"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    #[serde(rename = "Level")]
    pub level: Level,
    #[serde(rename = "Terr_Code")]
    pub territory: String,
    #[serde(rename = "Brand")]
    pub brand: Option<String>,
    #[serde(rename = "Rank")]
    pub rank: usize,
    #[serde(rename = "Gap")]
    pub gap: f64,
    #[serde(rename = "ContributionPct")]
    pub contribution_pct: f64,
    #[serde(rename = "CumulativePct")]
    pub cumulative_pct: f64,
}

/// Console rendering of a `ResultRow`, numbers pre-formatted.
#[derive(Debug, Tabled, Clone)]
pub struct PreviewRow {
    #[tabled(rename = "Level")]
    pub level: String,
    #[tabled(rename = "Terr_Code")]
    pub territory: String,
    #[tabled(rename = "Brand")]
    pub brand: String,
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[tabled(rename = "Gap")]
    pub gap: String,
    #[tabled(rename = "Contribution %")]
    pub contribution_pct: String,
    #[tabled(rename = "Cumulative %")]
    pub cumulative_pct: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStats {
    pub records_read: usize,
    pub records_matched: usize,
    pub aggregate_cells: usize,
    pub under_performing_entries: usize,
    pub territories_considered: usize,
    pub territories_selected: usize,
    pub brands_selected: usize,
    pub total_gap: f64,
}
