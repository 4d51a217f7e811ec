use crate::config::{AnalysisConfig, Measure};
use crate::types::{AggregateCell, Record};
use std::collections::HashMap;

pub type CellKey = (String, String);

/// Row filter applied before aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFilter {
    pub month: Option<String>,
    pub exclude_month_value: String,
    pub zone: Option<String>,
}

impl RecordFilter {
    pub fn from_config(cfg: &AnalysisConfig) -> Self {
        Self {
            month: cfg.month.clone(),
            exclude_month_value: cfg.exclude_month_value.clone(),
            zone: cfg.zone.clone(),
        }
    }

    pub fn matches(&self, r: &Record) -> bool {
        if r.month == self.exclude_month_value {
            return false;
        }
        if let Some(m) = &self.month {
            if &r.month != m {
                return false;
            }
        }
        match &self.zone {
            Some(z) => &r.zone == z,
            None => true,
        }
    }
}

/// Sum target, secondary and primary per (territory, brand) over matching
/// records, in the requested measure.
pub fn aggregate(
    records: &[Record],
    filter: &RecordFilter,
    measure: Measure,
) -> HashMap<CellKey, AggregateCell> {
    let mut map: HashMap<CellKey, AggregateCell> = HashMap::new();
    for r in records.iter().filter(|r| filter.matches(r)) {
        let (target, secondary, primary) = match measure {
            Measure::Value => (r.target_value, r.secondary_value, r.primary_value),
            Measure::Units => (r.target_units, r.secondary_units, r.primary_units),
        };
        let e = map
            .entry((r.territory.clone(), r.brand.clone()))
            .or_default();
        e.target_sum += target;
        e.secondary_sum += secondary;
        e.primary_sum += primary;
        e.record_count += 1;
    }
    map
}
