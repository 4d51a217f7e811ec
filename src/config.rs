// Analysis configuration: filter parameters and Pareto cut parameters.
//
// Values are layered: built-in defaults, then an optional JSON file, then
// command-line overrides (applied in `cli.rs`).
use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_EXCLUDE_MONTH: &str = "All";
pub const DEFAULT_THRESHOLD: f64 = 0.80;
pub const DEFAULT_TERRITORY_MIN_COUNT: usize = 10;
pub const DEFAULT_BRAND_MIN_COUNT: usize = 0;

/// Which actual-sales column the gap is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ActualBasis {
    #[default]
    Primary,
    Secondary,
}

/// Whether targets and actuals are compared in sales value or in units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    #[default]
    Value,
    Units,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParetoParams {
    /// Cumulative share, as a fraction in (0, 1].
    pub threshold: f64,
    /// Ranks at or below this count are always selected.
    pub min_count: usize,
}

impl ParetoParams {
    pub fn new(threshold: f64, min_count: usize) -> Self {
        Self {
            threshold,
            min_count,
        }
    }

    fn validate(&self, field: &str) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 || self.threshold > 1.0 {
            return Err(AnalysisError::InvalidConfig {
                field: field.to_string(),
                message: format!("threshold must be in (0, 1], got {}", self.threshold),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisConfig {
    pub month: Option<String>,
    pub exclude_month_value: String,
    pub zone: Option<String>,
    pub territory: ParetoParams,
    pub brand: ParetoParams,
    pub actual_basis: ActualBasis,
    pub measure: Measure,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            month: None,
            exclude_month_value: DEFAULT_EXCLUDE_MONTH.to_string(),
            zone: None,
            territory: ParetoParams::new(DEFAULT_THRESHOLD, DEFAULT_TERRITORY_MIN_COUNT),
            brand: ParetoParams::new(DEFAULT_THRESHOLD, DEFAULT_BRAND_MIN_COUNT),
            actual_basis: ActualBasis::Primary,
            measure: Measure::Value,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        self.territory.validate("territory_threshold")?;
        self.brand.validate("brand_threshold")?;
        Ok(())
    }

    /// Overlay every field the file sets onto `self`.
    pub fn apply_file(&mut self, file: ConfigFile) {
        if let Some(m) = file.month {
            self.month = Some(m);
        }
        if let Some(x) = file.exclude_month_value {
            self.exclude_month_value = x;
        }
        if let Some(z) = file.zone {
            self.zone = Some(z);
        }
        if let Some(t) = file.territory_threshold {
            self.territory.threshold = t;
        }
        if let Some(n) = file.territory_min_count {
            self.territory.min_count = n;
        }
        if let Some(t) = file.brand_threshold {
            self.brand.threshold = t;
        }
        if let Some(n) = file.brand_min_count {
            self.brand.min_count = n;
        }
        if let Some(b) = file.actual_basis {
            self.actual_basis = b;
        }
        if let Some(m) = file.measure {
            self.measure = m;
        }
    }
}

/// On-disk shape of the JSON config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub month: Option<String>,
    pub exclude_month_value: Option<String>,
    pub zone: Option<String>,
    pub territory_threshold: Option<f64>,
    pub territory_min_count: Option<usize>,
    pub brand_threshold: Option<f64>,
    pub brand_min_count: Option<usize>,
    pub actual_basis: Option<ActualBasis>,
    pub measure: Option<Measure>,
}

pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<ConfigFile> {
    let text = std::fs::read_to_string(path)?;
    let file: ConfigFile = serde_json::from_str(&text)?;
    Ok(file)
}
