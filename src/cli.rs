use crate::config::{load_config_file, ActualBasis, AnalysisConfig, Measure};
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Find the territories and brands behind most of a sales under-performance gap.
#[derive(Debug, Parser)]
#[command(name = "gap-pareto", version, about)]
pub struct Cli {
    /// Sales/target CSV export
    #[arg(short, long)]
    pub input: PathBuf,

    /// JSON config file; flags given here override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only rows for this month (exact match)
    #[arg(long)]
    pub month: Option<String>,

    /// Month value always excluded, e.g. a yearly total row [default: All]
    #[arg(long = "exclude-month")]
    pub exclude_month: Option<String>,

    /// Only rows for this zone (exact match)
    #[arg(long)]
    pub zone: Option<String>,

    /// Cumulative gap share for the territory cut [default: 0.8]
    #[arg(long)]
    pub territory_threshold: Option<f64>,

    /// Territories always kept regardless of share [default: 10]
    #[arg(long)]
    pub territory_min_count: Option<usize>,

    /// Cumulative gap share for the per-territory brand cut [default: 0.8]
    #[arg(long)]
    pub brand_threshold: Option<f64>,

    /// Brands always kept per territory [default: 0]
    #[arg(long)]
    pub brand_min_count: Option<usize>,

    /// Actual sales column the gap is measured against [default: primary]
    #[arg(long, value_enum)]
    pub basis: Option<ActualBasis>,

    /// Compare in sales value or in units (needs Tgt_Units/Sec_Units/Prim_Units) [default: value]
    #[arg(long, value_enum)]
    pub measure: Option<Measure>,

    /// Where to write the result table
    #[arg(short, long, default_value = "pareto_result.csv")]
    pub output: PathBuf,

    /// Where to write the run summary
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Rows shown in the console preview
    #[arg(long, default_value_t = 20)]
    pub preview: usize,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    pub fn resolve_config(&self) -> Result<AnalysisConfig> {
        let mut cfg = AnalysisConfig::default();
        if let Some(path) = &self.config {
            cfg.apply_file(load_config_file(path)?);
        }
        if let Some(m) = &self.month {
            cfg.month = Some(m.clone());
        }
        if let Some(x) = &self.exclude_month {
            cfg.exclude_month_value = x.clone();
        }
        if let Some(z) = &self.zone {
            cfg.zone = Some(z.clone());
        }
        if let Some(t) = self.territory_threshold {
            cfg.territory.threshold = t;
        }
        if let Some(n) = self.territory_min_count {
            cfg.territory.min_count = n;
        }
        if let Some(t) = self.brand_threshold {
            cfg.brand.threshold = t;
        }
        if let Some(n) = self.brand_min_count {
            cfg.brand.min_count = n;
        }
        if let Some(b) = self.basis {
            cfg.actual_basis = b;
        }
        if let Some(m) = self.measure {
            cfg.measure = m;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}
