use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::loader::LoadReport;
use crate::types::{PreviewRow, ResultRow, RunStats};
use crate::util::{format_number, format_pct};
use serde::Serialize;
use std::path::Path;
use tabled::{settings::Style, Table};

/// Contents of the JSON summary written next to the result table.
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub input_rows: usize,
    pub skipped_rows: usize,
    pub config: &'a AnalysisConfig,
    pub stats: &'a RunStats,
}

impl<'a> RunSummary<'a> {
    pub fn new(load: &LoadReport, config: &'a AnalysisConfig, stats: &'a RunStats) -> Self {
        Self {
            input_rows: load.total_rows,
            skipped_rows: load.parse_errors,
            config,
            stats,
        }
    }
}

pub fn write_csv<T: Serialize, P: AsRef<Path>>(path: P, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

pub fn preview_row(r: &ResultRow) -> PreviewRow {
    PreviewRow {
        level: r.level.to_string(),
        territory: r.territory.clone(),
        brand: r.brand.clone().unwrap_or_default(),
        rank: r.rank,
        gap: format_number(r.gap, 2),
        contribution_pct: format_pct(r.contribution_pct),
        cumulative_pct: format_pct(r.cumulative_pct),
    }
}

/// Markdown table of the first `max_rows` rows, or a placeholder when empty.
pub fn render_preview(rows: &[ResultRow], max_rows: usize) -> String {
    let slice: Vec<PreviewRow> = rows.iter().take(max_rows).map(preview_row).collect();
    if slice.is_empty() {
        return "(no rows)".to_string();
    }
    Table::new(slice).with(Style::markdown()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Level;

    fn rows() -> Vec<ResultRow> {
        vec![
            ResultRow {
                level: Level::Territory,
                territory: "T1".into(),
                brand: None,
                rank: 1,
                gap: 1065.0,
                contribution_pct: 1.0,
                cumulative_pct: 1.0,
            },
            ResultRow {
                level: Level::Brand,
                territory: "T1".into(),
                brand: Some("A".into()),
                rank: 1,
                gap: 60.0,
                contribution_pct: 60.0 / 65.0,
                cumulative_pct: 60.0 / 65.0,
            },
        ]
    }

    #[test]
    fn csv_leaves_brand_blank_for_territory_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&path, &rows()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Level,Terr_Code,Brand,Rank,Gap,ContributionPct,CumulativePct")
        );
        assert_eq!(lines.next(), Some("Territory,T1,,1,1065.0,1.0,1.0"));
        assert!(lines.next().unwrap().starts_with("Brand,T1,A,1,60.0,0.923"));
    }

    #[test]
    fn preview_formats_numbers_for_display() {
        let table = render_preview(&rows(), 10);
        assert!(table.contains("1,065.00"));
        assert!(table.contains("92.31"));
        assert!(table.contains("Territory"));
        assert_eq!(render_preview(&rows(), 1).lines().count(), 3);
        assert_eq!(render_preview(&[], 5), "(no rows)");
    }

    #[test]
    fn summary_serialises_config_and_stats() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        let cfg = AnalysisConfig::default();
        let stats = RunStats {
            brands_selected: 3,
            ..RunStats::default()
        };
        let load = LoadReport {
            total_rows: 12,
            loaded_rows: 11,
            parse_errors: 1,
        };
        write_json(&path, &RunSummary::new(&load, &cfg, &stats)).unwrap();
        let v: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(v["input_rows"], 12);
        assert_eq!(v["skipped_rows"], 1);
        assert_eq!(v["stats"]["brands_selected"], 3);
        assert_eq!(v["config"]["territory"]["min_count"], 10);
        assert_eq!(v["config"]["actual_basis"], "primary");
    }
}
