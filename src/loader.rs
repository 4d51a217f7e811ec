use crate::config::Measure;
use crate::error::{AnalysisError, Result};
use crate::types::{RawRow, Record, REQUIRED_COLUMNS, UNIT_COLUMNS};
use crate::util::{clean_ident, parse_amount};
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub total_rows: usize,
    pub loaded_rows: usize,
    pub parse_errors: usize,
}

pub fn load_records<P: AsRef<Path>>(
    path: P,
    measure: Measure,
) -> Result<(Vec<Record>, LoadReport)> {
    let path = path.as_ref();
    info!("Reading CSV from {:?}", path);
    load_from_reader(File::open(path)?, measure)
}

pub fn load_from_reader<R: Read>(
    reader: R,
    measure: Measure,
) -> Result<(Vec<Record>, LoadReport)> {
    let rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    read_all(rdr, measure)
}

/// Fail with the first required column the header row lacks.
///
/// Unit columns are only required when `measure` is `Units`.
pub fn check_columns(headers: &StringRecord, measure: Measure) -> Result<()> {
    let unit_cols: &[&str] = match measure {
        Measure::Value => &[],
        Measure::Units => &UNIT_COLUMNS,
    };
    for col in REQUIRED_COLUMNS.iter().chain(unit_cols) {
        if !headers.iter().any(|h| h == *col) {
            return Err(AnalysisError::MissingColumn {
                column: col.to_string(),
            });
        }
    }
    Ok(())
}

fn read_all<R: Read>(
    mut rdr: Reader<R>,
    measure: Measure,
) -> Result<(Vec<Record>, LoadReport)> {
    check_columns(rdr.headers()?, measure)?;

    let mut total_rows = 0usize;
    let mut parse_errors = 0usize;
    let mut records: Vec<Record> = Vec::new();

    for (idx, result) in rdr.deserialize::<RawRow>().enumerate() {
        total_rows += 1;
        // Header is line 1.
        let line = idx + 2;
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                warn!("Skipping line {}: {}", line, e);
                parse_errors += 1;
                continue;
            }
        };

        let amounts = (
            parse_amount(row.target_value.as_deref()),
            parse_amount(row.secondary_value.as_deref()),
            parse_amount(row.primary_value.as_deref()),
        );
        let (target_value, secondary_value, primary_value) = match amounts {
            (Some(t), Some(s), Some(p)) => (t, s, p),
            _ => {
                warn!("Skipping line {}: non-numeric amount", line);
                parse_errors += 1;
                continue;
            }
        };

        // Unit cells are not inspected for a value analysis, so junk there cannot drop a row.
        let units = match measure {
            Measure::Value => (Some(0.0), Some(0.0), Some(0.0)),
            Measure::Units => (
                parse_amount(row.target_units.as_deref()),
                parse_amount(row.secondary_units.as_deref()),
                parse_amount(row.primary_units.as_deref()),
            ),
        };
        let (target_units, secondary_units, primary_units) = match units {
            (Some(t), Some(s), Some(p)) => (t, s, p),
            _ => {
                warn!("Skipping line {}: non-numeric units", line);
                parse_errors += 1;
                continue;
            }
        };

        records.push(Record {
            territory: clean_ident(row.territory),
            brand: clean_ident(row.brand),
            month: clean_ident(row.month),
            zone: clean_ident(row.zone),
            target_value,
            secondary_value,
            primary_value,
            target_units,
            secondary_units,
            primary_units,
        });
    }

    let report = LoadReport {
        total_rows,
        loaded_rows: records.len(),
        parse_errors,
    };
    info!(
        "Loaded {} of {} rows ({} skipped)",
        report.loaded_rows, report.total_rows, report.parse_errors
    );
    Ok((records, report))
}
