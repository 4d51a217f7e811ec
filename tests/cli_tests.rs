//! End-to-end tests for the gap-pareto binary

mod common;

use common::{gap_pareto, write_dataset};
use predicates::prelude::*;
use std::fs;

const SAMPLE: &str = "\
Apr,North,T1,A,100,90,40
Apr,North,T1,B,50,50,45
Apr,North,T2,C,30,0,10
Apr,North,T2,D,20,0,25
All,North,T1,A,999,0,0
Apr,South,T9,A,500,0,0
May,North,T1,A,500,0,0
";

#[test]
fn test_help_displays() {
    gap_pareto()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("under-performance gap"));
}

#[test]
fn test_writes_result_csv_in_documented_order() {
    let (tmp, input) = write_dataset(SAMPLE);
    let out = tmp.path().join("result.csv");

    gap_pareto()
        .args(["--month", "Apr", "--zone", "North"])
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 of 2 territories"));

    let text = fs::read_to_string(&out).unwrap();
    let rows: Vec<Vec<&str>> = text
        .lines()
        .skip(1)
        .map(|l| l.split(',').take(3).collect())
        .collect();
    assert_eq!(
        rows,
        vec![
            vec!["Territory", "T1", ""],
            vec!["Territory", "T2", ""],
            vec!["Brand", "T1", "A"],
            vec!["Brand", "T2", "C"],
        ]
    );
}

#[test]
fn test_summary_json_records_counts() {
    let (tmp, input) = write_dataset(SAMPLE);
    let out = tmp.path().join("result.csv");
    let summary = tmp.path().join("summary.json");

    gap_pareto()
        .args(["--month", "Apr", "--zone", "North"])
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&out)
        .arg("--summary")
        .arg(&summary)
        .assert()
        .success();

    let v: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&summary).unwrap()).unwrap();
    assert_eq!(v["input_rows"], 7);
    assert_eq!(v["stats"]["records_matched"], 4);
    assert_eq!(v["stats"]["under_performing_entries"], 3);
    assert_eq!(v["stats"]["total_gap"], 85.0);
    assert_eq!(v["config"]["zone"], "North");
}

#[test]
fn test_config_file_is_applied() {
    let (tmp, input) = write_dataset(SAMPLE);
    let cfg = tmp.path().join("cfg.json");
    let out = tmp.path().join("result.csv");
    fs::write(&cfg, r#"{"month": "Apr", "zone": "North", "brand_min_count": 5}"#).unwrap();

    gap_pareto()
        .arg("--input")
        .arg(&input)
        .arg("--config")
        .arg(&cfg)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("Brand,T1,B,"));
}

#[test]
fn test_missing_column_fails_with_its_name() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = tmp.path().join("bad.csv");
    fs::write(&input, "Mth,Zone,Terr_Code,Tgt_Value,Sec_Value,Prim_Value\nApr,N,T1,1,1,1\n")
        .unwrap();

    gap_pareto()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(tmp.path().join("result.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Brand"));
}

#[test]
fn test_invalid_threshold_fails() {
    let (tmp, input) = write_dataset(SAMPLE);
    gap_pareto()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(tmp.path().join("result.csv"))
        .args(["--brand-threshold", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("brand_threshold"));
}

#[test]
fn test_no_matching_rows_is_an_empty_result() {
    let (tmp, input) = write_dataset(SAMPLE);
    let out = tmp.path().join("result.csv");

    gap_pareto()
        .args(["--month", "Dec"])
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("(no rows)"));

    assert!(fs::read_to_string(&out).unwrap().trim().is_empty());
}

#[test]
fn test_units_measure_uses_unit_columns() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = tmp.path().join("units.csv");
    let out = tmp.path().join("result.csv");
    fs::write(
        &input,
        "Mth,Zone,Terr_Code,Brand,Tgt_Value,Sec_Value,Prim_Value,Tgt_Units,Sec_Units,Prim_Units\n\
         Apr,North,T1,A,1000,0,0,10,0,9\n\
         Apr,North,T1,B,10,0,0,50,0,10\n",
    )
    .unwrap();

    gap_pareto()
        .args(["--month", "Apr", "--measure", "units"])
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("Territory,T1,,1,41.0,"));
    assert!(text.contains("Brand,T1,B,1,40.0,"));
    assert!(!text.contains("Brand,T1,A,"));
}

#[test]
fn test_units_measure_requires_unit_columns() {
    let (tmp, input) = write_dataset(SAMPLE);
    gap_pareto()
        .args(["--measure", "units"])
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(tmp.path().join("result.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Tgt_Units"));
}

#[test]
fn test_failure_is_reported_once() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = tmp.path().join("bad.csv");
    fs::write(&input, "Mth,Zone\nApr,N\n").unwrap();

    let output = gap_pareto()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(tmp.path().join("result.csv"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("missing required column").count(), 1);
}
