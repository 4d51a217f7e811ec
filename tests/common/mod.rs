//! Shared helpers for CLI tests.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

pub const HEADER: &str = "Mth,Zone,Terr_Code,Brand,Tgt_Value,Sec_Value,Prim_Value\n";

pub fn gap_pareto() -> Command {
    Command::new(cargo::cargo_bin!("gap-pareto"))
}

/// Write `body` under the standard header into a fresh temp dir.
pub fn write_dataset(body: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("sales.csv");
    std::fs::write(&path, format!("{}{}", HEADER, body)).unwrap();
    (tmp, path)
}
