/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/ti3c2f2.cif");

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cif-supercell"))
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
}

#[test]
fn test_no_arguments_prints_usage() {
    let dir = tempdir().unwrap();
    let output = run_in(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();
    let output = run_in(dir.path(), &["does_not_exist.cif"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
    assert!(!dir.path().join("ti3c2f2_6x6.data").exists());
}

#[test]
fn test_help_exits_successfully() {
    let dir = tempdir().unwrap();
    let output = run_in(dir.path(), &["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--replicate"));
}

#[test]
fn test_writes_defaults_into_working_directory() {
    let dir = tempdir().unwrap();
    let output = run_in(dir.path(), &[FIXTURE]);

    assert_eq!(output.status.code(), Some(0));
    for name in [
        "ti3c2f2_6x6.data",
        "ti3c2f2_6x6.xyz",
        "ti3c2f2_6x6.pdb",
        "in.ti3c2f2_6x6",
        "ti3c2f2_6x6_files.zip",
    ] {
        assert!(dir.path().join(name).is_file(), "{name} was not written");
    }
    assert!(String::from_utf8_lossy(&output.stdout).contains("252 atoms"));
}

#[test]
fn test_json_report() {
    let dir = tempdir().unwrap();
    let output = run_in(
        dir.path(),
        &[FIXTURE, "--json", "--no-archive", "-n", "2", "2", "1", "-p", "small"],
    );

    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["supercell_atoms"], 28);
    assert_eq!(report["formula"], "Ti3C2F2");
    assert_eq!(report["files"].as_array().unwrap().len(), 4);
    assert_eq!(report["files"][0]["format"], "lammps-data");
    assert!(dir.path().join("small.data").is_file());
    assert!(!dir.path().join("small_files.zip").exists());
}
