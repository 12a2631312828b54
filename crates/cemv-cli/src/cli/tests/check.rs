//! Tests for the `check` command: parsing and end-to-end runs.

use super::parse;
use crate::cli::commands::run_check;
use crate::cli::CliCommand;
use cemv_core::config::CemvConfig;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[test]
fn cli_parse_no_args_is_default_check() {
    assert!(parse(&["cemv"]).is_none());
}

#[test]
fn cli_parse_check_defaults() {
    match parse(&["cemv", "check"]) {
        Some(CliCommand::Check {
            base_dir,
            manifest,
            json,
        }) => {
            assert!(base_dir.is_none());
            assert!(manifest.is_none());
            assert!(!json);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_with_flags() {
    match parse(&[
        "cemv",
        "check",
        "--base-dir",
        "/srv/project",
        "--manifest",
        "layout.toml",
        "--json",
    ]) {
        Some(CliCommand::Check {
            base_dir,
            manifest,
            json,
        }) => {
            assert_eq!(base_dir, Some(PathBuf::from("/srv/project")));
            assert_eq!(manifest, Some(PathBuf::from("layout.toml")));
            assert!(json);
        }
        _ => panic!("expected Check with flags"),
    }
}

fn write_manifest(dir: &Path) -> PathBuf {
    let path = dir.join("layout.toml");
    let mut f = fs::File::create(&path).unwrap();
    f.write_all(
        br#"
            [[category]]
            name = "Docs"
            paths = ["README.md", "CHANGELOG.md"]
        "#,
    )
    .unwrap();
    path
}

#[test]
fn run_check_complete_returns_true() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path());
    fs::write(dir.path().join("README.md"), b"").unwrap();
    fs::write(dir.path().join("CHANGELOG.md"), b"").unwrap();

    let cfg = CemvConfig::default();
    let complete = run_check(&cfg, Some(dir.path()), Some(manifest.as_path()), false).unwrap();
    assert!(complete);
}

#[test]
fn run_check_incomplete_returns_false() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path());
    fs::write(dir.path().join("README.md"), b"").unwrap();

    let cfg = CemvConfig::default();
    let complete = run_check(&cfg, Some(dir.path()), Some(manifest.as_path()), false).unwrap();
    assert!(!complete);
}

#[test]
fn run_check_missing_base_dir_returns_false() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path());
    let gone = dir.path().join("nope");

    let cfg = CemvConfig::default();
    let complete = run_check(&cfg, Some(gone.as_path()), Some(manifest.as_path()), false).unwrap();
    assert!(!complete);
}

#[test]
fn run_check_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path());

    let cfg = CemvConfig::default();
    let complete = run_check(&cfg, Some(dir.path()), Some(manifest.as_path()), true).unwrap();
    assert!(!complete);
}

#[test]
fn run_check_bad_manifest_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-manifest.toml");

    let cfg = CemvConfig::default();
    let err = run_check(&cfg, Some(dir.path()), Some(missing.as_path()), false);
    assert!(err.is_err());
}
