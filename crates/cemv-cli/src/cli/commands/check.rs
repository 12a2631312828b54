//! `cemv check` – run the verification and print the report.

use anyhow::{Context, Result};
use cemv_core::config::CemvConfig;
use cemv_core::verify::VerifyReport;
use cemv_core::{report, verify};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::load_manifest;

/// Verify the project layout. Returns false when the manifest is incomplete
/// so main can map it to a non-zero exit code.
pub fn run_check(
    cfg: &CemvConfig,
    base_dir: Option<&Path>,
    manifest_path: Option<&Path>,
    json: bool,
) -> Result<bool> {
    let base_dir = resolve_base_dir(cfg, base_dir)?;
    let manifest_path = manifest_path.or(cfg.manifest_path.as_deref());
    let manifest = load_manifest(manifest_path)?;

    let result = verify::verify(&manifest, &base_dir);
    tracing::info!(
        "verified {}: {}/{} present",
        base_dir.display(),
        result.total_found,
        result.total_expected
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&result, json, &mut out)?;

    Ok(result.is_complete())
}

/// Emit the report as JSON or text to the given sink.
fn write_report(result: &VerifyReport, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, result).context("serialize report")?;
        writeln!(out)?;
    } else {
        report::render(result, out).context("write report")?;
    }
    Ok(())
}

/// Flag wins over config; default is the current directory.
fn resolve_base_dir(cfg: &CemvConfig, flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = &cfg.base_dir {
        return Ok(dir.clone());
    }
    std::env::current_dir().context("determine current directory")
}
