//! `cemv manifest` – list the expected paths grouped by category.

use anyhow::Result;
use std::path::Path;

use super::load_manifest;

pub fn run_manifest(manifest_path: Option<&Path>) -> Result<()> {
    let manifest = load_manifest(manifest_path)?;

    for category in &manifest.categories {
        println!("{} ({} paths)", category.name, category.paths.len());
        for path in &category.paths {
            println!("  {path}");
        }
        println!();
    }
    println!("{} paths total", manifest.total_expected());

    Ok(())
}
