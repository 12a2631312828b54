//! Existence verification: resolve manifest paths against a base directory.
//!
//! Collection is separated from presentation: [`verify`] returns a
//! structured [`VerifyReport`]; rendering lives in [`crate::report`].

use crate::manifest::Manifest;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One manifest path and whether it resolved to an existing entry.
#[derive(Debug, Clone, Serialize)]
pub struct PathCheck {
    pub path: String,
    pub found: bool,
}

/// Per-category slice of the report, in manifest order.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub name: String,
    pub checks: Vec<PathCheck>,
}

impl CategoryReport {
    pub fn found(&self) -> usize {
        self.checks.iter().filter(|c| c.found).count()
    }

    pub fn expected(&self) -> usize {
        self.checks.len()
    }
}

/// Full result of one verification run.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub base_dir: PathBuf,
    /// Whether the base directory itself exists. When false every check is
    /// false too; recorded separately so the report can say "wrong location"
    /// instead of "incomplete project".
    pub base_dir_exists: bool,
    pub categories: Vec<CategoryReport>,
    pub total_found: usize,
    pub total_expected: usize,
}

impl VerifyReport {
    /// True iff every expected path was found.
    pub fn is_complete(&self) -> bool {
        self.total_found == self.total_expected
    }

    pub fn missing(&self) -> usize {
        self.total_expected - self.total_found
    }
}

/// Check every manifest path for existence under `base_dir`.
///
/// Existence only: a file or directory both count, symlinks are followed,
/// and any access failure (including permission errors) counts as "not
/// present". A missing base directory is not an error; every check simply
/// comes back false.
pub fn verify(manifest: &Manifest, base_dir: &Path) -> VerifyReport {
    let mut categories = Vec::with_capacity(manifest.categories.len());
    let mut total_found = 0;
    let mut total_expected = 0;

    for category in &manifest.categories {
        let mut checks = Vec::with_capacity(category.paths.len());
        for path in &category.paths {
            let found = base_dir.join(path).exists();
            if found {
                total_found += 1;
            }
            total_expected += 1;
            checks.push(PathCheck {
                path: path.clone(),
                found,
            });
        }
        categories.push(CategoryReport {
            name: category.name.clone(),
            checks,
        });
    }

    VerifyReport {
        base_dir: base_dir.to_path_buf(),
        base_dir_exists: base_dir.exists(),
        categories,
        total_found,
        total_expected,
    }
}
