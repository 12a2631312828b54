//! Manifest model: the categorized list of expected relative paths.

mod builtin;
mod file;

pub use builtin::builtin;
pub use file::{from_toml_path, from_toml_str, ManifestError};

use serde::{Deserialize, Serialize};

/// A named group of related expected paths (e.g. "Backend").
///
/// Used only for report structuring; category order and path order within a
/// category are preserved so the report stays deterministic and readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestCategory {
    pub name: String,
    pub paths: Vec<String>,
}

/// Ordered set of categories describing an expected project layout.
///
/// Constructed once (builtin literal data or a TOML file) and never mutated
/// at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub categories: Vec<ManifestCategory>,
}

impl Manifest {
    /// Total number of expected paths, summed over all categories.
    pub fn total_expected(&self) -> usize {
        self.categories.iter().map(|c| c.paths.len()).sum()
    }
}
