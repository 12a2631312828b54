//! Loading a manifest from a TOML file.
//!
//! Format is an array of tables so category order survives parsing:
//!
//! ```toml
//! [[category]]
//! name = "Backend"
//! paths = ["backend/server.js", "backend/package.json"]
//! ```

use super::{Manifest, ManifestCategory};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("read manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse manifest {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// A manifest with no paths would make every run vacuously complete.
    #[error("manifest {path} contains no paths")]
    Empty { path: String },
}

#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default, rename = "category")]
    categories: Vec<ManifestCategory>,
}

/// Parse a manifest from TOML text. `origin` is used in error messages only.
pub fn from_toml_str(data: &str, origin: &str) -> Result<Manifest, ManifestError> {
    let parsed: ManifestFile = toml::from_str(data).map_err(|source| ManifestError::Parse {
        path: origin.to_string(),
        source,
    })?;
    let manifest = Manifest {
        categories: parsed.categories,
    };
    if manifest.total_expected() == 0 {
        return Err(ManifestError::Empty {
            path: origin.to_string(),
        });
    }
    Ok(manifest)
}

/// Load and parse a manifest file from disk.
pub fn from_toml_path(path: &Path) -> Result<Manifest, ManifestError> {
    let data = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.display().to_string(),
        source,
    })?;
    from_toml_str(&data, &path.display().to_string())
}
