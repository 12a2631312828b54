//! Implementations of the individual CLI commands.

mod check;
mod completions;
mod man;
mod manifest;

pub use check::run_check;
pub use completions::run_completions;
pub use man::run_man;
pub use manifest::run_manifest;

use anyhow::Result;
use cemv_core::manifest::{self as core_manifest, Manifest};
use std::path::Path;

/// Resolve which manifest to use: explicit file if given, builtin otherwise.
pub(crate) fn load_manifest(path: Option<&Path>) -> Result<Manifest> {
    match path {
        Some(p) => {
            let m = core_manifest::from_toml_path(p)?;
            tracing::debug!("loaded manifest from {} ({} paths)", p.display(), m.total_expected());
            Ok(m)
        }
        None => Ok(core_manifest::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_manifest_defaults_to_builtin() {
        let m = load_manifest(None).unwrap();
        assert_eq!(m.total_expected(), 45);
        assert_eq!(m.categories[0].name, "Root Documentation");
    }

    #[test]
    fn load_manifest_reads_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(
            br#"
                [[category]]
                name = "Docs"
                paths = ["README.md"]
            "#,
        )
        .unwrap();
        f.flush().unwrap();

        let m = load_manifest(Some(f.path())).unwrap();
        assert_eq!(m.total_expected(), 1);
        assert_eq!(m.categories[0].name, "Docs");
    }
}
