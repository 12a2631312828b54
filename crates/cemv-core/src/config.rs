use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/cemv/config.toml`.
///
/// Everything here is optional: with an empty config the CLI checks the
/// current directory against the builtin manifest. Command-line flags
/// override config values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CemvConfig {
    /// Project root to verify. If missing, the current directory is used.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    /// Path to a TOML manifest file. If missing, the builtin manifest is used.
    #[serde(default)]
    pub manifest_path: Option<PathBuf>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cemv")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CemvConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CemvConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CemvConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_empty() {
        let cfg = CemvConfig::default();
        assert!(cfg.base_dir.is_none());
        assert!(cfg.manifest_path.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = CemvConfig {
            base_dir: Some(PathBuf::from("/srv/projects/college-event-manager")),
            manifest_path: Some(PathBuf::from("/etc/cemv/manifest.toml")),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: CemvConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.base_dir, cfg.base_dir);
        assert_eq!(parsed.manifest_path, cfg.manifest_path);
    }

    #[test]
    fn config_toml_empty_file() {
        let cfg: CemvConfig = toml::from_str("").unwrap();
        assert!(cfg.base_dir.is_none());
        assert!(cfg.manifest_path.is_none());
    }

    #[test]
    fn config_toml_base_dir_only() {
        let cfg: CemvConfig = toml::from_str(r#"base_dir = "/home/me/project""#).unwrap();
        assert_eq!(cfg.base_dir, Some(PathBuf::from("/home/me/project")));
        assert!(cfg.manifest_path.is_none());
    }
}
