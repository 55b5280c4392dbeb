use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
}

/// Where guides and the version catalog come from. Unset means bundled.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default)]
    pub technologies_dir: Option<String>,
    #[serde(default)]
    pub catalog: Option<String>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let cfg: Config = toml::from_str(&s).with_context(|| "parse stackmig.toml")?;
        Ok(cfg)
    }

    /// Load `.stackmig/stackmig.toml` under `root`, or defaults when absent.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = Self::config_path(root);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using bundled data");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let s = toml::to_string_pretty(self).with_context(|| "serialize toml")?;
        std::fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    pub fn technologies_dir(&self, root: &Path) -> Option<PathBuf> {
        self.data.technologies_dir.as_deref().map(|p| resolve(root, p))
    }

    pub fn catalog_path(&self, root: &Path) -> Option<PathBuf> {
        self.data.catalog.as_deref().map(|p| resolve(root, p))
    }

    pub fn config_path(root: &Path) -> PathBuf {
        root.join(".stackmig").join("stackmig.toml")
    }
}

/// Expand `~` and anchor relative paths at `root`.
fn resolve(root: &Path, raw: &str) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(raw).into_owned());
    if expanded.is_absolute() {
        expanded
    } else {
        root.join(expanded)
    }
}
