use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stackmig_core::TechKey;
use thiserror::Error;

/// Target version token that resolves to a technology's current version.
pub const LATEST: &str = "latest";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog entry has an empty id")]
    EmptyId,
    #[error("catalog entry {0} lists no versions")]
    NoVersions(String),
    #[error("catalog lists {0} more than once")]
    DuplicateId(String),
    #[error("catalog entry {id}: current version {current} is not in its version list")]
    UnknownCurrent { id: String, current: String },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: TechKey,
    pub name: String,
    /// Curated order, oldest first.
    pub versions: Vec<String>,
    #[serde(default)]
    pub current: Option<String>,
}

impl CatalogEntry {
    fn real_versions(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(String::as_str).filter(|v| *v != LATEST)
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    technologies: Vec<CatalogEntry>,
}

/// Static technology -> known versions mapping used by selection and by
/// `latest` resolution. Never consulted for guide presence.
#[derive(Clone, Debug, Default)]
pub struct VersionCatalog {
    entries: Vec<CatalogEntry>,
}

impl VersionCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for e in &entries {
            if e.id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !seen.insert(e.id.clone()) {
                return Err(CatalogError::DuplicateId(e.id.to_string()));
            }
            if e.real_versions().next().is_none() {
                return Err(CatalogError::NoVersions(e.id.to_string()));
            }
            if let Some(current) = &e.current {
                if !e.real_versions().any(|v| v == current) {
                    return Err(CatalogError::UnknownCurrent {
                        id: e.id.to_string(),
                        current: current.clone(),
                    });
                }
            }
        }
        Ok(Self { entries })
    }

    pub fn technologies(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, technology: &str) -> Option<&CatalogEntry> {
        let key = TechKey::new(technology);
        self.entries.iter().find(|e| e.id == key)
    }

    pub fn versions(&self, technology: &str) -> Vec<&str> {
        self.get(technology)
            .map(|e| e.real_versions().collect())
            .unwrap_or_default()
    }

    /// The explicit `current` version, or else the last curated version.
    /// Positional only; version strings are never compared numerically.
    pub fn latest(&self, technology: &str) -> Option<&str> {
        let entry = self.get(technology)?;
        entry
            .current
            .as_deref()
            .or_else(|| entry.real_versions().last())
    }

    /// Versions listed after `from`. An unlisted `from` offers every version.
    pub fn targets_after(&self, technology: &str, from: &str) -> Vec<&str> {
        let versions = self.versions(technology);
        match versions.iter().position(|v| *v == from) {
            Some(idx) => versions[idx + 1..].to_vec(),
            None => versions,
        }
    }
}

pub fn parse_catalog(s: &str) -> Result<VersionCatalog> {
    let file: CatalogFile = serde_yaml::from_str(s).with_context(|| "parse catalog yaml")?;
    let catalog = VersionCatalog::new(file.technologies)?;
    Ok(catalog)
}

pub fn load_catalog(path: &Path) -> Result<VersionCatalog> {
    let s = std::fs::read_to_string(path).with_context(|| format!("read catalog: {}", path.display()))?;
    parse_catalog(&s).with_context(|| format!("load catalog: {}", path.display()))
}
