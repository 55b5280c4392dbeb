use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use stackmig_core::{DataError, MigrationGuide, TechKey};

use crate::check::check_guide;

/// On-disk encoding of a technology dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataFormat {
    Yaml,
    Json,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Some(DataFormat::Yaml),
            Some("json") => Some(DataFormat::Json),
            _ => None,
        }
    }
}

/// One technology's worth of migrations, decoded entry by entry.
#[derive(Clone, Debug)]
pub struct TechnologyData {
    pub technology: TechKey,
    pub source: Option<PathBuf>,
    pub migrations: Vec<MigrationEntry>,
}

#[derive(Clone, Debug)]
pub enum MigrationEntry {
    Valid {
        from_version: String,
        to_version: String,
        guide: MigrationGuide,
    },
    /// Kept so a lookup of this pair can report the problem instead of
    /// silently pretending the data was never authored.
    Malformed {
        from_version: Option<String>,
        to_version: Option<String>,
        error: DataError,
    },
}

impl TechnologyData {
    pub fn valid(&self) -> impl Iterator<Item = (&str, &str, &MigrationGuide)> {
        self.migrations.iter().filter_map(|m| match m {
            MigrationEntry::Valid {
                from_version,
                to_version,
                guide,
            } => Some((from_version.as_str(), to_version.as_str(), guide)),
            MigrationEntry::Malformed { .. } => None,
        })
    }

    pub fn malformed_count(&self) -> usize {
        self.migrations
            .iter()
            .filter(|m| matches!(m, MigrationEntry::Malformed { .. }))
            .count()
    }
}

#[derive(Deserialize)]
struct RawTechnologyData {
    #[serde(default)]
    technology: Option<String>,
    #[serde(default)]
    migrations: Vec<Value>,
}

pub fn parse_dataset(s: &str, format: DataFormat) -> Result<TechnologyData> {
    let raw: RawTechnologyData = match format {
        DataFormat::Yaml => serde_yaml::from_str(s).with_context(|| "parse dataset yaml")?,
        DataFormat::Json => serde_json::from_str(s).with_context(|| "parse dataset json")?,
    };

    let technology = TechKey::new(raw.technology.unwrap_or_default());
    if technology.is_empty() {
        return Err(DataError::MissingTechnology.into());
    }

    let migrations = raw
        .migrations
        .into_iter()
        .map(|v| decode_entry(&technology, v))
        .collect();

    Ok(TechnologyData {
        technology,
        source: None,
        migrations,
    })
}

fn version_field(v: &Value, field: &'static str) -> Result<String, DataError> {
    match v.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(DataError::MissingVersion(field)),
    }
}

fn decode_entry(technology: &TechKey, v: Value) -> MigrationEntry {
    let from = version_field(&v, "fromVersion");
    let to = version_field(&v, "toVersion");
    let (from_version, to_version) = match (from, to) {
        (Ok(f), Ok(t)) => (f, t),
        (f, t) => {
            let error = f
                .as_ref()
                .err()
                .or(t.as_ref().err())
                .cloned()
                .unwrap_or(DataError::MissingVersion("fromVersion"));
            tracing::warn!(technology = %technology, error = %error, "skipping migration entry");
            return MigrationEntry::Malformed {
                from_version: f.ok(),
                to_version: t.ok(),
                error,
            };
        }
    };

    let guide = serde_json::from_value::<MigrationGuide>(v)
        .map_err(|e| DataError::Decode {
            from: from_version.clone(),
            to: to_version.clone(),
            reason: e.to_string(),
        })
        .and_then(|g| check_guide(&g).map(|_| g));

    match guide {
        Ok(guide) => MigrationEntry::Valid {
            from_version,
            to_version,
            guide,
        },
        Err(error) => {
            tracing::warn!(
                technology = %technology,
                from = %from_version,
                to = %to_version,
                error = %error,
                "malformed migration entry"
            );
            MigrationEntry::Malformed {
                from_version: Some(from_version),
                to_version: Some(to_version),
                error,
            }
        }
    }
}

pub fn load_dataset_file(path: &Path) -> Result<TechnologyData> {
    let format = DataFormat::from_path(path)
        .with_context(|| format!("unsupported dataset extension: {}", path.display()))?;
    let s = std::fs::read_to_string(path).with_context(|| format!("read dataset: {}", path.display()))?;
    let mut data = parse_dataset(&s, format).with_context(|| format!("load dataset: {}", path.display()))?;
    data.source = Some(path.to_path_buf());
    Ok(data)
}

/// Load every dataset file in `dir`. A file that cannot be loaded is logged
/// and skipped so the remaining technologies stay available.
pub fn load_dataset_dir(dir: &Path) -> Result<Vec<TechnologyData>> {
    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("read dataset dir: {}", dir.display()))?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && DataFormat::from_path(p).is_some())
        .collect::<Vec<_>>();
    paths.sort();

    let mut out = Vec::with_capacity(paths.len());
    for path in paths {
        match load_dataset_file(&path) {
            Ok(data) => {
                tracing::debug!(
                    path = %path.display(),
                    technology = %data.technology,
                    migrations = data.migrations.len(),
                    "loaded dataset"
                );
                out.push(data);
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %format!("{e:#}"), "skipping dataset file"),
        }
    }
    Ok(out)
}
