use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use stackmig_data::{bundled, dataset_digest, load_catalog, load_dataset_dir, VersionCatalog};
use stackmig_index::{GuideQuery, GuideRepository};

use crate::config::Config;

/// Loaded data plus the query facade built over it.
pub struct App {
    pub repo: Arc<GuideRepository>,
    pub query: GuideQuery,
    /// Digest of the loaded guide data, see [`dataset_digest`].
    pub digest: String,
}

impl App {
    pub fn open(root: &Path, cfg: &Config) -> Result<Self> {
        let datasets = match cfg.technologies_dir(root) {
            Some(dir) => load_dataset_dir(&dir)?,
            None => bundled::datasets()?,
        };
        let digest = dataset_digest(&datasets);
        let catalog: VersionCatalog = match cfg.catalog_path(root) {
            Some(path) => load_catalog(&path)?,
            None => bundled::catalog()?,
        };

        let repo = Arc::new(GuideRepository::from_datasets(datasets));
        let query = GuideQuery::new(repo.clone(), Arc::new(catalog));
        Ok(Self { repo, query, digest })
    }

    /// Catalog display name, falling back to what the user typed.
    pub fn display_name(&self, technology: &str) -> String {
        self.query
            .catalog()
            .get(technology)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| technology.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DataConfig;
    use tempfile::tempdir;

    #[test]
    fn opens_bundled_by_default() {
        let dir = tempdir().unwrap();
        let app = App::open(dir.path(), &Config::default()).unwrap();
        assert!(app.query.get_migration_guide("react", "16.8", "18.0").is_some());
        assert_eq!(app.display_name("REACT"), "React");
        assert_eq!(app.display_name(" kafka "), "kafka");
        assert_eq!(app.digest, dataset_digest(&bundled::datasets().unwrap()));
    }

    #[test]
    fn opens_configured_dir() {
        let dir = tempdir().unwrap();
        let tech = dir.path().join("tech");
        std::fs::create_dir_all(&tech).unwrap();
        std::fs::write(
            tech.join("go.yaml"),
            "technology: go\nmigrations:\n  - fromVersion: \"1.21\"\n    toVersion: \"1.22\"\n    breakingChanges: []\n    deprecatedFeatures: []\n    codeExamples: []\n    configUpdates: []\n    documentationLinks: []\n",
        )
        .unwrap();
        let cfg = Config {
            data: DataConfig {
                technologies_dir: Some("tech".into()),
                catalog: None,
            },
        };
        let app = App::open(dir.path(), &cfg).unwrap();
        assert!(app.query.get_migration_guide("go", "1.21", "1.22").is_some());
        assert!(app.query.get_migration_guide("react", "16.8", "18.0").is_none());
    }

    #[test]
    fn missing_configured_dir_is_an_error() {
        let dir = tempdir().unwrap();
        let cfg = Config {
            data: DataConfig {
                technologies_dir: Some("nope".into()),
                catalog: None,
            },
        };
        assert!(App::open(dir.path(), &cfg).is_err());
    }
}
