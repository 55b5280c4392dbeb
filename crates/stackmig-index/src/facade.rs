use std::sync::Arc;

use stackmig_core::{MigrationGuide, TechKey};
use stackmig_data::{VersionCatalog, LATEST};

use crate::source::GuideSource;

/// Single entry point for callers that want a guide or nothing.
///
/// Holds no state of its own beyond shared handles; every answer is a pure
/// function of the arguments, the guide source and the version catalog.
#[derive(Clone)]
pub struct GuideQuery {
    source: Arc<dyn GuideSource>,
    catalog: Arc<VersionCatalog>,
}

impl GuideQuery {
    pub fn new(source: Arc<dyn GuideSource>, catalog: Arc<VersionCatalog>) -> Self {
        Self { source, catalog }
    }

    pub fn catalog(&self) -> &VersionCatalog {
        &self.catalog
    }

    /// Map the `latest` token to the catalog's current version for the
    /// technology. Any other target passes through untouched.
    pub fn resolve_target(&self, technology: &str, to_version: &str) -> Option<String> {
        if to_version != LATEST {
            return Some(to_version.to_string());
        }
        let resolved = self.catalog.latest(technology).map(str::to_string);
        tracing::debug!(technology, resolved = ?resolved, "resolved latest");
        resolved
    }

    /// `None` means "no data available"; it is never a failure for the caller.
    pub fn get_migration_guide(
        &self,
        technology: &str,
        from_version: &str,
        to_version: &str,
    ) -> Option<Arc<MigrationGuide>> {
        let key = TechKey::new(technology);
        let to_version = self.resolve_target(key.as_str(), to_version)?;

        match self.source.lookup(key.as_str(), from_version, &to_version) {
            Ok(found) => {
                tracing::debug!(
                    technology = %key,
                    from = from_version,
                    to = %to_version,
                    found = found.is_some(),
                    "guide lookup"
                );
                found
            }
            Err(e) => {
                tracing::warn!(error = %e, "guide lookup hit malformed data");
                None
            }
        }
    }

    /// Target versions offered after `from_version`, in catalog order.
    pub fn available(&self, technology: &str, from_version: &str) -> Vec<String> {
        self.catalog
            .targets_after(technology, from_version)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::LookupError;
    use stackmig_core::DataError;
    use stackmig_data::CatalogEntry;

    struct Broken;

    impl GuideSource for Broken {
        fn lookup(&self, technology: &str, from: &str, to: &str) -> Result<Option<Arc<MigrationGuide>>, LookupError> {
            Err(LookupError::Malformed {
                technology: technology.into(),
                from: from.into(),
                to: to.into(),
                error: DataError::MissingVersion("toVersion"),
            })
        }
    }

    /// Only knows react 16.8 -> 18.
    struct Echo;

    impl GuideSource for Echo {
        fn lookup(&self, technology: &str, from: &str, to: &str) -> Result<Option<Arc<MigrationGuide>>, LookupError> {
            if technology == "react" && from == "16.8" && to == "18" {
                Ok(Some(Arc::new(MigrationGuide::default())))
            } else {
                Ok(None)
            }
        }
    }

    fn catalog() -> Arc<VersionCatalog> {
        Arc::new(
            VersionCatalog::new(vec![CatalogEntry {
                id: TechKey::new("react"),
                name: "React".into(),
                versions: vec!["17".into(), "18".into(), "latest".into()],
                current: None,
            }])
            .unwrap(),
        )
    }

    #[test]
    fn malformed_data_becomes_absent() {
        let q = GuideQuery::new(Arc::new(Broken), catalog());
        assert!(q.get_migration_guide("react", "16.8", "18").is_none());
    }

    #[test]
    fn technology_is_normalised_before_lookup() {
        let q = GuideQuery::new(Arc::new(Echo), catalog());
        assert!(q.get_migration_guide("  React ", "16.8", "18").is_some());
    }

    #[test]
    fn latest_resolves_through_catalog() {
        let q = GuideQuery::new(Arc::new(Echo), catalog());
        assert_eq!(q.resolve_target("react", "latest").as_deref(), Some("18"));
        assert!(q.get_migration_guide("react", "16.8", "latest").is_some());
        assert_eq!(q.resolve_target("vue", "latest"), None);
        assert!(q.get_migration_guide("vue", "2", "latest").is_none());
    }

    #[test]
    fn latest_token_is_exact() {
        let q = GuideQuery::new(Arc::new(Echo), catalog());
        assert_eq!(q.resolve_target("react", "Latest").as_deref(), Some("Latest"));
    }

    #[test]
    fn available_targets_follow_catalog_order() {
        let q = GuideQuery::new(Arc::new(Echo), catalog());
        assert_eq!(q.available("react", "17"), vec!["18".to_string()]);
    }
}
