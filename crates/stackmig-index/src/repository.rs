use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use stackmig_core::{MigrationGuide, TechKey};
use stackmig_data::TechnologyData;

use crate::index::{GuideIndex, Rejection, Slot};
use crate::source::{GuideSource, LookupError};

/// Owns the immutable guide index and answers presence/absence queries.
#[derive(Clone, Debug, Default)]
pub struct GuideRepository {
    index: GuideIndex,
}

impl GuideRepository {
    pub fn new(index: GuideIndex) -> Self {
        Self { index }
    }

    pub fn from_datasets(datasets: Vec<TechnologyData>) -> Self {
        let repo = Self::new(GuideIndex::build(datasets));
        tracing::info!(
            technologies = repo.index.technologies().len(),
            guides = repo.index.guide_count(),
            rejected = repo.index.rejected().len(),
            "guide index built"
        );
        repo
    }

    pub fn bundled() -> Result<Self> {
        Ok(Self::from_datasets(stackmig_data::bundled::datasets()?))
    }

    pub fn load_dir(dir: &Path) -> Result<Self> {
        Ok(Self::from_datasets(stackmig_data::load_dataset_dir(dir)?))
    }

    pub fn technologies(&self) -> Vec<&str> {
        self.index.technologies().into_iter().map(TechKey::as_str).collect()
    }

    pub fn pairs(&self, technology: &str) -> Vec<(&str, &str)> {
        self.index.pairs(&TechKey::new(technology))
    }

    pub fn malformed(&self) -> &[Rejection] {
        self.index.rejected()
    }

    pub fn index(&self) -> &GuideIndex {
        &self.index
    }
}

impl GuideSource for GuideRepository {
    /// Technology is matched case-insensitively, versions by exact string.
    /// Hands out the stored `Arc`, never a copy.
    fn lookup(
        &self,
        technology: &str,
        from_version: &str,
        to_version: &str,
    ) -> Result<Option<Arc<MigrationGuide>>, LookupError> {
        let key = TechKey::new(technology);
        match self.index.get(&key, from_version, to_version) {
            Some(Slot::Guide(guide)) => Ok(Some(Arc::clone(guide))),
            Some(Slot::Malformed(error)) => Err(LookupError::Malformed {
                technology: key.to_string(),
                from: from_version.to_string(),
                to: to_version.to_string(),
                error: error.clone(),
            }),
            None => Ok(None),
        }
    }
}
