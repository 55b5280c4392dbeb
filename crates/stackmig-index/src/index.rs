use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use stackmig_core::{DataError, MigrationGuide, TechKey};
use stackmig_data::{MigrationEntry, TechnologyData};

/// What the index holds for one (technology, from, to) key.
#[derive(Clone, Debug)]
pub enum Slot {
    Guide(Arc<MigrationGuide>),
    Malformed(DataError),
}

/// An authored entry that did not make it into the index as a usable guide.
#[derive(Clone, Debug)]
pub struct Rejection {
    pub technology: TechKey,
    pub from_version: Option<String>,
    pub to_version: Option<String>,
    pub source: Option<PathBuf>,
    pub error: DataError,
}

type VersionMap = HashMap<String, HashMap<String, Slot>>;

/// technology -> fromVersion -> toVersion -> slot. Built once, then read-only.
///
/// The first authored occurrence of a key owns its slot; later duplicates are
/// recorded as rejections.
#[derive(Clone, Debug, Default)]
pub struct GuideIndex {
    map: HashMap<TechKey, VersionMap>,
    rejected: Vec<Rejection>,
}

impl GuideIndex {
    pub fn build(datasets: Vec<TechnologyData>) -> Self {
        let mut index = Self::default();
        for data in datasets {
            let TechnologyData {
                technology,
                source,
                migrations,
            } = data;
            for entry in migrations {
                index.insert(&technology, source.as_ref(), entry);
            }
        }
        index
    }

    fn insert(&mut self, technology: &TechKey, source: Option<&PathBuf>, entry: MigrationEntry) {
        let reject = |from_version: Option<String>, to_version: Option<String>, error: DataError| Rejection {
            technology: technology.clone(),
            from_version,
            to_version,
            source: source.cloned(),
            error,
        };

        let (from, to, slot) = match entry {
            MigrationEntry::Valid {
                from_version,
                to_version,
                guide,
            } => (from_version, to_version, Slot::Guide(Arc::new(guide))),
            MigrationEntry::Malformed {
                from_version: Some(from_version),
                to_version: Some(to_version),
                error,
            } => {
                self.rejected
                    .push(reject(Some(from_version.clone()), Some(to_version.clone()), error.clone()));
                (from_version, to_version, Slot::Malformed(error))
            }
            MigrationEntry::Malformed {
                from_version,
                to_version,
                error,
            } => {
                self.rejected.push(reject(from_version, to_version, error));
                return;
            }
        };

        let targets = self
            .map
            .entry(technology.clone())
            .or_default()
            .entry(from.clone())
            .or_default();
        if targets.contains_key(&to) {
            tracing::warn!(technology = %technology, from = %from, to = %to, "duplicate migration; keeping the first");
            if matches!(slot, Slot::Guide(_)) {
                let error = DataError::DuplicatePair {
                    from: from.clone(),
                    to: to.clone(),
                };
                self.rejected.push(reject(Some(from), Some(to), error));
            }
            return;
        }
        targets.insert(to, slot);
    }

    pub fn get(&self, technology: &TechKey, from_version: &str, to_version: &str) -> Option<&Slot> {
        self.map.get(technology)?.get(from_version)?.get(to_version)
    }

    pub fn technologies(&self) -> Vec<&TechKey> {
        let mut keys: Vec<_> = self.map.keys().collect();
        keys.sort();
        keys
    }

    /// Version pairs with a usable guide, sorted.
    pub fn pairs(&self, technology: &TechKey) -> Vec<(&str, &str)> {
        let mut out: Vec<(&str, &str)> = self
            .map
            .get(technology)
            .into_iter()
            .flat_map(|froms| {
                froms.iter().flat_map(|(from, tos)| {
                    tos.iter().filter_map(move |(to, slot)| match slot {
                        Slot::Guide(_) => Some((from.as_str(), to.as_str())),
                        Slot::Malformed(_) => None,
                    })
                })
            })
            .collect();
        out.sort();
        out
    }

    pub fn guide_count(&self) -> usize {
        self.map
            .values()
            .flat_map(|froms| froms.values())
            .flat_map(|tos| tos.values())
            .filter(|slot| matches!(slot, Slot::Guide(_)))
            .count()
    }

    pub fn rejected(&self) -> &[Rejection] {
        &self.rejected
    }
}
