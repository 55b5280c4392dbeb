//! Data compiled into the binary, used when no data directory is configured.

use anyhow::{Context, Result};

use crate::catalog::{parse_catalog, VersionCatalog};
use crate::dataset::{parse_dataset, DataFormat, TechnologyData};

const CATALOG: &str = include_str!("../../../data/catalog.yaml");

const DATASETS: &[(&str, &str)] = &[
    ("react.yaml", include_str!("../../../data/technologies/react.yaml")),
    ("typescript.yaml", include_str!("../../../data/technologies/typescript.yaml")),
];

pub fn datasets() -> Result<Vec<TechnologyData>> {
    DATASETS
        .iter()
        .map(|(name, s)| parse_dataset(s, DataFormat::Yaml).with_context(|| format!("bundled dataset {name}")))
        .collect()
}

pub fn catalog() -> Result<VersionCatalog> {
    parse_catalog(CATALOG).with_context(|| "bundled catalog")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_data_is_clean() {
        let all = datasets().unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|d| d.malformed_count() == 0));
    }

    #[test]
    fn bundled_catalog_knows_bundled_technologies() {
        let c = catalog().unwrap();
        for d in datasets().unwrap() {
            assert!(c.get(d.technology.as_str()).is_some(), "{} missing from catalog", d.technology);
        }
        assert_eq!(c.latest("react"), Some("18.2"));
    }
}
