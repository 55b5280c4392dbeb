use std::collections::BTreeMap;

use sha2::{Digest, Sha256};
use stackmig_core::MigrationGuide;

use crate::dataset::TechnologyData;

/// Canonical JSON of the usable guides: technology -> from -> to -> guide.
/// When a pair is authored twice the first occurrence is kept.
pub fn canonical_json(datasets: &[TechnologyData]) -> serde_json::Value {
    let mut tree: BTreeMap<&str, BTreeMap<&str, BTreeMap<&str, &MigrationGuide>>> = BTreeMap::new();
    for data in datasets {
        let tech = tree.entry(data.technology.as_str()).or_default();
        for (from, to, guide) in data.valid() {
            tech.entry(from).or_default().entry(to).or_insert(guide);
        }
    }
    let v = serde_json::to_value(&tree).unwrap_or(serde_json::Value::Null);
    sort_json(v)
}

/// Recursively sort object keys for stable hashing.
fn sort_json(v: serde_json::Value) -> serde_json::Value {
    match v {
        serde_json::Value::Object(map) => {
            let mut keys: Vec<_> = map.keys().cloned().collect();
            keys.sort();
            let mut new_map = serde_json::Map::new();
            for k in keys {
                let child = map.get(&k).cloned().unwrap_or(serde_json::Value::Null);
                new_map.insert(k, sort_json(child));
            }
            serde_json::Value::Object(new_map)
        }
        serde_json::Value::Array(arr) => serde_json::Value::Array(arr.into_iter().map(sort_json).collect()),
        other => other,
    }
}

/// Hex SHA-256 identifying the dataset build. Independent of file order.
pub fn dataset_digest(datasets: &[TechnologyData]) -> String {
    let v = canonical_json(datasets);
    let bytes = v.to_string().into_bytes();
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
