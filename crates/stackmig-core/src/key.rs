use serde::{Deserialize, Serialize};

/// Normalised technology identifier: trimmed and lower-cased.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TechKey(String);

impl TechKey {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for TechKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for TechKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<TechKey> for String {
    fn from(k: TechKey) -> Self {
        k.0
    }
}

impl std::fmt::Display for TechKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_case_and_whitespace() {
        assert_eq!(TechKey::new("React"), TechKey::new("react"));
        assert_eq!(TechKey::new("  TypeScript \n").as_str(), "typescript");
        assert!(TechKey::new("   ").is_empty());
    }

    #[test]
    fn deserialises_through_normalisation() {
        let k: TechKey = serde_json::from_str("\"Node.JS\"").unwrap();
        assert_eq!(k.as_str(), "node.js");
    }
}
