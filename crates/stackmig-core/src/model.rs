use serde::{Deserialize, Serialize};

/// Impact of a breaking change. Closed set; there is no implicit default.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BreakingChange {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeprecatedFeature {
    pub id: String,
    pub feature: String,
    pub description: String,
    pub alternative: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CodeExample {
    pub id: String,
    pub title: String,
    pub description: String,
    pub before_code: String,
    pub after_code: String,
    pub language: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigUpdate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub config_changes: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentationLink {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: String,
    pub company: String,
    pub project_description: String,
    #[serde(default)]
    pub challenges: Vec<String>,
    pub solution: String,
    pub outcome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Everything a user needs for one upgrade path of one technology.
///
/// All five main categories are required on disk (an empty list is fine, a
/// missing one is not). Case studies are optional.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MigrationGuide {
    pub breaking_changes: Vec<BreakingChange>,
    pub deprecated_features: Vec<DeprecatedFeature>,
    pub code_examples: Vec<CodeExample>,
    pub config_updates: Vec<ConfigUpdate>,
    pub documentation_links: Vec<DocumentationLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_studies: Option<Vec<CaseStudy>>,
}

impl MigrationGuide {
    pub fn case_studies(&self) -> &[CaseStudy] {
        self.case_studies.as_deref().unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.breaking_changes.is_empty()
            && self.deprecated_features.is_empty()
            && self.code_examples.is_empty()
            && self.config_updates.is_empty()
            && self.documentation_links.is_empty()
            && self.case_studies().is_empty()
    }
}
