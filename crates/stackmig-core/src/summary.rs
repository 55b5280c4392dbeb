use serde::Serialize;

use crate::model::{MigrationGuide, Severity};

/// Item counts per category.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct GuideSummary {
    pub breaking_changes: usize,
    pub deprecated_features: usize,
    pub code_examples: usize,
    pub config_updates: usize,
    pub documentation_links: usize,
    pub case_studies: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl GuideSummary {
    pub fn of(guide: &MigrationGuide) -> Self {
        let mut s = Self {
            breaking_changes: guide.breaking_changes.len(),
            deprecated_features: guide.deprecated_features.len(),
            code_examples: guide.code_examples.len(),
            config_updates: guide.config_updates.len(),
            documentation_links: guide.documentation_links.len(),
            case_studies: guide.case_studies().len(),
            ..Self::default()
        };
        for change in &guide.breaking_changes {
            match change.severity {
                Severity::High => s.high += 1,
                Severity::Medium => s.medium += 1,
                Severity::Low => s.low += 1,
            }
        }
        s
    }

    pub fn total(&self) -> usize {
        self.breaking_changes
            + self.deprecated_features
            + self.code_examples
            + self.config_updates
            + self.documentation_links
            + self.case_studies
    }
}
