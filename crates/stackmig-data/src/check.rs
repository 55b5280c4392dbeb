use std::collections::HashSet;

use stackmig_core::{DataError, MigrationGuide};

/// Ids must be unique within each category of a guide.
pub fn check_guide(guide: &MigrationGuide) -> Result<(), DataError> {
    unique_ids("breakingChanges", guide.breaking_changes.iter().map(|i| i.id.as_str()))?;
    unique_ids("deprecatedFeatures", guide.deprecated_features.iter().map(|i| i.id.as_str()))?;
    unique_ids("codeExamples", guide.code_examples.iter().map(|i| i.id.as_str()))?;
    unique_ids("configUpdates", guide.config_updates.iter().map(|i| i.id.as_str()))?;
    unique_ids("documentationLinks", guide.documentation_links.iter().map(|i| i.id.as_str()))?;
    unique_ids("caseStudies", guide.case_studies().iter().map(|i| i.id.as_str()))?;
    Ok(())
}

fn unique_ids<'a>(category: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<(), DataError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DataError::DuplicateId {
                category,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
