use std::borrow::Cow;

use crate::model::*;

/// An item that takes part in free-text filtering.
pub trait Searchable {
    /// The fields a query is matched against, in no particular order.
    fn search_fields(&self) -> Vec<&str>;

    fn matches(&self, needle_lower: &str) -> bool {
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle_lower))
    }
}

impl Searchable for BreakingChange {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

impl Searchable for DeprecatedFeature {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.feature.as_str(), self.description.as_str(), self.alternative.as_str()]
    }
}

impl Searchable for CodeExample {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

impl Searchable for ConfigUpdate {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.config_changes.as_str()]
    }
}

impl Searchable for DocumentationLink {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

impl Searchable for CaseStudy {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.company.as_str(),
            self.project_description.as_str(),
            self.solution.as_str(),
            self.outcome.as_str(),
        ];
        fields.extend(self.challenges.iter().map(String::as_str));
        fields
    }
}

/// Keep the items whose search fields contain `query` (case-insensitive).
/// An empty query hands back the input slice untouched.
pub fn filter_items<'a, T: Searchable + Clone>(items: &'a [T], query: &str) -> Cow<'a, [T]> {
    if query.is_empty() {
        return Cow::Borrowed(items);
    }
    let needle = query.to_lowercase();
    Cow::Owned(items.iter().filter(|item| item.matches(&needle)).cloned().collect())
}

/// Narrow every category of `guide` to the items matching `query`.
///
/// Pure and idempotent: running it again with the same query keeps the same
/// items. An empty query returns the guide itself by reference.
pub fn filter_guide<'a>(guide: &'a MigrationGuide, query: &str) -> Cow<'a, MigrationGuide> {
    if query.is_empty() {
        return Cow::Borrowed(guide);
    }
    Cow::Owned(MigrationGuide {
        breaking_changes: filter_items(&guide.breaking_changes, query).into_owned(),
        deprecated_features: filter_items(&guide.deprecated_features, query).into_owned(),
        code_examples: filter_items(&guide.code_examples, query).into_owned(),
        config_updates: filter_items(&guide.config_updates, query).into_owned(),
        documentation_links: filter_items(&guide.documentation_links, query).into_owned(),
        case_studies: guide
            .case_studies
            .as_ref()
            .map(|cs| filter_items(cs, query).into_owned()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bc(id: &str, title: &str, description: &str) -> BreakingChange {
        BreakingChange {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            severity: Severity::High,
        }
    }

    fn sample() -> MigrationGuide {
        MigrationGuide {
            breaking_changes: vec![
                bc("bc1", "Automatic Batching", "state updates are batched"),
                bc("bc2", "New Root API", "ReactDOM.render replaced by createRoot"),
            ],
            deprecated_features: vec![DeprecatedFeature {
                id: "df1".into(),
                feature: "findDOMNode".into(),
                description: "deprecated".into(),
                alternative: "use a ref".into(),
            }],
            code_examples: vec![],
            config_updates: vec![ConfigUpdate {
                id: "cu1".into(),
                title: "Package.json".into(),
                description: "bump deps".into(),
                config_changes: "\"react-dom\": \"^18.0.0\"".into(),
            }],
            documentation_links: vec![],
            case_studies: Some(vec![CaseStudy {
                id: "cs1".into(),
                company: "Airbnb".into(),
                project_description: "booking platform".into(),
                challenges: vec!["Large codebase".into()],
                solution: "phased".into(),
                outcome: "faster".into(),
                image_url: None,
            }]),
        }
    }

    #[test]
    fn empty_query_is_identity_by_reference() {
        let g = sample();
        let out = filter_guide(&g, "");
        assert!(matches!(out, Cow::Borrowed(_)));
        assert!(std::ptr::eq(out.as_ref(), &g));
    }

    #[test]
    fn matches_case_insensitively_across_fields() {
        let g = sample();
        let out = filter_guide(&g, "CREATEROOT");
        assert_eq!(out.breaking_changes.len(), 1);
        assert_eq!(out.breaking_changes[0].id, "bc2");
        assert!(out.deprecated_features.is_empty());
        assert!(out.config_updates.is_empty());

        let out = filter_guide(&g, "react-dom");
        assert_eq!(out.config_updates.len(), 1);
        assert!(out.breaking_changes.is_empty());
    }

    #[test]
    fn deprecated_alternative_is_searched() {
        let g = sample();
        let out = filter_guide(&g, "a ref");
        assert_eq!(out.deprecated_features.len(), 1);
    }

    #[test]
    fn case_study_challenges_are_searched() {
        let g = sample();
        let out = filter_guide(&g, "large codebase");
        assert_eq!(out.case_studies().len(), 1);
        let out = filter_guide(&g, "nothing like this");
        assert_eq!(out.case_studies, Some(vec![]));
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let g = sample();
        let once = filter_guide(&g, "root").into_owned();
        let twice = filter_guide(&once, "root").into_owned();
        assert_eq!(once, twice);
    }

    #[test]
    fn absent_case_studies_stay_absent() {
        let mut g = sample();
        g.case_studies = None;
        assert!(filter_guide(&g, "x").case_studies.is_none());
    }

    #[test]
    fn order_is_preserved() {
        let items = vec![bc("a", "root one", ""), bc("b", "other", ""), bc("c", "root two", "")];
        let out = filter_items(&items, "root");
        let ids: Vec<_> = out.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
