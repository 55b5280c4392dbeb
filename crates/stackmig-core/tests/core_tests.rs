use stackmig_core::{filter_guide, BreakingChange, DocumentationLink, GuideSummary, MigrationGuide, Severity, TechKey};

fn guide() -> MigrationGuide {
    MigrationGuide {
        breaking_changes: vec![
            BreakingChange {
                id: "bc1".to_string(),
                title: "lib.d.ts Changes".to_string(),
                description: "updated DOM definitions".to_string(),
                severity: Severity::Medium,
            },
            BreakingChange {
                id: "bc2".to_string(),
                title: "Enum Changes".to_string(),
                description: "const enums".to_string(),
                severity: Severity::Medium,
            },
        ],
        documentation_links: vec![DocumentationLink {
            id: "dl1".to_string(),
            title: "TypeScript 5.0 Release Notes".to_string(),
            url: "https://devblogs.microsoft.com/typescript/announcing-typescript-5-0/".to_string(),
            description: "release announcement".to_string(),
        }],
        ..MigrationGuide::default()
    }
}

#[test]
fn test_tech_key_equality() {
    assert_eq!(TechKey::new("React"), TechKey::from("react"));
    assert_ne!(TechKey::new("react"), TechKey::new("preact"));
}

#[test]
fn test_filter_narrows_and_keeps_ids() {
    let g = guide();
    let out = filter_guide(&g, "enum");
    assert_eq!(out.breaking_changes.len(), 1);
    assert_eq!(out.breaking_changes[0].id, "bc2");
    assert!(out.documentation_links.is_empty());
}

#[test]
fn test_filter_url_is_not_a_search_field() {
    let g = guide();
    let out = filter_guide(&g, "devblogs");
    assert!(out.documentation_links.is_empty());
}

#[test]
fn test_summary_counts() {
    let s = GuideSummary::of(&guide());
    assert_eq!(s.breaking_changes, 2);
    assert_eq!(s.medium, 2);
    assert_eq!(s.documentation_links, 1);
    assert_eq!(s.case_studies, 0);
}

#[test]
fn test_guide_json_shape() {
    let v = serde_json::to_value(guide()).unwrap();
    assert!(v.get("breakingChanges").is_some());
    assert!(v.get("documentationLinks").is_some());
    assert!(v.get("caseStudies").is_none());
    assert_eq!(v["breakingChanges"][0]["severity"], "medium");
}
