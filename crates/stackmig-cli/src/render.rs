use std::fmt;

use stackmig_core::{GuideSummary, MigrationGuide};

/// Shown whenever a lookup comes back empty.
pub fn no_data_message(technology: &str, from_version: &str, to_version: &str) -> String {
    format!("No migration data available for {technology} {from_version} -> {to_version}")
}

/// Plain-text rendering of a guide, one section per category.
pub struct GuideView<'a> {
    pub technology: &'a str,
    pub from_version: &'a str,
    pub to_version: &'a str,
    pub guide: &'a MigrationGuide,
}

fn indent(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for line in text.lines() {
        writeln!(f, "    {line}")?;
    }
    Ok(())
}

impl fmt::Display for GuideView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = self.guide;
        let s = GuideSummary::of(g);
        writeln!(
            f,
            "Migration Guide: {} {} -> {}",
            self.technology, self.from_version, self.to_version
        )?;
        writeln!(
            f,
            "{} breaking ({} high, {} medium, {} low), {} deprecated, {} examples, {} config, {} links",
            s.breaking_changes,
            s.high,
            s.medium,
            s.low,
            s.deprecated_features,
            s.code_examples,
            s.config_updates,
            s.documentation_links
        )?;

        writeln!(f, "\n## Breaking Changes")?;
        for c in &g.breaking_changes {
            writeln!(f, "- [{}] {}", c.severity, c.title)?;
            indent(f, &c.description)?;
        }

        writeln!(f, "\n## Deprecated")?;
        for d in &g.deprecated_features {
            writeln!(f, "- {}", d.feature)?;
            indent(f, &d.description)?;
            writeln!(f, "    Alternative: {}", d.alternative)?;
        }

        writeln!(f, "\n## Code Examples")?;
        for e in &g.code_examples {
            writeln!(f, "- {} ({})", e.title, e.language)?;
            indent(f, &e.description)?;
            writeln!(f, "    Before:")?;
            indent(f, &e.before_code)?;
            writeln!(f, "    After:")?;
            indent(f, &e.after_code)?;
        }

        writeln!(f, "\n## Configuration")?;
        for c in &g.config_updates {
            writeln!(f, "- {}", c.title)?;
            indent(f, &c.description)?;
            indent(f, &c.config_changes)?;
        }

        writeln!(f, "\n## Documentation")?;
        for l in &g.documentation_links {
            writeln!(f, "- {} <{}>", l.title, l.url)?;
            indent(f, &l.description)?;
        }

        if !g.case_studies().is_empty() {
            writeln!(f, "\n## Case Studies")?;
            for cs in g.case_studies() {
                writeln!(f, "- {}: {}", cs.company, cs.project_description)?;
                for ch in &cs.challenges {
                    writeln!(f, "    * {ch}")?;
                }
                writeln!(f, "    Solution: {}", cs.solution)?;
                writeln!(f, "    Outcome: {}", cs.outcome)?;
            }
        }
        Ok(())
    }
}
