//! Text report for release-readiness results
//!
//! Emits one block per module, in reactor order, to any line-oriented sink.
//! Line texts follow the original report wording; color is presentational
//! only and can be switched off.

use crate::analyze::{cross_reference, Classification, ReleaseStatus};
use crate::reactor::ModuleDescriptor;
use colored::Colorize;
use std::io::Write;

/// Text report writer
pub struct TextReport {
    /// Whether to use colors
    color: bool,
    /// Whether to append latest changelog entry details
    verbose: bool,
}

impl TextReport {
    /// Create a new report writer
    pub fn new(color: bool, verbose: bool) -> Self {
        Self { color, verbose }
    }

    fn paint(&self, text: &str, style: fn(&str) -> String) -> String {
        if self.color {
            style(text)
        } else {
            text.to_string()
        }
    }

    /// Renders the full report for a classified reactor
    ///
    /// `classifications` must be parallel to `modules` (one entry per
    /// module, same order); cross-references are computed on demand here.
    pub fn render(
        &self,
        modules: &[ModuleDescriptor],
        classifications: &[Classification],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        debug_assert_eq!(modules.len(), classifications.len());

        writeln!(writer, "Results")?;
        writeln!(writer, "-------")?;
        writeln!(writer)?;

        for (index, (module, classification)) in
            modules.iter().zip(classifications.iter()).enumerate()
        {
            self.render_module(index, module, classification, modules, writer)?;
        }

        Ok(())
    }

    fn render_module(
        &self,
        index: usize,
        module: &ModuleDescriptor,
        classification: &Classification,
        modules: &[ModuleDescriptor],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer, "{}", module.key())?;

        match classification.status {
            ReleaseStatus::NotTracked => {
                writeln!(writer, "  - Not a release root")?;
                return Ok(());
            }
            ReleaseStatus::Unmodified => {
                let line = self.paint("  - Unmodified since last release", |s| {
                    s.green().to_string()
                });
                writeln!(writer, "{}", line)?;
            }
            ReleaseStatus::Modified => {
                let line = self.paint("  * Changes since last release present", |s| {
                    s.yellow().to_string()
                });
                writeln!(writer, "{}", line)?;
            }
        }

        if self.verbose {
            if let Some(entry) = &classification.latest_entry {
                let revision: String = entry.revision.chars().take(12).collect();
                let date = entry
                    .timestamp
                    .map(|t| t.format("%Y/%m/%d %H:%M").to_string())
                    .unwrap_or_else(|| "unknown date".to_string());
                writeln!(
                    writer,
                    "      latest change: {} ({}) by {}",
                    revision, date, entry.author
                )?;
            }
        }

        let crossref = cross_reference(index, modules);

        if !crossref.is_empty() {
            writeln!(writer, "  - Downstream dependencies present in reactor")?;
            for dependent in &crossref.dependents {
                writeln!(
                    writer,
                    "      {} <- {}",
                    modules[dependent.module].key(),
                    dependent.declared_version
                )?;
            }
        }

        if crossref.has_explicit_match {
            writeln!(
                writer,
                "  * Downstream explicit dependencies present in reactor"
            )?;
            for dependent in crossref.explicit_dependents(&module.version) {
                writeln!(writer, "      {}", modules[dependent.module].key())?;
            }
        }

        // Deliberately the observed legacy condition: recommend when the
        // module is pinned by a dependent AND has changed since release.
        if crossref.has_explicit_match && classification.status != ReleaseStatus::Unmodified {
            let line = self.paint("  * RECOMMEND RELEASE", |s| s.green().bold().to_string());
            writeln!(writer, "{}", line)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactor::DependencyRef;
    use crate::scm::ChangeLogEntry;

    fn classification(status: ReleaseStatus) -> Classification {
        Classification {
            status,
            latest_entry: None,
        }
    }

    /// The worked example: A untracked, B unmodified and pinning C, C modified
    fn example_reactor() -> Vec<ModuleDescriptor> {
        vec![
            ModuleDescriptor::new("com.example", "a", "1.0", "a"),
            ModuleDescriptor::new("com.example", "b", "2.0", "b")
                .with_scm("scm:git:https://example.com/app.git")
                .with_dependency(DependencyRef::new("com.example", "c", "3.0")),
            ModuleDescriptor::new("com.example", "c", "3.0", "c")
                .with_scm("scm:git:https://example.com/app.git"),
        ]
    }

    fn example_statuses() -> Vec<Classification> {
        vec![
            classification(ReleaseStatus::NotTracked),
            classification(ReleaseStatus::Unmodified),
            classification(ReleaseStatus::Modified),
        ]
    }

    fn render(modules: &[ModuleDescriptor], classifications: &[Classification]) -> String {
        let mut buffer = Vec::new();
        TextReport::new(false, false)
            .render(modules, classifications, &mut buffer)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_example_scenario_exact_lines() {
        let output = render(&example_reactor(), &example_statuses());
        let expected = "\
Results
-------

com.example:a:1.0
  - Not a release root
com.example:b:2.0
  - Unmodified since last release
com.example:c:3.0
  * Changes since last release present
  - Downstream dependencies present in reactor
      com.example:b:2.0 <- 3.0
  * Downstream explicit dependencies present in reactor
      com.example:b:2.0
  * RECOMMEND RELEASE
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_not_tracked_skips_dependency_sections() {
        // A is depended upon, but "Not a release root" ends its block
        let modules = vec![
            ModuleDescriptor::new("com.example", "a", "1.0", "a"),
            ModuleDescriptor::new("com.example", "b", "2.0", "b")
                .with_scm("scm:git:https://example.com/app.git")
                .with_dependency(DependencyRef::new("com.example", "a", "1.0")),
        ];
        let classifications = vec![
            classification(ReleaseStatus::NotTracked),
            classification(ReleaseStatus::Modified),
        ];
        let output = render(&modules, &classifications);
        let a_block: Vec<&str> = output
            .lines()
            .skip_while(|l| *l != "com.example:a:1.0")
            .take(2)
            .collect();
        assert_eq!(a_block, vec!["com.example:a:1.0", "  - Not a release root"]);
    }

    #[test]
    fn test_no_recommendation_for_unmodified_module() {
        // Legacy condition: an unmodified module is never recommended, even
        // when pinned by a dependent
        let modules = vec![
            ModuleDescriptor::new("com.example", "core", "1.0", "core")
                .with_scm("scm:git:https://example.com/app.git"),
            ModuleDescriptor::new("com.example", "webapp", "2.0", "webapp")
                .with_dependency(DependencyRef::new("com.example", "core", "1.0")),
        ];
        let classifications = vec![
            classification(ReleaseStatus::Unmodified),
            classification(ReleaseStatus::NotTracked),
        ];
        let output = render(&modules, &classifications);
        assert!(output.contains("Downstream explicit dependencies present in reactor"));
        assert!(!output.contains("RECOMMEND RELEASE"));
    }

    #[test]
    fn test_no_explicit_section_without_exact_pin() {
        let modules = vec![
            ModuleDescriptor::new("com.example", "core", "1.0", "core")
                .with_scm("scm:git:https://example.com/app.git"),
            ModuleDescriptor::new("com.example", "webapp", "2.0", "webapp")
                .with_dependency(DependencyRef::new("com.example", "core", "0.9")),
        ];
        let classifications = vec![
            classification(ReleaseStatus::Modified),
            classification(ReleaseStatus::NotTracked),
        ];
        let output = render(&modules, &classifications);
        assert!(output.contains("  - Downstream dependencies present in reactor"));
        assert!(output.contains("      com.example:webapp:2.0 <- 0.9"));
        assert!(!output.contains("explicit"));
        assert!(!output.contains("RECOMMEND RELEASE"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let modules = example_reactor();
        let classifications = example_statuses();
        let first = render(&modules, &classifications);
        let second = render(&modules, &classifications);
        assert_eq!(first, second);
    }

    #[test]
    fn test_verbose_appends_latest_entry() {
        let modules = vec![ModuleDescriptor::new("com.example", "core", "1.0", "core")
            .with_scm("scm:git:https://example.com/app.git")];
        let classifications = vec![Classification {
            status: ReleaseStatus::Modified,
            latest_entry: Some(ChangeLogEntry {
                revision: "abcdef0123456789".to_string(),
                author: "Jane Dev".to_string(),
                timestamp: None,
                comment: "fix bug".to_string(),
            }),
        }];
        let mut buffer = Vec::new();
        TextReport::new(false, true)
            .render(&modules, &classifications, &mut buffer)
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("latest change: abcdef012345"));
        assert!(output.contains("by Jane Dev"));
    }
}
