//! Final newline rule.

use attest_core::Severity;

use crate::finding::Finding;
use crate::lint::traits::LintRule;
use crate::source::SourceFile;

pub struct FinalNewlineRule;

impl LintRule for FinalNewlineRule {
    fn id(&self) -> &'static str {
        "final-newline"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, source: &SourceFile) -> Vec<Finding> {
        // Empty files are fine without a newline.
        if source.is_empty() || source.content.ends_with('\n') {
            return Vec::new();
        }
        vec![Finding::new(
            &source.path,
            source.line_count(),
            source.lines().last().map_or(0, |l| l.chars().count()),
            self.id(),
            self.severity(),
            "file does not end with a newline",
        )]
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::Language;

    use super::*;

    #[test]
    fn test_missing_newline_flagged() {
        let rule = FinalNewlineRule;
        let src = SourceFile::new("x.go", Language::Go, "package main");
        assert_eq!(rule.check(&src).len(), 1);
    }

    #[test]
    fn test_present_newline_and_empty_ok() {
        let rule = FinalNewlineRule;
        assert!(rule
            .check(&SourceFile::new("x.go", Language::Go, "package main\n"))
            .is_empty());
        assert!(rule
            .check(&SourceFile::new("x.go", Language::Go, ""))
            .is_empty());
    }
}
