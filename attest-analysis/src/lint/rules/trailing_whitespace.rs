//! Trailing whitespace rule.

use attest_core::Severity;

use crate::finding::Finding;
use crate::lint::traits::LintRule;
use crate::source::SourceFile;

pub struct TrailingWhitespaceRule;

impl LintRule for TrailingWhitespaceRule {
    fn id(&self) -> &'static str {
        "trailing-whitespace"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, source: &SourceFile) -> Vec<Finding> {
        let mut findings = Vec::new();
        for (idx, line) in source.lines().iter().enumerate() {
            let trimmed = line.trim_end();
            if trimmed.len() != line.len() {
                findings.push(Finding::new(
                    &source.path,
                    idx + 1,
                    trimmed.chars().count(),
                    self.id(),
                    self.severity(),
                    "trailing whitespace",
                ));
            }
        }
        findings
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::Language;

    use super::*;

    #[test]
    fn test_flags_trailing_spaces_and_tabs() {
        let rule = TrailingWhitespaceRule;
        let src = SourceFile::new("x.rs", Language::Rust, "clean\nspaces  \ntab\t\n");
        let findings = rule.check(&src);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].line, 2);
        assert_eq!(findings[1].line, 3);
    }

    #[test]
    fn test_clean_file() {
        let rule = TrailingWhitespaceRule;
        let src = SourceFile::new("x.rs", Language::Rust, "a\nb\n");
        assert!(rule.check(&src).is_empty());
    }
}
