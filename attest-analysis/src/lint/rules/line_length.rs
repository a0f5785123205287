//! Line length rule.

use attest_core::Severity;

use crate::finding::Finding;
use crate::lint::traits::LintRule;
use crate::source::SourceFile;

pub struct LineLengthRule {
    pub max_length: usize,
}

impl LintRule for LineLengthRule {
    fn id(&self) -> &'static str {
        "line-length"
    }

    fn severity(&self) -> Severity {
        Severity::Low
    }

    fn check(&self, source: &SourceFile) -> Vec<Finding> {
        let mut findings = Vec::new();
        for (idx, line) in source.lines().iter().enumerate() {
            let width = line.chars().count();
            if width > self.max_length {
                findings.push(Finding::new(
                    &source.path,
                    idx + 1,
                    self.max_length,
                    self.id(),
                    self.severity(),
                    format!("line is {width} characters (max {})", self.max_length),
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
    fn test_flags_long_line() {
        let rule = LineLengthRule { max_length: 10 };
        let src = SourceFile::new("x.py", Language::Python, "short\nthis line is too long\n");
        let findings = rule.check(&src);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 2);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let rule = LineLengthRule { max_length: 10 };
        // 10 chars but 11 bytes; the char count is what matters.
        let src = SourceFile::new("x.py", Language::Python, "käsekuchen\n");
        assert!(rule.check(&src).is_empty());
    }
}
