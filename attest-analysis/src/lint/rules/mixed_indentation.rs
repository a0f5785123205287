//! Mixed indentation rule — tabs and spaces in one line's indent.

use attest_core::Severity;

use crate::finding::Finding;
use crate::lint::traits::LintRule;
use crate::source::SourceFile;

pub struct MixedIndentationRule;

impl LintRule for MixedIndentationRule {
    fn id(&self) -> &'static str {
        "mixed-indentation"
    }

    fn severity(&self) -> Severity {
        Severity::Low
    }

    fn check(&self, source: &SourceFile) -> Vec<Finding> {
        let mut findings = Vec::new();
        for (idx, line) in source.lines().iter().enumerate() {
            let indent: String = line.chars().take_while(|c| *c == ' ' || *c == '\t').collect();
            if indent.contains(' ') && indent.contains('\t') {
                findings.push(Finding::new(
                    &source.path,
                    idx + 1,
                    0,
                    self.id(),
                    self.severity(),
                    "indentation mixes tabs and spaces",
                ));
            }
        }
        findings
    }
}
