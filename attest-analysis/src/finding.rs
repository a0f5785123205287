//! Finding type shared by the linter and the annotation checker.

use serde::{Deserialize, Serialize};

use attest_core::Severity;

/// A single diagnostic produced by a lint rule or the annotation checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Path relative to the scan root.
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// 0-based column.
    pub column: usize,
    /// Stable rule id, e.g. `line-length`.
    pub rule_id: String,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn new(
        file: impl Into<String>,
        line: usize,
        column: usize,
        rule_id: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            rule_id: rule_id.into(),
            severity,
            message: message.into(),
        }
    }
}

/// Sort findings by (file, line, column, rule id) for stable report output.
pub fn sort_findings(findings: &mut [Finding]) {
    findings.sort_by(|a, b| {
        (a.file.as_str(), a.line, a.column, a.rule_id.as_str())
            .cmp(&(b.file.as_str(), b.line, b.column, b.rule_id.as_str()))
    });
}
