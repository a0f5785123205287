//! Console reporter — human-readable output with color codes.

use attest_core::{AnalysisError, Severity};

use super::Reporter;
use crate::pipeline::AnalysisReport;

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn severity_prefix(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Info => "info",
        }
    }

    fn color_start(&self, severity: Severity) -> &'static str {
        if !self.use_color {
            return "";
        }
        match severity {
            Severity::Critical | Severity::High => "\x1b[31m", // red
            Severity::Medium => "\x1b[33m",                    // yellow
            Severity::Low => "\x1b[36m",                       // cyan
            Severity::Info => "\x1b[90m",                      // gray
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &AnalysisReport) -> Result<String, AnalysisError> {
        let mut out = String::new();
        out.push_str(&format!("Analysis of {}\n", report.root));
        out.push_str(&format!(
            "  {} files analyzed, {} skipped, {} errors ({} ms)\n\n",
            report.stats.analyzed,
            report.stats.skipped(),
            report.stats.errors,
            report.duration_ms
        ));

        for finding in &report.findings {
            out.push_str(&format!(
                "{}{}{} {}:{}:{} [{}] {}\n",
                self.color_start(finding.severity),
                Self::severity_prefix(finding.severity),
                self.color_end(),
                finding.file,
                finding.line,
                finding.column,
                finding.rule_id,
                finding.message
            ));
        }

        if report.findings.is_empty() {
            out.push_str("No findings.\n");
        } else {
            out.push_str(&format!("\n{} finding(s)\n", report.findings.len()));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests_support::sample_report;

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let out = ConsoleReporter::new(false)
            .generate(&sample_report())
            .unwrap();
        assert!(!out.contains('\x1b'));
        assert!(out.contains("src/app.py:3:101"));
        assert!(out.contains("[line-length]"));
    }

    #[test]
    fn test_color_output_wraps_severity() {
        let out = ConsoleReporter::new(true)
            .generate(&sample_report())
            .unwrap();
        assert!(out.contains("\x1b[33mmedium\x1b[0m"));
    }
}
