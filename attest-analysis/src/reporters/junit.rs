//! JUnit XML reporter.
//!
//! Output parses in Jenkins, GitHub Actions, and other CI systems. Files
//! map to testsuites; each finding becomes a failing testcase and a clean
//! file contributes a single passing one.

use std::collections::BTreeMap;

use attest_core::{AnalysisError, Severity};

use super::Reporter;
use crate::finding::Finding;
use crate::pipeline::AnalysisReport;

pub struct JUnitReporter;

impl JUnitReporter {
    fn escape_xml(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;")
    }

    fn severity_to_type(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Info => "info",
        }
    }
}

impl Reporter for JUnitReporter {
    fn name(&self) -> &'static str {
        "junit"
    }

    fn generate(&self, report: &AnalysisReport) -> Result<String, AnalysisError> {
        // Group findings per file; BTreeMap keeps suite order stable.
        let mut by_file: BTreeMap<&str, Vec<&Finding>> = BTreeMap::new();
        for entry in &report.entries {
            by_file.entry(entry.path.as_str()).or_default();
        }
        for finding in &report.findings {
            by_file.entry(finding.file.as_str()).or_default().push(finding);
        }

        let total_tests: usize = by_file
            .values()
            .map(|f| if f.is_empty() { 1 } else { f.len() })
            .sum();
        let total_failures = report.findings.len();
        let total_time = report.duration_ms as f64 / 1000.0;

        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&format!(
            "<testsuites name=\"attest\" tests=\"{total_tests}\" failures=\"{total_failures}\" time=\"{total_time:.3}\">\n"
        ));

        for (file, findings) in &by_file {
            let file = Self::escape_xml(file);
            xml.push_str(&format!(
                "  <testsuite name=\"{file}\" tests=\"{}\" failures=\"{}\">\n",
                if findings.is_empty() { 1 } else { findings.len() },
                findings.len()
            ));
            if findings.is_empty() {
                xml.push_str(&format!(
                    "    <testcase name=\"clean\" classname=\"{file}\"/>\n"
                ));
            }
            for finding in findings {
                xml.push_str(&format!(
                    "    <testcase name=\"{}:{}\" classname=\"{file}\">\n",
                    Self::escape_xml(&finding.rule_id),
                    finding.line
                ));
                xml.push_str(&format!(
                    "      <failure type=\"{}\" message=\"{}\"/>\n",
                    Self::severity_to_type(finding.severity),
                    Self::escape_xml(&finding.message)
                ));
                xml.push_str("    </testcase>\n");
            }
            xml.push_str("  </testsuite>\n");
        }
        xml.push_str("</testsuites>\n");
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests_support::sample_report;

    #[test]
    fn test_findings_become_failures() {
        let out = JUnitReporter.generate(&sample_report()).unwrap();
        assert!(out.starts_with("<?xml version=\"1.0\""));
        assert!(out.contains("failures=\"2\""));
        assert!(out.contains("<failure type=\"medium\""));
    }

    #[test]
    fn test_clean_file_gets_passing_case() {
        let out = JUnitReporter.generate(&sample_report()).unwrap();
        assert!(out.contains("name=\"clean\" classname=\"src/lib.py\""));
    }

    #[test]
    fn test_messages_are_escaped() {
        let mut report = sample_report();
        report.findings[0].message = "x < y & z".to_string();
        let out = JUnitReporter.generate(&report).unwrap();
        assert!(out.contains("x &lt; y &amp; z"));
    }
}
