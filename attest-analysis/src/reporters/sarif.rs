//! SARIF 2.1.0 reporter for code-scanning integrations.

use serde_json::{json, Value};

use attest_core::{AnalysisError, Severity};

use super::Reporter;
use crate::pipeline::AnalysisReport;

/// SARIF 2.1.0 reporter.
pub struct SarifReporter {
    pub tool_name: String,
    pub tool_version: String,
}

impl SarifReporter {
    pub fn new() -> Self {
        Self {
            tool_name: "attest".to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    fn severity_to_sarif_level(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical | Severity::High => "error",
            Severity::Medium => "warning",
            Severity::Low | Severity::Info => "note",
        }
    }

    fn build_results(&self, report: &AnalysisReport) -> Vec<Value> {
        report
            .findings
            .iter()
            .map(|finding| {
                json!({
                    "ruleId": finding.rule_id,
                    "level": Self::severity_to_sarif_level(finding.severity),
                    "message": {
                        "text": finding.message
                    },
                    "locations": [{
                        "physicalLocation": {
                            "artifactLocation": {
                                "uri": finding.file,
                                "uriBaseId": "%SRCROOT%"
                            },
                            "region": {
                                "startLine": finding.line.max(1),
                                "startColumn": finding.column.max(1)
                            }
                        }
                    }]
                })
            })
            .collect()
    }

    fn build_rules(&self, report: &AnalysisReport) -> Vec<Value> {
        let mut seen = std::collections::HashSet::new();
        let mut rules = Vec::new();
        for finding in &report.findings {
            if seen.insert(finding.rule_id.clone()) {
                rules.push(json!({
                    "id": finding.rule_id,
                    "shortDescription": {
                        "text": finding.message.chars().take(100).collect::<String>()
                    },
                    "defaultConfiguration": {
                        "level": Self::severity_to_sarif_level(finding.severity)
                    }
                }));
            }
        }
        rules
    }
}

impl Default for SarifReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for SarifReporter {
    fn name(&self) -> &'static str {
        "sarif"
    }

    fn generate(&self, report: &AnalysisReport) -> Result<String, AnalysisError> {
        let sarif = json!({
            "$schema": "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json",
            "version": "2.1.0",
            "runs": [{
                "tool": {
                    "driver": {
                        "name": self.tool_name,
                        "version": self.tool_version,
                        "informationUri": "https://example.invalid/attest",
                        "rules": self.build_rules(report)
                    }
                },
                "results": self.build_results(report)
            }]
        });
        serde_json::to_string_pretty(&sarif)
            .map_err(|e| AnalysisError::ReportFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests_support::sample_report;

    #[test]
    fn test_sarif_shape() {
        let out = SarifReporter::new().generate(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["version"], "2.1.0");
        let run = &value["runs"][0];
        assert_eq!(run["tool"]["driver"]["name"], "attest");
        assert!(run["tool"]["driver"]["rules"].as_array().unwrap().len() >= 1);
        assert_eq!(run["results"].as_array().unwrap().len(), 2);
        assert_eq!(
            run["results"][0]["locations"][0]["physicalLocation"]["region"]["startLine"],
            3
        );
    }

    #[test]
    fn test_duplicate_rules_listed_once() {
        let mut report = sample_report();
        let extra = report.findings[0].clone();
        report.findings.push(extra);
        let out = SarifReporter::new().generate(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let rules = value["runs"][0]["tool"]["driver"]["rules"].as_array().unwrap();
        assert_eq!(rules.len(), 2);
    }
}
