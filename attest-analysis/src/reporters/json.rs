//! JSON reporter — serializes the full report for machine consumption.

use attest_core::AnalysisError;

use super::Reporter;
use crate::pipeline::AnalysisReport;

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &AnalysisReport) -> Result<String, AnalysisError> {
        serde_json::to_string_pretty(report)
            .map_err(|e| AnalysisError::ReportFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests_support::sample_report;

    #[test]
    fn test_output_round_trips_as_json() {
        let out = JsonReporter.generate(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["findings"].as_array().unwrap().len(), 2);
        assert_eq!(value["stats"]["analyzed"], 2);
    }
}
