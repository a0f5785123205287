//! Reporters — output formats for analysis reports.
//!
//! 4 reporter formats: console, JSON, SARIF 2.1.0, JUnit XML.

pub mod console;
pub mod json;
pub mod junit;
pub mod sarif;

use attest_core::AnalysisError;

use crate::pipeline::AnalysisReport;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &AnalysisReport) -> Result<String, AnalysisError>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Result<Box<dyn Reporter>, AnalysisError> {
    match format {
        "console" => Ok(Box::new(console::ConsoleReporter::default())),
        "json" => Ok(Box::new(json::JsonReporter)),
        "sarif" => Ok(Box::new(sarif::SarifReporter::new())),
        "junit" => Ok(Box::new(junit::JUnitReporter)),
        other => Err(AnalysisError::UnknownFormat(other.to_string())),
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["console", "json", "sarif", "junit"]
}

#[cfg(test)]
pub(crate) mod tests_support {
    use attest_core::Severity;

    use crate::finding::Finding;
    use crate::pipeline::AnalysisReport;
    use crate::scanner::{Language, ScanEntry, ScanStats};

    /// Two analyzed files, one clean, two findings in the other.
    pub fn sample_report() -> AnalysisReport {
        let entry = |path: &str| ScanEntry {
            path: path.to_string(),
            language: Language::Python,
            size: 64,
            hash: 0xF00D,
            content: String::new(),
        };
        AnalysisReport {
            root: "/repo".to_string(),
            entries: vec![entry("src/app.py"), entry("src/lib.py")],
            findings: vec![
                Finding::new(
                    "src/app.py",
                    3,
                    101,
                    "line-length",
                    Severity::Medium,
                    "line exceeds 100 characters".to_string(),
                ),
                Finding::new(
                    "src/app.py",
                    5,
                    12,
                    "trailing-whitespace",
                    Severity::Low,
                    "trailing whitespace".to_string(),
                ),
            ],
            stats: ScanStats {
                total_files: 2,
                analyzed: 2,
                ..Default::default()
            },
            duration_ms: 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_knows_every_listed_format() {
        for format in available_formats() {
            let reporter = create_reporter(format).unwrap();
            assert_eq!(reporter.name(), *format);
        }
    }

    #[test]
    fn test_unknown_format_is_an_error() {
        assert!(matches!(
            create_reporter("html"),
            Err(AnalysisError::UnknownFormat(_))
        ));
    }
}
