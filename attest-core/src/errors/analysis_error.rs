//! Analysis pipeline errors.

use super::error_code::{self, AttestErrorCode};

/// Errors that can occur during scanning, linting, or report generation.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Scan root does not exist: {path}")]
    RootNotFound { path: String },

    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("Unknown report format: {0}")]
    UnknownFormat(String),

    #[error("Report generation failed: {0}")]
    ReportFailed(String),

    #[error("Invalid lint rule id: {0}")]
    UnknownRule(String),
}

impl AttestErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        error_code::ANALYSIS_ERROR
    }
}
