//! Event payload types.

use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// A scan over a source tree has started.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanStartedEvent {
    pub root: String,
    pub timestamp_ms: i64,
}

/// Periodic progress during a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanProgressEvent {
    pub files_seen: usize,
    pub files_analyzed: usize,
}

/// A scan finished.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanCompleteEvent {
    pub root: String,
    pub total_files: usize,
    pub skipped_files: usize,
    pub duration_ms: u64,
}

/// A file could not be read or analyzed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanErrorEvent {
    pub file: String,
    pub message: String,
}

/// A lint or typecheck finding was produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindingDetectedEvent {
    pub file: String,
    pub line: usize,
    pub rule_id: String,
    pub severity: Severity,
}

/// An evidence record was inserted into the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordCreatedEvent {
    pub record_id: String,
    pub platform: String,
    pub kind: String,
}

/// An evidence record was removed from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDeletedEvent {
    pub record_id: String,
    pub platform: String,
}

/// A compliance assessment finished with a rolled-up score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentCompletedEvent {
    pub platform: String,
    pub record_id: String,
    pub score: f64,
    pub passed: bool,
}
