//! Event handler trait with no-op defaults.

use super::types::*;

/// Receives lifecycle events from both subsystems.
///
/// All methods default to no-ops so handlers only implement what they need.
/// Handlers must be `Send + Sync`; they may be invoked from rayon workers.
pub trait AttestEventHandler: Send + Sync {
    fn on_scan_started(&self, _event: &ScanStartedEvent) {}
    fn on_scan_progress(&self, _event: &ScanProgressEvent) {}
    fn on_scan_complete(&self, _event: &ScanCompleteEvent) {}
    fn on_scan_error(&self, _event: &ScanErrorEvent) {}
    fn on_finding_detected(&self, _event: &FindingDetectedEvent) {}
    fn on_record_created(&self, _event: &RecordCreatedEvent) {}
    fn on_record_deleted(&self, _event: &RecordDeletedEvent) {}
    fn on_assessment_completed(&self, _event: &AssessmentCompletedEvent) {}
}
