//! Platform engine trait and execution context.

use attest_core::config::PlatformConfig;
use attest_core::events::{AssessmentCompletedEvent, RecordCreatedEvent, RecordDeletedEvent};
use attest_core::{EventDispatcher, PlatformError};

use crate::record::{EvidenceRecord, RecordKind};
use crate::simulate::Simulator;
use crate::store::RecordStore;

/// Everything an engine needs to produce and commit evidence.
pub struct EngineContext<'a> {
    pub store: &'a RecordStore,
    pub sim: &'a Simulator,
    pub events: &'a EventDispatcher,
    pub config: &'a PlatformConfig,
}

impl<'a> EngineContext<'a> {
    /// Insert a record into the store and emit a created event.
    pub fn commit(&self, record: EvidenceRecord) -> Result<EvidenceRecord, PlatformError> {
        self.store.insert(record.clone())?;
        self.events.emit_record_created(&RecordCreatedEvent {
            record_id: record.id.to_string(),
            platform: record.platform.clone(),
            kind: record.kind.to_string(),
        });
        tracing::debug!(
            platform = %record.platform,
            kind = %record.kind,
            id = %record.id,
            "evidence record committed"
        );
        Ok(record)
    }

    /// Remove a record from the store and emit a deleted event.
    pub fn retract(&self, id: uuid::Uuid) -> Result<EvidenceRecord, PlatformError> {
        let record = self.store.remove(id)?;
        self.events.emit_record_deleted(&RecordDeletedEvent {
            record_id: record.id.to_string(),
            platform: record.platform.clone(),
        });
        Ok(record)
    }

    /// Commit an assessment record and emit its rolled-up score.
    pub fn commit_assessment(
        &self,
        record: EvidenceRecord,
        score: f64,
    ) -> Result<EvidenceRecord, PlatformError> {
        let record = self.commit(record)?;
        let passed = score >= self.config.effective_passing_score();
        self.events
            .emit_assessment_completed(&AssessmentCompletedEvent {
                platform: record.platform.clone(),
                record_id: record.id.to_string(),
                score,
                passed,
            });
        Ok(record)
    }
}

/// A compliance platform integration.
///
/// Engines fabricate plausible evidence only. Operations the platform does
/// not offer keep the default implementation, which reports the kind as
/// unsupported.
pub trait PlatformEngine: Send + Sync {
    /// Stable engine id, e.g. `"scap"`.
    fn id(&self) -> &'static str;

    /// Human-readable platform name.
    fn name(&self) -> &'static str;

    /// Record kinds this engine produces.
    fn kinds(&self) -> &'static [RecordKind];

    /// Run a simulated scan against a named target.
    fn run_scan(
        &self,
        _ctx: &EngineContext,
        _target: &str,
    ) -> Result<EvidenceRecord, PlatformError> {
        Err(PlatformError::UnsupportedKind {
            platform: self.id().to_string(),
            kind: RecordKind::ScanResult.to_string(),
        })
    }

    /// Run a simulated assessment over the evidence this engine produced.
    fn run_assessment(&self, _ctx: &EngineContext) -> Result<EvidenceRecord, PlatformError> {
        Err(PlatformError::UnsupportedKind {
            platform: self.id().to_string(),
            kind: RecordKind::Assessment.to_string(),
        })
    }

    /// Generate a simulated proof or attestation artifact for a subject.
    fn generate_proof(
        &self,
        _ctx: &EngineContext,
        _subject: &str,
    ) -> Result<EvidenceRecord, PlatformError> {
        Err(PlatformError::UnsupportedKind {
            platform: self.id().to_string(),
            kind: RecordKind::Proof.to_string(),
        })
    }
}
