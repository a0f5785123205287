//! Qualtrax engine — quality workflow states and training rollups.

use attest_core::{PlatformError, Severity};
use serde_json::json;

use crate::record::{EvidenceRecord, RecordKind};
use crate::traits::{EngineContext, PlatformEngine};

const WORKFLOW_STAGES: &[&str] = &[
    "draft",
    "technical_review",
    "quality_review",
    "pending_approval",
    "released",
];

pub struct QualtraxEngine;

impl PlatformEngine for QualtraxEngine {
    fn id(&self) -> &'static str {
        "qualtrax"
    }

    fn name(&self) -> &'static str {
        "Qualtrax Quality Management"
    }

    fn kinds(&self) -> &'static [RecordKind] {
        &[RecordKind::WorkflowState, RecordKind::Assessment]
    }

    /// Snapshot the workflow state of a controlled document.
    fn run_scan(
        &self,
        ctx: &EngineContext,
        target: &str,
    ) -> Result<EvidenceRecord, PlatformError> {
        if target.trim().is_empty() {
            return Err(PlatformError::InvalidParameter {
                name: "target".to_string(),
                message: "document id must not be empty".to_string(),
            });
        }

        let revision = ctx.sim.count(1, 14);
        let stage = *ctx.sim.pick(WORKFLOW_STAGES);
        let approvals_required = ctx.sim.count(1, 4);
        let approvals_granted = ctx.sim.count(0, approvals_required);
        let overdue = stage != "released" && ctx.sim.chance(0.2);

        let payload = json!({
            "document_id": target,
            "revision": revision,
            "stage": stage,
            "approvals": {
                "required": approvals_required,
                "granted": approvals_granted,
            },
            "overdue": overdue,
        });

        let severity = if overdue { Severity::Medium } else { Severity::Info };
        let record =
            EvidenceRecord::new(RecordKind::WorkflowState, self.id(), severity, payload);
        ctx.commit(record)
    }

    /// Roll up workflow health and training completion.
    fn run_assessment(&self, ctx: &EngineContext) -> Result<EvidenceRecord, PlatformError> {
        let states = ctx
            .store
            .list(Some(RecordKind::WorkflowState), Some(self.id()))?;
        let overdue = states
            .iter()
            .filter(|s| s.payload["overdue"].as_bool().unwrap_or(false))
            .count();
        let training_completion_pct = ctx.sim.score(72.0, 100.0);

        let payload = json!({
            "documents_tracked": states.len(),
            "documents_overdue": overdue,
            "training_completion_pct": training_completion_pct,
        });

        let severity = if overdue > 0 { Severity::Low } else { Severity::Info };
        let record = EvidenceRecord::new(RecordKind::Assessment, self.id(), severity, payload);
        ctx.commit_assessment(record, training_completion_pct)
    }
}
