//! HACMS engine — simulated formal-assurance proof artifacts.

use attest_core::{PlatformError, Severity};
use serde_json::json;

use crate::record::{EvidenceRecord, RecordKind};
use crate::traits::{EngineContext, PlatformEngine};

const PROVERS: &[&str] = &["sel4-proofstack", "frama-c", "ivory-tower", "acsl-bridge"];
const ASSURANCE_LEVELS: &[&str] = &["SIL-2", "SIL-3", "SIL-4", "EAL-5"];

pub struct HacmsEngine;

impl PlatformEngine for HacmsEngine {
    fn id(&self) -> &'static str {
        "hacms"
    }

    fn name(&self) -> &'static str {
        "HACMS Assurance Toolchain"
    }

    fn kinds(&self) -> &'static [RecordKind] {
        &[RecordKind::Proof, RecordKind::Assessment]
    }

    /// Fabricate a proof artifact for a verification subject.
    fn generate_proof(
        &self,
        ctx: &EngineContext,
        subject: &str,
    ) -> Result<EvidenceRecord, PlatformError> {
        if subject.trim().is_empty() {
            return Err(PlatformError::InvalidParameter {
                name: "subject".to_string(),
                message: "verification subject must not be empty".to_string(),
            });
        }

        let obligations = ctx.sim.count(40, 900);
        // Admitted obligations are lemmas taken on faith; a demo proof keeps
        // them to a handful.
        let admitted = ctx.sim.count(0, 5).min(obligations);
        let discharged = obligations - admitted;

        let severity = if admitted == 0 {
            Severity::Info
        } else {
            Severity::Low
        };

        let payload = json!({
            "subject": subject,
            "prover": ctx.sim.pick(PROVERS),
            "assurance_level": ctx.sim.pick(ASSURANCE_LEVELS),
            "obligations": {
                "total": obligations,
                "discharged": discharged,
                "admitted": admitted,
            },
            "proof_checked": true,
            "check_duration_ms": ctx.sim.duration_ms(20_000, 600_000),
        });

        let record = EvidenceRecord::new(RecordKind::Proof, self.id(), severity, payload);
        ctx.commit(record)
    }

    /// Roll up proof coverage across all generated proofs.
    fn run_assessment(&self, ctx: &EngineContext) -> Result<EvidenceRecord, PlatformError> {
        let proofs = ctx.store.list(Some(RecordKind::Proof), Some(self.id()))?;

        let mut total = 0u64;
        let mut discharged = 0u64;
        for proof in &proofs {
            total += proof.payload["obligations"]["total"].as_u64().unwrap_or(0);
            discharged += proof.payload["obligations"]["discharged"]
                .as_u64()
                .unwrap_or(0);
        }
        let coverage = if total == 0 {
            0.0
        } else {
            (discharged as f64 / total as f64 * 1000.0).round() / 10.0
        };

        let payload = json!({
            "proofs_considered": proofs.len(),
            "obligations_total": total,
            "obligations_discharged": discharged,
            "discharge_pct": coverage,
        });

        let record =
            EvidenceRecord::new(RecordKind::Assessment, self.id(), Severity::Info, payload);
        ctx.commit_assessment(record, coverage)
    }
}
