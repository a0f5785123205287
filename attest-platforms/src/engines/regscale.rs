//! RegScale engine — control implementation records and POA&M rollups.

use attest_core::{PlatformError, Severity};
use chrono::{Duration, Utc};
use serde_json::json;

use crate::record::{EvidenceRecord, RecordKind};
use crate::rollup;
use crate::traits::{EngineContext, PlatformEngine};

const CATALOGS: &[&str] = &["NIST-800-53r5", "NIST-800-171r2", "CMMC-2.0", "FedRAMP-Moderate"];

pub struct RegScaleEngine;

impl PlatformEngine for RegScaleEngine {
    fn id(&self) -> &'static str {
        "regscale"
    }

    fn name(&self) -> &'static str {
        "RegScale Compliance Manager"
    }

    fn kinds(&self) -> &'static [RecordKind] {
        &[RecordKind::Requirement, RecordKind::Assessment, RecordKind::Proof]
    }

    /// Snapshot the control inventory for a named system.
    fn run_scan(
        &self,
        ctx: &EngineContext,
        target: &str,
    ) -> Result<EvidenceRecord, PlatformError> {
        if target.trim().is_empty() {
            return Err(PlatformError::InvalidParameter {
                name: "target".to_string(),
                message: "system name must not be empty".to_string(),
            });
        }

        let controls = ctx.sim.count(90, 420);
        let (implemented, planned, partial) = ctx.sim.split_results(controls, 0.7);
        let poam_open = ctx.sim.count(0, 25);
        let poam_closed = ctx.sim.count(5, 60);
        let next_due = Utc::now() + Duration::days(i64::from(ctx.sim.count(7, 120)));

        let severity = if poam_open > 15 {
            Severity::High
        } else if poam_open > 5 {
            Severity::Medium
        } else {
            Severity::Low
        };

        let payload = json!({
            "system": target,
            "catalog": ctx.sim.pick(CATALOGS),
            "controls_total": controls,
            "controls_implemented": implemented,
            "controls_partial": partial,
            "controls_planned": planned,
            "poam": { "open": poam_open, "closed": poam_closed },
            "next_assessment_due": next_due.to_rfc3339(),
        });

        let record = EvidenceRecord::new(RecordKind::Requirement, self.id(), severity, payload);
        ctx.commit(record)
    }

    /// Roll up implementation status across snapshotted systems.
    fn run_assessment(&self, ctx: &EngineContext) -> Result<EvidenceRecord, PlatformError> {
        let snapshots = ctx
            .store
            .list(Some(RecordKind::Requirement), Some(self.id()))?;

        let mut controls = 0u64;
        let mut implemented = 0u64;
        let mut poam_open = 0u64;
        for snap in &snapshots {
            controls += snap.payload["controls_total"].as_u64().unwrap_or(0);
            implemented += snap.payload["controls_implemented"].as_u64().unwrap_or(0);
            poam_open += snap.payload["poam"]["open"].as_u64().unwrap_or(0);
        }
        let implementation_pct =
            rollup::pass_percentage(implemented as u32, controls.min(u64::from(u32::MAX)) as u32);

        let payload = json!({
            "systems_assessed": snapshots.len(),
            "controls_total": controls,
            "controls_implemented": implemented,
            "implementation_pct": implementation_pct,
            "poam_open_total": poam_open,
        });

        let severity = if implementation_pct < 60.0 {
            Severity::High
        } else {
            Severity::Info
        };
        let record = EvidenceRecord::new(RecordKind::Assessment, self.id(), severity, payload);
        ctx.commit_assessment(record, implementation_pct)
    }

    /// Produce an attestation package referencing current evidence.
    fn generate_proof(
        &self,
        ctx: &EngineContext,
        subject: &str,
    ) -> Result<EvidenceRecord, PlatformError> {
        if subject.trim().is_empty() {
            return Err(PlatformError::InvalidParameter {
                name: "subject".to_string(),
                message: "attestation subject must not be empty".to_string(),
            });
        }

        let evidence = ctx.store.list(None, Some(self.id()))?;
        let payload = json!({
            "attestation_subject": subject,
            "evidence_records": evidence.len(),
            "evidence_ids": evidence.iter().map(|r| r.id.to_string()).collect::<Vec<_>>(),
            "signed": false,
            "generated_at": Utc::now().to_rfc3339(),
        });

        let record = EvidenceRecord::new(RecordKind::Proof, self.id(), Severity::Info, payload);
        ctx.commit(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::harness::Harness;

    #[test]
    fn test_control_counts_balance() {
        let h = Harness::seeded(51);
        let record = RegScaleEngine.run_scan(&h.ctx(), "payments-enclave").unwrap();
        let p = &record.payload;
        let sum = p["controls_implemented"].as_u64().unwrap()
            + p["controls_partial"].as_u64().unwrap()
            + p["controls_planned"].as_u64().unwrap();
        assert_eq!(sum, p["controls_total"].as_u64().unwrap());
    }

    #[test]
    fn test_blank_subject_rejected() {
        let h = Harness::seeded(52);
        let result = RegScaleEngine.generate_proof(&h.ctx(), "  ");
        assert!(matches!(
            result,
            Err(PlatformError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_proof_references_prior_evidence() {
        let h = Harness::seeded(52);
        RegScaleEngine.run_scan(&h.ctx(), "sys-a").unwrap();
        RegScaleEngine.run_assessment(&h.ctx()).unwrap();
        let proof = RegScaleEngine
            .generate_proof(&h.ctx(), "annual-audit")
            .unwrap();
        assert_eq!(proof.payload["evidence_records"], 2);
    }
}
