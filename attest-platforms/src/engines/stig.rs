//! STIG engine — DISA checklist scans and compliance rollups.

use attest_core::{PlatformError, Severity};
use serde_json::json;

use crate::record::{EvidenceRecord, RecordKind};
use crate::rollup;
use crate::traits::{EngineContext, PlatformEngine};

const CHECKLISTS: &[&str] = &[
    "U_RHEL_9_STIG_V1R3",
    "U_MS_Windows_Server_2022_STIG_V2R1",
    "U_Apache_2-4_UNIX_Server_STIG_V2R5",
    "U_PostgreSQL_9-x_STIG_V2R4",
];

pub struct StigEngine;

impl PlatformEngine for StigEngine {
    fn id(&self) -> &'static str {
        "stig"
    }

    fn name(&self) -> &'static str {
        "DISA STIG Checklist Manager"
    }

    fn kinds(&self) -> &'static [RecordKind] {
        &[RecordKind::ScanResult, RecordKind::Assessment]
    }

    /// Produce a checklist result for a single asset.
    fn run_scan(
        &self,
        ctx: &EngineContext,
        target: &str,
    ) -> Result<EvidenceRecord, PlatformError> {
        if target.trim().is_empty() {
            return Err(PlatformError::InvalidParameter {
                name: "target".to_string(),
                message: "asset name must not be empty".to_string(),
            });
        }

        // Open findings per category; CAT I findings are rare in a healthy demo.
        let cat1_open = ctx.sim.count(0, 3);
        let cat2_open = ctx.sim.count(0, 18);
        let cat3_open = ctx.sim.count(0, 30);
        let open = cat1_open + cat2_open + cat3_open;
        let not_a_finding = ctx.sim.count(150, 320);
        let not_reviewed = ctx.sim.count(0, 12);
        let total = open + not_a_finding + not_reviewed;
        let compliance_pct = rollup::pass_percentage(not_a_finding, total - not_reviewed);

        let severity = if cat1_open > 0 {
            Severity::High
        } else if cat2_open > 0 {
            Severity::Medium
        } else if cat3_open > 0 {
            Severity::Low
        } else {
            Severity::Info
        };

        let payload = json!({
            "asset": target,
            "checklist": ctx.sim.pick(CHECKLISTS),
            "open": {
                "cat_i": cat1_open,
                "cat_ii": cat2_open,
                "cat_iii": cat3_open,
            },
            "not_a_finding": not_a_finding,
            "not_reviewed": not_reviewed,
            "total_vulns": total,
            "compliance_pct": compliance_pct,
        });

        let record = EvidenceRecord::new(RecordKind::ScanResult, self.id(), severity, payload);
        ctx.commit(record)
    }

    /// Roll up all checklist results into a fleet-level assessment.
    fn run_assessment(&self, ctx: &EngineContext) -> Result<EvidenceRecord, PlatformError> {
        let scans = ctx.store.list(Some(RecordKind::ScanResult), Some(self.id()))?;
        let summary = rollup::score_summary(&scans, "/compliance_pct");

        let mut cat1_total = 0u64;
        let mut cat2_total = 0u64;
        let mut cat3_total = 0u64;
        for scan in &scans {
            cat1_total += scan.payload["open"]["cat_i"].as_u64().unwrap_or(0);
            cat2_total += scan.payload["open"]["cat_ii"].as_u64().unwrap_or(0);
            cat3_total += scan.payload["open"]["cat_iii"].as_u64().unwrap_or(0);
        }

        let severity = if cat1_total > 0 {
            Severity::Critical
        } else if cat2_total > 0 {
            Severity::Medium
        } else {
            Severity::Info
        };

        let payload = json!({
            "assets_assessed": scans.len(),
            "open_by_category": {
                "cat_i": cat1_total,
                "cat_ii": cat2_total,
                "cat_iii": cat3_total,
            },
            "mean_compliance_pct": summary.mean,
            "worst_compliance_pct": summary.min,
            "severity_label": severity.stig_category(),
        });

        let record = EvidenceRecord::new(RecordKind::Assessment, self.id(), severity, payload);
        ctx.commit_assessment(record, summary.mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::harness::Harness;

    #[test]
    fn test_checklist_counts_consistent() {
        let h = Harness::seeded(21);
        let record = StigEngine.run_scan(&h.ctx(), "db-server-03").unwrap();

        let p = &record.payload;
        let open = p["open"]["cat_i"].as_u64().unwrap()
            + p["open"]["cat_ii"].as_u64().unwrap()
            + p["open"]["cat_iii"].as_u64().unwrap();
        let total = open + p["not_a_finding"].as_u64().unwrap() + p["not_reviewed"].as_u64().unwrap();
        assert_eq!(total, p["total_vulns"].as_u64().unwrap());

        let pct = p["compliance_pct"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&pct));
    }

    #[test]
    fn test_assessment_sums_categories() {
        let h = Harness::seeded(2);
        StigEngine.run_scan(&h.ctx(), "a").unwrap();
        StigEngine.run_scan(&h.ctx(), "b").unwrap();
        StigEngine.run_scan(&h.ctx(), "c").unwrap();

        let record = StigEngine.run_assessment(&h.ctx()).unwrap();
        assert_eq!(record.payload["assets_assessed"], 3);
        assert!(record.payload["mean_compliance_pct"].as_f64().unwrap().is_finite());
    }
}
