//! Hyland engine — content-management document records and retention checks.

use attest_core::{PlatformError, Severity};
use serde_json::json;

use crate::record::{EvidenceRecord, RecordKind};
use crate::rollup;
use crate::traits::{EngineContext, PlatformEngine};

const RETENTION_CLASSES: &[&str] = &["permanent", "7-year", "3-year", "1-year", "transient"];
const INDEX_FIELDS: &[&str] = &[
    "case_number",
    "document_date",
    "originating_office",
    "classification",
    "retention_trigger",
];

pub struct HylandEngine;

impl PlatformEngine for HylandEngine {
    fn id(&self) -> &'static str {
        "hyland"
    }

    fn name(&self) -> &'static str {
        "Hyland Content Services"
    }

    fn kinds(&self) -> &'static [RecordKind] {
        &[RecordKind::Document, RecordKind::Assessment]
    }

    /// Register an ingested document batch.
    fn run_scan(
        &self,
        ctx: &EngineContext,
        target: &str,
    ) -> Result<EvidenceRecord, PlatformError> {
        if target.trim().is_empty() {
            return Err(PlatformError::InvalidParameter {
                name: "target".to_string(),
                message: "batch name must not be empty".to_string(),
            });
        }

        let documents = ctx.sim.count(10, 2_000);
        let indexed = ctx.sim.count(documents / 2, documents);
        let field_count = ctx.sim.count(2, INDEX_FIELDS.len() as u32) as usize;

        let payload = json!({
            "batch": target,
            "documents": documents,
            "documents_indexed": indexed,
            "retention_class": ctx.sim.pick(RETENTION_CLASSES),
            "index_fields": &INDEX_FIELDS[..field_count],
        });

        let severity = if indexed < documents {
            Severity::Low
        } else {
            Severity::Info
        };
        let record = EvidenceRecord::new(RecordKind::Document, self.id(), severity, payload);
        ctx.commit(record)
    }

    /// Assess retention indexing completeness across ingested batches.
    fn run_assessment(&self, ctx: &EngineContext) -> Result<EvidenceRecord, PlatformError> {
        let batches = ctx.store.list(Some(RecordKind::Document), Some(self.id()))?;

        let mut documents = 0u64;
        let mut indexed = 0u64;
        for batch in &batches {
            documents += batch.payload["documents"].as_u64().unwrap_or(0);
            indexed += batch.payload["documents_indexed"].as_u64().unwrap_or(0);
        }
        let indexed_pct = rollup::pass_percentage(
            indexed.min(u64::from(u32::MAX)) as u32,
            documents.min(u64::from(u32::MAX)) as u32,
        );

        let payload = json!({
            "batches_assessed": batches.len(),
            "documents_total": documents,
            "documents_indexed": indexed,
            "indexed_pct": indexed_pct,
        });

        let record =
            EvidenceRecord::new(RecordKind::Assessment, self.id(), Severity::Info, payload);
        ctx.commit_assessment(record, indexed_pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::harness::Harness;

    #[test]
    fn test_indexed_bounded_by_documents() {
        let h = Harness::seeded(71);
        let record = HylandEngine.run_scan(&h.ctx(), "intake-2026-08").unwrap();
        let docs = record.payload["documents"].as_u64().unwrap();
        let indexed = record.payload["documents_indexed"].as_u64().unwrap();
        assert!(indexed <= docs);
    }

    #[test]
    fn test_assessment_empty_store_zeroed() {
        let h = Harness::seeded(72);
        let record = HylandEngine.run_assessment(&h.ctx()).unwrap();
        assert_eq!(record.payload["indexed_pct"], 0.0);
    }
}
