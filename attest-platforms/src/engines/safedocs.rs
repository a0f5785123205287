//! SafeDocs engine — document-format safety scan reports.

use attest_core::{PlatformError, Severity};
use serde_json::json;

use crate::record::{EvidenceRecord, RecordKind};
use crate::traits::{EngineContext, PlatformEngine};

const FORMATS: &[&str] = &["pdf", "docx", "xlsx", "png", "zip", "dicom"];
const DIALECTS: &[&str] = &["strict", "permissive", "legacy-compat"];

pub struct SafeDocsEngine;

impl PlatformEngine for SafeDocsEngine {
    fn id(&self) -> &'static str {
        "safedocs"
    }

    fn name(&self) -> &'static str {
        "SafeDocs Format Analyzer"
    }

    fn kinds(&self) -> &'static [RecordKind] {
        &[RecordKind::ScanResult]
    }

    /// Fabricate a parser-safety report for a document corpus.
    fn run_scan(
        &self,
        ctx: &EngineContext,
        target: &str,
    ) -> Result<EvidenceRecord, PlatformError> {
        if target.trim().is_empty() {
            return Err(PlatformError::InvalidParameter {
                name: "target".to_string(),
                message: "corpus name must not be empty".to_string(),
            });
        }

        let samples = ctx.sim.count(500, 20_000);
        let malformed = ctx.sim.count(0, samples / 20);
        let parser_crashes = ctx.sim.count(0, malformed.min(8));
        let grammar_rules = ctx.sim.count(80, 600);
        let coverage_pct = ctx.sim.score(62.0, 99.5);

        let severity = match parser_crashes {
            0 => Severity::Info,
            1..=2 => Severity::Medium,
            _ => Severity::High,
        };

        let payload = json!({
            "corpus": target,
            "format": ctx.sim.pick(FORMATS),
            "dialect": ctx.sim.pick(DIALECTS),
            "samples_total": samples,
            "samples_malformed": malformed,
            "parser_crashes": parser_crashes,
            "grammar_rules": grammar_rules,
            "parser_coverage_pct": coverage_pct,
        });

        let record = EvidenceRecord::new(RecordKind::ScanResult, self.id(), severity, payload);
        ctx.commit(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::harness::Harness;

    #[test]
    fn test_malformed_bounded_by_samples() {
        let h = Harness::seeded(41);
        let record = SafeDocsEngine.run_scan(&h.ctx(), "ingest-corpus").unwrap();
        let samples = record.payload["samples_total"].as_u64().unwrap();
        let malformed = record.payload["samples_malformed"].as_u64().unwrap();
        assert!(malformed <= samples);
    }

    #[test]
    fn test_assessment_unsupported() {
        let h = Harness::seeded(41);
        assert!(matches!(
            SafeDocsEngine.run_assessment(&h.ctx()),
            Err(PlatformError::UnsupportedKind { .. })
        ));
    }
}
