//! CASE/4GL engine — model repository inventories and generation rollups.

use attest_core::{PlatformError, Severity};
use serde_json::json;

use crate::record::{EvidenceRecord, RecordKind};
use crate::traits::{EngineContext, PlatformEngine};

const REPOSITORY_TYPES: &[&str] = &["ca-gen", "cool-gen", "powerbuilder", "oracle-forms"];
const MODEL_KINDS: &[&str] = &["data_model", "activity_model", "dialog_flow", "action_diagram"];

pub struct CaseToolsEngine;

impl PlatformEngine for CaseToolsEngine {
    fn id(&self) -> &'static str {
        "case_tools"
    }

    fn name(&self) -> &'static str {
        "CASE/4GL Repository Tools"
    }

    fn kinds(&self) -> &'static [RecordKind] {
        &[RecordKind::ScanResult, RecordKind::Assessment]
    }

    /// Inventory a legacy model repository.
    fn run_scan(
        &self,
        ctx: &EngineContext,
        target: &str,
    ) -> Result<EvidenceRecord, PlatformError> {
        if target.trim().is_empty() {
            return Err(PlatformError::InvalidParameter {
                name: "target".to_string(),
                message: "repository name must not be empty".to_string(),
            });
        }

        let models = ctx.sim.count(20, 800);
        let objects = models * ctx.sim.count(3, 40);
        let generated_ratio = ctx.sim.score(0.3, 0.98);

        let mut model_counts = serde_json::Map::new();
        for kind in MODEL_KINDS {
            model_counts.insert(
                (*kind).to_string(),
                json!(ctx.sim.count(0, models / 2)),
            );
        }

        let payload = json!({
            "repository": target,
            "repository_type": ctx.sim.pick(REPOSITORY_TYPES),
            "models_total": models,
            "repository_objects": objects,
            "model_counts": model_counts,
            "generated_code_ratio": generated_ratio,
        });

        let record =
            EvidenceRecord::new(RecordKind::ScanResult, self.id(), Severity::Info, payload);
        ctx.commit(record)
    }

    /// Assess modernization exposure across inventoried repositories.
    fn run_assessment(&self, ctx: &EngineContext) -> Result<EvidenceRecord, PlatformError> {
        let inventories = ctx.store.list(Some(RecordKind::ScanResult), Some(self.id()))?;

        let mut models = 0u64;
        let mut ratio_sum = 0.0f64;
        for inv in &inventories {
            models += inv.payload["models_total"].as_u64().unwrap_or(0);
            ratio_sum += inv.payload["generated_code_ratio"].as_f64().unwrap_or(0.0);
        }
        let mean_generated_ratio = if inventories.is_empty() {
            0.0
        } else {
            (ratio_sum / inventories.len() as f64 * 1000.0).round() / 1000.0
        };

        let payload = json!({
            "repositories_assessed": inventories.len(),
            "models_total": models,
            "mean_generated_code_ratio": mean_generated_ratio,
        });

        let record =
            EvidenceRecord::new(RecordKind::Assessment, self.id(), Severity::Info, payload);
        ctx.commit_assessment(record, mean_generated_ratio * 100.0)
    }
}
