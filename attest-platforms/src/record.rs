//! Evidence record model.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use attest_core::Severity;

/// The kind of evidence a record carries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    ScanResult,
    Assessment,
    Proof,
    Document,
    WorkflowState,
    Requirement,
}

impl RecordKind {
    /// Display name used in payloads and events.
    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::ScanResult => "scan_result",
            RecordKind::Assessment => "assessment",
            RecordKind::Proof => "proof",
            RecordKind::Document => "document",
            RecordKind::WorkflowState => "workflow_state",
            RecordKind::Requirement => "requirement",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single piece of compliance evidence.
///
/// The payload is free-form JSON, but each engine keeps the field set for a
/// given (platform, kind) pair stable so downstream consumers can rely on it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EvidenceRecord {
    /// UUID v4 identifier, unique within a store.
    pub id: Uuid,
    /// Kind of evidence.
    pub kind: RecordKind,
    /// Id of the engine that produced this record.
    pub platform: String,
    /// Worst severity observed in the payload.
    #[schemars(with = "String")]
    pub severity: Severity,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated. Never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,
    /// Platform-vocabulary payload.
    pub payload: serde_json::Value,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl EvidenceRecord {
    /// Create a record with a fresh id and both timestamps set to now.
    pub fn new(
        kind: RecordKind,
        platform: impl Into<String>,
        severity: Severity,
        payload: serde_json::Value,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind,
            platform: platform.into(),
            severity,
            created_at: now,
            updated_at: now,
            payload,
            tags: Vec::new(),
        }
    }

    /// Attach tags, builder-style.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Replace the payload and bump `updated_at`.
    pub fn touch(&mut self, payload: serde_json::Value) {
        self.payload = payload;
        self.updated_at = Utc::now();
    }
}

/// Identity equality: two records are equal if they have the same id.
impl PartialEq for EvidenceRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// JSON schema for the evidence record shape, for export to integrators.
pub fn record_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(EvidenceRecord)
}
