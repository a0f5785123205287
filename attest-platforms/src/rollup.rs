//! Pure arithmetic rollups over evidence record sets.
//!
//! Every function here must return finite numbers for any input, including
//! the empty set — reports render these values directly.

use rustc_hash::FxHashMap;

use attest_core::Severity;

use crate::record::EvidenceRecord;

/// Summary statistics over a numeric payload field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl ScoreSummary {
    fn empty() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            min: 0.0,
            max: 0.0,
        }
    }
}

/// Summarize the f64 value at `pointer` (JSON Pointer syntax) across records.
/// Records without the field, or with a non-finite value, are skipped.
pub fn score_summary(records: &[EvidenceRecord], pointer: &str) -> ScoreSummary {
    let values: Vec<f64> = records
        .iter()
        .filter_map(|r| r.payload.pointer(pointer).and_then(|v| v.as_f64()))
        .filter(|v| v.is_finite())
        .collect();

    if values.is_empty() {
        return ScoreSummary::empty();
    }

    let sum: f64 = values.iter().sum();
    let mean = (sum / values.len() as f64 * 10.0).round() / 10.0;
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    ScoreSummary {
        count: values.len(),
        mean,
        min,
        max,
    }
}

/// Percentage of `passed` over `total`, clamped to `[0, 100]`.
/// Returns 0 for an empty denominator, never NaN.
pub fn pass_percentage(passed: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = f64::from(passed) / f64::from(total) * 100.0;
    (pct.clamp(0.0, 100.0) * 10.0).round() / 10.0
}

/// Count records per severity.
pub fn severity_histogram(records: &[EvidenceRecord]) -> FxHashMap<Severity, usize> {
    let mut hist: FxHashMap<Severity, usize> = FxHashMap::default();
    for record in records {
        *hist.entry(record.severity).or_insert(0) += 1;
    }
    hist
}

/// Count records per platform id.
pub fn platform_counts(records: &[EvidenceRecord]) -> FxHashMap<String, usize> {
    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    for record in records {
        *counts.entry(record.platform.clone()).or_insert(0) += 1;
    }
    counts
}

/// Weighted compliance score in `[0, 100]`: start at 100 and subtract a
/// per-record penalty scaled by severity.
pub fn weighted_compliance_score(records: &[EvidenceRecord]) -> f64 {
    let mut score: f64 = 100.0;
    for record in records {
        score -= match record.severity {
            Severity::Info => 0.0,
            Severity::Low => 0.5,
            Severity::Medium => 2.0,
            Severity::High => 5.0,
            Severity::Critical => 10.0,
        };
    }
    (score.clamp(0.0, 100.0) * 10.0).round() / 10.0
}
