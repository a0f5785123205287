//! Orchestration: scan a root, run every enabled check over the sources,
//! and fold the results into a single report.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use attest_core::events::FindingDetectedEvent;
use attest_core::errors::AttestErrorCode;
use attest_core::{AnalysisError, AttestConfig, EventDispatcher};

use crate::finding::{sort_findings, Finding};
use crate::lint::RuleRegistry;
use crate::scanner::{ScanEntry, ScanStats, Scanner};
use crate::source::SourceFile;
use crate::typecheck::TypeChecker;

/// Everything one pipeline run produced.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub root: String,
    pub entries: Vec<ScanEntry>,
    pub findings: Vec<Finding>,
    pub stats: ScanStats,
    pub duration_ms: u64,
}

impl AnalysisReport {
    pub fn finding_count(&self) -> usize {
        self.findings.len()
    }

    /// Findings at or above `severity`.
    pub fn findings_at_least(&self, severity: attest_core::Severity) -> usize {
        self.findings.iter().filter(|f| f.severity >= severity).count()
    }
}

pub struct AnalysisPipeline {
    scanner: Scanner,
    rules: RuleRegistry,
    typechecker: TypeChecker,
    events: Arc<EventDispatcher>,
}

impl AnalysisPipeline {
    pub fn new(config: &AttestConfig, events: Arc<EventDispatcher>) -> Self {
        Self {
            scanner: Scanner::new(config.scan.clone()),
            rules: RuleRegistry::with_builtins(&config.lint),
            typechecker: TypeChecker::new(config.typecheck.clone()),
            events,
        }
    }

    /// Scan `root` and run lint and annotation checks over every analyzable
    /// file. Each finding is announced through the dispatcher before the
    /// report is assembled.
    pub fn run(&self, root: &Path) -> Result<AnalysisReport, AnalysisError> {
        let started = Instant::now();
        let (entries, stats) = self.scanner.scan(root, &self.events).map_err(|e| {
            tracing::error!(code = e.error_code(), error = %e, "scan failed");
            e
        })?;

        let mut findings = Vec::new();
        for entry in &entries {
            let source = SourceFile::from_entry(entry);
            findings.extend(self.rules.check_file(&source));
            findings.extend(self.typechecker.check_file(&source));
        }
        sort_findings(&mut findings);

        for finding in &findings {
            self.events.emit_finding_detected(&FindingDetectedEvent {
                file: finding.file.clone(),
                line: finding.line,
                rule_id: finding.rule_id.clone(),
                severity: finding.severity,
            });
        }

        let report = AnalysisReport {
            root: root.display().to_string(),
            entries,
            findings,
            stats,
            duration_ms: started.elapsed().as_millis() as u64,
        };
        tracing::info!(
            root = %report.root,
            files = report.stats.analyzed,
            findings = report.finding_count(),
            "analysis complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pipeline() -> AnalysisPipeline {
        AnalysisPipeline::new(&AttestConfig::default(), Arc::new(EventDispatcher::new()))
    }

    #[test]
    fn test_reports_findings_across_checks() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("app.py"),
            "def handler(event):   \n    return event\n",
        )
        .unwrap();

        let report = pipeline().run(dir.path()).unwrap();
        assert_eq!(report.stats.analyzed, 1);
        let rules: Vec<_> = report.findings.iter().map(|f| f.rule_id.as_str()).collect();
        assert!(rules.contains(&"trailing-whitespace"));
        assert!(rules.contains(&"missing-return-annotation"));
        assert!(rules.contains(&"unannotated-parameter"));
    }

    #[test]
    fn test_findings_are_sorted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.py"), "x = 1   \n").unwrap();
        fs::write(dir.path().join("a.py"), "y = 2   \n").unwrap();

        let report = pipeline().run(dir.path()).unwrap();
        let files: Vec<_> = report.findings.iter().map(|f| f.file.as_str()).collect();
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }

    #[test]
    fn test_clean_tree_reports_nothing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ok.py"), "def f(x: int) -> int:\n    return x\n").unwrap();

        let report = pipeline().run(dir.path()).unwrap();
        assert!(report.findings.is_empty());
        assert_eq!(report.stats.analyzed, 1);
    }
}
