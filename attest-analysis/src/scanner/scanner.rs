//! Parallel scan: walk, read, hash, and classify source files.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;

use attest_core::config::ScanConfig;
use attest_core::events::{
    ScanCompleteEvent, ScanErrorEvent, ScanProgressEvent, ScanStartedEvent,
};
use attest_core::{AnalysisError, EventDispatcher};

use super::hasher;
use super::language_detect::Language;
use super::types::{ScanEntry, ScanStats};
use super::walker;

/// Emit a progress event every this many processed files.
const PROGRESS_INTERVAL: usize = 256;

/// Per-file outcome used to fold stats without locking.
enum FileOutcome {
    Analyzed(Box<ScanEntry>),
    TooLarge,
    Binary,
    NonSource,
    Error { path: String, message: String },
}

pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan `root`, returning analyzable entries plus counters.
    ///
    /// Lifecycle events are emitted through `events`; per-file read failures
    /// become scan-error events, never panics.
    pub fn scan(
        &self,
        root: &Path,
        events: &EventDispatcher,
    ) -> Result<(Vec<ScanEntry>, ScanStats), AnalysisError> {
        let started = Instant::now();
        events.emit_scan_started(&ScanStartedEvent {
            root: root.display().to_string(),
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
        });

        let files = walker::collect_files(root, &self.config)?;
        let max_size = self.config.effective_max_file_size();
        let skip_binary = self.config.effective_skip_binary();

        let process = || {
            files
                .par_iter()
                .map(|path| self.process_file(root, path, max_size, skip_binary))
                .collect::<Vec<FileOutcome>>()
        };
        // An explicit thread count gets its own scoped pool; otherwise
        // rayon's global pool decides.
        let outcomes = match self.config.threads.filter(|&t| t > 0) {
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| AnalysisError::ReadFailed {
                    path: root.display().to_string(),
                    message: e.to_string(),
                })?
                .install(process),
            None => process(),
        };

        let mut entries = Vec::new();
        let mut stats = ScanStats {
            total_files: files.len(),
            ..Default::default()
        };
        for (processed, outcome) in outcomes.into_iter().enumerate() {
            if processed > 0 && processed % PROGRESS_INTERVAL == 0 {
                events.emit_scan_progress(&ScanProgressEvent {
                    files_seen: processed,
                    files_analyzed: stats.analyzed,
                });
            }
            match outcome {
                FileOutcome::Analyzed(entry) => {
                    stats.analyzed += 1;
                    entries.push(*entry);
                }
                FileOutcome::TooLarge => stats.skipped_too_large += 1,
                FileOutcome::Binary => stats.skipped_binary += 1,
                FileOutcome::NonSource => stats.skipped_non_source += 1,
                FileOutcome::Error { path, message } => {
                    stats.errors += 1;
                    events.emit_scan_error(&ScanErrorEvent { file: path, message });
                }
            }
        }

        stats.duration_ms = started.elapsed().as_millis() as u64;
        events.emit_scan_complete(&ScanCompleteEvent {
            root: root.display().to_string(),
            total_files: stats.total_files,
            skipped_files: stats.skipped(),
            duration_ms: stats.duration_ms,
        });
        tracing::info!(
            total = stats.total_files,
            analyzed = stats.analyzed,
            skipped = stats.skipped(),
            errors = stats.errors,
            "scan complete"
        );

        Ok((entries, stats))
    }

    fn process_file(
        &self,
        root: &Path,
        path: &Path,
        max_size: u64,
        skip_binary: bool,
    ) -> FileOutcome {
        let rel = path
            .strip_prefix(root)
            .unwrap_or(path)
            .display()
            .to_string()
            .replace('\\', "/");

        let ext = path.extension().and_then(|e| e.to_str());
        let language = match Language::from_extension(ext) {
            Some(lang) => lang,
            None => return FileOutcome::NonSource,
        };

        let size = match std::fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) => {
                return FileOutcome::Error {
                    path: rel,
                    message: e.to_string(),
                }
            }
        };
        if size > max_size {
            return FileOutcome::TooLarge;
        }

        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                return FileOutcome::Error {
                    path: rel,
                    message: e.to_string(),
                }
            }
        };
        if skip_binary && hasher::looks_binary(&bytes) {
            return FileOutcome::Binary;
        }

        let hash = hasher::hash_content(&bytes);
        let content = String::from_utf8_lossy(&bytes).into_owned();
        FileOutcome::Analyzed(Box::new(ScanEntry {
            path: rel,
            language,
            size,
            hash,
            content,
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_scan_classifies_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("main.py"), "print('hi')\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not source\n").unwrap();
        fs::write(dir.path().join("blob.rs"), b"fn x() {}\x00\xff".as_slice()).unwrap();

        let scanner = Scanner::new(ScanConfig::default());
        let events = EventDispatcher::new();
        let (entries, stats) = scanner.scan(dir.path(), &events).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "main.py");
        assert_eq!(entries[0].language, Language::Python);
        assert_eq!(stats.skipped_non_source, 1);
        assert_eq!(stats.skipped_binary, 1);
        assert_eq!(stats.analyzed, 1);
    }

    #[test]
    fn test_size_cap_skips_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("big.py"), "x = 1\n".repeat(100)).unwrap();

        let config = ScanConfig {
            max_file_size: Some(10),
            ..Default::default()
        };
        let scanner = Scanner::new(config);
        let events = EventDispatcher::new();
        let (entries, stats) = scanner.scan(dir.path(), &events).unwrap();

        assert!(entries.is_empty());
        assert_eq!(stats.skipped_too_large, 1);
    }

    #[test]
    fn test_empty_dir_scans_clean() {
        let dir = tempfile::tempdir().unwrap();
        let scanner = Scanner::new(ScanConfig::default());
        let events = EventDispatcher::new();
        let (entries, stats) = scanner.scan(dir.path(), &events).unwrap();
        assert!(entries.is_empty());
        assert_eq!(stats.total_files, 0);
    }
}
