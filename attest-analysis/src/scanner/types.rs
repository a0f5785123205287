//! Scanner output types.

use serde::{Deserialize, Serialize};

use super::language_detect::Language;

/// One analyzable source file discovered by the scanner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanEntry {
    /// Path relative to the scan root, with forward slashes.
    pub path: String,
    pub language: Language,
    /// Size in bytes.
    pub size: u64,
    /// xxh3 64-bit content hash.
    pub hash: u64,
    /// File content. Held in memory so downstream tools avoid a second read;
    /// excluded from serialized reports.
    #[serde(skip)]
    pub content: String,
}

/// Aggregate counters for one scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanStats {
    /// Every file the walker yielded.
    pub total_files: usize,
    /// Files read, hashed, and handed to analysis.
    pub analyzed: usize,
    /// Files over the configured size cap.
    pub skipped_too_large: usize,
    /// Files failing the binary sniff.
    pub skipped_binary: usize,
    /// Files with no recognized source extension.
    pub skipped_non_source: usize,
    /// Files that could not be read.
    pub errors: usize,
    pub duration_ms: u64,
}

impl ScanStats {
    /// Total skipped for any reason.
    pub fn skipped(&self) -> usize {
        self.skipped_too_large + self.skipped_binary + self.skipped_non_source
    }
}
