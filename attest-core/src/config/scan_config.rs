//! Scanner configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_FILE_SIZE;

/// Configuration for the file scanner.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum file size in bytes. Files larger than this are counted but
    /// not read. Default: 1 MiB.
    pub max_file_size: Option<u64>,
    /// Worker thread count for the parallel walk. Default: rayon's choice.
    pub threads: Option<usize>,
    /// Extra ignore globs applied on top of .gitignore.
    #[serde(default)]
    pub extra_ignore: Vec<String>,
    /// Follow symlinks during the walk. Default: false.
    pub follow_symlinks: Option<bool>,
    /// Skip files that look binary (NUL byte in the first 8 KiB). Default: true.
    pub skip_binary: Option<bool>,
}

impl ScanConfig {
    /// Returns the effective maximum file size.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }

    /// Returns whether binary files are skipped, defaulting to true.
    pub fn effective_skip_binary(&self) -> bool {
        self.skip_binary.unwrap_or(true)
    }

    /// Returns whether symlinks are followed, defaulting to false.
    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }
}
