//! Gitignore-aware file discovery.

use std::path::{Path, PathBuf};

use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;

use attest_core::config::ScanConfig;
use attest_core::AnalysisError;

/// Collect candidate file paths under `root`, honoring .gitignore, hidden
/// files, and the configured extra ignore globs.
pub fn collect_files(root: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>, AnalysisError> {
    if !root.exists() {
        return Err(AnalysisError::RootNotFound {
            path: root.display().to_string(),
        });
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .follow_links(config.effective_follow_symlinks())
        .hidden(true)
        .git_ignore(true)
        .git_exclude(true)
        // Honor .gitignore files even when the root is not a git repo.
        .require_git(false);

    if !config.extra_ignore.is_empty() {
        let mut overrides = OverrideBuilder::new(root);
        for glob in &config.extra_ignore {
            // Leading `!` inverts an override into an ignore glob.
            let inverted = format!("!{glob}");
            overrides
                .add(&inverted)
                .map_err(|e| AnalysisError::ReadFailed {
                    path: glob.clone(),
                    message: format!("invalid ignore glob: {e}"),
                })?;
        }
        let overrides = overrides.build().map_err(|e| AnalysisError::ReadFailed {
            path: root.display().to_string(),
            message: format!("failed to build ignore overrides: {e}"),
        })?;
        builder.overrides(overrides);
    }

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!(error = %e, "walk error; skipping entry");
                continue;
            }
        };
        if entry.file_type().map_or(false, |t| t.is_file()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}
