//! Top-level Attest configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FormatConfig, LintConfig, PlatformConfig, ScanConfig, TypecheckConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ATTEST_*`)
/// 3. Project config (`attest.toml` in project root)
/// 4. User config (`~/.attest/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AttestConfig {
    pub scan: ScanConfig,
    pub lint: LintConfig,
    pub format: FormatConfig,
    pub typecheck: TypecheckConfig,
    pub platforms: PlatformConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub scan_max_file_size: Option<u64>,
    pub scan_threads: Option<usize>,
    pub lint_max_line_length: Option<usize>,
    pub lint_complexity_threshold: Option<u32>,
    pub passing_score: Option<f64>,
}

impl AttestConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(_) => {
                        // Non-parse errors from user config are warnings, not fatal.
                        tracing::warn!(path = %user_config_path.display(), "skipping unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("attest.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: AttestConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &AttestConfig) -> Result<(), ConfigError> {
        if let Some(len) = config.lint.max_line_length {
            if len == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "lint.max_line_length".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(threshold) = config.lint.complexity_threshold {
            if threshold == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "lint.complexity_threshold".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }
        if let Some(score) = config.platforms.passing_score {
            if !(0.0..=100.0).contains(&score) {
                return Err(ConfigError::ValidationFailed {
                    field: "platforms.passing_score".to_string(),
                    message: "must be between 0.0 and 100.0".to_string(),
                });
            }
        }
        if let Some(ref max_file_size) = config.scan.max_file_size {
            if *max_file_size == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.max_file_size".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(width) = config.format.indent_width {
            if width == 0 || width > 16 {
                return Err(ConfigError::ValidationFailed {
                    field: "format.indent_width".to_string(),
                    message: "must be between 1 and 16".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.attest/config.toml`.
    fn user_config_path() -> Option<std::path::PathBuf> {
        home_dir().map(|h| h.join(".attest").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut AttestConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: AttestConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` or non-empty value.
    fn merge(base: &mut AttestConfig, other: &AttestConfig) {
        // Scan
        if other.scan.max_file_size.is_some() {
            base.scan.max_file_size = other.scan.max_file_size;
        }
        if other.scan.threads.is_some() {
            base.scan.threads = other.scan.threads;
        }
        if !other.scan.extra_ignore.is_empty() {
            base.scan.extra_ignore = other.scan.extra_ignore.clone();
        }
        if other.scan.follow_symlinks.is_some() {
            base.scan.follow_symlinks = other.scan.follow_symlinks;
        }
        if other.scan.skip_binary.is_some() {
            base.scan.skip_binary = other.scan.skip_binary;
        }

        // Lint
        if other.lint.max_line_length.is_some() {
            base.lint.max_line_length = other.lint.max_line_length;
        }
        if other.lint.complexity_threshold.is_some() {
            base.lint.complexity_threshold = other.lint.complexity_threshold;
        }
        if !other.lint.disabled_rules.is_empty() {
            base.lint.disabled_rules = other.lint.disabled_rules.clone();
        }

        // Format
        if other.format.indent_width.is_some() {
            base.format.indent_width = other.format.indent_width;
        }
        if other.format.expand_tabs.is_some() {
            base.format.expand_tabs = other.format.expand_tabs;
        }

        // Typecheck
        if other.typecheck.require_return_annotations.is_some() {
            base.typecheck.require_return_annotations = other.typecheck.require_return_annotations;
        }
        if other.typecheck.require_param_annotations.is_some() {
            base.typecheck.require_param_annotations = other.typecheck.require_param_annotations;
        }

        // Platforms
        if other.platforms.passing_score.is_some() {
            base.platforms.passing_score = other.platforms.passing_score;
        }
        if other.platforms.simulation_seed.is_some() {
            base.platforms.simulation_seed = other.platforms.simulation_seed;
        }
        if !other.platforms.disabled_platforms.is_empty() {
            base.platforms.disabled_platforms = other.platforms.disabled_platforms.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ATTEST_SCAN_MAX_FILE_SIZE`, `ATTEST_LINT_MAX_LINE_LENGTH`, etc.
    fn apply_env_overrides(config: &mut AttestConfig) {
        if let Ok(val) = std::env::var("ATTEST_SCAN_MAX_FILE_SIZE") {
            if let Ok(v) = val.parse::<u64>() {
                config.scan.max_file_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ATTEST_SCAN_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.scan.threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ATTEST_LINT_MAX_LINE_LENGTH") {
            if let Ok(v) = val.parse::<usize>() {
                config.lint.max_line_length = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ATTEST_LINT_COMPLEXITY_THRESHOLD") {
            if let Ok(v) = val.parse::<u32>() {
                config.lint.complexity_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ATTEST_PLATFORMS_PASSING_SCORE") {
            if let Ok(v) = val.parse::<f64>() {
                config.platforms.passing_score = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ATTEST_PLATFORMS_SIMULATION_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.platforms.simulation_seed = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut AttestConfig, cli: &CliOverrides) {
        if let Some(v) = cli.scan_max_file_size {
            config.scan.max_file_size = Some(v);
        }
        if let Some(v) = cli.scan_threads {
            config.scan.threads = Some(v);
        }
        if let Some(v) = cli.lint_max_line_length {
            config.lint.max_line_length = Some(v);
        }
        if let Some(v) = cli.lint_complexity_threshold {
            config.lint.complexity_threshold = Some(v);
        }
        if let Some(v) = cli.passing_score {
            config.platforms.passing_score = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
