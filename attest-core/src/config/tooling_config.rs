//! Linter, formatter, and type checker configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COMPLEXITY_THRESHOLD, DEFAULT_INDENT_WIDTH, DEFAULT_MAX_LINE_LENGTH,
};

/// Configuration for the lint rule set.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LintConfig {
    /// Maximum line length. Default: 100.
    pub max_line_length: Option<usize>,
    /// Cyclomatic-complexity threshold per function. Default: 10.
    pub complexity_threshold: Option<u32>,
    /// Rule ids to disable. Empty means all rules run.
    #[serde(default)]
    pub disabled_rules: Vec<String>,
}

impl LintConfig {
    /// Returns the effective maximum line length.
    pub fn effective_max_line_length(&self) -> usize {
        self.max_line_length.unwrap_or(DEFAULT_MAX_LINE_LENGTH)
    }

    /// Returns the effective complexity threshold.
    pub fn effective_complexity_threshold(&self) -> u32 {
        self.complexity_threshold.unwrap_or(DEFAULT_COMPLEXITY_THRESHOLD)
    }

    /// Returns whether a rule id is enabled.
    pub fn rule_enabled(&self, id: &str) -> bool {
        !self.disabled_rules.iter().any(|r| r == id)
    }
}

/// Configuration for the formatter.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FormatConfig {
    /// Spaces per indent level when expanding leading tabs. Default: 4.
    pub indent_width: Option<usize>,
    /// Expand leading tabs to spaces. Default: true.
    pub expand_tabs: Option<bool>,
}

impl FormatConfig {
    /// Returns the effective indent width.
    pub fn effective_indent_width(&self) -> usize {
        self.indent_width.unwrap_or(DEFAULT_INDENT_WIDTH)
    }

    /// Returns whether leading tabs are expanded, defaulting to true.
    pub fn effective_expand_tabs(&self) -> bool {
        self.expand_tabs.unwrap_or(true)
    }
}

/// Configuration for the annotation checker.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TypecheckConfig {
    /// Require return-type annotations. Default: true.
    pub require_return_annotations: Option<bool>,
    /// Require parameter annotations. Default: true.
    pub require_param_annotations: Option<bool>,
}

impl TypecheckConfig {
    pub fn effective_require_return(&self) -> bool {
        self.require_return_annotations.unwrap_or(true)
    }

    pub fn effective_require_params(&self) -> bool {
        self.require_param_annotations.unwrap_or(true)
    }
}
