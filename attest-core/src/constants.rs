//! Compiled defaults shared across the workspace.

/// Default maximum line length enforced by the linter.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 100;

/// Default cyclomatic-complexity threshold per function.
pub const DEFAULT_COMPLEXITY_THRESHOLD: u32 = 10;

/// Default indent width the formatter expands leading tabs to.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Maximum consecutive blank lines the formatter preserves.
pub const MAX_BLANK_RUN: usize = 2;

/// Default maximum file size the scanner will read, in bytes (1 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Default pass bias for the simulated test runner (probability a discovered
/// test case is reported as passing).
pub const DEFAULT_TEST_PASS_BIAS: f64 = 0.9;

/// Compliance score at or above which an assessment is considered passing.
pub const DEFAULT_PASSING_SCORE: f64 = 80.0;
