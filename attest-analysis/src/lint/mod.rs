//! Linter — independent single-pass rules over source files.

pub mod registry;
pub mod rules;
pub mod traits;

pub use registry::RuleRegistry;
pub use traits::LintRule;
