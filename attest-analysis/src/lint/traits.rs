//! Lint rule trait.

use attest_core::Severity;

use crate::finding::Finding;
use crate::source::SourceFile;

/// A single stateless lint check.
///
/// Rules are independent: no rule observes another rule's output, so
/// execution order never matters.
pub trait LintRule: Send + Sync {
    /// Stable rule id, e.g. `"line-length"`.
    fn id(&self) -> &'static str;

    /// Severity assigned to this rule's findings.
    fn severity(&self) -> Severity;

    /// Run the check over one file.
    fn check(&self, source: &SourceFile) -> Vec<Finding>;
}
