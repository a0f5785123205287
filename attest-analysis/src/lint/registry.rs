//! Rule registry — builds the configured rule set and runs it over files.

use attest_core::config::LintConfig;

use crate::finding::{sort_findings, Finding};
use crate::source::SourceFile;

use super::rules::{
    ComplexityRule, FinalNewlineRule, LineLengthRule, MixedIndentationRule,
    TrailingWhitespaceRule,
};
use super::traits::LintRule;

/// Holds the enabled lint rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Registry with all built-in rules, honoring `disabled_rules` and the
    /// configured thresholds.
    pub fn with_builtins(config: &LintConfig) -> Self {
        let all: Vec<Box<dyn LintRule>> = vec![
            Box::new(LineLengthRule {
                max_length: config.effective_max_line_length(),
            }),
            Box::new(TrailingWhitespaceRule),
            Box::new(MixedIndentationRule),
            Box::new(FinalNewlineRule),
            Box::new(ComplexityRule::new(config.effective_complexity_threshold())),
        ];
        let rules = all
            .into_iter()
            .filter(|r| config.rule_enabled(r.id()))
            .collect();
        Self { rules }
    }

    /// Empty registry for custom rule sets.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule over one file, returning sorted findings.
    pub fn check_file(&self, source: &SourceFile) -> Vec<Finding> {
        let mut findings: Vec<Finding> = self
            .rules
            .iter()
            .flat_map(|rule| rule.check(source))
            .collect();
        sort_findings(&mut findings);
        findings
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_builtins(&LintConfig::default())
    }
}
