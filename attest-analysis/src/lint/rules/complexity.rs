//! Cyclomatic-complexity rule — branch-token counting per function.
//!
//! Complexity is 1 plus the number of branch-introducing tokens in the
//! function body, matched as substrings with aho-corasick. No parsing, so
//! tokens inside strings and comments count too; the threshold is meant to
//! catch outliers, not to be exact.

use aho_corasick::AhoCorasick;
use attest_core::Severity;
use rustc_hash::FxHashMap;
use std::sync::Mutex;

use crate::finding::Finding;
use crate::lint::traits::LintRule;
use crate::scanner::Language;
use crate::source::SourceFile;

pub struct ComplexityRule {
    pub threshold: u32,
    /// One automaton per language, built on first use.
    matchers: Mutex<FxHashMap<Language, AhoCorasick>>,
}

impl ComplexityRule {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            matchers: Mutex::new(FxHashMap::default()),
        }
    }

    fn count_branches(&self, language: Language, body: &str) -> u32 {
        let mut matchers = self.matchers.lock().unwrap_or_else(|e| e.into_inner());
        let matcher = matchers.entry(language).or_insert_with(|| {
            AhoCorasick::new(language.branch_tokens()).expect("valid branch token set")
        });
        matcher.find_iter(body).count() as u32
    }
}

impl LintRule for ComplexityRule {
    fn id(&self) -> &'static str {
        "complexity"
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn check(&self, source: &SourceFile) -> Vec<Finding> {
        let mut findings = Vec::new();
        for span in source.functions() {
            let body = source.span_lines(&span).join("\n");
            let complexity = 1 + self.count_branches(source.language, &body);
            if complexity > self.threshold {
                findings.push(Finding::new(
                    &source.path,
                    span.start_line,
                    0,
                    self.id(),
                    self.severity(),
                    format!(
                        "function `{}` has complexity {complexity} (max {})",
                        span.name, self.threshold
                    ),
                ));
            }
        }
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_function_under_threshold() {
        let rule = ComplexityRule::new(10);
        let src = SourceFile::new(
            "x.py",
            Language::Python,
            "def f(a):\n    return a + 1\n",
        );
        assert!(rule.check(&src).is_empty());
    }

    #[test]
    fn test_branchy_function_flagged() {
        let rule = ComplexityRule::new(3);
        let body: String = (0..6)
            .map(|i| format!("    if a == {i}:\n        return {i}\n"))
            .collect();
        let src = SourceFile::new(
            "x.py",
            Language::Python,
            format!("def f(a):\n{body}    return -1\n"),
        );
        let findings = rule.check(&src);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("`f`"));
    }

    #[test]
    fn test_only_function_bodies_counted() {
        let rule = ComplexityRule::new(1);
        // Branch tokens at module level, outside any function.
        let src = SourceFile::new(
            "x.py",
            Language::Python,
            "if a:\n    pass\nif b:\n    pass\n",
        );
        assert!(rule.check(&src).is_empty());
    }
}
