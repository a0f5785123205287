//! Annotation checker for languages with optional type syntax.
//!
//! Python and TypeScript carry optional annotations; everything else
//! passes through untouched. Checks are purely syntactic: a function is
//! flagged when its signature lacks a return annotation or has
//! unannotated parameters. No inference, no resolution.

use attest_core::config::TypecheckConfig;
use attest_core::Severity;

use crate::finding::{sort_findings, Finding};
use crate::source::SourceFile;

pub const MISSING_RETURN_ANNOTATION: &str = "missing-return-annotation";
pub const UNANNOTATED_PARAMETER: &str = "unannotated-parameter";

pub struct TypeChecker {
    config: TypecheckConfig,
}

impl TypeChecker {
    pub fn new(config: TypecheckConfig) -> Self {
        Self { config }
    }

    pub fn check_file(&self, file: &SourceFile) -> Vec<Finding> {
        if !file.language.supports_annotations() {
            return Vec::new();
        }

        let mut findings = Vec::new();
        for func in file.functions() {
            // Dunder methods have conventional signatures; skip them.
            if func.name.starts_with("__") && func.name.ends_with("__") {
                continue;
            }

            if self.config.effective_require_return() && !func.has_return_annotation {
                findings.push(Finding::new(
                    &file.path,
                    func.start_line,
                    1,
                    MISSING_RETURN_ANNOTATION,
                    Severity::Medium,
                    format!("function `{}` has no return type annotation", func.name),
                ));
            }

            if self.config.effective_require_params() {
                for param in unannotated_params(&func.params_raw) {
                    findings.push(Finding::new(
                        &file.path,
                        func.start_line,
                        1,
                        UNANNOTATED_PARAMETER,
                        Severity::Low,
                        format!(
                            "parameter `{param}` of `{}` has no type annotation",
                            func.name
                        ),
                    ));
                }
            }
        }
        sort_findings(&mut findings);
        findings
    }
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new(TypecheckConfig::default())
    }
}

/// Parameter names in `params_raw` with no `:` annotation.
///
/// Receivers (`self`, `cls`, `this`) and bare `*` / `/` separators are
/// exempt; `*args` and `**kwargs` are reported by their plain name.
fn unannotated_params(params_raw: &str) -> Vec<String> {
    let mut out = Vec::new();
    for part in split_params(params_raw) {
        let part = part.trim();
        if part.is_empty() || part.contains(':') {
            continue;
        }
        // Strip defaults (`x=1`) before looking at the name.
        let name = part.split('=').next().unwrap_or(part).trim();
        let name = name.trim_start_matches('*').trim();
        if name.is_empty() || matches!(name, "self" | "cls" | "this" | "/") {
            continue;
        }
        out.push(name.to_string());
    }
    out
}

/// Split a parameter list on top-level commas, ignoring commas nested in
/// brackets (e.g. `x: dict[str, int]`).
fn split_params(raw: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, ch) in raw.char_indices() {
        match ch {
            '[' | '(' | '{' | '<' => depth += 1,
            ']' | ')' | '}' | '>' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(&raw[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&raw[start..]);
    parts
}
