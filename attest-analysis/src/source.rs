//! Source file model and naive function extraction.
//!
//! Function spans come from per-language regexes over raw lines, not a
//! parse tree. Good enough for the shallow checks built on top; wrong for
//! anything that needs real scoping.

use std::sync::OnceLock;

use regex::Regex;

use crate::scanner::{Language, ScanEntry};

/// A loaded source file with its line table.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: String,
    pub language: Language,
    pub content: String,
    lines: Vec<String>,
}

/// A function found by regex match.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSpan {
    pub name: String,
    /// 1-based line of the signature.
    pub start_line: usize,
    /// 1-based last line of the body (inclusive, naive).
    pub end_line: usize,
    /// Raw text between the signature's parentheses.
    pub params_raw: String,
    pub has_return_annotation: bool,
}

fn python_def_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\s*)def\s+(\w+)\s*\(([^)]*)\)\s*(->\s*[^:]+)?:").expect("valid regex")
    })
}

fn brace_fn_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // TS/JS `function f(...)`, Rust `fn f(...)`, Go `func f(...)`.
    RE.get_or_init(|| {
        Regex::new(r"^\s*(?:pub\s+|export\s+|async\s+)*(?:function|fn|func)\s+(\w+)\s*(?:<[^>]*>)?\s*\(([^)]*)\)\s*(->\s*[^\{]+|:\s*[^\{]+)?")
            .expect("valid regex")
    })
}

impl SourceFile {
    pub fn new(path: impl Into<String>, language: Language, content: impl Into<String>) -> Self {
        let content = content.into();
        let lines = content.lines().map(str::to_string).collect();
        Self {
            path: path.into(),
            language,
            content,
            lines,
        }
    }

    pub fn from_entry(entry: &ScanEntry) -> Self {
        Self::new(entry.path.clone(), entry.language, entry.content.clone())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Lines of a function body, signature included.
    pub fn span_lines(&self, span: &FunctionSpan) -> &[String] {
        let start = span.start_line.saturating_sub(1);
        let end = span.end_line.min(self.lines.len());
        &self.lines[start..end]
    }

    /// Extract function spans. Languages without an extraction regex yield
    /// an empty list.
    pub fn functions(&self) -> Vec<FunctionSpan> {
        match self.language {
            Language::Python => self.python_functions(),
            Language::TypeScript
            | Language::JavaScript
            | Language::Rust
            | Language::Go => self.brace_functions(),
            _ => Vec::new(),
        }
    }

    /// Python: body extends while lines are blank or indented deeper than
    /// the `def` itself.
    fn python_functions(&self) -> Vec<FunctionSpan> {
        let mut spans = Vec::new();
        for (idx, line) in self.lines.iter().enumerate() {
            let Some(caps) = python_def_re().captures(line) else {
                continue;
            };
            let def_indent = caps.get(1).map_or(0, |m| m.as_str().len());
            let mut end = idx + 1;
            for (body_idx, body_line) in self.lines.iter().enumerate().skip(idx + 1) {
                let trimmed = body_line.trim_end();
                if trimmed.is_empty() {
                    continue;
                }
                let indent = trimmed.len() - trimmed.trim_start().len();
                if indent <= def_indent {
                    break;
                }
                end = body_idx + 1;
            }
            spans.push(FunctionSpan {
                name: caps[2].to_string(),
                start_line: idx + 1,
                end_line: end,
                params_raw: caps[3].to_string(),
                has_return_annotation: caps.get(4).is_some(),
            });
        }
        spans
    }

    /// Brace languages: body extends until the opening brace balances out.
    fn brace_functions(&self) -> Vec<FunctionSpan> {
        let mut spans = Vec::new();
        for (idx, line) in self.lines.iter().enumerate() {
            let Some(caps) = brace_fn_re().captures(line) else {
                continue;
            };
            let mut depth: i32 = 0;
            let mut seen_open = false;
            let mut end = idx + 1;
            'outer: for (body_idx, body_line) in self.lines.iter().enumerate().skip(idx) {
                for ch in body_line.chars() {
                    match ch {
                        '{' => {
                            depth += 1;
                            seen_open = true;
                        }
                        '}' => depth -= 1,
                        _ => {}
                    }
                    if seen_open && depth == 0 {
                        end = body_idx + 1;
                        break 'outer;
                    }
                }
                end = body_idx + 1;
            }
            let annotation = caps.get(3).map(|m| m.as_str().trim());
            spans.push(FunctionSpan {
                name: caps[1].to_string(),
                start_line: idx + 1,
                end_line: end,
                params_raw: caps[2].to_string(),
                has_return_annotation: annotation.is_some(),
            });
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_function_extraction() {
        let src = SourceFile::new(
            "m.py",
            Language::Python,
            "def plain(a, b):\n    return a + b\n\ndef typed(a: int) -> int:\n    return a\n",
        );
        let fns = src.functions();
        assert_eq!(fns.len(), 2);
        assert_eq!(fns[0].name, "plain");
        assert!(!fns[0].has_return_annotation);
        assert_eq!(fns[0].end_line, 2);
        assert!(fns[1].has_return_annotation);
    }

    #[test]
    fn test_python_nested_body_span() {
        let src = SourceFile::new(
            "m.py",
            Language::Python,
            "def outer(x):\n    if x:\n        return 1\n    return 0\n\ntop = 1\n",
        );
        let fns = src.functions();
        assert_eq!(fns[0].end_line, 4);
    }

    #[test]
    fn test_rust_function_extraction() {
        let src = SourceFile::new(
            "m.rs",
            Language::Rust,
            "pub fn add(a: i32, b: i32) -> i32 {\n    a + b\n}\n",
        );
        let fns = src.functions();
        assert_eq!(fns.len(), 1);
        assert_eq!(fns[0].name, "add");
        assert_eq!(fns[0].end_line, 3);
        assert!(fns[0].has_return_annotation);
    }

    #[test]
    fn test_unsupported_language_yields_nothing() {
        let src = SourceFile::new("M.java", Language::Java, "class M {}\n");
        assert!(src.functions().is_empty());
    }

    #[test]
    fn test_empty_file() {
        let src = SourceFile::new("e.py", Language::Python, "");
        assert!(src.is_empty());
        assert_eq!(src.line_count(), 0);
        assert!(src.functions().is_empty());
    }
}
