//! Formatter — normalizes exactly the properties the lint rules check.
//!
//! Idempotent by construction: every step maps already-clean input to
//! itself, so `format(format(x)) == format(x)`.

use attest_core::config::FormatConfig;
use attest_core::constants::MAX_BLANK_RUN;

/// Result of formatting one file.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOutcome {
    pub formatted: String,
    /// Lines that differ from the input (including removed lines).
    pub changed_lines: usize,
    /// True when the input was already fully normalized.
    pub already_clean: bool,
}

pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Normalize `content`:
    /// - strip trailing whitespace from every line
    /// - expand leading tabs to the configured indent width
    /// - collapse runs of more than two blank lines
    /// - drop trailing blank lines and end with exactly one newline
    ///
    /// Empty input formats to itself.
    pub fn format(&self, content: &str) -> FormatOutcome {
        if content.is_empty() {
            return FormatOutcome {
                formatted: String::new(),
                changed_lines: 0,
                already_clean: true,
            };
        }

        let original: Vec<&str> = content.lines().collect();
        let mut lines: Vec<String> = Vec::with_capacity(original.len());
        let mut blank_run = 0usize;

        for raw in &original {
            let mut line = raw.trim_end().to_string();
            if self.config.effective_expand_tabs() {
                line = self.expand_leading_tabs(&line);
            }

            if line.is_empty() {
                blank_run += 1;
                if blank_run > MAX_BLANK_RUN {
                    continue;
                }
            } else {
                blank_run = 0;
            }
            lines.push(line);
        }

        // Drop trailing blank lines; the single final newline is added below.
        while lines.last().map_or(false, |l| l.is_empty()) {
            lines.pop();
        }

        let formatted = if lines.is_empty() {
            String::new()
        } else {
            let mut out = lines.join("\n");
            out.push('\n');
            out
        };

        let mut changed_lines = Self::diff_count(&original, &lines);
        if changed_lines == 0 && formatted != content {
            // Only the final-newline handling differed.
            changed_lines = 1;
        }
        FormatOutcome {
            already_clean: formatted == content,
            changed_lines,
            formatted,
        }
    }

    fn expand_leading_tabs(&self, line: &str) -> String {
        let width = self.config.effective_indent_width();
        let mut out = String::with_capacity(line.len());
        let mut in_indent = true;
        for ch in line.chars() {
            match ch {
                '\t' if in_indent => out.push_str(&" ".repeat(width)),
                ' ' if in_indent => out.push(' '),
                _ => {
                    in_indent = false;
                    out.push(ch);
                }
            }
        }
        out
    }

    /// Count positions where the line vectors differ, plus any surplus lines.
    fn diff_count(original: &[&str], formatted: &[String]) -> usize {
        let common = original.len().min(formatted.len());
        let mut changed = 0;
        for i in 0..common {
            if original[i] != formatted[i] {
                changed += 1;
            }
        }
        changed + original.len().abs_diff(formatted.len())
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(FormatConfig::default())
    }
}
