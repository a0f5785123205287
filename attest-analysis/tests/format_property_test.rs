//! Property tests for the formatter's normalization guarantees.

use proptest::prelude::*;

use attest_analysis::Formatter;
use attest_core::config::FormatConfig;

fn arb_source() -> impl Strategy<Value = String> {
    // Lines of printable ASCII plus tabs and trailing spaces, joined with
    // newlines, sometimes without a final newline.
    let line = proptest::string::string_regex("[ \\t]{0,4}[a-zA-Z0-9_() :=]{0,40}[ \\t]{0,3}")
        .unwrap();
    (proptest::collection::vec(line, 0..20), any::<bool>()).prop_map(|(lines, final_nl)| {
        let mut s = lines.join("\n");
        if final_nl && !s.is_empty() {
            s.push('\n');
        }
        s
    })
}

proptest! {
    #[test]
    fn format_is_idempotent(content in arb_source()) {
        let formatter = Formatter::default();
        let once = formatter.format(&content);
        let twice = formatter.format(&once.formatted);
        prop_assert_eq!(&once.formatted, &twice.formatted);
        prop_assert!(twice.already_clean);
        prop_assert_eq!(twice.changed_lines, 0);
    }

    #[test]
    fn formatted_output_is_normalized(content in arb_source()) {
        let out = Formatter::default().format(&content).formatted;
        if !out.is_empty() {
            prop_assert!(out.ends_with('\n'));
            prop_assert!(!out.ends_with("\n\n"));
        }
        for line in out.lines() {
            prop_assert_eq!(line, line.trim_end());
            let indent: String = line.chars().take_while(|c| c.is_whitespace()).collect();
            prop_assert!(!indent.contains('\t'));
        }
        let mut blank_run = 0usize;
        for line in out.lines() {
            if line.is_empty() {
                blank_run += 1;
                prop_assert!(blank_run <= 2);
            } else {
                blank_run = 0;
            }
        }
    }

    #[test]
    fn tab_expansion_respects_width(width in 1usize..=8) {
        let config = FormatConfig {
            indent_width: Some(width),
            ..Default::default()
        };
        let out = Formatter::new(config).format("\tx\n").formatted;
        prop_assert_eq!(out, format!("{}x\n", " ".repeat(width)));
    }
}
