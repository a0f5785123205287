//! Built-in lint rules, one module per rule.

pub mod complexity;
pub mod final_newline;
pub mod line_length;
pub mod mixed_indentation;
pub mod trailing_whitespace;

pub use complexity::ComplexityRule;
pub use final_newline::FinalNewlineRule;
pub use line_length::LineLengthRule;
pub use mixed_indentation::MixedIndentationRule;
pub use trailing_whitespace::TrailingWhitespaceRule;
