//! # attest-analysis
//!
//! The code quality toolchain: a parallel file scanner feeding four
//! single-pass tools — lint rules, a formatter, an annotation checker, and a
//! convention-based test runner — plus reporters for console, JSON, SARIF,
//! and JUnit output. Every check is stateless and line- or regex-based;
//! there is no real parser behind any of this and the checks are
//! deliberately shallow.

pub mod finding;
pub mod format;
pub mod lint;
pub mod pipeline;
pub mod reporters;
pub mod scanner;
pub mod source;
pub mod testrun;
pub mod typecheck;

pub use finding::Finding;
pub use format::Formatter;
pub use pipeline::{AnalysisPipeline, AnalysisReport};
pub use scanner::{Language, ScanEntry, Scanner, ScanStats};
pub use source::SourceFile;
pub use typecheck::TypeChecker;
