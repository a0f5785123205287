//! Scanner subsystem — parallel file discovery, content hashing, language
//! detection.
//!
//! The scanner is the entry point to the analysis pipeline. It walks the
//! tree gitignore-aware, reads and hashes source files, and produces the
//! `ScanEntry` rows every downstream tool consumes.

pub mod hasher;
pub mod language_detect;
pub mod scanner;
pub mod types;
pub mod walker;

pub use language_detect::Language;
pub use scanner::Scanner;
pub use types::{ScanEntry, ScanStats};
