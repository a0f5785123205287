//! # attest-core
//!
//! Foundation crate for the Attest platform.
//! Defines severity, errors, config, constants, and the event system.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod severity;

// Re-export the most commonly used types at the crate root.
pub use config::AttestConfig;
pub use errors::{AnalysisError, ConfigError, PlatformError, StoreError};
pub use events::EventDispatcher;
pub use severity::Severity;
