//! Layered configuration: CLI > env > project file > user file > defaults.

pub mod attest_config;
pub mod platform_config;
pub mod scan_config;
pub mod tooling_config;

pub use attest_config::{AttestConfig, CliOverrides};
pub use platform_config::PlatformConfig;
pub use scan_config::ScanConfig;
pub use tooling_config::{FormatConfig, LintConfig, TypecheckConfig};
