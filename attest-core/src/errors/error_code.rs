//! Stable error codes for machine-readable error surfaces.

/// Stable code strings. These are part of the public contract — renaming one
/// is a breaking change for anything parsing error output.
pub const CONFIG_ERROR: &str = "ATTEST_CONFIG_ERROR";
pub const PLATFORM_ERROR: &str = "ATTEST_PLATFORM_ERROR";
pub const STORE_ERROR: &str = "ATTEST_STORE_ERROR";
pub const ANALYSIS_ERROR: &str = "ATTEST_ANALYSIS_ERROR";

/// Implemented by every error enum in the workspace.
pub trait AttestErrorCode {
    /// Returns the stable code identifying the error family.
    fn error_code(&self) -> &'static str;
}
