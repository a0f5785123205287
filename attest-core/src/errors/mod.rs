//! Per-concern error enums with stable error codes.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod platform_error;
pub mod store_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use error_code::AttestErrorCode;
pub use platform_error::PlatformError;
pub use store_error::StoreError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let config = ConfigError::ValidationFailed {
            field: "lint.max_line_length".into(),
            message: "must be positive".into(),
        };
        assert_eq!(config.error_code(), "ATTEST_CONFIG_ERROR");

        let platform = PlatformError::UnknownPlatform("nessus".into());
        assert_eq!(platform.error_code(), "ATTEST_PLATFORM_ERROR");

        let store = StoreError::RecordNotFound { id: "abc".into() };
        assert_eq!(store.error_code(), "ATTEST_STORE_ERROR");

        let analysis = AnalysisError::UnknownFormat("yaml".into());
        assert_eq!(analysis.error_code(), "ATTEST_ANALYSIS_ERROR");
    }

    #[test]
    fn test_store_errors_convert_into_platform_errors() {
        let store = StoreError::RecordNotFound { id: "abc".into() };
        let platform: PlatformError = store.into();
        assert!(platform.to_string().contains("abc"));
    }
}
