//! Compliance platform engine errors.

use super::error_code::{self, AttestErrorCode};
use super::store_error::StoreError;

/// Errors that can occur inside a compliance platform engine.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Platform {platform} does not produce {kind} records")]
    UnsupportedKind { platform: String, kind: String },

    #[error("Invalid parameter {name}: {message}")]
    InvalidParameter { name: String, message: String },

    #[error("Payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AttestErrorCode for PlatformError {
    fn error_code(&self) -> &'static str {
        error_code::PLATFORM_ERROR
    }
}
