//! Evidence store errors.

use super::error_code::{self, AttestErrorCode};

/// Errors from the in-memory evidence store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record not found: {id}")]
    RecordNotFound { id: String },

    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl AttestErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        error_code::STORE_ERROR
    }
}
