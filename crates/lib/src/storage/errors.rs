//! Error types for key-value storage operations.

use thiserror::Error;

/// Structured error types for storage operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StorageError {
    /// Writing the item would exceed the storage quota
    #[error("Storage quota exceeded writing '{key}': needs {needed} bytes, quota is {quota}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },
}

impl StorageError {
    /// Check if this error is a quota failure
    pub fn is_quota_error(&self) -> bool {
        matches!(self, StorageError::QuotaExceeded { .. })
    }

    /// Get the key the failed operation addressed
    pub fn key(&self) -> &str {
        match self {
            StorageError::QuotaExceeded { key, .. } => key,
        }
    }
}

impl From<StorageError> for crate::Error {
    fn from(err: StorageError) -> Self {
        crate::Error::Storage(err)
    }
}
