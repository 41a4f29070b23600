//! Error types for transform engine operations.
//!
//! Most engine operations never fail: they fall back to a default instead.
//! The variants here cover the few validation failures that are surfaced
//! to the caller.

use thiserror::Error;

/// Structured error types for transform engine operations.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// A sequence-only operation received some other kind of value
    #[error("Input must be an array")]
    NotASequence {
        operation: &'static str,
        actual: &'static str,
    },

    /// `convert_type` was asked for a target kind it does not know
    #[error("Unknown conversion target: {name}")]
    UnknownTarget { name: String },
}

impl TransformError {
    /// Check if this error is a wrong-kind input failure
    pub fn is_type_error(&self) -> bool {
        matches!(self, TransformError::NotASequence { .. })
    }

    /// Get the operation name if this error names one
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            TransformError::NotASequence { operation, .. } => Some(operation),
            _ => None,
        }
    }
}

impl From<TransformError> for crate::Error {
    fn from(err: TransformError) -> Self {
        crate::Error::Transform(err)
    }
}
