//! Error types for timer helpers.

use std::time::Duration;

use thiserror::Error;

/// Structured error types for timer helpers.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimingError {
    /// A polled condition did not hold before the deadline
    #[error("Condition not met within {waited:?}")]
    Timeout { waited: Duration },

    /// Every retry attempt failed
    #[error("All {attempts} attempts failed; last error: {last_error}")]
    Exhausted { attempts: u32, last_error: String },
}

impl TimingError {
    /// Check if this error is a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, TimingError::Timeout { .. })
    }

    /// Check if this error reports exhausted retries
    pub fn is_exhausted(&self) -> bool {
        matches!(self, TimingError::Exhausted { .. })
    }
}

impl From<TimingError> for crate::Error {
    fn from(err: TimingError) -> Self {
        crate::Error::Timing(err)
    }
}
