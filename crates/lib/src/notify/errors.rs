//! Error types for notification management.

use thiserror::Error;

use super::NotificationId;

/// Structured error types for notification management.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// The waiting queue is at capacity
    #[error("Notification queue is full ({capacity} waiting)")]
    QueueFull { capacity: usize },

    /// No active or queued notification has this id
    #[error("Notification not found: {id}")]
    NotFound { id: NotificationId },
}

impl NotifyError {
    /// Check if this error indicates the queue is full
    pub fn is_queue_full(&self) -> bool {
        matches!(self, NotifyError::QueueFull { .. })
    }

    /// Check if this error indicates an unknown notification
    pub fn is_not_found(&self) -> bool {
        matches!(self, NotifyError::NotFound { .. })
    }
}

impl From<NotifyError> for crate::Error {
    fn from(err: NotifyError) -> Self {
        crate::Error::Notify(err)
    }
}
