//!
//! shapekit: data-shape utilities over an untyped value tree.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: a sum type over null, booleans, numbers, text, dates,
//!   sequences and insertion-ordered keyed mappings.
//! * **Paths (`value::Path`)**: dot-separated addresses into nested mappings.
//! * **Transform engine (`transform`)**: pure operations over values: deep clone and merge,
//!   path get/set/has/delete, structural equality, type coercion, grouping, multi-key
//!   sorting, flattening and function piping.
//!
//! Around the engine sit a few small helpers:
//!
//! * **Text (`text`)**: case conversion, truncation and slugs.
//! * **Storage (`storage`)**: a key-value storage facade with JSON encoding.
//! * **Timing (`timing`)**: sleep, retry-with-delay and poll-until (requires the "timing" feature).
//! * **Notifications (`notify`)**: a notification manager that owns its queue and active count.
//!
//! ```
//! use shapekit::{Value, transform};
//!
//! let mut settings = Value::map();
//! transform::set(&mut settings, "theme.dark", true);
//! assert!(transform::has(&settings, "theme.dark"));
//! assert_eq!(transform::get(&settings, "theme.font", "mono"), "mono");
//! ```

pub mod clock;
pub mod notify;
pub mod storage;
pub mod text;
#[cfg(feature = "timing")]
pub mod timing;
pub mod transform;
pub mod value;

#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;
pub use clock::{Clock, SystemClock};
pub use value::{Map, Path, PathBuf, Value};

/// Result type used throughout the shapekit library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the shapekit library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from the transform engine
    #[error(transparent)]
    Transform(transform::TransformError),

    /// Structured errors from the storage module
    #[error(transparent)]
    Storage(storage::StorageError),

    /// Structured errors from the notify module
    #[error(transparent)]
    Notify(notify::NotifyError),

    /// Structured errors from the timing module
    #[cfg(feature = "timing")]
    #[error(transparent)]
    Timing(timing::TimingError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Serialize(_) => "serialize",
            Error::Transform(_) => "transform",
            Error::Storage(_) => "storage",
            Error::Notify(_) => "notify",
            #[cfg(feature = "timing")]
            Error::Timing(_) => "timing",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Notify(notify_err) => notify_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is a wrong-kind input failure.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Transform(transform_err) => transform_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is related to serialization.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }

    /// Check if this error indicates a capacity limit was reached.
    pub fn is_capacity_error(&self) -> bool {
        match self {
            Error::Storage(storage_err) => storage_err.is_quota_error(),
            Error::Notify(notify_err) => notify_err.is_queue_full(),
            _ => false,
        }
    }

    /// Check if this error indicates a timeout.
    pub fn is_timeout_error(&self) -> bool {
        match self {
            #[cfg(feature = "timing")]
            Error::Timing(timing_err) => timing_err.is_timeout(),
            _ => false,
        }
    }
}
