//! Headless notification management.
//!
//! A [`NotificationManager`] owns everything about the notifications it
//! shows: the active set, the waiting queue and therefore the active
//! count. Two managers never share state. Rendering is left to the caller,
//! who reads [`NotificationManager::active`] and reports dismissals back.
//!
//! Every notification carries a completion continuation that runs exactly
//! once, when the notification is dismissed, expires or is cleared
//! (including when the manager is dropped).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use shapekit::SystemClock;
//! use shapekit::notify::{NotificationKind, NotificationManager, NotifyConfig};
//!
//! let mut manager = NotificationManager::new(NotifyConfig::default(), Arc::new(SystemClock));
//! let id = manager.notify("Saved", NotificationKind::Success, None, |_| {}).unwrap();
//! assert_eq!(manager.active_count(), 1);
//!
//! manager.dismiss(id).unwrap();
//! assert_eq!(manager.active_count(), 0);
//! ```

use std::{collections::VecDeque, fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Clock;

mod errors;

pub use errors::NotifyError;

/// Identifier of a notification.
pub type NotificationId = Uuid;

/// Continuation run once a notification is finished.
pub type Completion = Box<dyn FnOnce(Outcome) + Send>;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Why a notification finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Dismissed by the caller
    Dismissed,
    /// Its display duration ran out
    Expired,
    /// Removed by [`NotificationManager::clear`] or by dropping the manager
    Cleared,
}

/// Settings for a [`NotificationManager`].
///
/// Deserializes from partial input; missing fields take their defaults.
///
/// ```
/// # use shapekit::notify::NotifyConfig;
/// let config: NotifyConfig = serde_json::from_str(r#"{"max_visible": 1}"#).unwrap();
/// assert_eq!(config.max_visible, 1);
/// assert_eq!(config.default_duration_ms, 3000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Maximum notifications shown at once
    pub max_visible: usize,
    /// Display duration used when `notify` is given none; 0 means sticky
    pub default_duration_ms: u64,
    /// Maximum notifications waiting for a free slot
    pub max_queued: usize,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            max_visible: 3,
            default_duration_ms: 3000,
            max_queued: 32,
        }
    }
}

/// A notification as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    /// Display duration in milliseconds; 0 means it never expires
    pub duration_ms: u64,
    /// When the notification became active, in epoch milliseconds
    pub shown_at: Option<u64>,
}

impl Notification {
    /// Epoch millisecond at which an active notification expires.
    pub fn expires_at(&self) -> Option<u64> {
        match (self.shown_at, self.duration_ms) {
            (_, 0) | (None, _) => None,
            (Some(shown), duration) => Some(shown.saturating_add(duration)),
        }
    }
}

struct Entry {
    notification: Notification,
    on_done: Option<Completion>,
}

impl Entry {
    fn finish(mut self, outcome: Outcome) {
        if let Some(on_done) = self.on_done.take() {
            on_done(outcome);
        }
    }
}

/// Owns a set of notifications, their queue and their active count.
pub struct NotificationManager {
    config: NotifyConfig,
    clock: Arc<dyn Clock>,
    active: Vec<Entry>,
    queue: VecDeque<Entry>,
}

impl NotificationManager {
    pub fn new(config: NotifyConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            clock,
            active: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &NotifyConfig {
        &self.config
    }

    /// Shows a notification, or queues it if every slot is taken.
    ///
    /// `duration_ms` of `None` uses the configured default. `on_done` runs
    /// exactly once when the notification finishes.
    ///
    /// # Errors
    /// Returns [`NotifyError::QueueFull`] if the notification can be neither
    /// shown nor queued. `on_done` is dropped without running in that case.
    pub fn notify<F>(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration_ms: Option<u64>,
        on_done: F,
    ) -> crate::Result<NotificationId>
    where
        F: FnOnce(Outcome) + Send + 'static,
    {
        let has_slot = self.active.len() < self.config.max_visible;
        if !has_slot && self.queue.len() >= self.config.max_queued {
            tracing::warn!(
                capacity = self.config.max_queued,
                "Notification queue full; dropping notification"
            );
            return Err(NotifyError::QueueFull {
                capacity: self.config.max_queued,
            }
            .into());
        }

        let id = Uuid::new_v4();
        let entry = Entry {
            notification: Notification {
                id,
                message: message.into(),
                kind,
                duration_ms: duration_ms.unwrap_or(self.config.default_duration_ms),
                shown_at: None,
            },
            on_done: Some(Box::new(on_done)),
        };

        if has_slot {
            self.show(entry);
        } else {
            tracing::debug!(%id, queued = self.queue.len() + 1, "All slots taken; queueing notification");
            self.queue.push_back(entry);
        }
        Ok(id)
    }

    fn show(&mut self, mut entry: Entry) {
        entry.notification.shown_at = Some(self.clock.now_millis());
        tracing::debug!(id = %entry.notification.id, kind = ?entry.notification.kind, "Showing notification");
        self.active.push(entry);
    }

    /// Fills free slots from the front of the queue.
    fn promote(&mut self) {
        while self.active.len() < self.config.max_visible {
            match self.queue.pop_front() {
                Some(entry) => self.show(entry),
                None => break,
            }
        }
    }

    /// Dismisses an active or queued notification.
    ///
    /// # Errors
    /// Returns [`NotifyError::NotFound`] if no such notification exists
    /// (including one that already finished).
    pub fn dismiss(&mut self, id: NotificationId) -> crate::Result<()> {
        let entry = if let Some(pos) = self.active.iter().position(|e| e.notification.id == id) {
            self.active.remove(pos)
        } else if let Some(pos) = self.queue.iter().position(|e| e.notification.id == id) {
            match self.queue.remove(pos) {
                Some(entry) => entry,
                None => return Err(NotifyError::NotFound { id }.into()),
            }
        } else {
            return Err(NotifyError::NotFound { id }.into());
        };

        entry.finish(Outcome::Dismissed);
        self.promote();
        Ok(())
    }

    /// Finishes every active notification whose duration has run out,
    /// then fills the freed slots. Returns the ids that expired.
    pub fn expire(&mut self) -> Vec<NotificationId> {
        let now = self.clock.now_millis();
        let mut expired = Vec::new();
        let mut index = 0;
        while index < self.active.len() {
            let due = self.active[index]
                .notification
                .expires_at()
                .is_some_and(|deadline| deadline <= now);
            if due {
                let entry = self.active.remove(index);
                expired.push(entry.notification.id);
                entry.finish(Outcome::Expired);
            } else {
                index += 1;
            }
        }

        if !expired.is_empty() {
            tracing::debug!(count = expired.len(), "Notifications expired");
            self.promote();
        }
        expired
    }

    /// Finishes every active and queued notification.
    pub fn clear(&mut self) {
        for entry in self.active.drain(..).chain(self.queue.drain(..)) {
            entry.finish(Outcome::Cleared);
        }
    }

    /// Number of notifications currently shown.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Number of notifications waiting for a slot.
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Notifications currently shown, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter().map(|entry| &entry.notification)
    }

    /// Notifications waiting for a slot, in the order they will be shown.
    pub fn queued(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter().map(|entry| &entry.notification)
    }
}

impl Drop for NotificationManager {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for NotificationManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationManager")
            .field("config", &self.config)
            .field("active", &self.active_count())
            .field("queued", &self.queued_count())
            .finish()
    }
}
