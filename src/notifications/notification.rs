// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new process-unique notification ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Visual weight of a notification. How it is rendered is up to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Normal,
    /// Something the user tried did not happen (e.g. a duplicate favorite).
    Destructive,
}

/// A user-facing notification event.
///
/// Title and description are already localized display text.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    title: String,
    description: String,
    severity: Severity,
}

impl Notification {
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    pub fn normal(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Normal, title, description)
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Destructive, title, description)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }
}

/// Two notifications are equal when they carry the same content; the ID
/// only distinguishes individual events.
impl PartialEq for Notification {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.description == other.description
            && self.severity == other.severity
    }
}

impl Eq for Notification {}
