// SPDX-License-Identifier: MPL-2.0
//! Destinations for notification events.

use super::notification::{Notification, Severity};
use std::sync::{Arc, Mutex};

/// Receives notification events, fire-and-forget.
///
/// Stores only emit; queuing, display and dismissal belong to the sink.
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

impl<F> NotificationSink for F
where
    F: Fn(Notification),
{
    fn notify(&self, notification: Notification) {
        self(notification);
    }
}

/// Sink that writes every notification to the `tracing` log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: Notification) {
        match notification.severity() {
            Severity::Normal => tracing::info!(
                title = notification.title(),
                description = notification.description(),
                "notification"
            ),
            Severity::Destructive => tracing::warn!(
                title = notification.title(),
                description = notification.description(),
                "notification"
            ),
        }
    }
}

/// Sink that keeps every notification for later inspection.
///
/// Clones share one buffer, so a caller can hand one clone to a store and
/// drain the other.
#[derive(Debug, Clone, Default)]
pub struct NotificationRecorder {
    received: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything received so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.received
            .lock()
            .map(|received| received.clone())
            .unwrap_or_default()
    }

    /// Removes and returns everything received so far, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.received
            .lock()
            .map(|mut received| std::mem::take(&mut *received))
            .unwrap_or_default()
    }

    /// Returns the most recent notification.
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.received
            .lock()
            .ok()
            .and_then(|received| received.last().cloned())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.received.lock().map(|received| received.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for NotificationRecorder {
    fn notify(&self, notification: Notification) {
        if let Ok(mut received) = self.received.lock() {
            received.push(notification);
        }
    }
}
