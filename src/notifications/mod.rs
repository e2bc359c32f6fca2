// SPDX-License-Identifier: MPL-2.0
//! Notification contract between stores and the toast layer.
//!
//! Stores build a [`Notification`] for each user-visible outcome and hand it
//! to a [`NotificationSink`]. The store never learns how (or whether) the
//! notification is shown or dismissed.
//!
//! # Usage
//!
//! ```
//! use matchday_prefs::notifications::{Notification, NotificationRecorder, NotificationSink};
//!
//! let recorder = NotificationRecorder::new();
//! recorder.notify(Notification::normal("Kedvenc hozzáadva", "Real Madrid"));
//! assert_eq!(recorder.len(), 1);
//! ```

mod notification;
mod sink;

pub use notification::{Notification, NotificationId, Severity};
pub use sink::{NotificationRecorder, NotificationSink, TracingSink};
