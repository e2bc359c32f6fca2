// SPDX-License-Identifier: MPL-2.0
//! Notifications emitted by the favorite-team store.
//!
//! The texts are Hungarian regardless of the active locale, matching what
//! the dashboard has always shown.

use crate::notifications::Notification;

pub const ADDED_TITLE: &str = "Kedvenc hozzáadva";
pub const DUPLICATE_TITLE: &str = "Már a kedvencek között";
pub const REMOVED_TITLE: &str = "Kedvenc eltávolítva";

pub fn added(team: &str) -> Notification {
    Notification::normal(ADDED_TITLE, format!("{team} hozzáadva a kedvencekhez."))
}

pub fn duplicate(team: &str) -> Notification {
    Notification::destructive(
        DUPLICATE_TITLE,
        format!("{team} már szerepel a kedvencek között."),
    )
}

pub fn removed(team: &str) -> Notification {
    Notification::normal(REMOVED_TITLE, format!("{team} eltávolítva a kedvencek közül."))
}
