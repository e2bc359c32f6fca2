// SPDX-License-Identifier: MPL-2.0
//! The user's favorite teams.
//!
//! [`FavoritesStore`] keeps an ordered, duplicate-free list of team names,
//! persists it under its own storage key and reports every per-team change
//! through a [`NotificationSink`](crate::notifications::NotificationSink).

pub mod messages;
mod store;

pub use store::FavoritesStore;
