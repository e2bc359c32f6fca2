// SPDX-License-Identifier: MPL-2.0
//! `matchday_prefs` is the client-side preference store of a football match
//! analytics dashboard.
//!
//! It keeps two pieces of user state consistent across renders and sessions:
//! the active display locale (with translation lookup) and the set of
//! favorite teams. Both are backed by durable key-scoped storage and are
//! reached through a single [`app::Preferences`] context.
//!
//! ```
//! use matchday_prefs::app::Preferences;
//! use matchday_prefs::i18n::{Catalog, Locale};
//! use matchday_prefs::notifications::NotificationRecorder;
//! use matchday_prefs::storage::MemoryStorage;
//! use std::sync::Arc;
//!
//! let mut prefs = Preferences::new(
//!     Arc::new(MemoryStorage::new()),
//!     Catalog::embedded(),
//!     Box::new(NotificationRecorder::new()),
//! );
//! prefs.load();
//!
//! prefs.locale.set_active_locale(Locale::En);
//! assert_eq!(prefs.locale.resolve("ui.english"), "English");
//!
//! prefs.favorites.add_favorite("Real Madrid");
//! assert!(prefs.favorites.is_favorite("Real Madrid"));
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod favorites;
pub mod i18n;
pub mod logging;
pub mod notifications;
pub mod storage;
