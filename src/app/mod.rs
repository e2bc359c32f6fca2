// SPDX-License-Identifier: MPL-2.0
//! Session-wide preference context.
//!
//! [`Preferences`] is constructed once per session and handed to the UI
//! layer, which reads and mutates the stores only through it.
//!
//! Loading is two-phase: construction yields default state (Hungarian,
//! no favorites) and [`Preferences::load`] applies whatever was persisted.
//! Anything rendered in between sees the defaults.

pub mod paths;

use crate::config::Config;
use crate::favorites::FavoritesStore;
use crate::i18n::{Catalog, LocaleStore};
use crate::notifications::NotificationSink;
use crate::storage::{FileStorage, MemoryStorage, Storage};
use std::sync::Arc;

#[derive(Debug)]
pub struct Preferences {
    pub locale: LocaleStore,
    pub favorites: FavoritesStore,
}

impl Preferences {
    /// Builds both stores over one shared storage backend, in default state.
    pub fn new(
        storage: Arc<dyn Storage>,
        catalog: Arc<Catalog>,
        sink: Box<dyn NotificationSink>,
    ) -> Self {
        Self {
            locale: LocaleStore::new(storage.clone(), catalog),
            favorites: FavoritesStore::new(storage, sink),
        }
    }

    /// Builds the stores over the storage document `config` points at.
    ///
    /// Falls back to session-only storage when no data directory can be
    /// resolved. The returned context is not loaded yet.
    pub fn open(config: &Config, sink: Box<dyn NotificationSink>) -> Self {
        let storage: Arc<dyn Storage> = match config.storage_path() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "using file storage");
                Arc::new(FileStorage::new(path))
            }
            None => {
                tracing::warn!("no data directory available, preferences will not persist");
                Arc::new(MemoryStorage::new())
            }
        };
        Self::new(storage, Catalog::embedded(), sink)
    }

    /// Runs the deferred one-shot load of both stores.
    ///
    /// Returns `false` if both stores were already loaded.
    pub fn load(&mut self) -> bool {
        let locale = self.locale.load();
        let favorites = self.favorites.load();
        locale || favorites
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.locale.is_loaded() && self.favorites.is_loaded()
    }
}
