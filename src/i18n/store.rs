// SPDX-License-Identifier: MPL-2.0
//! The active display locale and text resolution.

use super::{Catalog, Locale};
use crate::config::{DEFAULT_LOCALE, LANGUAGE_STORAGE_KEY};
use crate::error::Result;
use crate::storage::{DurableCell, Storage};
use std::sync::Arc;

/// Tracks the active [`Locale`], persists changes and resolves translation keys.
///
/// Construction yields the default locale without touching storage; the
/// persisted choice is applied by the one-shot [`load`](Self::load). Until
/// then, reads observe the default.
#[derive(Debug)]
pub struct LocaleStore {
    current: Locale,
    cell: DurableCell<Locale>,
    catalog: Arc<Catalog>,
    loaded: bool,
}

impl LocaleStore {
    pub fn new(storage: Arc<dyn Storage>, catalog: Arc<Catalog>) -> Self {
        Self {
            current: DEFAULT_LOCALE,
            cell: DurableCell::new(storage, LANGUAGE_STORAGE_KEY),
            catalog,
            loaded: false,
        }
    }

    /// Applies the persisted locale, if any.
    ///
    /// Runs at most once per store; returns `false` on later calls. Absent
    /// or unrecognized stored values keep the default.
    pub fn load(&mut self) -> bool {
        if self.loaded {
            return false;
        }
        self.loaded = true;

        if let Some(locale) = self.cell.read() {
            self.current = locale;
        }
        tracing::debug!(locale = %self.current, "locale store loaded");
        true
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn active_locale(&self) -> Locale {
        self.current
    }

    /// Makes `locale` active and writes it through to storage.
    pub fn set_active_locale(&mut self, locale: Locale) {
        self.current = locale;
        self.cell.write(&locale);
    }

    /// Parses `tag` and makes the resulting locale active.
    ///
    /// Regional tags are normalized (`"en-US"` selects English). Unsupported
    /// languages are rejected and leave the active locale untouched.
    pub fn set_active_locale_str(&mut self, tag: &str) -> Result<Locale> {
        let locale: Locale = tag.parse()?;
        self.set_active_locale(locale);
        Ok(locale)
    }

    /// Switches to the other locale and persists it.
    pub fn toggle_locale(&mut self) -> Locale {
        let next = self.current.other();
        self.set_active_locale(next);
        next
    }

    /// Returns the display text of `key` in the active locale.
    ///
    /// Falls back to `key` itself when the catalog has no entry for it or
    /// the entry lacks the active locale.
    #[must_use]
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalog.lookup(key, self.current).unwrap_or(key)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
