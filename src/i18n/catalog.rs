// SPDX-License-Identifier: MPL-2.0
use super::Locale;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const CATALOG_FILE: &str = "catalog.toml";

/// Per-locale texts of one translation key, keyed by locale code.
type Entry = BTreeMap<String, String>;

/// Static translation catalog: key to per-locale display text.
///
/// Built once and never mutated. Completeness is not guaranteed; a key may
/// be missing entirely or lack one locale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: HashMap<String, Entry>,
}

impl Catalog {
    /// Returns the catalog shipped with the crate, parsed on first use.
    ///
    /// If the embedded document cannot be used, an empty catalog is returned
    /// so every lookup falls back to its key.
    pub fn embedded() -> Arc<Catalog> {
        static EMBEDDED: OnceLock<Arc<Catalog>> = OnceLock::new();
        EMBEDDED
            .get_or_init(|| {
                let catalog = Self::load_embedded().unwrap_or_else(|error| {
                    tracing::error!(%error, "embedded translation catalog unusable");
                    Catalog::default()
                });
                tracing::debug!(keys = catalog.len(), "translation catalog loaded");
                Arc::new(catalog)
            })
            .clone()
    }

    fn load_embedded() -> Result<Catalog> {
        let file = Asset::get(CATALOG_FILE)
            .ok_or_else(|| Error::Catalog(format!("{} is not embedded", CATALOG_FILE)))?;
        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|err| Error::Catalog(err.to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses a catalog from TOML where each top-level key is a translation
    /// key and each value a table of locale code to text.
    pub fn from_toml_str(content: &str) -> Result<Catalog> {
        let entries: HashMap<String, Entry> =
            toml::from_str(content).map_err(|err| Error::Catalog(err.to_string()))?;
        Ok(Catalog { entries })
    }

    /// Returns the text of `key` for `locale`, if the catalog has one.
    #[must_use]
    pub fn lookup(&self, key: &str, locale: Locale) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|entry| entry.get(locale.code()))
            .map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the translation keys in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
