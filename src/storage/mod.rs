// SPDX-License-Identifier: MPL-2.0
//! Durable key-value storage for preferences.
//!
//! The [`Storage`] trait mirrors the browser's Web Storage surface: string
//! keys mapped to serialized string values. Stores never talk to a backend
//! directly; each one goes through a [`DurableCell`] bound to the single key
//! it owns.
//!
//! # Backends
//!
//! - [`MemoryStorage`] - session-only map, used by tests and as a fallback
//!   when no data directory can be resolved
//! - [`FileStorage`] - JSON document on disk, replaced atomically on write

mod cell;
mod file;

pub use cell::DurableCell;
pub use file::FileStorage;

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// A key-scoped durable medium.
///
/// Methods take `&self` so one backend can be shared by every store
/// (`Arc<dyn Storage>`); implementations synchronize internally.
pub trait Storage: Send + Sync {
    /// Returns the raw value stored under `key`, or `None` if it was never written.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any prior value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// In-memory storage that lives as long as the value itself.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.lock().map_err(poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock().map_err(poisoned)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.lock().map_err(poisoned)?;
        items.remove(key);
        Ok(())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> Error {
    Error::Storage("storage lock poisoned".to_string())
}
