// SPDX-License-Identifier: MPL-2.0
//! A single named durable slot holding one JSON-serialized value.

use super::Storage;
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Binds one storage key to one serde type.
///
/// [`read`](Self::read) and [`write`](Self::write) never fail: a missing,
/// unreadable or malformed value reads as absent, and a failed write leaves
/// the caller's in-memory state authoritative. Both cases are logged.
pub struct DurableCell<T> {
    storage: Arc<dyn Storage>,
    key: String,
    _value: PhantomData<fn() -> T>,
}

impl<T> DurableCell<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            _value: PhantomData,
        }
    }

    /// Returns the storage key this cell owns.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the stored value, or `None` when it is absent or unusable.
    pub fn read(&self) -> Option<T> {
        match self.try_read() {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(key = %self.key, %error, "treating stored value as absent");
                None
            }
        }
    }

    /// Serializes `value` and stores it, replacing any prior value.
    pub fn write(&self, value: &T) {
        if let Err(error) = self.try_write(value) {
            tracing::warn!(key = %self.key, %error, "failed to persist value");
        }
    }

    /// Like [`read`](Self::read), but reports backend and decoding failures.
    pub fn try_read(&self) -> Result<Option<T>> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(None);
        };
        let value = serde_json::from_str(&raw)?;
        Ok(Some(value))
    }

    /// Like [`write`](Self::write), but reports failures.
    pub fn try_write(&self, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.storage.set_item(&self.key, &raw)?;
        tracing::debug!(key = %self.key, bytes = raw.len(), "persisted value");
        Ok(())
    }
}

impl<T> fmt::Debug for DurableCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DurableCell")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
