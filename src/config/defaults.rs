// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Storage**: Durable storage keys and the backing document name
//! - **Locale**: Language selected on first run
//! - **Logging**: Default `tracing` filter directive

use crate::i18n::Locale;

// ==========================================================================
// Storage Defaults
// ==========================================================================

/// Storage key owned by the locale store.
pub const LANGUAGE_STORAGE_KEY: &str = "app-language";

/// Storage key owned by the favorite-team store.
pub const FAVORITES_STORAGE_KEY: &str = "favoriteTeams";

/// File name of the JSON document backing [`crate::storage::FileStorage`].
pub const DEFAULT_STORAGE_FILE: &str = "storage.json";

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale active on first run, before anything was persisted.
pub const DEFAULT_LOCALE: Locale = Locale::Hu;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Filter used when neither `RUST_LOG` nor the config file sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!LANGUAGE_STORAGE_KEY.is_empty());
    assert!(!FAVORITES_STORAGE_KEY.is_empty());
    assert!(!DEFAULT_STORAGE_FILE.is_empty());
};
