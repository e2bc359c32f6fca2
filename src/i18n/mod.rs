// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the dashboard.
//!
//! # Features
//!
//! - Two display locales, English and Hungarian, with Hungarian on first run
//! - A static translation catalog embedded into the binary
//! - Runtime language switching persisted through [`crate::storage`]
//! - Key-verbatim fallback when a translation is missing

mod catalog;
mod locale;
mod store;

pub use catalog::Catalog;
pub use locale::Locale;
pub use store::LocaleStore;
