// SPDX-License-Identifier: MPL-2.0
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Display language of the dashboard.
///
/// Persisted as its lowercase code (`"en"` / `"hu"`); any other stored
/// string fails to deserialize, which the locale store treats as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Hu,
}

impl Locale {
    /// Every supported locale, in selector order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Hu];

    /// Returns the language code used in storage and in the catalog.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hu => "hu",
        }
    }

    /// Returns the other locale (the language toggle target).
    #[must_use]
    pub fn other(self) -> Locale {
        match self {
            Locale::En => Locale::Hu,
            Locale::Hu => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parses a BCP 47 language tag, keeping only its language subtag.
///
/// Regional variants normalize to their language (`"en-GB"` is `En`,
/// `"hu-HU"` is `Hu`).
impl FromStr for Locale {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        let langid: LanguageIdentifier = tag
            .trim()
            .parse()
            .map_err(|_| Error::UnsupportedLocale(tag.to_string()))?;

        match langid.language.as_str() {
            "en" => Ok(Locale::En),
            "hu" => Ok(Locale::Hu),
            _ => Err(Error::UnsupportedLocale(tag.to_string())),
        }
    }
}
