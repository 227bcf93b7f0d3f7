//! Locale type: typed handle onto a registry entry.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use serde::{Serialize, Serializer};
use std::fmt;

/// A supported content locale.
///
/// Values exist only as the constants below, each backed by a registry
/// entry, so `config()` lookups always succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// Lowercase ISO 639-1 code (e.g., "tr", "ru")
    code: &'static str,
}

impl Locale {
    pub const TURKISH: Locale = Locale { code: "tr" };
    pub const ENGLISH: Locale = Locale { code: "en" };
    pub const RUSSIAN: Locale = Locale { code: "ru" };
    pub const GEORGIAN: Locale = Locale { code: "ka" };

    /// Every supported locale, in check order.
    pub const ALL: [Locale; 4] = [
        Locale::TURKISH,
        Locale::ENGLISH,
        Locale::RUSSIAN,
        Locale::GEORGIAN,
    ];

    /// Lowercase locale code (e.g., "tr").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not found in the registry, which the constants
    /// rule out.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Whether this locale is a primary market.
    pub fn is_primary(&self) -> bool {
        self.config().primary
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}
