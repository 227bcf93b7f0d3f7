//! Locale registry: Single source of truth for all supported locales.
//!
//! The registry is a lazily initialised singleton behind `OnceLock`, so every
//! caller sees the same immutable table.

use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Lowercase ISO 639-1 code (e.g., "tr", "ka")
    pub code: &'static str,

    /// English name of the language (e.g., "Turkish", "Georgian")
    pub name: &'static str,

    /// Native name of the language (e.g., "Türkçe", "ქართული")
    pub native_name: &'static str,

    /// Primary markets carry full check weights and produce suggestions
    pub primary: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// Matching is case-insensitive, so both "tr" and "TR" resolve to Turkish.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales
            .iter()
            .find(|locale| locale.code.eq_ignore_ascii_case(code))
    }
}

/// Default locale configurations.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "tr",
            name: "Turkish",
            native_name: "Türkçe",
            primary: true,
        },
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            primary: true,
        },
        LocaleConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            primary: false,
        },
        LocaleConfig {
            code: "ka",
            name: "Georgian",
            native_name: "ქართული",
            primary: false,
        },
    ]
}
