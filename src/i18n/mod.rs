//! Locale support for the clinic's four content languages.
//!
//! The site publishes every page in Turkish, English, Russian and Georgian.
//! Metadata completeness is judged per locale, and the primary markets
//! (Turkish and English) weigh more than the secondary ones.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Type-safe `Locale` constants backed by the registry
//!
//! # Example
//!
//! ```rust,ignore
//! use clinic_seo::i18n::{Locale, LocaleRegistry};
//!
//! assert!(!Locale::GEORGIAN.is_primary());
//! assert_eq!(Locale::GEORGIAN.native_name(), "ქართული");
//!
//! let turkish = LocaleRegistry::get().get_by_code("TR");
//! ```

mod locale;
mod registry;

pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
