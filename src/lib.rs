//! SEO completeness scoring for the clinic's multilingual page metadata.
//!
//! The library exposes the scorer ([`seo`]), the locale registry it is built
//! on ([`i18n`]), the analysis HTTP service ([`server`]) and the content
//! backend audit client ([`audit`]).

pub mod audit;
pub mod config;
pub mod error;
pub mod i18n;
pub mod metrics;
pub mod retry;
pub mod security;
pub mod seo;
pub mod server;
