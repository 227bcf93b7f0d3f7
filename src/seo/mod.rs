//! SEO completeness scoring for page metadata.
//!
//! A [`PageSeoRecord`] is scored by summing fixed weights for every satisfied
//! check (localized titles, descriptions and keywords, canonical URL, crawler
//! directives) up to a maximum of 100. Suggestions are produced by a separate
//! pass over the same record. Both are pure functions.
//!
//! ```rust,ignore
//! use clinic_seo::seo::{analyze, PageSeoRecord};
//!
//! let record = PageSeoRecord::from_value(serde_json::json!({ "metaTitleEN": "Hair Transplant Clinic" }));
//! let report = analyze(&record);
//! println!("{} ({})", report.display_score, report.grade);
//! ```

mod grade;
mod record;
mod report;
mod score;

pub use grade::{SeoGrade, EXCELLENT_THRESHOLD, NEEDS_IMPROVEMENT_THRESHOLD};
pub use record::{char_len, MetaField, PageSeoRecord};
pub use report::{analyze, sort_worst_first, LocaleBreakdown, SeoReport};
pub use score::{calculate_score, suggestions, Check, SeoScore, Suggestion, CANONICAL_URL_MIN_LENGTH};
