use crate::i18n::Locale;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Localized metadata fields carried once per locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaField {
    Title,
    Description,
    Keywords,
}

impl MetaField {
    pub const ALL: [MetaField; 3] = [MetaField::Title, MetaField::Description, MetaField::Keywords];

    /// Stable lowercase name, used in suggestion codes.
    pub fn code(&self) -> &'static str {
        match self {
            MetaField::Title => "title",
            MetaField::Description => "description",
            MetaField::Keywords => "keywords",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            MetaField::Title => "meta title",
            MetaField::Description => "meta description",
            MetaField::Keywords => "meta keywords",
        }
    }
}

/// SEO metadata for one page of the site.
///
/// Decoding is lenient: string fields that are missing, `null` or not strings
/// become `None`, and crawler flags fall back to `true`. Use
/// [`PageSeoRecord::from_value`] to turn any JSON document into a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSeoRecord {
    /// External page identity (URL or path) owned by the content system
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,

    #[serde(
        rename = "canonicalUrl",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub canonical_url: Option<String>,

    /// `false` is the equivalent of a `noindex` robots directive
    #[serde(rename = "indexPage", default = "default_flag", deserialize_with = "lenient_flag")]
    pub index_page: bool,

    /// `false` is the equivalent of a `nofollow` robots directive
    #[serde(rename = "followLinks", default = "default_flag", deserialize_with = "lenient_flag")]
    pub follow_links: bool,

    // Turkish
    #[serde(rename = "metaTitleTR", default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub meta_title_tr: Option<String>,
    #[serde(rename = "metaDescriptionTR", default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub meta_description_tr: Option<String>,
    #[serde(rename = "metaKeywordsTR", default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub meta_keywords_tr: Option<String>,

    // English
    #[serde(rename = "metaTitleEN", default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub meta_title_en: Option<String>,
    #[serde(rename = "metaDescriptionEN", default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub meta_description_en: Option<String>,
    #[serde(rename = "metaKeywordsEN", default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub meta_keywords_en: Option<String>,

    // Russian
    #[serde(rename = "metaTitleRU", default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub meta_title_ru: Option<String>,
    #[serde(rename = "metaDescriptionRU", default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub meta_description_ru: Option<String>,
    #[serde(rename = "metaKeywordsRU", default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub meta_keywords_ru: Option<String>,

    // Georgian
    #[serde(rename = "metaTitleKA", default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub meta_title_ka: Option<String>,
    #[serde(rename = "metaDescriptionKA", default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub meta_description_ka: Option<String>,
    #[serde(rename = "metaKeywordsKA", default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub meta_keywords_ka: Option<String>,
}

impl Default for PageSeoRecord {
    fn default() -> Self {
        Self {
            page: None,
            canonical_url: None,
            index_page: true,
            follow_links: true,
            meta_title_tr: None,
            meta_description_tr: None,
            meta_keywords_tr: None,
            meta_title_en: None,
            meta_description_en: None,
            meta_keywords_en: None,
            meta_title_ru: None,
            meta_description_ru: None,
            meta_keywords_ru: None,
            meta_title_ka: None,
            meta_description_ka: None,
            meta_keywords_ka: None,
        }
    }
}

impl PageSeoRecord {
    /// Decode a record from arbitrary JSON. Never fails: anything that is not
    /// an object yields the all-defaults record.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Localized field value, if present.
    pub fn meta(&self, field: MetaField, locale: Locale) -> Option<&str> {
        self.meta_slot(field, locale).as_deref()
    }

    /// Replace a localized field value.
    pub fn set_meta(&mut self, field: MetaField, locale: Locale, value: Option<String>) {
        *self.meta_slot_mut(field, locale) = value;
    }

    /// Builder-style variant of [`set_meta`](Self::set_meta).
    pub fn with_meta(mut self, field: MetaField, locale: Locale, value: impl Into<String>) -> Self {
        self.set_meta(field, locale, Some(value.into()));
        self
    }

    fn meta_slot(&self, field: MetaField, locale: Locale) -> &Option<String> {
        // Locale values only exist for the four registry codes.
        match (locale.code(), field) {
            ("tr", MetaField::Title) => &self.meta_title_tr,
            ("tr", MetaField::Description) => &self.meta_description_tr,
            ("tr", MetaField::Keywords) => &self.meta_keywords_tr,
            ("en", MetaField::Title) => &self.meta_title_en,
            ("en", MetaField::Description) => &self.meta_description_en,
            ("en", MetaField::Keywords) => &self.meta_keywords_en,
            ("ru", MetaField::Title) => &self.meta_title_ru,
            ("ru", MetaField::Description) => &self.meta_description_ru,
            ("ru", MetaField::Keywords) => &self.meta_keywords_ru,
            ("ka", MetaField::Title) => &self.meta_title_ka,
            ("ka", MetaField::Description) => &self.meta_description_ka,
            ("ka", MetaField::Keywords) => &self.meta_keywords_ka,
            (code, _) => unreachable!("no metadata slots for locale '{}'", code),
        }
    }

    fn meta_slot_mut(&mut self, field: MetaField, locale: Locale) -> &mut Option<String> {
        match (locale.code(), field) {
            ("tr", MetaField::Title) => &mut self.meta_title_tr,
            ("tr", MetaField::Description) => &mut self.meta_description_tr,
            ("tr", MetaField::Keywords) => &mut self.meta_keywords_tr,
            ("en", MetaField::Title) => &mut self.meta_title_en,
            ("en", MetaField::Description) => &mut self.meta_description_en,
            ("en", MetaField::Keywords) => &mut self.meta_keywords_en,
            ("ru", MetaField::Title) => &mut self.meta_title_ru,
            ("ru", MetaField::Description) => &mut self.meta_description_ru,
            ("ru", MetaField::Keywords) => &mut self.meta_keywords_ru,
            ("ka", MetaField::Title) => &mut self.meta_title_ka,
            ("ka", MetaField::Description) => &mut self.meta_description_ka,
            ("ka", MetaField::Keywords) => &mut self.meta_keywords_ka,
            (code, _) => unreachable!("no metadata slots for locale '{}'", code),
        }
    }
}

/// Length of an optional field in characters; absent counts as empty.
pub fn char_len(value: Option<&str>) -> usize {
    value.map(|s| s.chars().count()).unwrap_or(0)
}

fn default_flag() -> bool {
    true
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) if s.eq_ignore_ascii_case("true") => true,
        Value::String(s) if s.eq_ignore_ascii_case("false") => false,
        _ => default_flag(),
    })
}
