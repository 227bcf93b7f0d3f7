use crate::i18n::Locale;
use crate::seo::grade::SeoGrade;
use crate::seo::record::{char_len, MetaField, PageSeoRecord};
use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum length a canonical URL must exceed to count as present.
pub const CANONICAL_URL_MIN_LENGTH: usize = 5;

impl MetaField {
    /// Length a value must exceed for the check to pass.
    pub fn min_length(&self) -> usize {
        match self {
            MetaField::Title => 10,
            MetaField::Description => 50,
            MetaField::Keywords => 10,
        }
    }

    /// Points in half-point units: full weight for primary locales, half for
    /// the rest.
    fn weight_half_points(&self, locale: Locale) -> u32 {
        let primary = match self {
            MetaField::Title | MetaField::Description => 20,
            MetaField::Keywords => 10,
        };
        if locale.is_primary() {
            primary
        } else {
            primary / 2
        }
    }

    /// Whether a failing field produces an improvement suggestion.
    fn suggests(&self) -> bool {
        matches!(self, MetaField::Title | MetaField::Description)
    }
}

/// One independent, additive scoring check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Meta { field: MetaField, locale: Locale },
    CanonicalUrl,
    Indexing,
    LinkFollowing,
}

impl Check {
    /// All checks in evaluation order.
    pub fn all() -> Vec<Check> {
        let mut checks = Vec::with_capacity(MetaField::ALL.len() * Locale::ALL.len() + 3);
        for field in MetaField::ALL {
            for locale in Locale::ALL {
                checks.push(Check::Meta { field, locale });
            }
        }
        checks.push(Check::CanonicalUrl);
        checks.push(Check::Indexing);
        checks.push(Check::LinkFollowing);
        checks
    }

    pub fn passes(&self, record: &PageSeoRecord) -> bool {
        match *self {
            Check::Meta { field, locale } => {
                char_len(record.meta(field, locale)) > field.min_length()
            }
            Check::CanonicalUrl => {
                char_len(record.canonical_url.as_deref()) > CANONICAL_URL_MIN_LENGTH
            }
            Check::Indexing => record.index_page,
            Check::LinkFollowing => record.follow_links,
        }
    }

    pub fn weight(&self) -> SeoScore {
        SeoScore::from_half_points(self.weight_half_points())
    }

    fn weight_half_points(&self) -> u32 {
        match self {
            Check::Meta { field, locale } => field.weight_half_points(*locale),
            Check::CanonicalUrl => 20,
            Check::Indexing | Check::LinkFollowing => 15,
        }
    }
}

/// Score in [0, 100], kept exactly in half-point units so the 2.5 and 7.5
/// weights never accumulate float error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SeoScore {
    half_points: u32,
}

impl SeoScore {
    pub const ZERO: SeoScore = SeoScore { half_points: 0 };
    pub const MAX: SeoScore = SeoScore { half_points: 200 };

    fn from_half_points(half_points: u32) -> Self {
        Self { half_points }
    }

    /// Raw value in half points (0..=200).
    pub fn half_points(&self) -> u32 {
        self.half_points
    }

    /// Exact score, e.g. `97.5`.
    pub fn value(&self) -> f64 {
        f64::from(self.half_points) / 2.0
    }

    /// Integer score for display, rounded half-up (`97.5` → `98`).
    pub fn display(&self) -> u32 {
        (self.half_points + 1) / 2
    }

    pub fn grade(&self) -> SeoGrade {
        SeoGrade::from_display_score(self.display())
    }
}

impl std::ops::Add for SeoScore {
    type Output = SeoScore;

    fn add(self, rhs: SeoScore) -> SeoScore {
        SeoScore::from_half_points(self.half_points + rhs.half_points)
    }
}

impl std::iter::Sum for SeoScore {
    fn sum<I: Iterator<Item = SeoScore>>(iter: I) -> SeoScore {
        iter.fold(SeoScore::ZERO, |acc, s| acc + s)
    }
}

impl fmt::Display for SeoScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for SeoScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

/// Sum the weights of every satisfied check.
pub fn calculate_score(record: &PageSeoRecord) -> SeoScore {
    Check::all()
        .iter()
        .filter(|check| check.passes(record))
        .map(Check::weight)
        .sum()
}

/// An improvement hint for a failing check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    Meta { field: MetaField, locale: Locale },
    CanonicalUrl,
    EnableIndexing,
    EnableFollow,
}

impl Suggestion {
    /// Stable machine-readable code, e.g. `title_tr`.
    pub fn code(&self) -> String {
        match self {
            Suggestion::Meta { field, locale } => format!("{}_{}", field.code(), locale.code()),
            Suggestion::CanonicalUrl => "canonical_url".to_string(),
            Suggestion::EnableIndexing => "enable_indexing".to_string(),
            Suggestion::EnableFollow => "enable_follow".to_string(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Suggestion::Meta { field, locale } => format!(
                "Add or lengthen the {} {} (more than {} characters)",
                locale.name(),
                field.label(),
                field.min_length()
            ),
            Suggestion::CanonicalUrl => "Add a canonical URL".to_string(),
            Suggestion::EnableIndexing => {
                "Enable indexing so search engines can show this page".to_string()
            }
            Suggestion::EnableFollow => "Enable link following for crawlers".to_string(),
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Suggestions for a record, in fixed check order.
///
/// Only primary locales (Turkish, English) and only titles and descriptions
/// produce hints; Russian and Georgian fields still score but stay silent.
pub fn suggestions(record: &PageSeoRecord) -> Vec<Suggestion> {
    let mut out = Vec::new();

    for field in MetaField::ALL.into_iter().filter(MetaField::suggests) {
        for locale in Locale::ALL.into_iter().filter(Locale::is_primary) {
            let check = Check::Meta { field, locale };
            if !check.passes(record) {
                out.push(Suggestion::Meta { field, locale });
            }
        }
    }

    if !Check::CanonicalUrl.passes(record) {
        out.push(Suggestion::CanonicalUrl);
    }
    if !record.index_page {
        out.push(Suggestion::EnableIndexing);
    }
    if !record.follow_links {
        out.push(Suggestion::EnableFollow);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record() -> PageSeoRecord {
        let mut record = PageSeoRecord {
            canonical_url: Some("https://clinic.example/hair-transplant".to_string()),
            ..PageSeoRecord::default()
        };
        for locale in Locale::ALL {
            record.set_meta(MetaField::Title, locale, Some("t".repeat(11)));
            record.set_meta(MetaField::Description, locale, Some("d".repeat(51)));
            record.set_meta(MetaField::Keywords, locale, Some("k".repeat(11)));
        }
        record
    }

    fn empty_record_flags_off() -> PageSeoRecord {
        PageSeoRecord {
            index_page: false,
            follow_links: false,
            ..PageSeoRecord::default()
        }
    }

    // ==================== Weight Table Tests ====================

    #[test]
    fn test_weights_sum_to_one_hundred() {
        let total: SeoScore = Check::all().iter().map(Check::weight).sum();
        assert_eq!(total, SeoScore::MAX);
        assert_eq!(total.value(), 100.0);
    }

    #[test]
    fn test_check_count_and_order() {
        let checks = Check::all();
        assert_eq!(checks.len(), 15);
        assert_eq!(
            checks[0],
            Check::Meta { field: MetaField::Title, locale: Locale::TURKISH }
        );
        assert_eq!(
            checks[11],
            Check::Meta { field: MetaField::Keywords, locale: Locale::GEORGIAN }
        );
        assert_eq!(checks[12], Check::CanonicalUrl);
        assert_eq!(checks[14], Check::LinkFollowing);
    }

    #[test]
    fn test_individual_weights() {
        let meta = |field, locale| Check::Meta { field, locale }.weight().value();

        assert_eq!(meta(MetaField::Title, Locale::TURKISH), 10.0);
        assert_eq!(meta(MetaField::Title, Locale::RUSSIAN), 5.0);
        assert_eq!(meta(MetaField::Description, Locale::ENGLISH), 10.0);
        assert_eq!(meta(MetaField::Description, Locale::GEORGIAN), 5.0);
        assert_eq!(meta(MetaField::Keywords, Locale::ENGLISH), 5.0);
        assert_eq!(meta(MetaField::Keywords, Locale::GEORGIAN), 2.5);
        assert_eq!(Check::CanonicalUrl.weight().value(), 10.0);
        assert_eq!(Check::Indexing.weight().value(), 7.5);
        assert_eq!(Check::LinkFollowing.weight().value(), 7.5);
    }

    // ==================== calculate_score Tests ====================

    #[test]
    fn test_complete_record_scores_one_hundred() {
        let score = calculate_score(&complete_record());
        assert_eq!(score, SeoScore::MAX);
        assert_eq!(score.display(), 100);
    }

    #[test]
    fn test_empty_record_with_flags_off_scores_zero() {
        assert_eq!(calculate_score(&empty_record_flags_off()), SeoScore::ZERO);
    }

    #[test]
    fn test_default_record_scores_flag_points_only() {
        assert_eq!(calculate_score(&PageSeoRecord::default()).value(), 15.0);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let at_threshold = PageSeoRecord::default()
            .with_meta(MetaField::Title, Locale::TURKISH, "t".repeat(10))
            .with_meta(MetaField::Description, Locale::TURKISH, "d".repeat(50))
            .with_meta(MetaField::Keywords, Locale::TURKISH, "k".repeat(10));
        let at_threshold = PageSeoRecord {
            canonical_url: Some("https".to_string()),
            ..at_threshold
        };
        assert_eq!(calculate_score(&at_threshold).value(), 15.0);

        let over = PageSeoRecord::default()
            .with_meta(MetaField::Title, Locale::TURKISH, "t".repeat(11))
            .with_meta(MetaField::Description, Locale::TURKISH, "d".repeat(51))
            .with_meta(MetaField::Keywords, Locale::TURKISH, "k".repeat(11));
        let over = PageSeoRecord {
            canonical_url: Some("https:".to_string()),
            ..over
        };
        assert_eq!(calculate_score(&over).value(), 15.0 + 10.0 + 10.0 + 5.0 + 10.0);
    }

    #[test]
    fn test_concrete_scenario_scores_sixty_five() {
        let record = PageSeoRecord {
            canonical_url: Some("https://x.com/p".to_string()),
            ..PageSeoRecord::default()
        }
        .with_meta(MetaField::Title, Locale::TURKISH, "Saç Ekimi Kliniği")
        .with_meta(MetaField::Title, Locale::ENGLISH, "Hair Transplant Clinic")
        .with_meta(MetaField::Description, Locale::TURKISH, "a".repeat(60))
        .with_meta(MetaField::Description, Locale::ENGLISH, "a".repeat(60));

        assert_eq!(calculate_score(&record).value(), 65.0);
        assert!(suggestions(&record).is_empty());
    }

    #[test]
    fn test_secondary_keywords_produce_fractional_score() {
        let record = empty_record_flags_off()
            .with_meta(MetaField::Keywords, Locale::RUSSIAN, "k".repeat(11));
        let score = calculate_score(&record);
        assert_eq!(score.value(), 2.5);
        assert_eq!(score.display(), 3);
    }

    #[test]
    fn test_multibyte_text_is_measured_in_characters() {
        // 10 Georgian characters: 30 bytes, but not longer than 10 characters.
        let record = empty_record_flags_off()
            .with_meta(MetaField::Title, Locale::GEORGIAN, "თმისგადანე");
        assert_eq!(calculate_score(&record), SeoScore::ZERO);
    }

    // ==================== SeoScore Tests ====================

    #[test]
    fn test_display_rounds_half_up() {
        assert_eq!(SeoScore::from_half_points(195).display(), 98);
        assert_eq!(SeoScore::from_half_points(194).display(), 97);
        assert_eq!(SeoScore::from_half_points(1).display(), 1);
        assert_eq!(SeoScore::ZERO.display(), 0);
    }

    #[test]
    fn test_score_serializes_as_number() {
        let json = serde_json::to_string(&SeoScore::from_half_points(155)).unwrap();
        assert_eq!(json, "77.5");
    }

    // ==================== suggestions Tests ====================

    #[test]
    fn test_empty_record_with_flags_off_has_seven_suggestions() {
        let codes: Vec<_> = suggestions(&empty_record_flags_off())
            .iter()
            .map(Suggestion::code)
            .collect();

        assert_eq!(
            codes,
            vec![
                "title_tr",
                "title_en",
                "description_tr",
                "description_en",
                "canonical_url",
                "enable_indexing",
                "enable_follow",
            ]
        );
    }

    #[test]
    fn test_default_record_omits_flag_suggestions() {
        let found = suggestions(&PageSeoRecord::default());
        assert_eq!(found.len(), 5);
        assert!(!found.contains(&Suggestion::EnableIndexing));
        assert!(!found.contains(&Suggestion::EnableFollow));
    }

    #[test]
    fn test_secondary_locales_never_suggest() {
        let found = suggestions(&PageSeoRecord::default());
        assert!(found.iter().all(|s| match s {
            Suggestion::Meta { locale, .. } => locale.is_primary(),
            _ => true,
        }));
    }

    #[test]
    fn test_keywords_never_suggest() {
        let found = suggestions(&empty_record_flags_off());
        assert!(!found
            .iter()
            .any(|s| matches!(s, Suggestion::Meta { field: MetaField::Keywords, .. })));
    }

    #[test]
    fn test_canonical_suggestion_follows_length() {
        let short = PageSeoRecord {
            canonical_url: Some("/page".to_string()),
            ..PageSeoRecord::default()
        };
        assert!(suggestions(&short).contains(&Suggestion::CanonicalUrl));

        let long = PageSeoRecord {
            canonical_url: Some("/pages".to_string()),
            ..PageSeoRecord::default()
        };
        assert!(!suggestions(&long).contains(&Suggestion::CanonicalUrl));
    }

    #[test]
    fn test_suggestion_messages() {
        let title = Suggestion::Meta { field: MetaField::Title, locale: Locale::TURKISH };
        assert_eq!(
            title.message(),
            "Add or lengthen the Turkish meta title (more than 10 characters)"
        );
        assert_eq!(title.to_string(), title.message());

        let description = Suggestion::Meta { field: MetaField::Description, locale: Locale::ENGLISH };
        assert!(description.message().contains("English meta description"));
        assert!(description.message().contains("50"));

        assert_eq!(Suggestion::CanonicalUrl.message(), "Add a canonical URL");
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let record = complete_record();
        assert_eq!(calculate_score(&record), calculate_score(&record));
        assert_eq!(suggestions(&record), suggestions(&record));
    }
}
