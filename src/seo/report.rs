use crate::i18n::Locale;
use crate::seo::grade::SeoGrade;
use crate::seo::record::{MetaField, PageSeoRecord};
use crate::seo::score::{calculate_score, suggestions, Check, SeoScore};
use serde::Serialize;

/// Which localized fields of one locale pass their checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocaleBreakdown {
    pub locale: Locale,
    pub title: bool,
    pub description: bool,
    pub keywords: bool,
    /// Points earned by this locale's fields
    pub points: SeoScore,
}

/// Full analysis of one record, as returned to the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    pub score: SeoScore,
    pub display_score: u32,
    pub grade: SeoGrade,
    pub suggestions: Vec<String>,
    pub suggestion_codes: Vec<String>,
    pub locales: Vec<LocaleBreakdown>,
}

/// Score a record and collect everything the admin panel displays.
pub fn analyze(record: &PageSeoRecord) -> SeoReport {
    let score = calculate_score(record);
    let found = suggestions(record);

    SeoReport {
        page: record.page.clone(),
        score,
        display_score: score.display(),
        grade: score.grade(),
        suggestions: found.iter().map(|s| s.message()).collect(),
        suggestion_codes: found.iter().map(|s| s.code()).collect(),
        locales: Locale::ALL
            .iter()
            .map(|&locale| locale_breakdown(record, locale))
            .collect(),
    }
}

fn locale_breakdown(record: &PageSeoRecord, locale: Locale) -> LocaleBreakdown {
    let check = |field| Check::Meta { field, locale };
    let passes = |field| check(field).passes(record);

    LocaleBreakdown {
        locale,
        title: passes(MetaField::Title),
        description: passes(MetaField::Description),
        keywords: passes(MetaField::Keywords),
        points: MetaField::ALL
            .into_iter()
            .map(check)
            .filter(|c| c.passes(record))
            .map(|c| c.weight())
            .sum(),
    }
}

/// Order reports worst score first. The sort is stable, so equal scores keep
/// their input order.
pub fn sort_worst_first(reports: &mut [SeoReport]) {
    reports.sort_by_key(|report| report.score);
}
