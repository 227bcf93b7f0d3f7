use serde::Serialize;
use std::fmt;

/// Display score at or above which a page is graded excellent.
pub const EXCELLENT_THRESHOLD: u32 = 80;

/// Display score at or above which a page only needs improvement.
pub const NEEDS_IMPROVEMENT_THRESHOLD: u32 = 50;

/// Classification band for a score, used by the admin panel to color it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeoGrade {
    Critical,
    NeedsImprovement,
    Excellent,
}

impl SeoGrade {
    /// Band for a rounded display score, so the label always agrees with the
    /// number shown next to it.
    pub fn from_display_score(score: u32) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            SeoGrade::Excellent
        } else if score >= NEEDS_IMPROVEMENT_THRESHOLD {
            SeoGrade::NeedsImprovement
        } else {
            SeoGrade::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeoGrade::Excellent => "Excellent",
            SeoGrade::NeedsImprovement => "Needs improvement",
            SeoGrade::Critical => "Critical",
        }
    }
}

impl fmt::Display for SeoGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
