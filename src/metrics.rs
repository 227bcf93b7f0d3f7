//! Analysis metrics and observability module.
//!
//! Tracks how many records the service has scored and how they were graded,
//! so the grade distribution across the site can be watched over time.

use crate::seo::{SeoGrade, SeoReport};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Process-wide analysis counters.
pub struct AnalysisMetrics {
    /// Records scored (single and batch requests alike)
    analyses: AtomicUsize,

    /// Batch requests served
    batches: AtomicUsize,

    excellent: AtomicUsize,
    needs_improvement: AtomicUsize,
    critical: AtomicUsize,

    /// Sum of exact scores, in half points
    score_half_points: AtomicU64,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<AnalysisMetrics> = OnceLock::new();

impl AnalysisMetrics {
    pub fn new() -> Self {
        Self {
            analyses: AtomicUsize::new(0),
            batches: AtomicUsize::new(0),
            excellent: AtomicUsize::new(0),
            needs_improvement: AtomicUsize::new(0),
            critical: AtomicUsize::new(0),
            score_half_points: AtomicU64::new(0),
        }
    }

    /// Get the global analysis metrics instance.
    pub fn global() -> &'static AnalysisMetrics {
        METRICS.get_or_init(AnalysisMetrics::new)
    }

    /// Record one scored record.
    pub fn record_analysis(&self, report: &SeoReport) {
        self.analyses.fetch_add(1, Ordering::Relaxed);
        self.score_half_points
            .fetch_add(u64::from(report.score.half_points()), Ordering::Relaxed);

        let counter = match report.grade {
            SeoGrade::Excellent => &self.excellent,
            SeoGrade::NeedsImprovement => &self.needs_improvement,
            SeoGrade::Critical => &self.critical,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a batch request.
    pub fn record_batch(&self) {
        self.batches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn analyses(&self) -> usize {
        self.analyses.load(Ordering::Relaxed)
    }

    pub fn batches(&self) -> usize {
        self.batches.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let analyses = self.analyses();
        let half_points = self.score_half_points.load(Ordering::Relaxed);
        let average_score = if analyses > 0 {
            half_points as f64 / 2.0 / analyses as f64
        } else {
            0.0
        };

        MetricsReport {
            analyses,
            batches: self.batches(),
            excellent: self.excellent.load(Ordering::Relaxed),
            needs_improvement: self.needs_improvement.load(Ordering::Relaxed),
            critical: self.critical.load(Ordering::Relaxed),
            average_score,
        }
    }
}

impl Default for AnalysisMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of the analysis counters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    pub analyses: usize,
    pub batches: usize,
    pub excellent: usize,
    pub needs_improvement: usize,
    pub critical: usize,

    /// Mean exact score over all analyses (0 when none)
    pub average_score: f64,
}
