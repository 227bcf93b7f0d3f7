//! Site-wide SEO audit against the content backend.
//!
//! Records are fetched from the backend's REST API (`/api/seo` for every page,
//! `/api/seo/{page}` for one), scored locally, and ordered worst first so the
//! pages that need attention lead the report.

use crate::config::Config;
use crate::retry::{with_retry_if, RetryPolicy};
use crate::security::API_KEY_HEADER;
use crate::seo::{analyze, sort_worst_first, PageSeoRecord, SeoReport};
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use reqwest::{StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write as _;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL for page '{page}'")]
    InvalidUrl { page: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: StatusCode },

    #[error("unexpected response from {url}: {reason}")]
    Body { url: String, reason: String },
}

impl FetchError {
    /// Network failures and 5xx responses are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Transport { .. } => true,
            FetchError::Status { status, .. } => status.is_server_error(),
            FetchError::InvalidUrl { .. } | FetchError::Body { .. } => false,
        }
    }
}

/// Client for the content backend's SEO endpoints.
pub struct ContentClient {
    client: reqwest::Client,
    base_url: Url,
    retry: RetryPolicy,
}

impl ContentClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("clinic-seo/", env!("CARGO_PKG_VERSION")));

        if let Some(key) = &config.content_api_key {
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(API_KEY_HEADER, key.parse().context("Invalid CONTENT_API_KEY format")?);
            builder = builder.default_headers(headers);
        }

        let base_url = Url::parse(&config.content_api_url)
            .context(format!("Invalid CONTENT_API_URL: {}", config.content_api_url))?;

        Ok(Self {
            client: builder.build().context("Failed to build HTTP client")?,
            base_url,
            retry: RetryPolicy::content_api(),
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// URL of `/api/seo`, or `/api/seo/{page}` with the page key encoded as a
    /// single path segment.
    fn endpoint(&self, page: Option<&str>) -> Result<Url, FetchError> {
        let invalid = || FetchError::InvalidUrl {
            page: page.unwrap_or_default().to_string(),
        };

        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| invalid())?;
            segments.pop_if_empty().extend(["api", "seo"]);
            if let Some(page) = page {
                segments.push(page);
            }
        }
        Ok(url)
    }

    async fn get_json(&self, url: &Url) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.json().await.map_err(|e| FetchError::Body {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    async fn get_json_with_retry(&self, url: &Url, operation: &str) -> Result<Value, FetchError> {
        with_retry_if(
            &self.retry,
            operation,
            || self.get_json(url),
            FetchError::is_retryable,
        )
        .await
    }

    /// Fetch every page's record.
    ///
    /// Accepts either a bare JSON array or an object wrapping it in `data`.
    pub async fn fetch_all(&self) -> Result<Vec<PageSeoRecord>, FetchError> {
        let url = self.endpoint(None)?;
        let body = self.get_json_with_retry(&url, "Fetch all SEO records").await?;

        let items = match body {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(FetchError::Body {
                        url: url.to_string(),
                        reason: "expected a JSON array of records".to_string(),
                    })
                }
            },
            _ => {
                return Err(FetchError::Body {
                    url: url.to_string(),
                    reason: "expected a JSON array of records".to_string(),
                })
            }
        };

        Ok(items.into_iter().map(PageSeoRecord::from_value).collect())
    }

    /// Fetch one page's record. The requested key fills in `page` when the
    /// backend omits it.
    pub async fn fetch_page(&self, page: &str) -> Result<PageSeoRecord, FetchError> {
        let url = self.endpoint(Some(page))?;
        let operation = format!("Fetch SEO record for {}", page);
        let body = self.get_json_with_retry(&url, &operation).await?;

        let mut record = PageSeoRecord::from_value(body);
        if record.page.is_none() {
            record.page = Some(page.to_string());
        }
        Ok(record)
    }
}

/// A page whose record could not be fetched.
#[derive(Debug, Clone, Serialize)]
pub struct AuditFailure {
    pub page: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub generated_at: DateTime<Utc>,
    /// Worst score first
    pub entries: Vec<SeoReport>,
    pub failures: Vec<AuditFailure>,
}

impl AuditReport {
    fn new(mut entries: Vec<SeoReport>, failures: Vec<AuditFailure>) -> Self {
        sort_worst_first(&mut entries);
        Self {
            generated_at: Utc::now(),
            entries,
            failures,
        }
    }

    /// Entries whose display score is below `min_score`.
    pub fn below(&self, min_score: u32) -> Vec<&SeoReport> {
        self.entries
            .iter()
            .filter(|report| report.display_score < min_score)
            .collect()
    }

    /// Fails when any page could not be fetched, or when `min_score` is given
    /// and some page scores below it.
    pub fn ensure_passing(&self, min_score: Option<u32>) -> Result<()> {
        if !self.failures.is_empty() {
            bail!("{} pages could not be fetched", self.failures.len());
        }

        if let Some(min_score) = min_score {
            let below = self.below(min_score);
            if !below.is_empty() {
                bail!("{} pages scored below {}", below.len(), min_score);
            }
        }

        Ok(())
    }

    /// Plain-text rendering for terminals and CI logs.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "SEO audit {}: {} pages scored, {} failed",
            self.generated_at.format("%Y-%m-%d %H:%M UTC"),
            self.entries.len(),
            self.failures.len()
        );

        for report in &self.entries {
            let _ = writeln!(
                out,
                "{:>5}  {:<18} {}",
                report.display_score,
                report.grade.label(),
                report.page.as_deref().unwrap_or("<unnamed>")
            );
            for suggestion in &report.suggestions {
                let _ = writeln!(out, "       - {}", suggestion);
            }
        }

        for failure in &self.failures {
            let _ = writeln!(out, "  ERR  {}: {}", failure.page, failure.error);
        }

        out
    }
}

/// Score every record the backend lists.
pub async fn audit_all(client: &ContentClient) -> Result<AuditReport> {
    let records = client
        .fetch_all()
        .await
        .context("Failed to fetch SEO records")?;

    info!("Fetched {} SEO records", records.len());
    let entries = records.iter().map(analyze).collect();
    Ok(AuditReport::new(entries, Vec::new()))
}

/// Fetch and score the given pages, at most `concurrency` requests at a time.
/// A failing page is reported, not fatal. Failures keep the order the pages
/// were given in.
pub async fn audit_pages(client: &ContentClient, pages: &[String], concurrency: usize) -> AuditReport {
    let results: Vec<(String, Result<PageSeoRecord, FetchError>)> = stream::iter(pages)
        .map(|page| async move { (page.clone(), client.fetch_page(page).await) })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut entries = Vec::new();
    let mut failures = Vec::new();
    for (page, result) in results {
        match result {
            Ok(record) => entries.push(analyze(&record)),
            Err(e) => {
                warn!("Skipping {}: {}", page, e);
                failures.push(AuditFailure {
                    page,
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        "Audited {} pages ({} failed)",
        entries.len() + failures.len(),
        failures.len()
    );
    AuditReport::new(entries, failures)
}

/// Read page keys from a file: one per line, blank lines and `#` comments
/// ignored.
pub fn read_pages_file(path: &str) -> Result<Vec<String>> {
    let content =
        std::fs::read_to_string(path).context(format!("Failed to read pages file {}", path))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Score records stored in a local JSON file holding one record or an array
/// of them. Records without a `page` are named after the file.
pub fn score_file(path: &str) -> Result<Vec<SeoReport>> {
    let content = std::fs::read_to_string(path).context(format!("Failed to read {}", path))?;
    let value: Value =
        serde_json::from_str(&content).context(format!("Failed to parse JSON in {}", path))?;

    let records: Vec<PageSeoRecord> = match value {
        Value::Array(items) => items.into_iter().map(PageSeoRecord::from_value).collect(),
        other => vec![PageSeoRecord::from_value(other)],
    };

    Ok(records
        .into_iter()
        .map(|mut record| {
            if record.page.is_none() {
                record.page = Some(path.to_string());
            }
            analyze(&record)
        })
        .collect())
}
