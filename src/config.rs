use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Analysis service
    pub port: u16,
    pub api_key: Option<String>,
    pub max_batch_size: usize,

    // Content backend (audit)
    pub content_api_url: String,
    pub content_api_key: Option<String>,
    pub pages_file: Option<String>,
    pub audit_concurrency: usize,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().context(format!("Invalid PORT: {}", v))?,
                Err(_) => 8080,
            },
            // Blank values count as unset
            api_key: non_empty_var("API_KEY"),
            max_batch_size: std::env::var("MAX_BATCH_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),

            content_api_url: std::env::var("CONTENT_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            content_api_key: non_empty_var("CONTENT_API_KEY"),
            pages_file: non_empty_var("PAGES_FILE"),
            audit_concurrency: std::env::var("AUDIT_CONCURRENCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(4),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
