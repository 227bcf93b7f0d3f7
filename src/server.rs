//! HTTP surface for the admin panel's SEO widget.

use crate::config::Config;
use crate::error::AppError;
use crate::i18n::Locale;
use crate::metrics::{AnalysisMetrics, MetricsReport};
use crate::security::{is_authorized, API_KEY_HEADER};
use crate::seo::{analyze, sort_worst_first, PageSeoRecord, SeoReport};
use anyhow::{Context, Result};
use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub primary: bool,
}

/// Build the application router.
pub fn router(config: Arc<Config>) -> Router {
    let state = AppState { config };

    let api = Router::new()
        .route("/seo/locales", get(list_locales))
        .route("/seo/analyze", post(analyze_record))
        .route("/seo/analyze/batch", post(analyze_batch))
        .route("/seo/metrics", get(metrics))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_key));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured port and serve until Ctrl+C.
pub async fn serve(config: Arc<Config>) -> Result<()> {
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    if config.api_key.is_none() {
        warn!("API_KEY not set, /api endpoints are unauthenticated");
    }

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if !is_authorized(state.config.api_key.as_deref(), presented) {
        warn!("Rejected {} {}: bad API key", request.method(), request.uri().path());
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}

async fn health() -> &'static str {
    "OK"
}

async fn list_locales() -> Json<Vec<LocaleInfo>> {
    let locales = Locale::ALL
        .iter()
        .map(|locale| LocaleInfo {
            code: locale.code(),
            name: locale.name(),
            native_name: locale.native_name(),
            primary: locale.is_primary(),
        })
        .collect();

    Json(locales)
}

fn analyze_and_record(value: Value) -> SeoReport {
    let report = analyze(&PageSeoRecord::from_value(value));
    AnalysisMetrics::global().record_analysis(&report);
    report
}

async fn analyze_record(Json(body): Json<Value>) -> Json<SeoReport> {
    let report = analyze_and_record(body);
    debug!(
        "Analyzed {}: score {} ({})",
        report.page.as_deref().unwrap_or("<unnamed>"),
        report.score,
        report.grade
    );
    Json(report)
}

async fn analyze_batch(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Vec<SeoReport>>, AppError> {
    let Value::Array(items) = body else {
        return Err(AppError::MalformedPayload(
            "expected a JSON array of records".to_string(),
        ));
    };

    let limit = state.config.max_batch_size;
    if items.len() > limit {
        return Err(AppError::BatchTooLarge {
            size: items.len(),
            limit,
        });
    }

    let mut reports: Vec<SeoReport> = items.into_iter().map(analyze_and_record).collect();
    sort_worst_first(&mut reports);
    AnalysisMetrics::global().record_batch();

    info!("Analyzed batch of {} records", reports.len());
    Ok(Json(reports))
}

async fn metrics() -> Json<MetricsReport> {
    Json(AnalysisMetrics::global().report())
}
