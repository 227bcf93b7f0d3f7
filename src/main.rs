use anyhow::Result;
use clinic_seo::{config::Config, server};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_seo=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting SEO analysis service");

    let config = Arc::new(Config::from_env()?);
    server::serve(config).await
}
