//! Audit binary - scores every page's SEO record from the content backend
//!
//! Usage:
//!   cargo run --bin audit                          # Score every record at /api/seo
//!   cargo run --bin audit -- --pages pages.txt     # Score only the listed pages
//!   cargo run --bin audit -- --min-score 80        # Fail if any page scores below 80
//!   cargo run --bin audit -- --json                # Print the report as JSON
//!
//! Optional environment variables:
//! - CONTENT_API_URL (defaults to http://localhost:3000)
//! - CONTENT_API_KEY
//! - PAGES_FILE (same as --pages)
//! - AUDIT_CONCURRENCY (defaults to 4)
//! - REQUEST_TIMEOUT_SECS (defaults to 10)

use anyhow::Result;
use clap::Parser;
use clinic_seo::audit::{audit_all, audit_pages, read_pages_file, ContentClient};
use clinic_seo::config::Config;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "audit")]
#[command(about = "Score the SEO records of every page on the clinic site")]
#[command(version)]
struct Args {
    /// File listing page keys to audit, one per line (overrides PAGES_FILE)
    #[arg(long = "pages")]
    pages_file: Option<String>,

    /// Exit non-zero when any page's display score is below this value
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    min_score: Option<u32>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_seo=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;
    let client = ContentClient::new(&config)?;

    info!("Auditing SEO records from {}", config.content_api_url);

    let report = match args.pages_file.as_ref().or(config.pages_file.as_ref()) {
        Some(path) => {
            let pages = read_pages_file(path)?;
            info!("Loaded {} pages from {}", pages.len(), path);
            audit_pages(&client, &pages, config.audit_concurrency).await
        }
        None => audit_all(&client).await?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render());
    }

    report.ensure_passing(args.min_score)
}
