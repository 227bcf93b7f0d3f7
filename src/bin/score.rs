//! Score binary - scores SEO records stored in local JSON files
//!
//! Usage:
//!   cargo run --bin score -- home.json packages.json
//!
//! Each file holds one record or an array of records.

use anyhow::Result;
use clap::Parser;
use clinic_seo::audit::score_file;

#[derive(Parser, Debug)]
#[command(name = "score")]
#[command(about = "Score SEO records stored in local JSON files")]
#[command(version)]
struct Args {
    /// JSON files, each holding one record or an array of records
    #[arg(required = true)]
    files: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_seo=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    for path in &args.files {
        for report in score_file(path)? {
            println!(
                "{}: {}/100 ({}, exact {})",
                report.page.as_deref().unwrap_or(path),
                report.display_score,
                report.grade,
                report.score
            );
            for suggestion in &report.suggestions {
                println!("  - {}", suggestion);
            }
        }
    }

    Ok(())
}
