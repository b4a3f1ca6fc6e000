use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use saami_io::HttpFetcher;
use saami_translator::{Enricher, WiktionaryEnricher};
use tracing_subscriber::EnvFilter;

mod pipeline;
mod profile;


#[derive(Parser, Debug)]
#[command(name = "saami-vocabulator")]
#[command(about = "Lists Saami dictionary entries that look like their own translation")]
struct Args {
    /// Report file; falls back to the configured default when missing or unusable
    output: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let config = profile::load_config()?;

    let timeout = Duration::from_secs(config.http_timeout_seconds);
    let fetcher = HttpFetcher::new(timeout)?;
    let enricher = if config.enrich.enabled {
        Some(WiktionaryEnricher::new(
            config.enrich.api_url.clone(),
            config.enrich.languages.clone(),
            timeout,
        )?)
    } else {
        None
    };

    let written = pipeline::run(
        &config,
        &fetcher,
        enricher.as_ref().map(|e| e as &dyn Enricher),
        args.output.as_deref(),
    )
    .await?;

    tracing::info!("Report written to {}", written.display());
    Ok(())
}
