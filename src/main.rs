mod cli;

use anyhow::Context;
use clap::Parser;
use intern_match::config::{LoggingSettings, Settings};
use intern_match::{Catalog, Recommender};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize logging; `LOG_LEVEL`/`LOG_FORMAT` win over configuration
fn init_logging(logging: &LoggingSettings, verbose: bool) {
    let log_level = if verbose {
        "debug".to_string()
    } else {
        std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone())
    };
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let filter = EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries results, logs go to stderr
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = cli::Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Settings::load().context("Failed to load configuration")?,
    };

    init_logging(&settings.logging, cli.verbose);

    let catalog_path = cli
        .catalog
        .as_deref()
        .or_else(|| settings.catalog.path.as_deref().map(Path::new));

    let catalog = match catalog_path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::sample().context("Failed to load sample catalog")?,
    };

    info!(
        "Catalog loaded: {} students, {} internships",
        catalog.students().len(),
        catalog.internships().len()
    );

    let matcher = settings.matching.matcher();
    info!(
        "Matcher initialized (tokenizer: {:?}, smooth_idf: {})",
        matcher.tokenizer(),
        matcher.smooth_idf()
    );

    let recommender = Recommender::new(Arc::new(catalog), matcher)
        .with_default_limit(settings.matching.default_limit);

    cli::run(cli.command, &recommender, cli.format)
}
