//! Catalog scraper main entry point
//!
//! This is the command-line interface for the catalog scraper.

use anyhow::Context;
use catalog_scraper::config::{load_config_with_hash, validate_config, Config};
use catalog_scraper::run_scrape;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Catalog scraper: collects product names and prices from a retailer's catalog
///
/// Walks every department listed on the catalog homepage, follows each
/// department's pagination and writes one `department;description;price`
/// line per product.
#[derive(Parser, Debug)]
#[command(name = "catalog-scraper")]
#[command(version)]
#[command(about = "Scrapes catalog product prices into a delimited report", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the catalog root URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Override the report path
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate the configuration and show what would be scraped
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(base_url) = cli.base_url {
        config.site.base_url = base_url;
    }
    if let Some(output) = cli.output {
        config.output.path = output;
    }
    validate_config(&config).context("invalid configuration")?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    match run_scrape(config).await {
        Ok(_) => {
            tracing::info!("Scrape completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("catalog_scraper=info,warn"),
            1 => EnvFilter::new("catalog_scraper=debug,info"),
            2 => EnvFilter::new("catalog_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Catalog Scraper Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    match config.catalog_url() {
        Ok(url) => println!("  Catalog page: {}", url),
        Err(e) => println!("  Catalog page: invalid ({})", e),
    }

    println!("\nScraper:");
    println!(
        "  Max pages per department: {}",
        config.scraper.max_pages_per_department
    );
    println!(
        "  Skip last department: {}",
        config.scraper.skip_last_department
    );
    println!("  Product match: {:?}", config.scraper.product_match);

    println!("\nMarkup:");
    println!("  Navigation container: #{}", config.markup.nav_container_id);
    println!("  Category icon class: {}", config.markup.category_icon_class);
    println!(
        "  Description attribute: {}",
        config.markup.description_attribute
    );
    println!("  Price input class: {}", config.markup.price_input_class);
    println!(
        "  Product form children: {}",
        config.markup.product_form_children
    );

    println!("\nHTTP:");
    println!(
        "  User agent: {}",
        config.http.user_agent.as_deref().unwrap_or("(client default)")
    );
    match config.http.timeout_secs {
        Some(secs) => println!("  Timeout: {}s", secs),
        None => println!("  Timeout: none"),
    }

    println!("\nOutput:");
    println!("  Report: {}", config.output.path);

    println!("\n✓ Configuration is valid");
}
