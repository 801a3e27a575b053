//! Catalog module for page fetching and extraction
//!
//! This module contains the scraping pipeline:
//! - HTTP fetching
//! - Markup extraction (departments, products, next links)
//! - Department pagination
//! - Overall scrape coordination

mod coordinator;
mod fetcher;
mod markup;
mod paginator;

pub use coordinator::Scraper;
pub use fetcher::{build_http_client, fetch_document, fetch_page};
pub use markup::CatalogMarkup;
pub use paginator::Paginator;

use crate::config::Config;
use crate::model::ScrapeResult;
use crate::output::write_report;
use crate::ScrapeError;
use std::path::Path;

/// Runs a complete scrape and writes the report
///
/// This is the main entry point. It will:
/// 1. Build the HTTP client and selectors
/// 2. List the departments on the catalog homepage
/// 3. Paginate through every department
/// 4. Write the report to `output.path`
///
/// Nothing is written if any step fails.
pub async fn run_scrape(config: Config) -> Result<ScrapeResult, ScrapeError> {
    let output_path = config.output.path.clone();
    let scraper = Scraper::new(config)?;

    let result = scraper.run().await?;

    write_report(&result, Path::new(&output_path))?;
    tracing::info!(
        "Wrote {} rows to {}",
        result.total_entries(),
        output_path
    );

    Ok(result)
}
