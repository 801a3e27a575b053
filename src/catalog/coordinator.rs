//! Scrape coordinator - pipeline orchestration
//!
//! Runs the stages in order: fetch the catalog homepage, list departments,
//! paginate each department, and hand the collected result back to the
//! caller for reporting. Nothing runs concurrently.

use crate::catalog::fetcher::{build_http_client, fetch_document};
use crate::catalog::markup::CatalogMarkup;
use crate::catalog::paginator::Paginator;
use crate::config::Config;
use crate::model::{Department, ScrapeResult};
use crate::ScrapeError;
use reqwest::Client;
use url::Url;

/// Main scraper structure
pub struct Scraper {
    config: Config,
    client: Client,
    markup: CatalogMarkup,
    base_url: Url,
}

impl Scraper {
    /// Creates a scraper for the configured site
    ///
    /// # Returns
    ///
    /// * `Ok(Scraper)` - Client built and selectors compiled
    /// * `Err(ScrapeError)` - Invalid base URL, selector, or client settings
    pub fn new(config: Config) -> Result<Self, ScrapeError> {
        let base_url = Url::parse(&config.site.base_url)?;
        let markup = CatalogMarkup::new(&config.markup, config.scraper.product_match)
            .map_err(ScrapeError::MarkupConfig)?;
        let client = build_http_client(&config.http)?;

        Ok(Self {
            config,
            client,
            markup,
            base_url,
        })
    }

    /// Fetches the catalog homepage and lists the department URLs on it
    pub async fn list_departments(&self) -> Result<Vec<String>, ScrapeError> {
        let catalog_url = self.config.catalog_url()?;
        tracing::info!("Scraping catalog at {}", catalog_url);
        let document = fetch_document(&self.client, catalog_url.as_str()).await?;

        self.markup
            .list_departments(&document)
            .map_err(|source| ScrapeError::Markup {
                url: catalog_url.to_string(),
                source,
            })
    }

    /// Scrapes one department given its relative URL
    pub async fn scrape_department(&self, department_url: &str) -> Result<Department, ScrapeError> {
        Paginator::new(
            &self.client,
            &self.markup,
            &self.base_url,
            self.config.scraper.max_pages_per_department,
        )
        .scrape_department(department_url)
        .await
    }

    /// Runs the whole scrape and returns every department in navigation order
    ///
    /// Prints each department name to stdout as it completes.
    pub async fn run(&self) -> Result<ScrapeResult, ScrapeError> {
        let mut urls = self.list_departments().await?;
        tracing::info!("Found {} departments", urls.len());

        if self.config.scraper.skip_last_department {
            if let Some(last) = urls.pop() {
                tracing::info!("Skipping last department {}", last);
            }
        }

        let mut result = ScrapeResult::default();

        for url in &urls {
            let department = self.scrape_department(url).await?;
            println!("{}", department.name);
            result.departments.push(department);
        }

        tracing::info!(
            "Scraped {} products from {} departments",
            result.total_entries(),
            result.departments.len()
        );

        Ok(result)
    }
}
