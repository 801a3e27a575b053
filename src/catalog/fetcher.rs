//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper:
//! - Building the HTTP client from the `[http]` configuration
//! - GET requests for catalog and listing pages
//! - Parsing response bodies into traversable documents
//!
//! There is no retry logic. Any transport failure or non-2xx status is
//! returned to the caller, which aborts the run.

use crate::config::HttpConfig;
use crate::ScrapeError;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;

/// Builds an HTTP client with the configured user agent and timeout
///
/// Redirects follow the transport default policy.
///
/// # Example
///
/// ```no_run
/// use catalog_scraper::catalog::build_http_client;
/// use catalog_scraper::config::HttpConfig;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().gzip(true).brotli(true);

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.as_str());
    }

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Fetches a URL and returns its body as text
///
/// # Returns
///
/// * `Ok(String)` - Body of a 2xx response
/// * `Err(ScrapeError::Http)` - Transport failure or non-2xx status
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, ScrapeError> {
    tracing::debug!("GET {}", url);

    let http_error = |source: reqwest::Error| ScrapeError::Http {
        url: url.to_string(),
        source,
    };

    let response = client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(http_error)?;

    response.text().await.map_err(http_error)
}

/// Fetches a URL and parses the body into an HTML document
pub async fn fetch_document(client: &Client, url: &str) -> Result<Html, ScrapeError> {
    let body = fetch_page(client, url).await?;
    Ok(Html::parse_document(&body))
}
