//! Catalog scraper: walks a retailer's department listing and collects
//! product name/price pairs into a semicolon-delimited report.
//!
//! The pipeline is strictly sequential: fetch the catalog homepage, list the
//! department links, paginate through every department, then write the
//! report once at the end.

pub mod catalog;
pub mod config;
pub mod model;
pub mod output;

use thiserror::Error;

/// Main error type for scrape operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Unexpected markup at {url}: {source}")]
    Markup { url: String, source: MarkupError },

    #[error("Invalid markup configuration: {0}")]
    MarkupConfig(MarkupError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised when a page does not have the structure the scraper expects
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
    #[error("navigation container '#{0}' not found")]
    MissingContainer(String),

    #[error("page has no <h1> heading")]
    MissingHeading,

    #[error("element is missing the '{0}' attribute")]
    MissingAttribute(String),

    #[error("product form has no input with class '{0}'")]
    MissingPriceInput(String),

    #[error("anchor has no href")]
    MissingHref,

    #[error("invalid selector '{0}'")]
    InvalidSelector(String),
}

/// Result type alias for scrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for markup extraction
pub type MarkupResult<T> = std::result::Result<T, MarkupError>;

// Re-export commonly used types
pub use catalog::{run_scrape, Scraper};
pub use config::Config;
pub use model::{Department, ProductEntry, ScrapeResult};
