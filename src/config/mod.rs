//! Configuration module for the catalog scraper
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A missing file is not an error: [`Config::default`] reproduces the built-in
//! target site.
//!
//! # Example
//!
//! ```no_run
//! use catalog_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Scraping {}", config.catalog_url().unwrap());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, HttpConfig, MarkupConfig, OutputConfig, ProductMatch, ScraperConfig, SiteConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate as validate_config;
