use crate::config::types::{Config, MarkupConfig, OutputConfig, ScraperConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_scraper_config(&config.scraper)?;
    validate_markup_config(&config.markup)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the target site
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url '{}': {}", config.base_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url '{}' must use http or https",
            config.base_url
        )));
    }

    if config.catalog_path.is_empty() {
        return Err(ConfigError::Validation(
            "catalog-path cannot be empty".to_string(),
        ));
    }

    let catalog_url = url.join(&config.catalog_path).map_err(|e| {
        ConfigError::InvalidUrl(format!(
            "catalog-path '{}' does not form a valid URL: {}",
            config.catalog_path, e
        ))
    })?;

    if catalog_url.host_str() != url.host_str() {
        return Err(ConfigError::Validation(format!(
            "catalog-path '{}' leaves the base-url host",
            config.catalog_path
        )));
    }

    Ok(())
}

/// Validates scrape limits
fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    if config.max_pages_per_department < 1 {
        return Err(ConfigError::Validation(format!(
            "max-pages-per-department must be >= 1, got {}",
            config.max_pages_per_department
        )));
    }

    Ok(())
}

/// Validates markup markers
fn validate_markup_config(config: &MarkupConfig) -> Result<(), ConfigError> {
    let markers = [
        ("nav-container-id", &config.nav_container_id),
        ("category-icon-class", &config.category_icon_class),
        ("description-attribute", &config.description_attribute),
        ("price-input-class", &config.price_input_class),
    ];

    for (name, value) in markers {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
        }
        if value.contains(|c: char| c.is_whitespace() || c == '"') {
            return Err(ConfigError::Validation(format!(
                "{} must be a single token, got '{}'",
                name, value
            )));
        }
    }

    if config.product_form_children < 1 {
        return Err(ConfigError::Validation(
            "product-form-children must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.path.is_empty() {
        return Err(ConfigError::Validation(
            "output path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
