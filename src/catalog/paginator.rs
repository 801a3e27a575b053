//! Department paginator
//!
//! Walks one department's listing pages by following `rel="next"` links,
//! collecting product entries from every page. The walk ends when a page has
//! no next link, when the next link points at a page already visited, or when
//! the page ceiling is reached.

use crate::catalog::fetcher::fetch_document;
use crate::catalog::markup::CatalogMarkup;
use crate::model::Department;
use crate::{MarkupError, ScrapeError};
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// Paginates through department listings on one site
pub struct Paginator<'a> {
    client: &'a Client,
    markup: &'a CatalogMarkup,
    base_url: &'a Url,
    max_pages: u32,
}

impl<'a> Paginator<'a> {
    pub fn new(
        client: &'a Client,
        markup: &'a CatalogMarkup,
        base_url: &'a Url,
        max_pages: u32,
    ) -> Self {
        Self {
            client,
            markup,
            base_url,
            max_pages,
        }
    }

    /// Scrapes every listing page of a department
    ///
    /// `department_url` is the relative URL from the navigation container.
    /// The department name is read from the first page only.
    ///
    /// # Errors
    ///
    /// Any fetch failure or missing markup aborts the department; products
    /// collected from earlier pages are discarded with it.
    pub async fn scrape_department(&self, department_url: &str) -> Result<Department, ScrapeError> {
        let mut current = self.base_url.join(department_url)?;
        let mut visited = HashSet::new();
        let mut name = String::new();
        let mut entries = Vec::new();
        let mut pages = 0u32;

        loop {
            visited.insert(current.to_string());

            let next_href = {
                let document = fetch_document(self.client, current.as_str()).await?;
                pages += 1;

                let markup_error = |source: MarkupError| ScrapeError::Markup {
                    url: current.to_string(),
                    source,
                };

                if pages == 1 {
                    name = self
                        .markup
                        .department_name(&document)
                        .map_err(markup_error)?;
                }

                let found = self
                    .markup
                    .extract_products(&document)
                    .map_err(markup_error)?;
                tracing::debug!("{} products on {}", found.len(), current);
                entries.extend(found);

                self.markup
                    .next_page_href(&document)
                    .map_err(markup_error)?
            };

            let Some(href) = next_href else {
                break;
            };

            if pages >= self.max_pages {
                tracing::warn!(
                    "Stopping '{}' at the {} page ceiling; next link {} not followed",
                    name,
                    self.max_pages,
                    href
                );
                break;
            }

            let next = self.base_url.join(&href)?;
            if visited.contains(next.as_str()) {
                tracing::warn!(
                    "Next link on {} points back to visited page {}; stopping '{}'",
                    current,
                    next,
                    name
                );
                break;
            }

            current = next;
        }

        tracing::info!(
            "Department '{}': {} products over {} pages",
            name,
            entries.len(),
            pages
        );

        Ok(Department {
            url: department_url.to_string(),
            name,
            entries,
            pages,
        })
    }
}
