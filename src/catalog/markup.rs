//! Markup extraction for catalog pages
//!
//! This module knows the structure of the retailer's pages:
//! - The navigation container listing the departments
//! - The `<h1>` heading naming a department
//! - The product forms on a listing page
//! - The `rel="next"` pagination link
//!
//! Selectors are compiled once from [`MarkupConfig`] and reused for every page.

use crate::config::{MarkupConfig, ProductMatch};
use crate::model::ProductEntry;
use crate::{MarkupError, MarkupResult};
use scraper::{ElementRef, Html, Selector};

/// Compiled selectors and matching rules for one site
#[derive(Debug, Clone)]
pub struct CatalogMarkup {
    container: Selector,
    link: Selector,
    heading: Selector,
    form: Selector,
    price_input: Selector,
    next_link: Selector,
    container_id: String,
    category_icon_class: String,
    description_attribute: String,
    price_input_class: String,
    product_form_children: usize,
    product_match: ProductMatch,
}

fn compile(selector: &str) -> MarkupResult<Selector> {
    Selector::parse(selector).map_err(|_| MarkupError::InvalidSelector(selector.to_string()))
}

impl CatalogMarkup {
    /// Compiles the selectors described by the markup configuration
    pub fn new(config: &MarkupConfig, product_match: ProductMatch) -> MarkupResult<Self> {
        Ok(Self {
            container: compile(&format!("[id=\"{}\"]", config.nav_container_id))?,
            link: compile("a[href]")?,
            heading: compile("h1")?,
            form: compile("form")?,
            price_input: compile(&format!("input[class~=\"{}\"]", config.price_input_class))?,
            next_link: compile("a[rel~=\"next\"]")?,
            container_id: config.nav_container_id.clone(),
            category_icon_class: config.category_icon_class.clone(),
            description_attribute: config.description_attribute.clone(),
            price_input_class: config.price_input_class.clone(),
            product_form_children: config.product_form_children,
            product_match,
        })
    }

    /// Lists the department URLs found in the navigation container
    ///
    /// Direct children of the container are visited in document order. Text
    /// nodes are skipped, and so is every element whose second child element
    /// lacks the category icon class. For the remaining elements the `href` of
    /// the first anchor inside is returned as written in the markup.
    ///
    /// # Errors
    ///
    /// * `MissingContainer` - The page has no element with the container id
    /// * `MissingHref` - A department entry has no anchor with an `href`
    pub fn list_departments(&self, document: &Html) -> MarkupResult<Vec<String>> {
        let container = document
            .select(&self.container)
            .next()
            .ok_or_else(|| MarkupError::MissingContainer(self.container_id.clone()))?;

        let mut urls = Vec::new();

        for item in container.children().filter_map(ElementRef::wrap) {
            let is_department = item
                .children()
                .filter_map(ElementRef::wrap)
                .nth(1)
                .map(|marker| self.has_icon_class(marker))
                .unwrap_or(false);

            if !is_department {
                tracing::trace!("Skipping navigation item <{}>", item.value().name());
                continue;
            }

            let href = item
                .select(&self.link)
                .next()
                .and_then(|anchor| anchor.value().attr("href"))
                .ok_or(MarkupError::MissingHref)?;

            urls.push(href.to_string());
        }

        Ok(urls)
    }

    fn has_icon_class(&self, element: ElementRef<'_>) -> bool {
        element
            .value()
            .classes()
            .any(|class| class == self.category_icon_class)
    }

    /// Reads the department display name from the first `<h1>` on the page
    pub fn department_name(&self, document: &Html) -> MarkupResult<String> {
        document
            .select(&self.heading)
            .next()
            .map(|heading| heading.text().collect::<String>().trim().to_string())
            .ok_or(MarkupError::MissingHeading)
    }

    /// Extracts every product entry on a listing page, in document order
    ///
    /// Forms that do not match the configured [`ProductMatch`] rule are
    /// skipped silently. A matching form must carry the description attribute
    /// and a priced input; the description loses its newlines, the price is
    /// kept verbatim.
    pub fn extract_products(&self, document: &Html) -> MarkupResult<Vec<ProductEntry>> {
        let mut entries = Vec::new();

        for form in document.select(&self.form) {
            if !self.is_product_form(form) {
                continue;
            }

            let description = form
                .value()
                .attr(&self.description_attribute)
                .ok_or_else(|| MarkupError::MissingAttribute(self.description_attribute.clone()))?
                .replace('\n', "");

            let price = self.form_price(form)?;

            entries.push(ProductEntry::new(description, price));
        }

        Ok(entries)
    }

    /// Reads the price of a matched product form
    ///
    /// The fingerprint rule takes the first price input, which must carry a
    /// `value`. The capability rule takes the first price input that has one,
    /// the same input that made the form match.
    fn form_price<'b>(&self, form: ElementRef<'b>) -> MarkupResult<&'b str> {
        let mut inputs = form.select(&self.price_input);

        match self.product_match {
            ProductMatch::Fingerprint => inputs
                .next()
                .ok_or_else(|| MarkupError::MissingPriceInput(self.price_input_class.clone()))?
                .value()
                .attr("value")
                .ok_or_else(|| MarkupError::MissingAttribute("value".to_string())),
            ProductMatch::Capability => inputs
                .find_map(|input| input.value().attr("value"))
                .ok_or_else(|| MarkupError::MissingPriceInput(self.price_input_class.clone())),
        }
    }

    /// Decides whether a form is a product entry
    pub fn is_product_form(&self, form: ElementRef<'_>) -> bool {
        match self.product_match {
            // Counts every direct child node, whitespace text included.
            ProductMatch::Fingerprint => form.children().count() == self.product_form_children,
            ProductMatch::Capability => {
                form.value().attr(&self.description_attribute).is_some()
                    && form
                        .select(&self.price_input)
                        .any(|input| input.value().attr("value").is_some())
            }
        }
    }

    /// Returns the `href` of the first `rel="next"` anchor, if the page has one
    ///
    /// # Errors
    ///
    /// * `MissingHref` - The next-page anchor exists but has no `href`
    pub fn next_page_href(&self, document: &Html) -> MarkupResult<Option<String>> {
        match document.select(&self.next_link).next() {
            Some(anchor) => anchor
                .value()
                .attr("href")
                .map(|href| Some(href.to_string()))
                .ok_or(MarkupError::MissingHref),
            None => Ok(None),
        }
    }
}
