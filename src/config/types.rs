use serde::Deserialize;
use url::Url;

/// Main configuration structure for the catalog scraper
///
/// Every section is optional in the TOML file. The defaults target the
/// original supermarket catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default)]
    pub markup: MarkupConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Absolute URL of the catalog homepage holding the department listing
    ///
    /// The catalog path resolves against the base URL the same way department
    /// and next-page links do.
    pub fn catalog_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.site.base_url)?.join(&self.site.catalog_path)
    }
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Root of the catalog domain; department and next-page links resolve against it
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path of the page carrying the department navigation
    #[serde(rename = "catalog-path")]
    pub catalog_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.supermarket.es".to_string(),
            catalog_path: "/online-shop/".to_string(),
        }
    }
}

/// How a listing page form is recognised as a product entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductMatch {
    /// Form has exactly `product-form-children` direct child nodes
    #[default]
    Fingerprint,
    /// Form carries the description attribute and a priced input
    Capability,
}

/// Scrape behaviour configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Maximum number of listing pages fetched for one department
    #[serde(rename = "max-pages-per-department")]
    pub max_pages_per_department: u32,

    /// Leave the final department of the navigation out of the run
    #[serde(rename = "skip-last-department")]
    pub skip_last_department: bool,

    #[serde(rename = "product-match")]
    pub product_match: ProductMatch,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            max_pages_per_department: 500,
            skip_last_department: true,
            product_match: ProductMatch::Fingerprint,
        }
    }
}

/// Markers identifying the interesting parts of the site's markup
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    /// `id` of the element whose children are the department entries
    #[serde(rename = "nav-container-id")]
    pub nav_container_id: String,

    /// Class carried by the second child of a real department entry
    #[serde(rename = "category-icon-class")]
    pub category_icon_class: String,

    /// Form attribute holding the product description
    #[serde(rename = "description-attribute")]
    pub description_attribute: String,

    /// Class of the input whose `value` is the price
    #[serde(rename = "price-input-class")]
    pub price_input_class: String,

    /// Direct child node count of a product form
    #[serde(rename = "product-form-children")]
    pub product_form_children: usize,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            nav_container_id: "nav-submenu-container".to_string(),
            category_icon_class: "iconoCat".to_string(),
            description_attribute: "data-productdescription".to_string(),
            price_input_class: "price".to_string(),
            product_form_children: 15,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User agent header; the client default is used when unset
    #[serde(rename = "user-agent")]
    pub user_agent: Option<String>,

    /// Whole-request timeout in seconds; no timeout when unset
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the semicolon-delimited report
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "products.csv".to_string(),
        }
    }
}
