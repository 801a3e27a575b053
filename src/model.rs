//! Scrape result types
//!
//! A run produces one [`Department`] per scraped navigation entry, each owning
//! its products in page-traversal order.

/// One product as rendered on a listing page
///
/// Both fields are opaque text; the price is never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductEntry {
    pub description: String,
    pub price: String,
}

impl ProductEntry {
    pub fn new(description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            price: price.into(),
        }
    }
}

/// A catalog department and everything collected from its listing pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    /// Relative URL taken from the navigation container
    pub url: String,

    /// Display name read from the first listing page heading
    pub name: String,

    /// Products in page order, then in-page order
    pub entries: Vec<ProductEntry>,

    /// Number of listing pages fetched
    pub pages: u32,
}

/// Everything collected in one run, in department order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeResult {
    pub departments: Vec<Department>,
}

impl ScrapeResult {
    /// Total number of product entries across all departments
    pub fn total_entries(&self) -> usize {
        self.departments.iter().map(|d| d.entries.len()).sum()
    }

    /// Flattens the result into report rows, in traversal order
    pub fn rows(&self) -> impl Iterator<Item = ReportRow<'_>> {
        self.departments.iter().flat_map(|department| {
            department.entries.iter().map(move |entry| ReportRow {
                department: &department.name,
                description: &entry.description,
                price: &entry.price,
            })
        })
    }
}

/// A flattened (department, description, price) triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRow<'a> {
    pub department: &'a str,
    pub description: &'a str,
    pub price: &'a str,
}
