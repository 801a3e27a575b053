//! Integration tests for the scraper
//!
//! These tests use wiremock to serve a small fake catalog and run the
//! pipeline end-to-end against it.

use catalog_scraper::config::Config;
use catalog_scraper::model::ProductEntry;
use catalog_scraper::{run_scrape, MarkupError, ScrapeError, Scraper};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a configuration pointing at the mock server
fn create_test_config(base_url: &str, output: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.site.base_url = base_url.to_string();
    config.output.path = output.display().to_string();
    config
}

/// A product form with the fifteen direct children the site uses
fn product_form(description: &str, price: &str) -> String {
    let mut form = format!(
        r#"<form data-productdescription="{}"><input type="hidden" class="price" value="{}">"#,
        description, price
    );
    for _ in 1..15 {
        form.push_str("<span></span>");
    }
    form.push_str("</form>");
    form
}

/// A listing page with a heading, product forms, and an optional next link
fn listing_page(heading: &str, products: &[(&str, &str)], next: Option<&str>) -> String {
    let forms: String = products
        .iter()
        .map(|(description, price)| product_form(description, price))
        .collect();
    let next = next
        .map(|href| format!(r#"<a rel="next" href="{}">Siguiente</a>"#, href))
        .unwrap_or_default();

    format!(
        r#"<html><head><title>{0}</title></head><body>
        <h1>{0}</h1>
        <form action="/search"><input name="q"></form>
        {1}
        <nav class="pagination">{2}</nav>
        </body></html>"#,
        heading, forms, next
    )
}

/// A catalog homepage listing the given department links, all marked
fn catalog_page(departments: &[&str]) -> String {
    let items: String = departments
        .iter()
        .map(|href| {
            format!(
                r#"<li><a href="{}">Dept</a><span class="iconoCat"></span></li>"#,
                href
            )
        })
        .collect();

    format!(
        r#"<html><body>
        <ul id="nav-submenu-container">
            {}
            <li><a href="/online-shop/offers/">Offers</a><span class="promo"></span></li>
        </ul>
        </body></html>"#,
        items
    )
}

async fn mount_page(server: &MockServer, page_path: &str, body: String, expected: u64) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(expected)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_three_page_department_in_page_order() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_page(
        &server,
        "/online-shop/fruit/",
        listing_page(
            "Fruta",
            &[("Manzana", "1,99 €"), ("Pera", "2,15 €")],
            Some("/online-shop/fruit/page-2/"),
        ),
        1,
    )
    .await;
    mount_page(
        &server,
        "/online-shop/fruit/page-2/",
        listing_page("Fruta", &[("Plátano", "1,49 €")], Some("/online-shop/fruit/page-3/")),
        1,
    )
    .await;
    mount_page(
        &server,
        "/online-shop/fruit/page-3/",
        listing_page("Fruta", &[("Kiwi", "3,20 €"), ("Uva", "2,80 €")], None),
        1,
    )
    .await;

    let config = create_test_config(&server.uri(), &dir.path().join("products.csv"));
    let scraper = Scraper::new(config).expect("Failed to create scraper");

    let department = scraper
        .scrape_department("/online-shop/fruit/")
        .await
        .expect("Scrape failed");

    assert_eq!(department.name, "Fruta");
    assert_eq!(department.url, "/online-shop/fruit/");
    assert_eq!(department.pages, 3);
    assert_eq!(
        department.entries,
        vec![
            ProductEntry::new("Manzana", "1,99 €"),
            ProductEntry::new("Pera", "2,15 €"),
            ProductEntry::new("Plátano", "1,49 €"),
            ProductEntry::new("Kiwi", "3,20 €"),
            ProductEntry::new("Uva", "2,80 €"),
        ]
    );
}

#[tokio::test]
async fn test_full_run_skips_last_department_and_writes_report() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("products.csv");

    mount_page(
        &server,
        "/online-shop/",
        catalog_page(&["/online-shop/dairy/", "/online-shop/bakery/"]),
        1,
    )
    .await;
    mount_page(
        &server,
        "/online-shop/dairy/",
        listing_page(
            "Lácteos",
            &[("Leche entera", "0,89 €"), ("Yogur natural", "1,20 €")],
            None,
        ),
        1,
    )
    .await;
    mount_page(
        &server,
        "/online-shop/bakery/",
        listing_page("Panadería", &[("Barra", "0,60 €")], None),
        0,
    )
    .await;

    let config = create_test_config(&server.uri(), &output);
    let result = run_scrape(config).await.expect("Scrape failed");

    assert_eq!(result.departments.len(), 1);
    assert_eq!(result.departments[0].name, "Lácteos");

    let report = std::fs::read_to_string(&output).expect("Report not written");
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 1 + result.total_entries());
    assert_eq!(lines[0], "Section;Description;Prices");
    assert_eq!(lines[1], "Lácteos;Leche entera;0,89 €");
    assert_eq!(lines[2], "Lácteos;Yogur natural;1,20 €");
    assert!(lines[1..].iter().all(|line| line.starts_with("Lácteos;")));
}

#[tokio::test]
async fn test_full_run_with_last_department_included() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("products.csv");

    mount_page(
        &server,
        "/online-shop/",
        catalog_page(&["/online-shop/dairy/", "/online-shop/bakery/"]),
        1,
    )
    .await;
    mount_page(
        &server,
        "/online-shop/dairy/",
        listing_page("Lácteos", &[("Leche entera", "0,89 €")], None),
        1,
    )
    .await;
    mount_page(
        &server,
        "/online-shop/bakery/",
        listing_page("Panadería", &[("Barra", "0,60 €"), ("Chapata", "0,95 €")], None),
        1,
    )
    .await;

    let mut config = create_test_config(&server.uri(), &output);
    config.scraper.skip_last_department = false;
    let result = run_scrape(config).await.expect("Scrape failed");

    let names: Vec<&str> = result.departments.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Lácteos", "Panadería"]);

    let report = std::fs::read_to_string(&output).expect("Report not written");
    assert_eq!(report.lines().count(), 1 + 3);
    assert!(report.ends_with("Panadería;Chapata;0,95 €\n"));
}

#[tokio::test]
async fn test_next_link_cycle_terminates() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_page(
        &server,
        "/online-shop/drinks/",
        listing_page("Bebidas", &[("Agua", "0,30 €")], Some("/online-shop/drinks/page-2/")),
        1,
    )
    .await;
    mount_page(
        &server,
        "/online-shop/drinks/page-2/",
        listing_page("Bebidas", &[("Zumo", "1,10 €")], Some("/online-shop/drinks/")),
        1,
    )
    .await;

    let config = create_test_config(&server.uri(), &dir.path().join("products.csv"));
    let scraper = Scraper::new(config).expect("Failed to create scraper");

    let department = scraper
        .scrape_department("/online-shop/drinks/")
        .await
        .expect("Scrape failed");

    assert_eq!(department.pages, 2);
    assert_eq!(department.entries.len(), 2);
}

#[tokio::test]
async fn test_page_ceiling_stops_pagination() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_page(
        &server,
        "/online-shop/frozen/",
        listing_page("Congelados", &[("Guisantes", "1,05 €")], Some("/online-shop/frozen/page-2/")),
        1,
    )
    .await;
    mount_page(
        &server,
        "/online-shop/frozen/page-2/",
        listing_page("Congelados", &[("Pizza", "2,50 €")], Some("/online-shop/frozen/page-3/")),
        1,
    )
    .await;
    mount_page(
        &server,
        "/online-shop/frozen/page-3/",
        listing_page("Congelados", &[("Helado", "3,00 €")], None),
        0,
    )
    .await;

    let mut config = create_test_config(&server.uri(), &dir.path().join("products.csv"));
    config.scraper.max_pages_per_department = 2;
    let scraper = Scraper::new(config).expect("Failed to create scraper");

    let department = scraper
        .scrape_department("/online-shop/frozen/")
        .await
        .expect("Scrape failed");

    assert_eq!(department.pages, 2);
    assert_eq!(
        department.entries,
        vec![
            ProductEntry::new("Guisantes", "1,05 €"),
            ProductEntry::new("Pizza", "2,50 €"),
        ]
    );
}

#[tokio::test]
async fn test_server_error_aborts_without_report() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("products.csv");

    mount_page(
        &server,
        "/online-shop/",
        catalog_page(&["/online-shop/meat/", "/online-shop/fish/"]),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/online-shop/meat/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&server.uri(), &output);
    let result = run_scrape(config).await;

    match result {
        Err(ScrapeError::Http { url, .. }) => assert!(url.ends_with("/online-shop/meat/")),
        other => panic!("Expected HTTP error, got {:?}", other),
    }
    assert!(!output.exists());
}

#[tokio::test]
async fn test_missing_navigation_container_fails_loudly() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("products.csv");

    mount_page(
        &server,
        "/online-shop/",
        "<html><body><ul id=\"footer-links\"></ul></body></html>".to_string(),
        1,
    )
    .await;

    let config = create_test_config(&server.uri(), &output);
    let result = run_scrape(config).await;

    match result {
        Err(ScrapeError::Markup { source, .. }) => assert_eq!(
            source,
            MarkupError::MissingContainer("nav-submenu-container".to_string())
        ),
        other => panic!("Expected markup error, got {:?}", other),
    }
    assert!(!output.exists());
}

#[tokio::test]
async fn test_base_url_with_trailing_slash() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("products.csv");

    mount_page(
        &server,
        "/online-shop/",
        catalog_page(&["/online-shop/pasta/", "/online-shop/rice/"]),
        1,
    )
    .await;
    mount_page(
        &server,
        "/online-shop/pasta/",
        listing_page("Pasta", &[("Espaguetis", "0,95 €")], None),
        1,
    )
    .await;

    let config = create_test_config(&format!("{}/", server.uri()), &output);
    catalog_scraper::config::validate_config(&config).expect("Config rejected");
    let result = run_scrape(config).await.expect("Scrape failed");

    assert_eq!(result.departments[0].name, "Pasta");
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "Section;Description;Prices\nPasta;Espaguetis;0,95 €\n"
    );
}
