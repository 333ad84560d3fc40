//! Crawler behavior against a mock documentation site

use crate::{mount_page, mount_page_expecting, mount_status};
use mdc_harvest::config::CrawlConfig;
use mdc_harvest::crawler::Crawler;
use std::collections::BTreeSet;
use url::Url;
use wiremock::MockServer;

fn crawl_config(server: &MockServer) -> CrawlConfig {
    CrawlConfig {
        seed_url: format!("{}/docs/standards", server.uri()),
        scope_prefix: "/docs/standards".to_string(),
        request_timeout_secs: Some(5),
    }
}

fn paths(pages: &BTreeSet<Url>) -> Vec<String> {
    pages.iter().map(|u| u.path().to_string()).collect()
}

#[tokio::test]
async fn test_crawl_stays_in_scope() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/docs/standards",
        r#"
        <a href="/docs/standards/php">PHP</a>
        <a href="/docs/other">Other docs</a>
        <a href="/blog/standards">Blog</a>
        <a href="https://docs.example.invalid/docs/standards/css">Elsewhere</a>
        <a href="mailto:docs@example.com">Mail</a>
        "#,
    )
    .await;
    mount_page(&server, "/docs/standards/php", "<p>No links here.</p>").await;
    mount_page_expecting(&server, "/docs/other", "", 0).await;
    mount_page_expecting(&server, "/blog/standards", "", 0).await;

    let (crawler, seed) = Crawler::from_config(&crawl_config(&server)).unwrap();
    let pages = crawler.crawl(&seed).await;

    assert_eq!(paths(&pages), vec!["/docs/standards", "/docs/standards/php"]);
    for page in &pages {
        assert!(crawler.scope().contains(page), "{} escaped scope", page);
        assert_eq!(page.host_str(), seed.host_str());
        assert!(page.path().starts_with("/docs/standards"));
    }
}

#[tokio::test]
async fn test_crawl_terminates_on_cycles() {
    let server = MockServer::start().await;

    mount_page_expecting(
        &server,
        "/docs/standards",
        r#"<a href="/docs/standards/a">A</a>"#,
        1,
    )
    .await;
    mount_page_expecting(
        &server,
        "/docs/standards/a",
        r#"<a href="/docs/standards/b">B</a><a href="/docs/standards/a">Self</a>"#,
        1,
    )
    .await;
    mount_page_expecting(
        &server,
        "/docs/standards/b",
        r#"<a href="/docs/standards">Home</a><a href="/docs/standards/a">A</a>"#,
        1,
    )
    .await;

    let (crawler, seed) = Crawler::from_config(&crawl_config(&server)).unwrap();
    let pages = crawler.crawl(&seed).await;

    assert_eq!(
        paths(&pages),
        vec!["/docs/standards", "/docs/standards/a", "/docs/standards/b"]
    );
}

#[tokio::test]
async fn test_failed_page_is_visited_but_contributes_no_links() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/docs/standards",
        r#"<a href="/docs/standards/broken">Broken</a><a href="/docs/standards/ok">OK</a>"#,
    )
    .await;
    mount_status(&server, "/docs/standards/broken", 500).await;
    mount_page(
        &server,
        "/docs/standards/ok",
        r#"<a href="/docs/standards/deep">Deep</a>"#,
    )
    .await;
    mount_page(&server, "/docs/standards/deep", "<p>Leaf.</p>").await;

    let (crawler, seed) = Crawler::from_config(&crawl_config(&server)).unwrap();
    let pages = crawler.crawl(&seed).await;

    assert_eq!(
        paths(&pages),
        vec![
            "/docs/standards",
            "/docs/standards/broken",
            "/docs/standards/deep",
            "/docs/standards/ok",
        ]
    );
}

#[tokio::test]
async fn test_failed_seed_yields_only_seed() {
    let server = MockServer::start().await;
    mount_status(&server, "/docs/standards", 404).await;

    let (crawler, seed) = Crawler::from_config(&crawl_config(&server)).unwrap();
    let pages = crawler.crawl(&seed).await;

    assert_eq!(pages.len(), 1);
    assert!(pages.contains(&seed));
}

#[tokio::test]
async fn test_fragments_do_not_cause_refetch() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/docs/standards",
        r##"
        <a href="/docs/standards/php#casting">Casting</a>
        <a href="/docs/standards/php#arrays">Arrays</a>
        <a href="/docs/standards/php/">PHP</a>
        <a href="#top">Top</a>
        "##,
    )
    .await;
    mount_page_expecting(
        &server,
        "/docs/standards/php",
        r#"<a href="/docs/standards#intro">Back</a>"#,
        1,
    )
    .await;

    let (crawler, seed) = Crawler::from_config(&crawl_config(&server)).unwrap();
    let pages = crawler.crawl(&seed).await;

    assert_eq!(paths(&pages), vec!["/docs/standards", "/docs/standards/php"]);
}

#[tokio::test]
async fn test_relative_links_resolve_against_current_page() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/docs/standards",
        r#"<a href="/docs/standards/php/index">PHP</a>"#,
    )
    .await;
    mount_page(
        &server,
        "/docs/standards/php/index",
        r#"<a href="casting">Casting</a><a href="../css">CSS</a>"#,
    )
    .await;
    mount_page(&server, "/docs/standards/php/casting", "").await;
    mount_page(&server, "/docs/standards/css", "").await;

    let (crawler, seed) = Crawler::from_config(&crawl_config(&server)).unwrap();
    let pages = crawler.crawl(&seed).await;

    assert_eq!(
        paths(&pages),
        vec![
            "/docs/standards",
            "/docs/standards/css",
            "/docs/standards/php/casting",
            "/docs/standards/php/index",
        ]
    );
}
