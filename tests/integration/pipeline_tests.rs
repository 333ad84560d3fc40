//! Full harvest runs against a mock documentation site

use crate::{mount_page, mount_status};
use mdc_harvest::config::{Config, CrawlConfig, ExtractorConfig, OutputConfig};
use mdc_harvest::pipeline;
use mdc_harvest::sync::SyncOutcome;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wiremock::MockServer;

fn harvest_config(server: &MockServer, out: &Path) -> Config {
    Config {
        crawler: CrawlConfig {
            seed_url: format!("{}/docs/standards", server.uri()),
            scope_prefix: "/docs/standards".to_string(),
            request_timeout_secs: Some(5),
        },
        extractor: ExtractorConfig::default(),
        output: OutputConfig {
            directory: out.display().to_string(),
            extension: "mdc".to_string(),
        },
    }
}

async fn mount_standards_site(server: &MockServer) {
    mount_page(
        server,
        "/docs/standards",
        r#"
        <h2>Overview</h2>
        <p>Standards for PHP code.</p>
        <ul>
          <li><a href="/docs/standards/php">PHP</a></li>
          <li><a href="/docs/standards/missing">Missing</a></li>
        </ul>
        "#,
    )
    .await;
    mount_page(
        server,
        "/docs/standards/php",
        r#"
        <h2>Casting</h2>
        <p>Put a space between the (type) and the $variable in a cast.</p>
        <pre>(int) $mynumber</pre>
        <h3>See Examples</h3>
        <pre>(string) $x</pre>
        <h3>ab</h3>
        <h2>Indenting</h2>
        <p>Use an indent of 2 spaces, with no tabs.</p>
        "#,
    )
    .await;
    mount_status(server, "/docs/standards/missing", 404).await;
}

#[tokio::test]
async fn test_full_run_writes_rule_files() {
    let server = MockServer::start().await;
    mount_standards_site(&server).await;
    let out = TempDir::new().unwrap();

    let report = pipeline::run(&harvest_config(&server, out.path()), false)
        .await
        .expect("Harvest failed");

    assert_eq!(report.pages_crawled, 3);
    assert_eq!(report.pages_with_rules, 2);
    assert_eq!(report.rules_extracted, 3);
    assert_eq!(report.count(SyncOutcome::Created), 3);
    assert!(report.collisions.is_empty());

    let casting = fs::read_to_string(out.path().join("casting.mdc")).unwrap();
    assert_eq!(
        casting,
        "---\n\
         description: Put a space between the (type) and the $variable in a cast.\n\
         globs: \n\
         ---\n\
         Put a space between the (type) and the $variable in a cast.: (int) $mynumber\n"
    );

    let indenting = fs::read_to_string(out.path().join("indenting.mdc")).unwrap();
    assert!(indenting.ends_with("Use an indent of 2 spaces, with no tabs.: EXAMPLE_CODE_HERE\n"));

    assert!(out.path().join("overview.mdc").exists());
    assert!(!out.path().join("see-examples.mdc").exists());
    assert!(!out.path().join("ab.mdc").exists());
}

#[tokio::test]
async fn test_second_run_leaves_files_unchanged() {
    let server = MockServer::start().await;
    mount_standards_site(&server).await;
    let out = TempDir::new().unwrap();
    let config = harvest_config(&server, out.path());

    pipeline::run(&config, false).await.unwrap();
    let before = fs::read(out.path().join("casting.mdc")).unwrap();

    let report = pipeline::run(&config, false).await.unwrap();
    let after = fs::read(out.path().join("casting.mdc")).unwrap();

    assert_eq!(report.count(SyncOutcome::Unchanged), 3);
    assert_eq!(report.files_written(), 0);
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_changed_page_updates_only_its_file() {
    let out = TempDir::new().unwrap();
    fs::write(out.path().join("casting.mdc"), "stale\n").unwrap();

    let server = MockServer::start().await;
    mount_standards_site(&server).await;

    let report = pipeline::run(&harvest_config(&server, out.path()), false)
        .await
        .unwrap();

    assert_eq!(report.count(SyncOutcome::Updated), 1);
    assert_eq!(report.count(SyncOutcome::Created), 2);
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let server = MockServer::start().await;
    mount_standards_site(&server).await;
    let root = TempDir::new().unwrap();
    let out = root.path().join("rules");

    let report = pipeline::run(&harvest_config(&server, &out), true)
        .await
        .unwrap();

    assert!(report.dry_run);
    assert_eq!(report.count(SyncOutcome::Created), 3);
    assert!(!out.exists());
}

#[tokio::test]
async fn test_failing_seed_produces_no_rules() {
    let server = MockServer::start().await;
    mount_status(&server, "/docs/standards", 503).await;
    let out = TempDir::new().unwrap();

    let report = pipeline::run(&harvest_config(&server, out.path()), false)
        .await
        .unwrap();

    assert_eq!(report.pages_crawled, 1);
    assert_eq!(report.rules_extracted, 0);
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_colliding_titles_across_pages() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/docs/standards",
        r#"<a href="/docs/standards/a">A</a><a href="/docs/standards/b">B</a>"#,
    )
    .await;
    mount_page(
        &server,
        "/docs/standards/a",
        "<h2>Line length</h2><p>Keep lines under 80 characters.</p>",
    )
    .await;
    mount_page(
        &server,
        "/docs/standards/b",
        "<h2>Line length!</h2><p>Wrap long arrays.</p>",
    )
    .await;
    let out = TempDir::new().unwrap();

    let report = pipeline::run(&harvest_config(&server, out.path()), false)
        .await
        .unwrap();

    assert_eq!(report.rules_extracted, 2);
    assert_eq!(
        report.collisions,
        vec![(
            "line-length".to_string(),
            vec!["Line length".to_string(), "Line length!".to_string()]
        )]
    );

    let on_disk = fs::read_to_string(out.path().join("line-length.mdc")).unwrap();
    assert!(on_disk.contains("Wrap long arrays."));
}

#[tokio::test]
async fn test_fallback_description_from_list() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/docs/standards",
        "<h2>Naming</h2><ul><li>Functions use snake_case.</li></ul><code>my_function()</code>",
    )
    .await;
    let out = TempDir::new().unwrap();

    pipeline::run(&harvest_config(&server, out.path()), false)
        .await
        .unwrap();

    let naming = fs::read_to_string(out.path().join("naming.mdc")).unwrap();
    assert!(naming.ends_with("Functions use snake_case.: my_function()\n"));
}
