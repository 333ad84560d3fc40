//! End-to-end harvest run
//!
//! The three stages run strictly one after another: the crawl finishes
//! before any page is mined for rules, and every rule is extracted before
//! the first file is touched.

use crate::config::Config;
use crate::crawler::Crawler;
use crate::extract::{Rule, RuleExtractor};
use crate::output::RunReport;
use crate::sync::RuleWriter;
use crate::HarvestError;
use std::collections::BTreeSet;
use url::Url;

/// Runs crawl, extraction and file sync for one configuration
///
/// With `dry_run` set, files are compared but never written and the output
/// directory is not created.
///
/// # Returns
///
/// * `Ok(RunReport)` - The run finished; individual fetch failures are only logged
/// * `Err(HarvestError)` - Setup failed or the filesystem returned an error
pub async fn run(config: &Config, dry_run: bool) -> Result<RunReport, HarvestError> {
    let (crawler, seed) = Crawler::from_config(&config.crawler)?;
    tracing::info!(
        "Crawling {} within {}{}",
        seed,
        crawler.scope().host(),
        crawler.scope().prefix()
    );

    let pages = crawler.crawl(&seed).await;
    tracing::info!("Found {} pages to process.", pages.len());

    let extractor = RuleExtractor::new(crawler.client().clone(), config.extractor.clone());
    let mut report = RunReport {
        pages_crawled: pages.len(),
        dry_run,
        ..RunReport::default()
    };
    let rules = extract_all(&extractor, &pages, &mut report).await;

    let mut writer = RuleWriter::from_config(&config.output);
    sync_all(&mut writer, &rules, dry_run, &mut report)?;

    Ok(report)
}

/// Extracts rules from every page, flattened in page order
pub async fn extract_all(
    extractor: &RuleExtractor,
    pages: &BTreeSet<Url>,
    report: &mut RunReport,
) -> Vec<Rule> {
    let mut all_rules = Vec::new();

    for page in pages {
        let rules = extractor.extract_rules(page).await;
        if !rules.is_empty() {
            report.pages_with_rules += 1;
        }
        all_rules.extend(rules);
    }

    report.rules_extracted = all_rules.len();
    all_rules
}

/// Syncs every rule to disk (or only plans it in a dry run)
///
/// The first filesystem error aborts the run.
pub fn sync_all(
    writer: &mut RuleWriter,
    rules: &[Rule],
    dry_run: bool,
    report: &mut RunReport,
) -> Result<(), HarvestError> {
    if !dry_run {
        writer.ensure_directory()?;
    }

    for rule in rules {
        let outcome = if dry_run {
            writer.plan(rule)?
        } else {
            writer.sync(rule)?
        };
        report.record_outcome(outcome);
    }

    report.record_collisions(writer.registry());
    Ok(())
}
