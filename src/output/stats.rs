//! Per-run statistics
//!
//! Counts are gathered while the pipeline runs and printed once at the end.

use crate::sync::{SlugRegistry, SyncOutcome};
use std::collections::HashMap;

/// Summary of one harvest run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Pages visited by the crawler, failed fetches included
    pub pages_crawled: usize,

    /// Pages that yielded at least one rule
    pub pages_with_rules: usize,

    /// Rules extracted across all pages
    pub rules_extracted: usize,

    /// File outcomes by kind
    pub outcomes: HashMap<SyncOutcome, usize>,

    /// Slugs claimed by more than one title, with the titles in order
    pub collisions: Vec<(String, Vec<String>)>,

    /// Whether files were only compared, not written
    pub dry_run: bool,
}

impl RunReport {
    pub fn record_outcome(&mut self, outcome: SyncOutcome) {
        *self.outcomes.entry(outcome).or_insert(0) += 1;
    }

    pub fn count(&self, outcome: SyncOutcome) -> usize {
        self.outcomes.get(&outcome).copied().unwrap_or(0)
    }

    /// Files that were (or in a dry run would be) written
    pub fn files_written(&self) -> usize {
        self.count(SyncOutcome::Created) + self.count(SyncOutcome::Updated)
    }

    /// Copies the collision list out of a writer's registry
    pub fn record_collisions(&mut self, registry: &SlugRegistry) {
        self.collisions = registry
            .collisions()
            .map(|(slug, titles)| (slug.to_string(), titles.to_vec()))
            .collect();
    }
}

/// Prints a run report to stdout in a formatted manner
pub fn print_report(report: &RunReport) {
    if report.dry_run {
        println!("=== Harvest Summary (dry run) ===\n");
    } else {
        println!("=== Harvest Summary ===\n");
    }

    println!("Pages:");
    println!("  Crawled: {}", report.pages_crawled);
    println!("  With rules: {}", report.pages_with_rules);
    println!("  Rules extracted: {}", report.rules_extracted);
    println!();

    println!("Files:");
    println!("  Created: {}", report.count(SyncOutcome::Created));
    println!("  Updated: {}", report.count(SyncOutcome::Updated));
    println!("  Up to date: {}", report.count(SyncOutcome::Unchanged));
    println!();

    if !report.collisions.is_empty() {
        println!("Slug Collisions ({}):", report.collisions.len());
        for (slug, titles) in &report.collisions {
            println!("  - {}: {}", slug, titles.join(" | "));
        }
        println!();
    }
}
