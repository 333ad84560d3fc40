//! Crawl loop
//!
//! A worklist traversal over two owned sets: the frontier of pages still to
//! fetch and the pages already visited. The frontier is a `BTreeSet`, so the
//! next page is always the smallest URL and runs are reproducible.

use crate::config::CrawlConfig;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::parser::extract_links;
use crate::url::{normalize_url, Scope};
use crate::{ConfigError, HarvestError};
use reqwest::Client;
use std::collections::BTreeSet;
use url::Url;

/// Discovers every in-scope page reachable from a seed
pub struct Crawler {
    client: Client,
    scope: Scope,
}

impl Crawler {
    /// Creates a crawler bound to `scope`
    pub fn new(client: Client, scope: Scope) -> Self {
        Self { client, scope }
    }

    /// Builds the client and scope from configuration
    ///
    /// # Returns
    ///
    /// * `Ok((Crawler, Url))` - The crawler and its normalized seed
    /// * `Err(HarvestError)` - The seed is not a usable URL, falls outside
    ///   the scope once normalized, or the client failed to build
    pub fn from_config(config: &CrawlConfig) -> Result<(Self, Url), HarvestError> {
        let seed = normalize_url(&config.seed_url)?;
        let scope = Scope::new(&seed, &config.scope_prefix)?;
        if !scope.contains(&seed) {
            return Err(ConfigError::Validation(format!(
                "Seed URL '{}' is outside scope prefix '{}'",
                seed,
                scope.prefix()
            ))
            .into());
        }
        let client = build_http_client(config)?;
        Ok((Self::new(client, scope), seed))
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Crawls from `seed` until the frontier is empty
    ///
    /// Every page is fetched at most once. A page that fails to fetch is
    /// still marked visited and contributes no links; it is never retried.
    ///
    /// # Returns
    ///
    /// The visited set, which includes the seed.
    pub async fn crawl(&self, seed: &Url) -> BTreeSet<Url> {
        let mut frontier = BTreeSet::from([seed.clone()]);
        let mut visited = BTreeSet::new();

        while let Some(current) = frontier.pop_first() {
            if visited.contains(&current) {
                continue;
            }

            tracing::info!("Visiting: {}", current);
            let links = self.discover_links(&current).await;
            visited.insert(current);

            for link in links {
                if !visited.contains(&link) {
                    frontier.insert(link);
                }
            }
        }

        tracing::info!("Crawl complete: {} pages in scope", visited.len());
        visited
    }

    /// Fetches one page and returns its in-scope links
    async fn discover_links(&self, page: &Url) -> Vec<Url> {
        let body = match fetch_page(&self.client, page.as_str()).await {
            Some(body) => body,
            None => return Vec::new(),
        };

        let mut links = Vec::new();
        for link in extract_links(&body, page) {
            let normalized = match normalize_url(&link) {
                Ok(n) => n,
                Err(e) => {
                    tracing::debug!("Failed to normalize URL {}: {}", link, e);
                    continue;
                }
            };

            if self.scope.contains(&normalized) {
                links.push(normalized);
            } else {
                tracing::debug!("Out of scope: {}", normalized);
            }
        }

        tracing::debug!("{} in-scope links on {}", links.len(), page);
        links
    }
}
