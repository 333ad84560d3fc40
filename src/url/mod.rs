//! URL handling module for mdc-harvest
//!
//! This module provides link normalization, host extraction, and the crawl
//! scope check that keeps the crawler on one host under one path prefix.

mod normalize;

use crate::{UrlError, UrlResult};
use url::Url;

pub use normalize::normalize_url;

/// Extracts the lowercase host from a URL
///
/// # Examples
///
/// ```
/// use url::Url;
/// use mdc_harvest::url::extract_domain;
///
/// let url = Url::parse("https://WWW.Drupal.org/docs").unwrap();
/// assert_eq!(extract_domain(&url), Some("www.drupal.org".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// The set of pages a crawl may visit
///
/// A URL is in scope when its host and explicit port equal the seed's and
/// its path starts with the prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    host: String,
    port: Option<u16>,
    prefix: String,
}

impl Scope {
    /// Builds the scope for a crawl seeded at `seed`
    ///
    /// # Returns
    ///
    /// * `Ok(Scope)` - Scope bound to the seed's host
    /// * `Err(UrlError::MissingDomain)` - The seed has no host
    pub fn new(seed: &Url, prefix: &str) -> UrlResult<Self> {
        let host = extract_domain(seed).ok_or(UrlError::MissingDomain)?;
        Ok(Self {
            host,
            port: seed.port(),
            prefix: prefix.to_string(),
        })
    }

    /// Returns true if `url` lies inside this scope
    pub fn contains(&self, url: &Url) -> bool {
        extract_domain(url).as_deref() == Some(self.host.as_str())
            && url.port() == self.port
            && url.path().starts_with(&self.prefix)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}
