//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester:
//! - Building the HTTP client once per run
//! - GET requests for page content
//! - Error classification into recoverable fetch outcomes
//!
//! There are no retries. A failed page contributes nothing and the run
//! moves on.

use crate::config::CrawlConfig;
use reqwest::Client;
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, body read failure)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds the HTTP client used for every request of a run
///
/// No custom headers are sent. A timeout is only set when the
/// configuration asks for one; otherwise the client default applies.
pub fn build_http_client(config: &CrawlConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().gzip(true).brotli(true);

    if let Some(secs) = config.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Fetches a URL and classifies the outcome
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx | Success |
/// | Any other status | HttpError |
/// | Timeout | NetworkError |
/// | Connection refused | NetworkError |
/// | Body read failure | NetworkError |
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if !status.is_success() {
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success {
                    final_url,
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchResult::NetworkError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            if e.is_timeout() {
                FetchResult::NetworkError {
                    error: "Request timeout".to_string(),
                }
            } else if e.is_connect() {
                FetchResult::NetworkError {
                    error: "Connection refused".to_string(),
                }
            } else {
                FetchResult::NetworkError {
                    error: e.to_string(),
                }
            }
        }
    }
}

/// Fetches a page body, logging and swallowing any failure
///
/// Both the crawler and the extractor treat a failed page as empty, so the
/// error report lives here.
pub async fn fetch_page(client: &Client, url: &str) -> Option<String> {
    match fetch_url(client, url).await {
        FetchResult::Success {
            final_url,
            status_code,
            body,
        } => {
            tracing::debug!(
                "Fetched {} (status {}, final URL {})",
                url,
                status_code,
                final_url
            );
            Some(body)
        }
        FetchResult::HttpError { status_code } => {
            tracing::warn!("Error fetching {}: HTTP {}", url, status_code);
            None
        }
        FetchResult::NetworkError { error } => {
            tracing::warn!("Error fetching {}: {}", url, error);
            None
        }
    }
}
