//! Crawler module for page discovery
//!
//! This module contains the link crawler:
//! - HTTP fetching without retries
//! - HTML link extraction and resolution
//! - The scoped worklist crawl

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::Crawler;
pub use fetcher::{build_http_client, fetch_page, fetch_url, FetchResult};
pub use parser::extract_links;

