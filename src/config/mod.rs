//! Configuration module for mdc-harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every field has a built-in default, so the binary runs without any file.
//!
//! # Example
//!
//! ```no_run
//! use mdc_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Crawling from: {}", config.crawler.seed_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlConfig, ExtractorConfig, OutputConfig, DEFAULT_EXTENSION, DEFAULT_PLACEHOLDER,
    DEFAULT_SCOPE_PREFIX, DEFAULT_SEED_URL,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
