use crate::config::types::{Config, CrawlConfig, ExtractorConfig, OutputConfig};
use crate::url::normalize_url;
use crate::ConfigError;
use url::Url;

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawl_config(&config.crawler)?;
    validate_extractor_config(&config.extractor)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the seed URL and scope prefix
///
/// The seed itself must be in scope, otherwise the crawl would return a
/// page outside the prefix. The check runs on the normalized seed, since
/// that is the URL the crawl starts from.
fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    let seed = Url::parse(&config.seed_url).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", config.seed_url, e))
    })?;

    if seed.scheme() != "http" && seed.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' must use HTTP or HTTPS",
            config.seed_url
        )));
    }

    if seed.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' has no host",
            config.seed_url
        )));
    }

    if !config.scope_prefix.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "scope_prefix must start with '/', got '{}'",
            config.scope_prefix
        )));
    }

    let seed = normalize_url(&config.seed_url).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", config.seed_url, e))
    })?;

    if !seed.path().starts_with(&config.scope_prefix) {
        return Err(ConfigError::Validation(format!(
            "Seed URL path '{}' is outside scope prefix '{}'",
            seed.path(),
            config.scope_prefix
        )));
    }

    if config.request_timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "request_timeout_secs must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates heading heuristics
fn validate_extractor_config(config: &ExtractorConfig) -> Result<(), ConfigError> {
    if config.boundary_headings.len() != 2 {
        return Err(ConfigError::Validation(format!(
            "boundary_headings must name exactly two heading levels, got {}",
            config.boundary_headings.len()
        )));
    }

    for tag in &config.boundary_headings {
        if !HEADING_TAGS.contains(&tag.as_str()) {
            return Err(ConfigError::Validation(format!(
                "boundary_headings entry '{}' is not one of h1-h6",
                tag
            )));
        }
    }

    if config.boundary_headings[0] == config.boundary_headings[1] {
        return Err(ConfigError::Validation(format!(
            "boundary_headings must be distinct, got '{}' twice",
            config.boundary_headings[0]
        )));
    }

    if config.example_placeholder.trim().is_empty() {
        return Err(ConfigError::Validation(
            "example_placeholder cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.is_empty() {
        return Err(ConfigError::Validation(
            "directory cannot be empty".to_string(),
        ));
    }

    if config.extension.is_empty() || !config.extension.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(ConfigError::Validation(format!(
            "extension must be non-empty and alphanumeric, got '{}'",
            config.extension
        )));
    }

    Ok(())
}
