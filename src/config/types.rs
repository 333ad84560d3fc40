use serde::Deserialize;

/// Seed page of the Drupal coding standards
pub const DEFAULT_SEED_URL: &str = "https://www.drupal.org/docs/develop/standards";

/// Path prefix every crawled page must live under
pub const DEFAULT_SCOPE_PREFIX: &str = "/docs/develop/standards";

/// Stand-in for rules without a code block
pub const DEFAULT_PLACEHOLDER: &str = "EXAMPLE_CODE_HERE";

/// Rule file extension (without the dot)
pub const DEFAULT_EXTENSION: &str = "mdc";

/// Main configuration structure for mdc-harvest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlConfig,
    #[serde(default)]
    pub extractor: ExtractorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawl scope configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// First page fetched; its host bounds the crawl
    #[serde(rename = "seed-url", default = "default_seed_url")]
    pub seed_url: String,

    /// Required leading path of every in-scope URL
    #[serde(rename = "scope-prefix", default = "default_scope_prefix")]
    pub scope_prefix: String,

    /// Per-request timeout; the HTTP client default applies when unset
    #[serde(rename = "request-timeout-secs", default)]
    pub request_timeout_secs: Option<u64>,
}

/// Heading heuristics for rule extraction
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractorConfig {
    /// The two heading levels that open (and close) a rule
    #[serde(rename = "boundary-headings", default = "default_boundary_headings")]
    pub boundary_headings: Vec<String>,

    /// Headings shorter than this (in characters) are not rules
    #[serde(rename = "min-title-length", default = "default_min_title_length")]
    pub min_title_length: usize,

    /// Headings containing this (case-insensitive) are not rules
    #[serde(
        rename = "excluded-title-substring",
        default = "default_excluded_title_substring"
    )]
    pub excluded_title_substring: String,

    /// Example text used when a rule has no code block
    #[serde(rename = "example-placeholder", default = "default_placeholder")]
    pub example_placeholder: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory the rule files are written to
    #[serde(default = "default_directory")]
    pub directory: String,

    /// Rule file extension (without the dot)
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            seed_url: default_seed_url(),
            scope_prefix: default_scope_prefix(),
            request_timeout_secs: None,
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            boundary_headings: default_boundary_headings(),
            min_title_length: default_min_title_length(),
            excluded_title_substring: default_excluded_title_substring(),
            example_placeholder: default_placeholder(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            extension: default_extension(),
        }
    }
}

fn default_seed_url() -> String {
    DEFAULT_SEED_URL.to_string()
}

fn default_scope_prefix() -> String {
    DEFAULT_SCOPE_PREFIX.to_string()
}

fn default_boundary_headings() -> Vec<String> {
    vec!["h2".to_string(), "h3".to_string()]
}

fn default_min_title_length() -> usize {
    3
}

fn default_excluded_title_substring() -> String {
    "example".to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_directory() -> String {
    ".".to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}
