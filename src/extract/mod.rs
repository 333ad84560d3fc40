//! Rule extraction from standards pages
//!
//! Every heading at one of the two boundary levels is a candidate rule. The
//! rule's description comes from the paragraphs after it and its example from
//! the first code block, both read up to the next boundary heading.

mod elements;
mod machine;

pub use elements::{classify, collapse_whitespace, ElementKind, PageElement};
pub use machine::{walk_section, SectionBody};

use crate::config::ExtractorConfig;
use crate::crawler::fetch_page;
use elements::{following_siblings, nearest_following_element};
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

/// One coding-standard entry mined from a heading and its trailing content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub title: String,
    pub description: String,
    pub example: String,
}

/// Fetches pages and turns them into rules
pub struct RuleExtractor {
    client: Client,
    config: ExtractorConfig,
}

impl RuleExtractor {
    pub fn new(client: Client, config: ExtractorConfig) -> Self {
        Self { client, config }
    }

    /// Fetches `page` and extracts its rules in heading order
    ///
    /// A page that fails to fetch yields no rules.
    pub async fn extract_rules(&self, page: &Url) -> Vec<Rule> {
        let html = match fetch_page(&self.client, page.as_str()).await {
            Some(html) => html,
            None => return Vec::new(),
        };

        let rules = parse_rules(&html, &self.config);
        if !rules.is_empty() {
            tracing::info!("Extracted {} rules from {}", rules.len(), page);
        }
        rules
    }
}

/// Returns true if a heading text qualifies as a rule title
///
/// Titles must have at least `min_title_length` characters and must not
/// contain the excluded substring, compared case-insensitively.
pub fn is_rule_title(title: &str, config: &ExtractorConfig) -> bool {
    if title.chars().count() < config.min_title_length {
        return false;
    }

    let excluded = config.excluded_title_substring.to_lowercase();
    excluded.is_empty() || !title.to_lowercase().contains(&excluded)
}

/// Extracts every rule from an HTML document
///
/// Headings are visited in document order, nested ones included. When a
/// section has no paragraphs the description falls back to the text of the
/// next element in document order, whatever its type.
///
/// # Example
///
/// ```
/// use mdc_harvest::config::ExtractorConfig;
/// use mdc_harvest::extract::parse_rules;
///
/// let html = "<h2>Casting</h2><p>Put a space between the (type) and the $variable in a cast.</p><pre>(int) $mynumber</pre>";
/// let rules = parse_rules(html, &ExtractorConfig::default());
/// assert_eq!(rules[0].title, "Casting");
/// assert_eq!(rules[0].example, "(int) $mynumber");
/// ```
pub fn parse_rules(html: &str, config: &ExtractorConfig) -> Vec<Rule> {
    let selector = match Selector::parse(&config.boundary_headings.join(", ")) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(
                "Invalid boundary headings {:?}: {:?}",
                config.boundary_headings,
                e
            );
            return Vec::new();
        }
    };

    let document = Html::parse_document(html);
    let mut rules = Vec::new();

    for heading in document.select(&selector) {
        let title = collapse_whitespace(&heading.text().collect::<String>());
        if !is_rule_title(&title, config) {
            tracing::debug!("Skipping heading {:?}", title);
            continue;
        }

        let body = walk_section(&following_siblings(heading, &config.boundary_headings));

        let description = if body.saw_paragraph {
            body.description()
        } else {
            nearest_following_element(heading)
                .map(|el| collapse_whitespace(&el.text().collect::<String>()))
                .unwrap_or_default()
        };

        let example = body
            .example
            .unwrap_or_else(|| config.example_placeholder.clone());

        rules.push(Rule {
            title,
            description,
            example,
        });
    }

    rules
}
