use crate::config::DEFAULT_EXTENSION;

/// Derives the filesystem-safe slug for a rule title
///
/// Lowercases, trims, turns every whitespace run into one hyphen, then drops
/// everything that is not an ASCII lowercase letter, digit, or hyphen.
///
/// # Examples
///
/// ```
/// use mdc_harvest::sync::slugify;
///
/// assert_eq!(slugify("  Casting  "), "casting");
/// assert_eq!(slugify("Use of t() in JS"), "use-of-t-in-js");
/// ```
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Returns the rule file name for a title using the default extension
pub fn sanitize_filename(title: &str) -> String {
    format!("{}.{}", slugify(title), DEFAULT_EXTENSION)
}
