use crate::extract::Rule;

/// Renders the canonical rule file content
///
/// The trailing space after `globs:` is part of the format.
pub fn render_rule(rule: &Rule) -> String {
    format!(
        "---\ndescription: {description}\nglobs: \n---\n{description}: {example}\n",
        description = rule.description,
        example = rule.example,
    )
}
