//! Flattened view of the elements that follow a heading

use scraper::ElementRef;

/// How the sibling walk treats an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// A heading at one of the boundary levels
    Boundary,
    /// `<p>`
    Paragraph,
    /// `<pre>` or `<code>`
    Code,
    /// Anything else
    Other,
}

/// One sibling element reduced to its kind and raw text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
    pub kind: ElementKind,
    pub text: String,
}

impl PageElement {
    pub fn new(kind: ElementKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Classifies an element by tag name
pub fn classify(name: &str, boundaries: &[String]) -> ElementKind {
    if boundaries.iter().any(|b| b == name) {
        return ElementKind::Boundary;
    }

    match name {
        "p" => ElementKind::Paragraph,
        "pre" | "code" => ElementKind::Code,
        _ => ElementKind::Other,
    }
}

/// Returns the element siblings after `heading`, in document order
///
/// Text nodes and comments between elements are skipped.
pub fn following_siblings(heading: ElementRef<'_>, boundaries: &[String]) -> Vec<PageElement> {
    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .map(|el| {
            PageElement::new(
                classify(el.value().name(), boundaries),
                el.text().collect::<String>(),
            )
        })
        .collect()
}

/// Finds the first element after `heading` in document order
///
/// The heading's first child element comes first, so an anchor wrapped
/// around the heading text wins over the heading's siblings. When the
/// heading is the last element of its container the search continues after
/// the container.
pub fn nearest_following_element(heading: ElementRef<'_>) -> Option<ElementRef<'_>> {
    if let Some(child) = heading.descendants().skip(1).find_map(ElementRef::wrap) {
        return Some(child);
    }

    let mut node = *heading;

    loop {
        if let Some(element) = node.next_siblings().find_map(ElementRef::wrap) {
            return Some(element);
        }
        node = node.parent()?;
    }
}

/// Trims and collapses every whitespace run to one space
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
