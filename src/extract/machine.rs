//! Sibling walk from a rule heading to the next boundary heading
//!
//! The walk is a two-state machine. While `Seeking`, paragraphs are
//! collected and the first non-empty code block is kept; the first
//! boundary heading moves it to `Stopped` and nothing after that is read.

use super::elements::{collapse_whitespace, ElementKind, PageElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    Seeking,
    Stopped,
}

/// What a heading's section contributed to its rule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionBody {
    /// Whether any paragraph was encountered, even an empty one
    pub saw_paragraph: bool,
    /// Non-empty paragraph texts, whitespace collapsed
    pub paragraphs: Vec<String>,
    /// First non-empty code block, trimmed
    pub example: Option<String>,
}

impl SectionBody {
    /// Paragraphs joined with single spaces
    pub fn description(&self) -> String {
        self.paragraphs.join(" ")
    }
}

/// Runs the walk over the elements that follow a heading
pub fn walk_section(elements: &[PageElement]) -> SectionBody {
    let mut state = WalkState::Seeking;
    let mut body = SectionBody::default();

    for element in elements {
        if state == WalkState::Stopped {
            break;
        }

        state = match element.kind {
            ElementKind::Boundary => WalkState::Stopped,
            ElementKind::Paragraph => {
                body.saw_paragraph = true;
                let text = collapse_whitespace(&element.text);
                if !text.is_empty() {
                    body.paragraphs.push(text);
                }
                WalkState::Seeking
            }
            ElementKind::Code => {
                let text = element.text.trim();
                if body.example.is_none() && !text.is_empty() {
                    body.example = Some(text.to_string());
                }
                WalkState::Seeking
            }
            ElementKind::Other => WalkState::Seeking,
        };
    }

    body
}
