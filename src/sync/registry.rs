use std::collections::BTreeMap;

/// Tracks which titles produced which slug during one run
///
/// Slug derivation is lossy, so two different titles can land on the same
/// file. The registry records every distinct title per slug; the file on disk
/// still holds whichever rule was written last.
#[derive(Debug, Clone, Default)]
pub struct SlugRegistry {
    titles: BTreeMap<String, Vec<String>>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `title` under `slug`
    ///
    /// # Returns
    ///
    /// `true` if a different title already claimed this slug.
    pub fn record(&mut self, slug: &str, title: &str) -> bool {
        let titles = self.titles.entry(slug.to_string()).or_default();

        if titles.iter().any(|t| t == title) {
            return false;
        }

        titles.push(title.to_string());
        if titles.len() > 1 {
            tracing::warn!(
                "Slug collision on '{}': titles {:?} map to the same file, keeping the last",
                slug,
                titles
            );
            return true;
        }

        false
    }

    /// Titles seen for `slug`, in the order they were first recorded
    pub fn titles(&self, slug: &str) -> &[String] {
        self.titles.get(slug).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Slugs claimed by more than one title
    pub fn collisions(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.titles
            .iter()
            .filter(|(_, titles)| titles.len() > 1)
            .map(|(slug, titles)| (slug.as_str(), titles.as_slice()))
    }

    pub fn collision_count(&self) -> usize {
        self.collisions().count()
    }
}
