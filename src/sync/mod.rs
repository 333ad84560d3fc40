//! Rule file synchronization
//!
//! Each rule becomes one file named after its title slug. A file is written
//! only when it is missing or its content differs from the rendered rule, so
//! re-running over unchanged pages leaves the directory untouched.

mod registry;
mod slug;
mod template;

pub use registry::SlugRegistry;
pub use slug::{sanitize_filename, slugify};
pub use template::render_rule;

use crate::config::OutputConfig;
use crate::extract::Rule;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What syncing one rule did to its file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncOutcome {
    /// The file did not exist and was written
    Created,
    /// The file existed with different content and was overwritten
    Updated,
    /// The file already held exactly the rendered content
    Unchanged,
}

impl fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncOutcome::Created => write!(f, "created"),
            SyncOutcome::Updated => write!(f, "updated"),
            SyncOutcome::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Writes rule files into one directory
#[derive(Debug)]
pub struct RuleWriter {
    directory: PathBuf,
    extension: String,
    registry: SlugRegistry,
}

impl RuleWriter {
    pub fn new(directory: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            extension: extension.into(),
            registry: SlugRegistry::new(),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(&config.directory, &config.extension)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn registry(&self) -> &SlugRegistry {
        &self.registry
    }

    /// Creates the output directory if it does not exist yet
    pub fn ensure_directory(&self) -> io::Result<()> {
        fs::create_dir_all(&self.directory)
    }

    /// Path of the file a title maps to
    pub fn path_for(&self, title: &str) -> PathBuf {
        self.directory
            .join(format!("{}.{}", slugify(title), self.extension))
    }

    /// Writes `rule` if its file is missing or stale
    ///
    /// Reads the existing file at most once and writes at most once. Any
    /// filesystem error other than a missing file is returned to the caller.
    pub fn sync(&mut self, rule: &Rule) -> io::Result<SyncOutcome> {
        let (path, content, outcome) = self.prepare(rule)?;
        let name = display_name(&path);

        match outcome {
            SyncOutcome::Created => {
                tracing::info!("Creating {}...", name);
                fs::write(&path, content)?;
            }
            SyncOutcome::Updated => {
                tracing::info!("Updating {}...", name);
                fs::write(&path, content)?;
            }
            SyncOutcome::Unchanged => {
                tracing::info!("{} is up to date.", name);
            }
        }

        Ok(outcome)
    }

    /// Reports what `sync` would do without writing anything
    pub fn plan(&mut self, rule: &Rule) -> io::Result<SyncOutcome> {
        let (path, _, outcome) = self.prepare(rule)?;
        tracing::info!("{} would be {}", display_name(&path), outcome);
        Ok(outcome)
    }

    fn prepare(&mut self, rule: &Rule) -> io::Result<(PathBuf, String, SyncOutcome)> {
        let slug = slugify(&rule.title);
        self.registry.record(&slug, &rule.title);

        let path = self.path_for(&rule.title);
        let content = render_rule(rule);
        let outcome = compare_with_disk(&path, &content)?;
        Ok((path, content, outcome))
    }
}

/// Compares rendered content with whatever is on disk at `path`
fn compare_with_disk(path: &Path, content: &str) -> io::Result<SyncOutcome> {
    match fs::read(path) {
        Ok(existing) if existing == content.as_bytes() => Ok(SyncOutcome::Unchanged),
        Ok(_) => Ok(SyncOutcome::Updated),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(SyncOutcome::Created),
        Err(e) => Err(e),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
