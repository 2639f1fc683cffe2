//! Page source lookup.

use std::path::{Path, PathBuf};

/// Extension tried when the primary source file is missing.
const FALLBACK_EXTENSION: &str = "md";

/// Maps page slugs to markup files under the source directory.
///
/// A page `guides/intro` with extension `mdx` is read from
/// `<source_dir>/guides/intro.mdx`, falling back to `guides/intro.md`.
#[derive(Debug, Clone)]
pub struct SourceResolver {
    source_dir: PathBuf,
    extension: String,
}

impl SourceResolver {
    /// Create a resolver for `source_dir` with the primary `extension`.
    pub fn new(source_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            source_dir: source_dir.into(),
            extension: extension.into(),
        }
    }

    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Path the page source is expected at with the primary extension.
    #[must_use]
    pub fn primary_path(&self, slug: &str) -> PathBuf {
        self.source_dir.join(format!("{slug}.{}", self.extension))
    }

    /// Find the source file of a page, if any.
    #[must_use]
    pub fn resolve(&self, slug: &str) -> Option<PathBuf> {
        let primary = self.primary_path(slug);
        if primary.is_file() {
            return Some(primary);
        }
        if self.extension == FALLBACK_EXTENSION {
            return None;
        }
        let fallback = self.source_dir.join(format!("{slug}.{FALLBACK_EXTENSION}"));
        fallback.is_file().then_some(fallback)
    }
}
