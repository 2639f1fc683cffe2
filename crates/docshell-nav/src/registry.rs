//! Route registry.
//!
//! The registry is the static catalog of documentation pages. It keeps two
//! views over the same data:
//!
//! - [`RouteRegistry::sections`]: pages grouped under labeled sections, used
//!   to render the sidebar tree.
//! - [`RouteRegistry::flattened`]: every page in section order, then page
//!   order, used for previous/next pagination.
//!
//! Construction validates the data eagerly. A registry that exists is always
//! well-formed: slugs are non-empty, unique, and never carry a leading slash.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single documentation page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// URL path segment without leading slash (e.g., "intro", "guides/setup").
    pub slug: String,
    /// Display title.
    pub title: String,
}

impl Page {
    /// Create a new page.
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
        }
    }

    /// Site-relative link target for this page (`/<slug>`).
    #[must_use]
    pub fn href(&self) -> String {
        format!("/{}", self.slug)
    }
}

/// A labeled group of pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading shown in the sidebar.
    pub label: String,
    /// Pages in display order.
    pub pages: Vec<Page>,
}

impl Section {
    /// Create a new section.
    pub fn new(label: impl Into<String>, pages: Vec<Page>) -> Self {
        Self {
            label: label.into(),
            pages,
        }
    }
}

/// Error returned when registry data is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Section label is empty.
    #[error("Section #{index} has an empty label")]
    EmptyLabel {
        /// Zero-based section position.
        index: usize,
    },
    /// Page slug is empty.
    #[error("Page #{index} in section '{section}' has an empty slug")]
    EmptySlug {
        /// Label of the owning section.
        section: String,
        /// Zero-based page position within the section.
        index: usize,
    },
    /// Page slug is not a normalized path segment.
    #[error("Invalid slug '{slug}': {reason}")]
    InvalidSlug {
        /// Offending slug.
        slug: String,
        /// Why the slug was rejected.
        reason: &'static str,
    },
    /// Page title is empty.
    #[error("Page '{slug}' has an empty title")]
    EmptyTitle {
        /// Slug of the page.
        slug: String,
    },
    /// Slug appears more than once.
    #[error("Duplicate slug '{slug}' in sections '{first}' and '{second}'")]
    DuplicateSlug {
        /// Duplicated slug.
        slug: String,
        /// Section holding the first occurrence.
        first: String,
        /// Section holding the second occurrence.
        second: String,
    },
}

/// Immutable catalog of documentation pages.
///
/// The flattened list is derived from the sections in a single pass at
/// construction, so its order is the section concatenation order.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    sections: Vec<Section>,
    flattened: Vec<Page>,
    slug_index: HashMap<String, usize>,
}

impl RouteRegistry {
    /// Build a registry from sections, validating every page.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] for empty labels, titles or slugs, slugs that
    /// are not normalized path segments, and duplicate slugs.
    pub fn new(sections: Vec<Section>) -> Result<Self, RegistryError> {
        let mut flattened = Vec::new();
        let mut slug_index = HashMap::new();
        let mut owners: HashMap<&str, &str> = HashMap::new();

        for (section_idx, section) in sections.iter().enumerate() {
            if section.label.trim().is_empty() {
                return Err(RegistryError::EmptyLabel { index: section_idx });
            }
            for (page_idx, page) in section.pages.iter().enumerate() {
                validate_slug(&section.label, page_idx, &page.slug)?;
                if page.title.trim().is_empty() {
                    return Err(RegistryError::EmptyTitle {
                        slug: page.slug.clone(),
                    });
                }
                if let Some(first) = owners.insert(&page.slug, &section.label) {
                    return Err(RegistryError::DuplicateSlug {
                        slug: page.slug.clone(),
                        first: first.to_owned(),
                        second: section.label.clone(),
                    });
                }
                slug_index.insert(page.slug.clone(), flattened.len());
                flattened.push(page.clone());
            }
        }

        tracing::debug!(
            sections = sections.len(),
            pages = flattened.len(),
            "Route registry built"
        );

        Ok(Self {
            sections,
            flattened,
            slug_index,
        })
    }

    /// Sections in display order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All pages in pagination order.
    #[must_use]
    pub fn flattened(&self) -> &[Page] {
        &self.flattened
    }

    /// Number of pages across all sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flattened.len()
    }

    /// Whether the registry holds no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flattened.is_empty()
    }

    /// Position of a slug in the flattened order.
    #[must_use]
    pub fn position(&self, slug: &str) -> Option<usize> {
        self.slug_index.get(slug).copied()
    }

    /// Look up a page by slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&Page> {
        self.position(slug).map(|i| &self.flattened[i])
    }

    /// First page in pagination order.
    #[must_use]
    pub fn first(&self) -> Option<&Page> {
        self.flattened.first()
    }
}

/// Reject slugs that would not round-trip through `/<slug>` URLs.
fn validate_slug(section: &str, index: usize, slug: &str) -> Result<(), RegistryError> {
    let invalid = |reason| RegistryError::InvalidSlug {
        slug: slug.to_owned(),
        reason,
    };

    if slug.is_empty() {
        return Err(RegistryError::EmptySlug {
            section: section.to_owned(),
            index,
        });
    }
    if slug.starts_with('/') || slug.ends_with('/') {
        return Err(invalid("must not start or end with '/'"));
    }
    if slug.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain whitespace"));
    }
    if slug.contains('#') || slug.contains('?') {
        return Err(invalid("must not contain '#' or '?'"));
    }
    if slug.split('/').any(|segment| segment.is_empty() || segment == "." || segment == "..") {
        return Err(invalid("must not contain empty, '.' or '..' segments"));
    }
    Ok(())
}
