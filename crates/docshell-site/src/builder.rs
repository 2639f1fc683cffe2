//! Static site builder.
//!
//! Writes one `<slug>/index.html` per registered page, a root `index.html`
//! redirecting to the first page and the shared stylesheet.

use std::path::{Path, PathBuf};

use docshell_config::Config;

use crate::site::{DocsSite, SiteError};
use crate::source::SourceResolver;
use crate::template::render_redirect;

/// Stylesheet shipped with every build.
const STYLESHEET: &str = include_str!("../assets/docshell.css");

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A registered page has no source file.
    #[error("Source for page '{slug}' not found (expected {})", .path.display())]
    SourceNotFound {
        /// Slug of the page.
        slug: String,
        /// Path tried with the primary extension.
        path: PathBuf,
    },
    #[error(transparent)]
    Site(#[from] SiteError),
}

/// Registered page without a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingSource {
    pub slug: String,
    /// Path tried with the primary extension.
    pub path: PathBuf,
}

/// Summary of a finished build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Number of pages written.
    pub pages: usize,
    /// Rendering warnings, prefixed with the page slug.
    pub warnings: Vec<String>,
    pub output_dir: PathBuf,
}

/// Builds a static documentation site from page sources.
#[derive(Debug)]
pub struct StaticSiteBuilder {
    site: DocsSite,
    sources: SourceResolver,
    output_dir: PathBuf,
}

impl StaticSiteBuilder {
    pub fn new(site: DocsSite, sources: SourceResolver, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            site,
            sources,
            output_dir: output_dir.into(),
        }
    }

    /// Create a builder from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::Site` when the configured registry is invalid.
    pub fn from_config(config: &Config) -> Result<Self, BuildError> {
        let site = DocsSite::from_config(config)?;
        let docs = &config.docs_resolved;
        Ok(Self::new(
            site,
            SourceResolver::new(&docs.source_dir, &docs.extension),
            &docs.output_dir,
        ))
    }

    #[must_use]
    pub fn site(&self) -> &DocsSite {
        &self.site
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// List registered pages whose source file is missing.
    #[must_use]
    pub fn missing_sources(&self) -> Vec<MissingSource> {
        self.site
            .registry()
            .flattened()
            .iter()
            .filter(|page| self.sources.resolve(&page.slug).is_none())
            .map(|page| MissingSource {
                slug: page.slug.clone(),
                path: self.sources.primary_path(&page.slug),
            })
            .collect()
    }

    /// Render every page into the output directory.
    ///
    /// All sources are located before anything is written, so a missing
    /// source leaves the output directory untouched.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::SourceNotFound` for the first page without a
    /// source and `BuildError::Io` when reading or writing fails.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let pages = self.site.registry().flattened();
        let sources = pages
            .iter()
            .map(|page| {
                self.sources
                    .resolve(&page.slug)
                    .ok_or_else(|| BuildError::SourceNotFound {
                        slug: page.slug.clone(),
                        path: self.sources.primary_path(&page.slug),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let assets_dir = self.output_dir.join("assets");
        std::fs::create_dir_all(&assets_dir)?;
        std::fs::write(assets_dir.join("docshell.css"), STYLESHEET)?;

        let mut shell = self.site.shell("/");
        let mut warnings = Vec::new();

        for (page, source_path) in pages.iter().zip(&sources) {
            let markdown = std::fs::read_to_string(source_path)?;
            shell.navigate(page.href());
            let rendered = self.site.render_source(&shell, &markdown, source_path);

            for warning in rendered.warnings {
                tracing::warn!(slug = %page.slug, "{warning}");
                warnings.push(format!("{}: {warning}", page.slug));
            }

            let page_dir = self.output_dir.join(&page.slug);
            std::fs::create_dir_all(&page_dir)?;
            std::fs::write(page_dir.join("index.html"), rendered.html)?;
            tracing::debug!(slug = %page.slug, source = %source_path.display(), "Wrote page");
        }

        if let Some(first) = self.site.registry().first() {
            let redirect = render_redirect(&first.href(), self.site.title());
            std::fs::write(self.output_dir.join("index.html"), redirect)?;
        }

        tracing::info!(
            pages = pages.len(),
            output = %self.output_dir.display(),
            "Static site built"
        );

        Ok(BuildReport {
            pages: pages.len(),
            warnings,
            output_dir: self.output_dir.clone(),
        })
    }
}
