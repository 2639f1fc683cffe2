//! Docs site: registry, shell chrome and per-page rendering.

use std::path::Path;
use std::sync::Arc;

use docshell_config::Config;
use docshell_nav::{
    CommunityLink, EditLink, NavGroup, NavigationShell, NavigationState, Page, Pagination,
    RegistryError, RouteRegistry, Section, build_sidebar,
};
use docshell_renderer::{DocsBackend, MarkdownRenderer, markdown_options};
use pulldown_cmark::Parser;
use serde::Serialize;

use crate::template::{PageData, render_page};

/// Stylesheet location referenced by every page.
pub const CSS_PATH: &str = "/assets/docshell.css";

/// Error building a [`DocsSite`].
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Route registry data is malformed.
    #[error("Invalid route registry: {0}")]
    Registry(#[from] RegistryError),
    /// No pages are configured.
    #[error("No pages configured: add [[sections]] with [[sections.pages]] to docshell.toml")]
    NoPages,
}

/// Navigation data of one page: everything the shell derives from the path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageNavigation {
    /// Current page lookup with previous/next pages.
    pub navigation: NavigationState,
    /// Sidebar groups with the active entry marked.
    pub sidebar: Vec<NavGroup>,
    /// Previous/next footer links.
    pub pagination: Pagination,
    /// "Edit this page" URL, when edit links are configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
}

/// Page rendered into the shell.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Complete HTML document.
    pub html: String,
    /// Title used for `<title>`: first H1 of the source, else the registry title.
    pub title: String,
    /// Warnings from code block processing.
    pub warnings: Vec<String>,
}

/// Docs site definition.
///
/// Immutable once built; pages are rendered against a [`NavigationShell`]
/// positioned at the page being displayed.
#[derive(Debug)]
pub struct DocsSite {
    title: String,
    home_label: String,
    logo: String,
    registry: Arc<RouteRegistry>,
    community: Vec<CommunityLink>,
    edit: Option<EditLink>,
    /// Edit links take the extension of the page's source file.
    edit_follows_source: bool,
}

impl DocsSite {
    /// Create a site over `registry` with default chrome and no edit links.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::NoPages` if the registry is empty.
    pub fn new(title: impl Into<String>, registry: RouteRegistry) -> Result<Self, SiteError> {
        if registry.is_empty() {
            return Err(SiteError::NoPages);
        }
        Ok(Self {
            title: title.into(),
            home_label: "Documentation homepage".to_owned(),
            logo: "📦".to_owned(),
            registry: Arc::new(registry),
            community: Vec::new(),
            edit: None,
            edit_follows_source: false,
        })
    }

    /// Build the site from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Registry` when the configured sections violate
    /// registry invariants, `SiteError::NoPages` when none are configured.
    pub fn from_config(config: &Config) -> Result<Self, SiteError> {
        let sections = config
            .sections
            .iter()
            .map(|section| {
                let pages = section
                    .pages
                    .iter()
                    .map(|page| Page::new(page.slug.clone(), page.title.clone()))
                    .collect();
                Section::new(section.label.clone(), pages)
            })
            .collect();
        let registry = RouteRegistry::new(sections)?;

        let edit = config.edit.as_ref().map(|edit| {
            let link = EditLink::new(edit.repo.clone())
                .with_host(edit.host.clone())
                .with_branch(edit.branch.clone());
            match config.edit_extension() {
                Some(extension) => link.with_extension(extension),
                None => link,
            }
        });

        let community = config
            .community
            .iter()
            .map(|link| CommunityLink {
                title: link.title.clone(),
                href: link.href.clone(),
            })
            .collect();

        let mut site = Self::new(config.site.title.clone(), registry)?
            .with_community(community)
            .with_chrome(config.site.home_label.clone(), config.site.logo.clone());
        site.edit = edit;
        site.edit_follows_source = config
            .edit
            .as_ref()
            .is_some_and(|edit| edit.extension.is_none());

        tracing::debug!(
            pages = site.registry.len(),
            sections = site.registry.sections().len(),
            edit_links = site.edit.is_some(),
            "Docs site configured"
        );
        Ok(site)
    }

    /// Set the accessible home label and visible logo.
    #[must_use]
    pub fn with_chrome(mut self, home_label: impl Into<String>, logo: impl Into<String>) -> Self {
        self.home_label = home_label.into();
        self.logo = logo.into();
        self
    }

    /// Set the community links listed after the registry sections.
    #[must_use]
    pub fn with_community(mut self, community: Vec<CommunityLink>) -> Self {
        self.community = community;
        self
    }

    /// Enable "Edit this page" links.
    #[must_use]
    pub fn with_edit_link(mut self, edit: EditLink) -> Self {
        self.edit = Some(edit);
        self
    }

    /// Point edit links at the extension of the file a page was read from,
    /// instead of the extension of the [`EditLink`].
    #[must_use]
    pub fn with_edit_extension_from_source(mut self) -> Self {
        self.edit_follows_source = true;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// Create a navigation shell positioned at `current_path`.
    #[must_use]
    pub fn shell(&self, current_path: &str) -> NavigationShell {
        NavigationShell::new(Arc::clone(&self.registry), current_path)
    }

    /// Derive sidebar, pagination and edit link for the shell's page.
    #[must_use]
    pub fn page_navigation(&self, shell: &NavigationShell) -> PageNavigation {
        self.navigation_for_source(shell, None)
    }

    /// Like [`page_navigation`](Self::page_navigation), with the edit link
    /// following `source` when the site is set up that way.
    fn navigation_for_source(
        &self,
        shell: &NavigationShell,
        source: Option<&Path>,
    ) -> PageNavigation {
        let navigation = shell.navigation().clone();
        let sidebar = build_sidebar(&self.registry, &navigation.current_slug, &self.community);
        let pagination = Pagination::from_state(&navigation);
        let source_extension = source
            .filter(|_| self.edit_follows_source)
            .and_then(Path::extension)
            .and_then(|ext| ext.to_str());
        let edit_url = self
            .edit
            .as_ref()
            .filter(|_| navigation.is_found())
            .map(|edit| match source_extension {
                Some(extension) => edit
                    .clone()
                    .with_extension(extension)
                    .build(&navigation.current_slug),
                None => edit.build(&navigation.current_slug),
            });

        PageNavigation {
            navigation,
            sidebar,
            pagination,
            edit_url,
        }
    }

    /// Render page markup into the docs shell.
    ///
    /// Relative source links resolve against the directory of the current
    /// page. The page title is the first H1 of the source when present.
    #[must_use]
    pub fn render_page(&self, shell: &NavigationShell, markdown: &str) -> RenderedPage {
        self.render_with_navigation(shell, markdown, self.page_navigation(shell))
    }

    /// Render a page read from `source`.
    ///
    /// Same as [`render_page`](Self::render_page), except that the edit link
    /// can point at the file actually read (e.g. `setup.md` found as a
    /// fallback for `setup.mdx`).
    #[must_use]
    pub fn render_source(
        &self,
        shell: &NavigationShell,
        markdown: &str,
        source: &Path,
    ) -> RenderedPage {
        let nav = self.navigation_for_source(shell, Some(source));
        self.render_with_navigation(shell, markdown, nav)
    }

    fn render_with_navigation(
        &self,
        shell: &NavigationShell,
        markdown: &str,
        nav: PageNavigation,
    ) -> RenderedPage {
        let slug = nav.navigation.current_slug.as_str();
        let base_path = slug.rsplit_once('/').map_or("", |(dir, _)| dir);

        let content = MarkdownRenderer::<DocsBackend>::new()
            .with_title_extraction()
            .with_base_path(base_path)
            .render(Parser::new_ext(markdown, markdown_options()));

        let title = content
            .title
            .or_else(|| self.registry.get(slug).map(|page| page.title.clone()))
            .unwrap_or_else(|| self.title.clone());

        let html = render_page(&PageData {
            site_title: &self.title,
            home_label: &self.home_label,
            logo: &self.logo,
            title: &title,
            html_content: &content.html,
            toc: &content.toc,
            sidebar: &nav.sidebar,
            pagination: &nav.pagination,
            edit_url: nav.edit_url.as_deref(),
            menu: shell.menu(),
            css_path: CSS_PATH,
        });

        tracing::debug!(slug, title = %title, "Rendered page");

        RenderedPage {
            html,
            title,
            warnings: content.warnings,
        }
    }
}
