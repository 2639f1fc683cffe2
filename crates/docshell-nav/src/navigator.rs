//! Current page resolution and pagination.

use serde::Serialize;

use crate::registry::{Page, RouteRegistry};

/// Navigation state derived for a single render.
///
/// Recomputed on every navigation event and never mutated in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    /// Slug derived from the current path.
    pub current_slug: String,
    /// Position in the flattened order, `None` if the slug is not registered.
    pub current_index: Option<usize>,
    /// Page before the current one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<Page>,
    /// Page after the current one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Page>,
}

impl NavigationState {
    /// Whether the current path matched a registered page.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.current_index.is_some()
    }

    /// Whether any pagination link exists.
    #[must_use]
    pub fn has_pagination(&self) -> bool {
        self.previous.is_some() || self.next.is_some()
    }

    /// Whether `slug` is the page being displayed.
    #[must_use]
    pub fn is_active(&self, slug: &str) -> bool {
        self.is_found() && self.current_slug == slug
    }
}

/// Convert a request path to a registry slug.
///
/// Strips one leading and one trailing slash: `/setup`, `/setup/` and `setup`
/// all resolve to `setup`.
#[must_use]
pub fn current_slug(current_path: &str) -> &str {
    let slug = current_path.strip_prefix('/').unwrap_or(current_path);
    slug.strip_suffix('/').unwrap_or(slug)
}

/// Resolve the current page and its neighbours in pagination order.
///
/// A path that matches no registered page yields a state with no current
/// index and neither a previous nor a next page. This never fails.
///
/// # Example
///
/// ```
/// use docshell_nav::{Page, RouteRegistry, Section, resolve_current_page};
///
/// let registry = RouteRegistry::new(vec![
///     Section::new("Start", vec![Page::new("intro", "Intro"), Page::new("setup", "Setup")]),
///     Section::new("API", vec![Page::new("api-ref", "API")]),
/// ])
/// .unwrap();
///
/// let state = resolve_current_page("/setup", &registry);
/// assert_eq!(state.previous.unwrap().slug, "intro");
/// assert_eq!(state.next.unwrap().slug, "api-ref");
/// ```
#[must_use]
pub fn resolve_current_page(current_path: &str, registry: &RouteRegistry) -> NavigationState {
    let slug = current_slug(current_path);
    let pages = registry.flattened();
    let current_index = registry.position(slug);

    let (previous, next) = match current_index {
        Some(i) => (
            i.checked_sub(1).and_then(|p| pages.get(p)).cloned(),
            pages.get(i + 1).cloned(),
        ),
        None => {
            tracing::debug!(path = %current_path, "Current path not in route registry");
            (None, None)
        }
    };

    NavigationState {
        current_slug: slug.to_owned(),
        current_index,
        previous,
        next,
    }
}
