//! Sidebar tree and pagination links for the docs shell.
//!
//! The sidebar is a view over the [`RouteRegistry`] sections, followed by an
//! optional group of external community links.

use serde::{Deserialize, Serialize};

use crate::link::is_external_link;
use crate::navigator::NavigationState;
use crate::registry::{Page, RouteRegistry};

/// Label of the trailing group holding community links.
pub const COMMUNITY_LABEL: &str = "Community";

/// External link listed under the community group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityLink {
    /// Display title.
    pub title: String,
    /// Absolute URL.
    pub href: String,
}

/// One entry in a sidebar group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Link target (`/<slug>` for pages, absolute URL for external links).
    pub href: String,
    /// Whether this entry is the page being displayed.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub active: bool,
    /// Whether the link leaves the site.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
}

/// Labeled group of sidebar entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    /// Group heading.
    pub label: String,
    /// Entries in display order.
    pub items: Vec<NavItem>,
}

/// Previous or next page link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationLink {
    /// Page title.
    pub title: String,
    /// Link target (`/<slug>`).
    pub href: String,
}

/// Previous/next links for the page footer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Link to the preceding page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PaginationLink>,
    /// Link to the following page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PaginationLink>,
}

impl Pagination {
    /// Build pagination links from a navigation state.
    #[must_use]
    pub fn from_state(state: &NavigationState) -> Self {
        let link = |page: &Page| PaginationLink {
            title: page.title.clone(),
            href: page.href(),
        };
        Self {
            previous: state.previous.as_ref().map(link),
            next: state.next.as_ref().map(link),
        }
    }

    /// Whether neither link is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}

/// Build the sidebar tree.
///
/// Every registry section becomes a group; the entry whose slug equals
/// `current_slug` is marked active. Community links are appended as a final
/// group when any are given.
#[must_use]
pub fn build_sidebar(
    registry: &RouteRegistry,
    current_slug: &str,
    community: &[CommunityLink],
) -> Vec<NavGroup> {
    let mut groups: Vec<NavGroup> = registry
        .sections()
        .iter()
        .map(|section| NavGroup {
            label: section.label.clone(),
            items: section
                .pages
                .iter()
                .map(|page| NavItem {
                    title: page.title.clone(),
                    href: page.href(),
                    active: page.slug == current_slug,
                    external: false,
                })
                .collect(),
        })
        .collect();

    if !community.is_empty() {
        groups.push(NavGroup {
            label: COMMUNITY_LABEL.to_owned(),
            items: community
                .iter()
                .map(|link| NavItem {
                    title: link.title.clone(),
                    href: link.href.clone(),
                    active: false,
                    external: is_external_link(&link.href),
                })
                .collect(),
        });
    }

    groups
}
