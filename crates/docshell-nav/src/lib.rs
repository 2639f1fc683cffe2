//! Route registry, pagination and navigation shell state for docshell.
//!
//! This crate provides:
//! - [`RouteRegistry`]: validated catalog of pages grouped into sections
//! - [`resolve_current_page`]: previous/next lookup for the displayed page
//! - [`EditLink`]: "edit this page" URL template
//! - [`is_external_link`]: internal vs external link classification
//! - [`build_sidebar`]: sidebar tree with the active entry marked
//! - [`NavigationShell`]: menu state machine tied to navigation events
//!
//! # Quick Start
//!
//! ```
//! use docshell_nav::{EditLink, Page, RouteRegistry, Section, resolve_current_page};
//!
//! let registry = RouteRegistry::new(vec![Section::new(
//!     "Start",
//!     vec![Page::new("intro", "Introduction"), Page::new("setup", "Setup")],
//! )])
//! .unwrap();
//!
//! let state = resolve_current_page("/intro", &registry);
//! assert!(state.previous.is_none());
//! assert_eq!(state.next.unwrap().slug, "setup");
//!
//! let edit = EditLink::new("org/repo");
//! assert_eq!(
//!     edit.build("/intro"),
//!     "https://github.com/org/repo/edit/main/intro.mdx"
//! );
//! ```

mod link;
mod menu;
mod navigator;
mod registry;
mod shell;
mod sidebar;

pub use link::{
    DEFAULT_EDIT_BRANCH, DEFAULT_EDIT_EXTENSION, DEFAULT_EDIT_HOST, EditLink, build_edit_link,
    is_external_link,
};
pub use menu::{MenuEvent, MenuState};
pub use navigator::{NavigationState, current_slug, resolve_current_page};
pub use registry::{Page, RegistryError, RouteRegistry, Section};
pub use shell::NavigationShell;
pub use sidebar::{
    COMMUNITY_LABEL, CommunityLink, NavGroup, NavItem, Pagination, PaginationLink, build_sidebar,
};
