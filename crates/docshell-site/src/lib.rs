//! Docs shell page rendering and static site building.
//!
//! This crate ties the route registry, navigation shell and content renderer
//! together:
//! - [`DocsSite`]: site definition, per-page navigation and rendering
//! - [`SourceResolver`]: slug to source file lookup
//! - [`StaticSiteBuilder`]: writes the static site to disk

mod builder;
mod site;
mod source;
mod template;

pub use builder::{BuildError, BuildReport, MissingSource, StaticSiteBuilder};
pub use site::{CSS_PATH, DocsSite, PageNavigation, RenderedPage, SiteError};
pub use source::SourceResolver;
