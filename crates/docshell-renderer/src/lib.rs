//! Markdown content renderer with a pluggable styled backend.
//!
//! This crate provides a generic [`MarkdownRenderer`] that turns a
//! `pulldown-cmark` event stream into HTML through the [`RenderBackend`] trait.
//!
//! # Architecture
//!
//! Every markup node maps to a [`NodeKind`]. The renderer decides *which*
//! node is being emitted, and the backend decides *how* it looks:
//! - [`DocsBackend`]: styled component mapping used by the docs site
//!
//! Two pieces of real logic live in the renderer itself:
//! - [`LinkTarget`]: internal links navigate in place, external links open a new tab
//! - [`CodeKind`]: code without a language annotation renders inline, annotated
//!   code renders as a block (optionally through a [`CodeBlockProcessor`])
//!
//! # Example
//!
//! ```
//! use pulldown_cmark::Parser;
//! use docshell_renderer::{DocsBackend, MarkdownRenderer};
//!
//! let markdown = "# Hello\n\nSee [the guide](/guides/intro).";
//! let result = MarkdownRenderer::<DocsBackend>::new()
//!     .with_title_extraction()
//!     .render(Parser::new(markdown));
//!
//! assert_eq!(result.title.as_deref(), Some("Hello"));
//! assert!(result.html.contains(r#"href="/guides/intro""#));
//! ```

mod backend;
mod code_block;
mod docs;
mod node;
mod renderer;
mod state;

pub use backend::RenderBackend;
pub use code_block::{CodeBlockProcessor, ProcessResult};
pub use docs::DocsBackend;
pub use node::{CodeKind, LinkTarget, NodeKind};
pub use renderer::{MarkdownRenderer, RenderResult, markdown_options};
pub use state::{TocEntry, escape_html, slugify};
