//! Render backend trait for node styling.
//!
//! The renderer walks the event stream and decides which [`NodeKind`] to
//! emit. The backend owns the markup of each kind, so the styled component
//! mapping lives in one place.

use std::borrow::Cow;
use std::fmt::Write;

use crate::node::{LinkTarget, NodeKind};
use crate::state::escape_html;

/// Backend trait for node rendering.
///
/// Only [`class`](Self::class) is required. The provided methods emit
/// semantic HTML with the class attached; override them when a kind needs
/// more structure than a single element (anchored headings, code blocks).
pub trait RenderBackend {
    /// Style class for a node kind, or `None` for an unstyled element.
    fn class(kind: NodeKind) -> Option<&'static str>;

    /// Render the opening tag of a node.
    ///
    /// # Arguments
    ///
    /// * `kind` - Node being opened
    /// * `attrs` - Pre-rendered extra attributes, each with a leading space
    /// * `out` - Output buffer to write to
    fn start_node(kind: NodeKind, attrs: &str, out: &mut String) {
        out.push('<');
        out.push_str(kind.element());
        if let Some(class) = Self::class(kind) {
            write!(out, r#" class="{class}""#).unwrap();
        }
        out.push_str(attrs);
        out.push('>');
    }

    /// Render the closing tag of a node. Void elements produce nothing.
    fn end_node(kind: NodeKind, out: &mut String) {
        if !kind.is_void() {
            write!(out, "</{}>", kind.element()).unwrap();
        }
    }

    /// Render a complete heading.
    ///
    /// # Arguments
    ///
    /// * `level` - Heading level (1-6)
    /// * `id` - Unique anchor id
    /// * `html` - Rendered inline content
    /// * `out` - Output buffer to write to
    fn heading(level: u8, id: &str, html: &str, out: &mut String) {
        let kind = NodeKind::Heading(level);
        Self::start_node(kind, &format!(r#" id="{id}""#), out);
        out.push_str(html);
        Self::end_node(kind, out);
    }

    /// Render the opening anchor of a link.
    fn link_start(href: &str, target: LinkTarget, out: &mut String) {
        let attrs = format!(r#" href="{}"{}"#, escape_html(href), target.attrs());
        Self::start_node(NodeKind::Link, &attrs, out);
    }

    /// Render code with the inline component.
    fn inline_code(code: &str, out: &mut String) {
        Self::start_node(NodeKind::Code, "", out);
        out.push_str(&escape_html(code));
        Self::end_node(NodeKind::Code, out);
    }

    /// Render an unannotated fenced block: inline code component inside `<pre>`.
    fn preformatted(code: &str, out: &mut String) {
        out.push_str("<pre>");
        Self::inline_code(code, out);
        out.push_str("</pre>");
    }

    /// Render code with the block component.
    ///
    /// # Arguments
    ///
    /// * `language` - Non-empty language annotation (e.g., "rust", "toml")
    /// * `content` - The code content
    /// * `out` - Output buffer to write to
    fn code_block(language: &str, content: &str, out: &mut String) {
        write!(
            out,
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            escape_html(language),
            escape_html(content)
        )
        .unwrap();
    }

    /// Render an image.
    ///
    /// # Arguments
    ///
    /// * `src` - Image source URL
    /// * `alt` - Alt text for the image
    /// * `title` - Title attribute, empty when absent
    /// * `out` - Output buffer to write to
    fn image(src: &str, alt: &str, title: &str, out: &mut String) {
        let mut attrs = format!(r#" src="{}""#, escape_html(src));
        if !title.is_empty() {
            write!(attrs, r#" title="{}""#, escape_html(title)).unwrap();
        }
        write!(attrs, r#" alt="{}""#, escape_html(alt)).unwrap();
        Self::start_node(NodeKind::Image, &attrs, out);
    }

    /// Transform a link URL.
    ///
    /// Default implementation returns the URL unchanged.
    ///
    /// # Arguments
    ///
    /// * `url` - The original link URL
    /// * `base_path` - Optional base path for resolving relative links
    #[must_use]
    fn transform_link<'a>(url: &'a str, _base_path: Option<&str>) -> Cow<'a, str> {
        Cow::Borrowed(url)
    }

    /// Render a hard break.
    fn hard_break(out: &mut String) {
        out.push_str("<br>");
    }

    /// Render a horizontal rule.
    fn horizontal_rule(out: &mut String) {
        Self::start_node(NodeKind::Rule, "", out);
    }

    /// Render a task list marker.
    fn task_list_marker(checked: bool, out: &mut String) {
        if checked {
            out.push_str(r#"<input type="checkbox" checked disabled> "#);
        } else {
            out.push_str(r#"<input type="checkbox" disabled> "#);
        }
    }
}
