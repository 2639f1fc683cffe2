//! Styled docs backend.
//!
//! Maps every node kind to a `docs-*` style class, renders h2-h4 as
//! self-anchored link headings and resolves relative source links to site
//! paths.

use std::borrow::Cow;
use std::fmt::Write;

use crate::backend::RenderBackend;
use crate::node::NodeKind;
use crate::state::escape_html;

/// Source file extensions recognized in relative links.
const SOURCE_EXTENSIONS: [&str; 2] = [".mdx", ".md"];

/// Docs site render backend.
pub struct DocsBackend;

impl RenderBackend for DocsBackend {
    fn class(kind: NodeKind) -> Option<&'static str> {
        let class = match kind {
            NodeKind::Heading(1) => "docs-heading docs-h1",
            NodeKind::Heading(2) => "docs-heading docs-h2",
            NodeKind::Heading(3) => "docs-heading docs-h3",
            NodeKind::Heading(4) => "docs-heading docs-h4",
            NodeKind::Heading(_) => "docs-heading",
            NodeKind::Paragraph => "docs-paragraph",
            NodeKind::Link => "docs-link",
            NodeKind::Code => "docs-code",
            NodeKind::List { ordered: true } => "docs-list docs-list-ordered",
            NodeKind::List { ordered: false } => "docs-list",
            NodeKind::ListItem => "docs-list-item",
            NodeKind::Table => "docs-table",
            NodeKind::TableHead => "docs-table-head",
            NodeKind::TableRow => "docs-table-row",
            NodeKind::TableHeaderCell => "docs-table-header-cell",
            NodeKind::TableCell => "docs-table-cell",
            NodeKind::Image => "docs-image",
            NodeKind::Quote => "docs-quote",
            NodeKind::Rule => "docs-rule",
            NodeKind::Strong => "docs-strong",
            NodeKind::Emphasis => "docs-emphasis",
            NodeKind::Strikethrough => "docs-strikethrough",
        };
        Some(class)
    }

    fn heading(level: u8, id: &str, html: &str, out: &mut String) {
        let kind = NodeKind::Heading(level);
        if (2..=4).contains(&level) {
            Self::start_node(kind, &format!(r#" id="{id}" data-heading"#), out);
            write!(out, r##"<a class="docs-heading-anchor" href="#{id}">{html}</a>"##).unwrap();
        } else {
            Self::start_node(kind, &format!(r#" id="{id}""#), out);
            out.push_str(html);
        }
        Self::end_node(kind, out);
    }

    fn preformatted(code: &str, out: &mut String) {
        out.push_str(r#"<pre class="docs-pre">"#);
        Self::inline_code(code, out);
        out.push_str("</pre>");
    }

    fn code_block(language: &str, content: &str, out: &mut String) {
        let language = escape_html(language);
        write!(
            out,
            r#"<pre class="docs-code-block" data-language="{language}"><code class="language-{language}">{}</code></pre>"#,
            escape_html(content)
        )
        .unwrap();
    }

    fn transform_link<'a>(url: &'a str, base_path: Option<&str>) -> Cow<'a, str> {
        match base_path {
            Some(base) => resolve_link(url, base).map_or(Cow::Borrowed(url), Cow::Owned),
            None => Cow::Borrowed(url),
        }
    }
}

/// Resolve a source link relative to the directory of the current page.
///
/// - `./sibling.mdx` from `guides` → `/guides/sibling`
/// - `../faq.md#setup` from `guides/advanced` → `/guides/faq#setup`
/// - `/reference/api.mdx` → `/reference/api`
///
/// Returns `None` for external links, fragments, and links to non-source
/// files, which are left unchanged.
fn resolve_link(url: &str, base_path: &str) -> Option<String> {
    if docshell_nav::is_external_link(url) || url.starts_with('#') || url.contains(':') {
        return None;
    }

    let (path_part, fragment) = match url.find('#') {
        Some(hash_pos) => (&url[..hash_pos], &url[hash_pos..]),
        None => (url, ""),
    };

    let stem = SOURCE_EXTENSIONS
        .iter()
        .find_map(|ext| path_part.strip_suffix(ext))?;

    let resolved = if let Some(absolute) = stem.strip_prefix('/') {
        absolute.to_owned()
    } else {
        resolve_relative_path(stem, base_path)
    };
    let clean = resolved.strip_suffix("/index").unwrap_or(&resolved);

    Some(format!("/{clean}{fragment}"))
}

/// Resolve a relative path against a base directory.
///
/// Handles `.` (current), `..` (parent), and plain relative paths.
fn resolve_relative_path(relative: &str, base: &str) -> String {
    let mut segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();

    for component in relative.split('/') {
        match component {
            "" | "." => {}
            // Ignored at the root so links cannot climb out of the site
            ".." => {
                segments.pop();
            }
            _ => segments.push(component),
        }
    }

    segments.join("/")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::node::LinkTarget;

    #[test]
    fn test_every_kind_has_class() {
        let kinds = [
            NodeKind::Heading(1),
            NodeKind::Heading(6),
            NodeKind::Paragraph,
            NodeKind::Link,
            NodeKind::Code,
            NodeKind::List { ordered: true },
            NodeKind::List { ordered: false },
            NodeKind::ListItem,
            NodeKind::Table,
            NodeKind::TableHead,
            NodeKind::TableRow,
            NodeKind::TableHeaderCell,
            NodeKind::TableCell,
            NodeKind::Image,
            NodeKind::Quote,
            NodeKind::Rule,
            NodeKind::Strong,
            NodeKind::Emphasis,
            NodeKind::Strikethrough,
        ];
        for kind in kinds {
            assert!(DocsBackend::class(kind).is_some(), "{kind:?} has no class");
        }
    }

    #[test]
    fn test_link_heading_levels() {
        for level in 2..=4 {
            let mut out = String::new();
            DocsBackend::heading(level, "usage", "Usage", &mut out);
            assert!(out.contains("data-heading"), "h{level} should be anchored");
            assert!(out.contains(r##"href="#usage""##));
        }
    }

    #[test]
    fn test_plain_heading_levels() {
        let mut out = String::new();
        DocsBackend::heading(1, "title", "Title", &mut out);
        assert_eq!(
            out,
            r#"<h1 class="docs-heading docs-h1" id="title">Title</h1>"#
        );

        let mut out = String::new();
        DocsBackend::heading(5, "deep", "Deep", &mut out);
        assert!(!out.contains("data-heading"));
    }

    #[test]
    fn test_h2_markup() {
        let mut out = String::new();
        DocsBackend::heading(2, "install", "Install", &mut out);
        assert_eq!(
            out,
            r##"<h2 class="docs-heading docs-h2" id="install" data-heading><a class="docs-heading-anchor" href="#install">Install</a></h2>"##
        );
    }

    #[test]
    fn test_inline_code() {
        let mut out = String::new();
        DocsBackend::inline_code("a < b", &mut out);
        assert_eq!(out, r#"<code class="docs-code">a &lt; b</code>"#);
    }

    #[test]
    fn test_preformatted_uses_inline_component() {
        let mut out = String::new();
        DocsBackend::preformatted("plain", &mut out);
        assert_eq!(
            out,
            r#"<pre class="docs-pre"><code class="docs-code">plain</code></pre>"#
        );
    }

    #[test]
    fn test_code_block() {
        let mut out = String::new();
        DocsBackend::code_block("rust", "fn main() {}", &mut out);
        assert_eq!(
            out,
            r#"<pre class="docs-code-block" data-language="rust"><code class="language-rust">fn main() {}</code></pre>"#
        );
    }

    #[test]
    fn test_external_link() {
        let mut out = String::new();
        DocsBackend::link_start("https://example.com", LinkTarget::External, &mut out);
        assert_eq!(
            out,
            r#"<a class="docs-link" href="https://example.com" target="_blank" rel="noopener noreferrer">"#
        );
    }

    #[test]
    fn test_image() {
        let mut out = String::new();
        DocsBackend::image("diagram.png", "Diagram", "", &mut out);
        assert_eq!(
            out,
            r#"<img class="docs-image" src="diagram.png" alt="Diagram">"#
        );
    }

    #[test]
    fn test_horizontal_rule() {
        let mut out = String::new();
        DocsBackend::horizontal_rule(&mut out);
        assert_eq!(out, r#"<hr class="docs-rule">"#);
    }

    #[test]
    fn test_resolve_link_sibling() {
        assert_eq!(
            resolve_link("./sibling.mdx", "guides").as_deref(),
            Some("/guides/sibling")
        );
    }

    #[test]
    fn test_resolve_link_parent_with_fragment() {
        assert_eq!(
            resolve_link("../faq.md#setup", "guides/advanced").as_deref(),
            Some("/guides/faq#setup")
        );
    }

    #[test]
    fn test_resolve_link_absolute() {
        assert_eq!(
            resolve_link("/reference/api.mdx", "guides").as_deref(),
            Some("/reference/api")
        );
    }

    #[test]
    fn test_resolve_link_index() {
        assert_eq!(
            resolve_link("reference/index.mdx", "").as_deref(),
            Some("/reference")
        );
    }

    #[test]
    fn test_resolve_link_traversal_clamped() {
        assert_eq!(
            resolve_link("../../../setup.mdx", "guides").as_deref(),
            Some("/setup")
        );
    }

    #[test]
    fn test_resolve_link_unchanged() {
        assert_eq!(resolve_link("https://example.com/a.md", "guides"), None);
        assert_eq!(resolve_link("#section", "guides"), None);
        assert_eq!(resolve_link("mailto:team@example.com", "guides"), None);
        assert_eq!(resolve_link("./image.png", "guides"), None);
        assert_eq!(resolve_link("/setup", "guides"), None);
    }

    #[test]
    fn test_transform_link() {
        assert_eq!(
            DocsBackend::transform_link("./setup.mdx", Some("")),
            "/setup"
        );
        assert_eq!(
            DocsBackend::transform_link("./setup.mdx", None),
            "./setup.mdx"
        );
    }
}
