//! Generic markdown renderer with pluggable backend.

use std::collections::HashMap;
use std::marker::PhantomData;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Tag, TagEnd};

use crate::backend::RenderBackend;
use crate::code_block::{CodeBlockProcessor, ProcessResult, parse_fence_info};
use crate::node::{CodeKind, LinkTarget, NodeKind};
use crate::state::{Capture, HeadingState, TableState, TocEntry, escape_html};

/// Parser options for docs content: GFM tables, strikethrough and task lists.
#[must_use]
pub fn markdown_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Result of rendering markdown.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered HTML content.
    pub html: String,
    /// Title extracted from first H1 heading (if title extraction was enabled).
    pub title: Option<String>,
    /// Table of contents entries.
    pub toc: Vec<TocEntry>,
    /// Warnings reported by code block processors.
    pub warnings: Vec<String>,
}

/// Generic markdown renderer with pluggable backend.
///
/// The renderer owns event bookkeeping and the link and code classifications.
/// Markup of every [`NodeKind`] is delegated to the backend `B`.
pub struct MarkdownRenderer<B: RenderBackend> {
    output: String,
    /// Body of the open code block.
    code: Capture,
    /// Language and attributes from the fence info of the open code block.
    fence: (Option<String>, HashMap<String, String>),
    table: TableState,
    /// Alt text of the open image.
    alt: Capture,
    heading: HeadingState,
    /// Directory of the current page, for resolving relative links.
    base_path: Option<String>,
    /// Pending image data (src, title) waiting for alt text.
    pending_image: Option<(String, String)>,
    processors: Vec<Box<dyn CodeBlockProcessor>>,
    /// Index of the next code block, for processor callbacks.
    code_block_index: usize,
    _backend: PhantomData<B>,
}

impl<B: RenderBackend> MarkdownRenderer<B> {
    /// Create a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(4096),
            code: Capture::default(),
            fence: (None, HashMap::new()),
            table: TableState::default(),
            alt: Capture::default(),
            heading: HeadingState::new(false),
            base_path: None,
            pending_image: None,
            processors: Vec::new(),
            code_block_index: 0,
            _backend: PhantomData,
        }
    }

    /// Extract the first H1 as the page title.
    ///
    /// The heading is still rendered but left out of the table of contents.
    #[must_use]
    pub fn with_title_extraction(mut self) -> Self {
        self.heading = HeadingState::new(true);
        self
    }

    /// Set base path for resolving relative links.
    #[must_use]
    pub fn with_base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Add a code block processor.
    ///
    /// Processors are checked in order when an annotated code block is
    /// encountered. The first processor returning a non-`PassThrough` result wins.
    #[must_use]
    pub fn with_processor<P: CodeBlockProcessor + 'static>(mut self, processor: P) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    /// Push content to output or heading buffer based on context.
    fn push_inline(&mut self, content: &str) {
        if self.heading.is_active() {
            self.heading.push_html(content);
        } else {
            self.output.push_str(content);
        }
    }

    /// Open an inline node, respecting heading capture.
    fn start_inline(&mut self, kind: NodeKind) {
        let mut tag = String::new();
        B::start_node(kind, "", &mut tag);
        self.push_inline(&tag);
    }

    /// Close an inline node, respecting heading capture.
    fn end_inline(&mut self, kind: NodeKind) {
        let mut tag = String::new();
        B::end_node(kind, &mut tag);
        self.push_inline(&tag);
    }

    /// Render markdown events and return the result.
    ///
    /// Every call starts a fresh document: heading ids and code block indices
    /// restart, so a reused renderer gives the same output as a new one.
    pub fn render<'a, I>(&mut self, events: I) -> RenderResult
    where
        I: Iterator<Item = Event<'a>>,
    {
        self.reset_document();
        for event in events {
            self.process_event(event);
        }

        RenderResult {
            html: std::mem::take(&mut self.output),
            title: self.heading.take_title(),
            toc: self.heading.take_toc(),
            warnings: self
                .processors
                .iter()
                .flat_map(|p| p.warnings())
                .cloned()
                .collect(),
        }
    }

    /// Drop per-document state left over from a previous render.
    fn reset_document(&mut self) {
        self.output.clear();
        self.code = Capture::default();
        self.fence = (None, HashMap::new());
        self.table = TableState::default();
        self.alt = Capture::default();
        self.heading.reset();
        self.pending_image = None;
        self.code_block_index = 0;
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) => self.output.push_str(&html),
            Event::InlineHtml(html) => self.inline_html(&html),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => B::hard_break(&mut self.output),
            Event::Rule => B::horizontal_rule(&mut self.output),
            Event::TaskListMarker(checked) => B::task_list_marker(checked, &mut self.output),
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {
                // Not supported
            }
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => B::start_node(NodeKind::Paragraph, "", &mut self.output),
            Tag::Heading { level, .. } => {
                // Opening tag is written in end_tag once the id is known
                self.heading.start_heading(heading_level_to_num(level));
            }
            Tag::BlockQuote(_) => B::start_node(NodeKind::Quote, "", &mut self.output),
            Tag::CodeBlock(kind) => {
                self.fence = match kind {
                    CodeBlockKind::Fenced(ref info) => {
                        let (language, attrs) = parse_fence_info(info);
                        (Some(language), attrs)
                    }
                    CodeBlockKind::Indented => (None, HashMap::new()),
                };
                self.code.begin();
            }
            Tag::List(start) => {
                let kind = NodeKind::List {
                    ordered: start.is_some(),
                };
                let attrs = match start {
                    Some(n) if n != 1 => format!(r#" start="{n}""#),
                    _ => String::new(),
                };
                B::start_node(kind, &attrs, &mut self.output);
            }
            Tag::Item => B::start_node(NodeKind::ListItem, "", &mut self.output),
            Tag::FootnoteDefinition(_) | Tag::HtmlBlock | Tag::MetadataBlock(_) => {}
            Tag::DefinitionList => self.output.push_str("<dl>"),
            Tag::DefinitionListTitle => self.output.push_str("<dt>"),
            Tag::DefinitionListDefinition => self.output.push_str("<dd>"),
            Tag::Table(alignments) => {
                self.table.start(alignments);
                B::start_node(NodeKind::Table, "", &mut self.output);
            }
            Tag::TableHead => {
                self.table.set_head(true);
                B::start_node(NodeKind::TableHead, "", &mut self.output);
                B::start_node(NodeKind::TableRow, "", &mut self.output);
            }
            Tag::TableRow => {
                self.table.start_row();
                B::start_node(NodeKind::TableRow, "", &mut self.output);
            }
            Tag::TableCell => {
                let align = self.table.alignment_attr();
                B::start_node(self.table.cell_kind(), align, &mut self.output);
            }
            Tag::Emphasis => self.start_inline(NodeKind::Emphasis),
            Tag::Strong => self.start_inline(NodeKind::Strong),
            Tag::Strikethrough => self.start_inline(NodeKind::Strikethrough),
            Tag::Link { dest_url, .. } => {
                let href = B::transform_link(&dest_url, self.base_path.as_deref());
                let mut tag = String::new();
                B::link_start(&href, LinkTarget::classify(&href), &mut tag);
                self.push_inline(&tag);
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                // Alt text arrives as text events; the image is written in end_tag
                self.alt.begin();
                self.pending_image = Some((dest_url.into_string(), title.into_string()));
            }
            Tag::Superscript => self.push_inline("<sup>"),
            Tag::Subscript => self.push_inline("<sub>"),
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => B::end_node(NodeKind::Paragraph, &mut self.output),
            TagEnd::Heading(_) => {
                if let Some(heading) = self.heading.complete_heading() {
                    B::heading(heading.level, &heading.id, &heading.html, &mut self.output);
                }
            }
            TagEnd::BlockQuote(_) => B::end_node(NodeKind::Quote, &mut self.output),
            TagEnd::CodeBlock => self.end_code_block(),
            TagEnd::List(ordered) => B::end_node(NodeKind::List { ordered }, &mut self.output),
            TagEnd::Item => B::end_node(NodeKind::ListItem, &mut self.output),
            TagEnd::FootnoteDefinition | TagEnd::HtmlBlock | TagEnd::MetadataBlock(_) => {}
            TagEnd::Image => {
                let alt = self.alt.finish();
                if let Some((src, title)) = self.pending_image.take() {
                    let mut tag = String::new();
                    B::image(&src, &alt, &title, &mut tag);
                    self.push_inline(&tag);
                }
            }
            TagEnd::DefinitionList => self.output.push_str("</dl>"),
            TagEnd::DefinitionListTitle => self.output.push_str("</dt>"),
            TagEnd::DefinitionListDefinition => self.output.push_str("</dd>"),
            TagEnd::Table => {
                self.output.push_str("</tbody>");
                B::end_node(NodeKind::Table, &mut self.output);
            }
            TagEnd::TableHead => {
                B::end_node(NodeKind::TableRow, &mut self.output);
                B::end_node(NodeKind::TableHead, &mut self.output);
                self.output.push_str("<tbody>");
                self.table.set_head(false);
            }
            TagEnd::TableRow => B::end_node(NodeKind::TableRow, &mut self.output),
            TagEnd::TableCell => {
                B::end_node(self.table.cell_kind(), &mut self.output);
                self.table.next_cell();
            }
            TagEnd::Emphasis => self.end_inline(NodeKind::Emphasis),
            TagEnd::Strong => self.end_inline(NodeKind::Strong),
            TagEnd::Strikethrough => self.end_inline(NodeKind::Strikethrough),
            TagEnd::Link => self.end_inline(NodeKind::Link),
            TagEnd::Superscript => self.push_inline("</sup>"),
            TagEnd::Subscript => self.push_inline("</sub>"),
        }
    }

    fn end_code_block(&mut self) {
        let content = self.code.finish();
        let (lang, attrs) = std::mem::take(&mut self.fence);
        let index = self.code_block_index;
        self.code_block_index += 1;

        let language = match CodeKind::classify(lang.as_deref()) {
            CodeKind::Inline => {
                B::preformatted(&content, &mut self.output);
                return;
            }
            CodeKind::Block { language } => language,
        };

        // Try processors in order, fall back to the backend's block component
        let processed = self.processors.iter_mut().find_map(|processor| {
            match processor.process(&language, &attrs, &content, index) {
                ProcessResult::Inline(html) => Some(html),
                ProcessResult::PassThrough => None,
            }
        });

        match processed {
            Some(html) => self.output.push_str(&html),
            None => B::code_block(&language, &content, &mut self.output),
        }
    }

    fn text(&mut self, text: &str) {
        // Priority: code > image > heading > normal text
        if self.code.is_active() {
            self.code.push(text);
            return;
        }

        if self.alt.is_active() {
            self.alt.push(text);
            return;
        }

        if self.heading.is_active() {
            self.heading.push_text(text);
            self.heading.push_html(&escape_html(text));
            return;
        }

        self.output.push_str(&escape_html(text));
    }

    fn inline_code(&mut self, code: &str) {
        if self.alt.is_active() {
            self.alt.push(code);
            return;
        }

        let mut html = String::new();
        B::inline_code(code, &mut html);
        if self.heading.is_active() {
            self.heading.push_text(code);
            self.heading.push_html(&html);
        } else {
            self.output.push_str(&html);
        }
    }

    /// Inline tags stay inside the enclosing heading. Alt text is plain, so
    /// tags inside an image description are dropped.
    fn inline_html(&mut self, html: &str) {
        if !self.alt.is_active() {
            self.push_inline(html);
        }
    }

    fn soft_break(&mut self) {
        if self.code.is_active() {
            self.code.push("\n");
        } else if self.heading.is_active() {
            self.heading.push_text(" ");
            self.heading.push_html("\n");
        } else {
            self.output.push('\n');
        }
    }
}

impl<B: RenderBackend> Default for MarkdownRenderer<B> {
    fn default() -> Self {
        Self::new()
    }
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use pulldown_cmark::Parser;

    use super::*;
    use crate::DocsBackend;

    /// Unstyled backend to check structure without class noise.
    struct PlainBackend;

    impl RenderBackend for PlainBackend {
        fn class(_kind: NodeKind) -> Option<&'static str> {
            None
        }
    }

    fn render_plain(markdown: &str) -> RenderResult {
        let parser = Parser::new_ext(markdown, markdown_options());
        MarkdownRenderer::<PlainBackend>::new().render(parser)
    }

    fn render_docs(markdown: &str) -> RenderResult {
        let parser = Parser::new_ext(markdown, markdown_options());
        MarkdownRenderer::<DocsBackend>::new()
            .with_title_extraction()
            .render(parser)
    }

    #[test]
    fn test_basic_paragraph() {
        assert_eq!(render_plain("Hello, world!").html, "<p>Hello, world!</p>");
    }

    #[test]
    fn test_styled_paragraph() {
        assert_eq!(
            render_docs("Hello").html,
            r#"<p class="docs-paragraph">Hello</p>"#
        );
    }

    #[test]
    fn test_heading_with_id() {
        let result = render_plain("## Section Title");
        assert_eq!(result.html, r#"<h2 id="section-title">Section Title</h2>"#);
        assert_eq!(
            result.toc,
            vec![TocEntry {
                level: 2,
                title: "Section Title".to_owned(),
                id: "section-title".to_owned(),
            }]
        );
    }

    #[test]
    fn test_title_extraction() {
        let result = render_docs("# My Title\n\nSome content\n\n## Section");

        assert_eq!(result.title.as_deref(), Some("My Title"));
        assert!(result.html.contains(r#"id="my-title">My Title</h1>"#));
        assert_eq!(result.toc.len(), 1);
        assert_eq!(result.toc[0].id, "section");
    }

    #[test]
    fn test_link_headings() {
        let result = render_docs("## Install\n\n### Options\n\n#### Flags\n\n##### Deep");

        assert_eq!(result.html.matches("data-heading").count(), 3);
        assert!(result.html.contains(r##"href="#install""##));
        assert!(result.html.contains(r##"href="#flags""##));
        assert!(!result.html.contains(r##"href="#deep""##));
    }

    #[test]
    fn test_duplicate_heading_ids() {
        let result = render_plain("## FAQ\n\n## FAQ\n\n## FAQ");
        let ids: Vec<_> = result.toc.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["faq", "faq-1", "faq-2"]);
    }

    #[test]
    fn test_heading_with_inline_code() {
        let result = render_plain("## Install `npm`");
        assert_eq!(
            result.html,
            r#"<h2 id="install-npm">Install <code>npm</code></h2>"#
        );
        assert_eq!(result.toc[0].title, "Install npm");
    }

    #[test]
    fn test_heading_keeps_inline_html() {
        let result = render_plain("## Install <kbd>npm</kbd>");
        assert_eq!(
            result.html,
            r#"<h2 id="install-npm">Install <kbd>npm</kbd></h2>"#
        );
        assert_eq!(result.toc[0].title, "Install npm");
    }

    #[test]
    fn test_inline_html_in_paragraph() {
        assert_eq!(
            render_plain("Press <kbd>Ctrl</kbd>").html,
            "<p>Press <kbd>Ctrl</kbd></p>"
        );
    }

    #[test]
    fn test_image_alt_drops_inline_html() {
        let result = render_plain("![A <b>bold</b> logo](logo.png)");
        assert_eq!(
            result.html,
            r#"<p><img src="logo.png" alt="A bold logo"></p>"#
        );
    }

    #[test]
    fn test_reused_renderer_starts_fresh() {
        let mut renderer = MarkdownRenderer::<PlainBackend>::new().with_title_extraction();
        let first = renderer.render(Parser::new("# One

## FAQ"));
        let second = renderer.render(Parser::new("# Two

## FAQ"));

        assert_eq!(first.html, r#"<h1 id="one">One</h1><h2 id="faq">FAQ</h2>"#);
        assert_eq!(second.html, r#"<h1 id="two">Two</h1><h2 id="faq">FAQ</h2>"#);
        assert_eq!(second.title.as_deref(), Some("Two"));
        assert_eq!(second.toc[0].id, "faq");
    }

    #[test]
    fn test_reused_renderer_restarts_code_block_index() {
        let mut renderer = MarkdownRenderer::<DocsBackend>::new()
            .with_processor(ConsoleProcessor {
                warnings: Vec::new(),
            });
        renderer.render(Parser::new("```console
ls
```"));
        let second = renderer.render(Parser::new("```console
pwd
```"));

        assert!(second.html.contains(r#"data-index="0""#));
    }

    #[test]
    fn test_internal_link_same_tab() {
        let result = render_plain("[Setup](/setup)");
        assert_eq!(result.html, r#"<p><a href="/setup">Setup</a></p>"#);
    }

    #[test]
    fn test_external_link_new_tab() {
        let result = render_plain("[Site](https://example.com)");
        assert_eq!(
            result.html,
            r#"<p><a href="https://example.com" target="_blank" rel="noopener noreferrer">Site</a></p>"#
        );
    }

    #[test]
    fn test_fragment_link_is_internal() {
        let result = render_plain("[Usage](#usage)");
        assert!(!result.html.contains("_blank"));
    }

    #[test]
    fn test_relative_source_link_with_base_path() {
        let parser = Parser::new("[Next](./setup.mdx)");
        let result = MarkdownRenderer::<DocsBackend>::new()
            .with_base_path("guides")
            .render(parser);
        assert!(result.html.contains(r#"href="/guides/setup""#));
        assert!(!result.html.contains("_blank"));
    }

    #[test]
    fn test_link_inside_heading() {
        let result = render_plain("## See [docs](https://example.com)");
        assert!(result.html.starts_with(r#"<h2 id="see-docs">See <a href="https://example.com""#));
        assert_eq!(result.toc[0].title, "See docs");
    }

    #[test]
    fn test_inline_code_span() {
        let result = render_docs("Run `make`");
        assert!(
            result
                .html
                .contains(r#"<code class="docs-code">make</code>"#)
        );
    }

    #[test]
    fn test_annotated_block_uses_block_component() {
        let result = render_docs("```rust\nfn main() {}\n```");
        assert_eq!(
            result.html,
            "<pre class=\"docs-code-block\" data-language=\"rust\"><code class=\"language-rust\">fn main() {}\n</code></pre>"
        );
    }

    #[test]
    fn test_unannotated_block_uses_inline_component() {
        let result = render_docs("```\nplain text\n```");
        assert_eq!(
            result.html,
            "<pre class=\"docs-pre\"><code class=\"docs-code\">plain text\n</code></pre>"
        );
    }

    #[test]
    fn test_indented_block_uses_inline_component() {
        let result = render_plain("    indented\n");
        assert_eq!(result.html, "<pre><code>indented\n</code></pre>");
    }

    #[test]
    fn test_code_block_escapes_content() {
        let result = render_plain("```html\n<div>\n```");
        assert!(result.html.contains("&lt;div&gt;"));
    }

    #[test]
    fn test_blockquote() {
        let result = render_docs("> Note");
        assert_eq!(
            result.html,
            r#"<blockquote class="docs-quote"><p class="docs-paragraph">Note</p></blockquote>"#
        );
    }

    #[test]
    fn test_image() {
        let result = render_plain("![Alt `code` text](image.png)");
        assert_eq!(
            result.html,
            r#"<p><img src="image.png" alt="Alt code text"></p>"#
        );
    }

    #[test]
    fn test_table() {
        let result = render_plain("| A | B |\n|:--|---|\n| 1 | 2 |");
        assert_eq!(
            result.html,
            concat!(
                "<table><thead><tr>",
                r#"<th style="text-align:left">A</th><th>B</th>"#,
                "</tr></thead><tbody><tr>",
                r#"<td style="text-align:left">1</td><td>2</td>"#,
                "</tr></tbody></table>"
            )
        );
    }

    #[test]
    fn test_styled_table_cells() {
        let result = render_docs("| A |\n|---|\n| 1 |");
        assert!(result.html.contains(r#"<th class="docs-table-header-cell">A</th>"#));
        assert!(result.html.contains(r#"<td class="docs-table-cell">1</td>"#));
    }

    #[test]
    fn test_inline_formatting() {
        let result = render_plain("*italic*, **bold** and ~~gone~~");
        assert_eq!(
            result.html,
            "<p><em>italic</em>, <strong>bold</strong> and <s>gone</s></p>"
        );
    }

    #[test]
    fn test_lists() {
        assert_eq!(
            render_plain("- One\n- Two").html,
            "<ul><li>One</li><li>Two</li></ul>"
        );
        assert_eq!(
            render_plain("3. Three\n4. Four").html,
            r#"<ol start="3"><li>Three</li><li>Four</li></ol>"#
        );
    }

    #[test]
    fn test_rule() {
        assert_eq!(render_docs("---").html, r#"<hr class="docs-rule">"#);
    }

    #[test]
    fn test_task_list() {
        let result = render_plain("- [ ] Todo\n- [x] Done");
        assert!(result.html.contains(r#"<input type="checkbox" disabled>"#));
        assert!(
            result
                .html
                .contains(r#"<input type="checkbox" checked disabled>"#)
        );
    }

    #[test]
    fn test_default_renderer() {
        let mut renderer = MarkdownRenderer::<PlainBackend>::default();
        let result = renderer.render(Parser::new("Hello"));
        assert_eq!(result.html, "<p>Hello</p>");
        assert!(result.title.is_none());
        assert!(result.warnings.is_empty());
    }

    // Code block processor tests

    struct ConsoleProcessor {
        warnings: Vec<String>,
    }

    impl CodeBlockProcessor for ConsoleProcessor {
        fn process(
            &mut self,
            language: &str,
            attrs: &HashMap<String, String>,
            source: &str,
            index: usize,
        ) -> ProcessResult {
            match language {
                "console" => {
                    let prompt = attrs.get("prompt").map_or("$", String::as_str);
                    ProcessResult::Inline(format!(
                        r#"<pre class="console" data-index="{index}">{prompt} {}</pre>"#,
                        source.trim()
                    ))
                }
                "sh" => {
                    self.warnings.push(format!("block {index}: use console"));
                    ProcessResult::PassThrough
                }
                _ => ProcessResult::PassThrough,
            }
        }

        fn warnings(&self) -> &[String] {
            &self.warnings
        }
    }

    struct UpperProcessor;

    impl CodeBlockProcessor for UpperProcessor {
        fn process(
            &mut self,
            language: &str,
            _attrs: &HashMap<String, String>,
            source: &str,
            _index: usize,
        ) -> ProcessResult {
            if language == "shout" || language == "console" {
                ProcessResult::Inline(source.to_uppercase())
            } else {
                ProcessResult::PassThrough
            }
        }
    }

    fn render_with_processors(markdown: &str) -> RenderResult {
        let parser = Parser::new(markdown);
        MarkdownRenderer::<DocsBackend>::new()
            .with_processor(ConsoleProcessor {
                warnings: Vec::new(),
            })
            .with_processor(UpperProcessor)
            .render(parser)
    }

    #[test]
    fn test_processor_inline() {
        let result = render_with_processors("```console prompt=%\nmake\n```");
        assert_eq!(
            result.html,
            r#"<pre class="console" data-index="0">% make</pre>"#
        );
    }

    #[test]
    fn test_first_processor_wins() {
        let result = render_with_processors("```console\nls\n```\n\n```shout\nhi\n```");
        assert!(result.html.contains("$ ls"));
        assert!(result.html.contains("HI"));
        assert!(!result.html.contains("LS"));
    }

    #[test]
    fn test_processor_passthrough_falls_back_to_backend() {
        let result = render_with_processors("```rust\nfn main() {}\n```");
        assert!(result.html.contains(r#"class="language-rust""#));
    }

    #[test]
    fn test_processor_skipped_for_unannotated_block() {
        let result = render_with_processors("```\nconsole\n```");
        assert!(result.html.contains(r#"<pre class="docs-pre">"#));
    }

    #[test]
    fn test_processor_indices_and_warnings() {
        let result = render_with_processors("```\nx\n```\n\n```sh\nls\n```\n\n```console\nls\n```");
        assert_eq!(result.warnings, vec!["block 1: use console".to_owned()]);
        assert!(result.html.contains(r#"data-index="2""#));
    }
}
