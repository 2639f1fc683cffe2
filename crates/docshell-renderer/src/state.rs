//! Bookkeeping the renderer keeps while walking the event stream.

use std::collections::HashMap;

use pulldown_cmark::Alignment;

use crate::node::NodeKind;

/// Text buffer that is either idle or capturing.
///
/// Used for code block bodies and image alt text, whose events must be
/// collected before anything is written.
#[derive(Debug, Default)]
pub struct Capture {
    buffer: Option<String>,
}

impl Capture {
    pub fn begin(&mut self) {
        self.buffer = Some(String::new());
    }

    /// Stop capturing and return the collected text.
    pub fn finish(&mut self) -> String {
        self.buffer.take().unwrap_or_default()
    }

    pub fn is_active(&self) -> bool {
        self.buffer.is_some()
    }

    /// Append text. Ignored while idle.
    pub fn push(&mut self, text: &str) {
        if let Some(buffer) = &mut self.buffer {
            buffer.push_str(text);
        }
    }
}

/// Column tracking for the open table.
#[derive(Debug, Default)]
pub struct TableState {
    alignments: Vec<Alignment>,
    in_head: bool,
    column: usize,
}

impl TableState {
    pub fn start(&mut self, alignments: Vec<Alignment>) {
        *self = Self {
            alignments,
            ..Self::default()
        };
    }

    /// Enter or leave the header row, resetting the column.
    pub fn set_head(&mut self, in_head: bool) {
        self.in_head = in_head;
        self.column = 0;
    }

    pub fn start_row(&mut self) {
        self.column = 0;
    }

    pub fn next_cell(&mut self) {
        self.column += 1;
    }

    /// Header cells inside the head row, body cells elsewhere.
    pub fn cell_kind(&self) -> NodeKind {
        if self.in_head {
            NodeKind::TableHeaderCell
        } else {
            NodeKind::TableCell
        }
    }

    /// `style` attribute for the current column, with leading space.
    pub fn alignment_attr(&self) -> &'static str {
        match self.alignments.get(self.column) {
            Some(Alignment::Left) => r#" style="text-align:left""#,
            Some(Alignment::Center) => r#" style="text-align:center""#,
            Some(Alignment::Right) => r#" style="text-align:right""#,
            Some(Alignment::None) | None => "",
        }
    }
}

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,
    /// Plain heading text.
    pub title: String,
    /// Anchor id.
    pub id: String,
}

/// Heading finished by [`HeadingState::complete_heading`].
#[derive(Debug)]
pub struct CompletedHeading {
    pub level: u8,
    pub id: String,
    pub html: String,
}

#[derive(Debug)]
struct OpenHeading {
    level: u8,
    /// Plain text, for the slug and the ToC.
    text: String,
    /// Rendered inline markup.
    html: String,
}

/// Heading capture, unique ids and title extraction.
#[derive(Debug)]
pub struct HeadingState {
    extract_title: bool,
    title: Option<String>,
    open: Option<OpenHeading>,
    toc: Vec<TocEntry>,
    /// Times each base slug was handed out.
    issued_ids: HashMap<String, usize>,
}

impl HeadingState {
    /// With `extract_title`, the first H1 becomes the page title and stays
    /// out of the table of contents. It is still rendered.
    pub fn new(extract_title: bool) -> Self {
        Self {
            extract_title,
            title: None,
            open: None,
            toc: Vec::new(),
            issued_ids: HashMap::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.open.is_some()
    }

    /// Forget headings, ids and title of the previous document.
    pub fn reset(&mut self) {
        *self = Self::new(self.extract_title);
    }

    pub fn start_heading(&mut self, level: u8) {
        self.open = Some(OpenHeading {
            level,
            text: String::new(),
            html: String::new(),
        });
    }

    pub fn push_text(&mut self, text: &str) {
        if let Some(open) = &mut self.open {
            open.text.push_str(text);
        }
    }

    pub fn push_html(&mut self, html: &str) {
        if let Some(open) = &mut self.open {
            open.html.push_str(html);
        }
    }

    /// Close the open heading and record it.
    ///
    /// Returns `None` when no heading is open.
    pub fn complete_heading(&mut self) -> Option<CompletedHeading> {
        let OpenHeading { level, text, html } = self.open.take()?;
        let title = text.trim().to_owned();
        let id = self.unique_id(&title);

        if self.extract_title && level == 1 && self.title.is_none() {
            self.title = Some(title);
        } else {
            self.toc.push(TocEntry {
                level,
                title,
                id: id.clone(),
            });
        }

        Some(CompletedHeading {
            level,
            id,
            html: html.trim().to_owned(),
        })
    }

    /// Slug of `text`, suffixed `-1`, `-2`, ... on repeats.
    fn unique_id(&mut self, text: &str) -> String {
        let base = slugify(text);
        let issued = self.issued_ids.entry(base.clone()).or_default();
        *issued += 1;
        match *issued {
            1 => base,
            n => format!("{base}-{}", n - 1),
        }
    }

    pub fn take_title(&mut self) -> Option<String> {
        self.title.take()
    }

    pub fn take_toc(&mut self) -> Vec<TocEntry> {
        std::mem::take(&mut self.toc)
    }
}

/// Convert text to a URL-safe anchor.
///
/// Words are split on whitespace, dashes and underscores, stripped to lowercase
/// ASCII alphanumerics and joined with single dashes.
#[must_use]
pub fn slugify(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .map(|word| {
            word.chars()
                .filter(char::is_ascii_alphanumeric)
                .map(|c| c.to_ascii_lowercase())
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        let entity = match c {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&#x27;",
            _ => {
                escaped.push(c);
                continue;
            }
        };
        escaped.push_str(entity);
    }
    escaped
}
