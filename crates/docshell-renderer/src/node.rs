//! Markup node kinds and the two classifications the renderer owns.

use docshell_nav::is_external_link;

/// Kind of a rendered markup node.
///
/// The set is closed: backends map every kind through an exhaustive `match`,
/// so adding a kind forces every backend to decide how to render it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Section heading, level 1-6.
    Heading(u8),
    /// Paragraph of inline content.
    Paragraph,
    /// Hyperlink.
    Link,
    /// Code, inline or block (see [`CodeKind`]).
    Code,
    /// Bulleted or numbered list.
    List {
        /// Numbered list when `true`.
        ordered: bool,
    },
    /// Entry of a list.
    ListItem,
    /// Table.
    Table,
    /// Header row group of a table.
    TableHead,
    /// Table row.
    TableRow,
    /// Cell of the header row.
    TableHeaderCell,
    /// Body cell.
    TableCell,
    /// Image.
    Image,
    /// Blockquote.
    Quote,
    /// Horizontal rule.
    Rule,
    /// Strong emphasis.
    Strong,
    /// Emphasis.
    Emphasis,
    /// Struck-through text.
    Strikethrough,
}

impl NodeKind {
    /// HTML element name for this kind.
    #[must_use]
    pub fn element(self) -> &'static str {
        match self {
            Self::Heading(1) => "h1",
            Self::Heading(2) => "h2",
            Self::Heading(3) => "h3",
            Self::Heading(4) => "h4",
            Self::Heading(5) => "h5",
            Self::Heading(_) => "h6",
            Self::Paragraph => "p",
            Self::Link => "a",
            Self::Code => "code",
            Self::List { ordered: true } => "ol",
            Self::List { ordered: false } => "ul",
            Self::ListItem => "li",
            Self::Table => "table",
            Self::TableHead => "thead",
            Self::TableRow => "tr",
            Self::TableHeaderCell => "th",
            Self::TableCell => "td",
            Self::Image => "img",
            Self::Quote => "blockquote",
            Self::Rule => "hr",
            Self::Strong => "strong",
            Self::Emphasis => "em",
            Self::Strikethrough => "s",
        }
    }

    /// Whether the element has no closing tag.
    #[must_use]
    pub fn is_void(self) -> bool {
        matches!(self, Self::Image | Self::Rule)
    }
}

/// Destination class of a link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// Same-site path, fragment or relative path. Navigates in the same tab.
    Internal,
    /// Absolute URL. Opens in a new tab with `rel="noopener noreferrer"`.
    External,
}

impl LinkTarget {
    /// Classify a link destination.
    #[must_use]
    pub fn classify(href: &str) -> Self {
        if is_external_link(href) {
            Self::External
        } else {
            Self::Internal
        }
    }

    /// Extra anchor attributes for this target, including the leading space.
    #[must_use]
    pub fn attrs(self) -> &'static str {
        match self {
            Self::Internal => "",
            Self::External => r#" target="_blank" rel="noopener noreferrer""#,
        }
    }
}

/// Rendering route of a piece of code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodeKind {
    /// Rendered with the inline code component.
    Inline,
    /// Rendered with the block component for the annotated language.
    Block {
        /// Language annotation from the fence info string.
        language: String,
    },
}

impl CodeKind {
    /// Classify code by its language annotation.
    ///
    /// A missing or blank annotation means inline code, even for fenced blocks.
    #[must_use]
    pub fn classify(language: Option<&str>) -> Self {
        match language.map(str::trim) {
            Some(language) if !language.is_empty() => Self::Block {
                language: language.to_owned(),
            },
            _ => Self::Inline,
        }
    }
}
