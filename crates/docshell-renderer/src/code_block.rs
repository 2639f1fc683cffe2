//! Code block processors: the seam for highlighters and other block renderers.
//!
//! Processors are registered with the renderer and tried in order for every
//! code block with a language annotation. The first processor that does not
//! pass the block through wins; when all pass, the backend's block component
//! renders it.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use docshell_renderer::{CodeBlockProcessor, ProcessResult};
//!
//! struct ShellPrompt;
//!
//! impl CodeBlockProcessor for ShellPrompt {
//!     fn process(
//!         &mut self,
//!         language: &str,
//!         _attrs: &HashMap<String, String>,
//!         source: &str,
//!         _index: usize,
//!     ) -> ProcessResult {
//!         if language == "console" {
//!             ProcessResult::Inline(format!("<pre class=\"console\">{source}</pre>"))
//!         } else {
//!             ProcessResult::PassThrough
//!         }
//!     }
//! }
//! ```

use std::collections::HashMap;

/// Result of processing a code block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessResult {
    /// Replace the code block with this HTML.
    Inline(String),
    /// Not handled here. Try the next processor or the backend.
    PassThrough,
}

/// Trait for processing annotated code blocks.
pub trait CodeBlockProcessor {
    /// Process a code block and return the result.
    ///
    /// # Arguments
    ///
    /// * `language` - Non-empty language identifier from the fence info string
    /// * `attrs` - Attributes parsed from the fence (key=value pairs)
    /// * `source` - Raw content of the code block
    /// * `index` - Zero-based position among the document's code blocks
    fn process(
        &mut self,
        language: &str,
        attrs: &HashMap<String, String>,
        source: &str,
        index: usize,
    ) -> ProcessResult;

    /// Get warnings generated during processing.
    ///
    /// Default implementation returns empty slice.
    fn warnings(&self) -> &[String] {
        &[]
    }
}

/// Split a fence info string into its language and `key=value` attributes.
///
/// `toml title="docshell.toml" lines=1-3` gives `toml` plus two attributes.
/// Words without `=` are dropped and quotes around values are removed.
pub(crate) fn parse_fence_info(info: &str) -> (String, HashMap<String, String>) {
    let (language, rest) = info
        .trim()
        .split_once(char::is_whitespace)
        .unwrap_or((info.trim(), ""));

    let attrs = rest
        .split_whitespace()
        .filter_map(|word| {
            let (key, value) = word.split_once('=')?;
            let value = value.trim_matches(|c: char| c == '"' || c == '\'');
            Some((key.to_owned(), value.to_owned()))
        })
        .collect();

    (language.to_owned(), attrs)
}
