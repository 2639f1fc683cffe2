//! Outbound link helpers: edit links and external link detection.

use serde::{Deserialize, Serialize};

/// Default host for edit links.
pub const DEFAULT_EDIT_HOST: &str = "https://github.com";
/// Default branch segment for edit links.
pub const DEFAULT_EDIT_BRANCH: &str = "main";
/// Default source file extension for edit links.
pub const DEFAULT_EDIT_EXTENSION: &str = "mdx";

/// URL prefixes treated as absolute (external) link targets.
const EXTERNAL_PREFIXES: [&str; 3] = ["http://", "https://", "//"];

/// Check whether a link target leaves the site.
///
/// External targets open in a new tab with safe `rel` attributes; everything
/// else (site paths, fragments, relative paths) navigates in place.
///
/// ```
/// use docshell_nav::is_external_link;
///
/// assert!(is_external_link("https://example.com"));
/// assert!(!is_external_link("/guides/intro"));
/// assert!(!is_external_link(""));
/// ```
#[must_use]
pub fn is_external_link(href: &str) -> bool {
    EXTERNAL_PREFIXES
        .iter()
        .any(|prefix| href.starts_with(prefix))
}

/// "Edit this page" link template.
///
/// Produces `<host>/<repo>/edit/<branch>/<path>.<extension>`. The result is
/// advisory: nothing checks that the target file exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditLink {
    /// Repository host URL (e.g., `https://github.com`).
    pub host: String,
    /// Repository path on the host (e.g., `org/repo`).
    pub repo: String,
    /// Branch the edit form opens against.
    pub branch: String,
    /// Source file extension without dot.
    pub extension: String,
}

impl EditLink {
    /// Create an edit link for `repo` with default host, branch and extension.
    pub fn new(repo: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_EDIT_HOST.to_owned(),
            repo: repo.into(),
            branch: DEFAULT_EDIT_BRANCH.to_owned(),
            extension: DEFAULT_EDIT_EXTENSION.to_owned(),
        }
    }

    /// Override the host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Override the branch.
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Override the file extension.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Build the edit URL for a page path.
    ///
    /// `current_path` is accepted with or without its leading slash.
    #[must_use]
    pub fn build(&self, current_path: &str) -> String {
        let host = self.host.trim_end_matches('/');
        let repo = self.repo.trim_matches('/');
        let path = current_path.trim_start_matches('/');
        let extension = self.extension.trim_start_matches('.');
        let branch = &self.branch;
        format!("{host}/{repo}/edit/{branch}/{path}.{extension}")
    }
}

/// Build an edit URL from a link template.
///
/// Free-function form of [`EditLink::build`].
#[must_use]
pub fn build_edit_link(link: &EditLink, current_path: &str) -> String {
    link.build(current_path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_external_https() {
        assert!(is_external_link("https://example.com"));
    }

    #[test]
    fn test_external_http() {
        assert!(is_external_link("http://example.com/page"));
    }

    #[test]
    fn test_external_protocol_relative() {
        assert!(is_external_link("//cdn.example.com/lib.js"));
    }

    #[test]
    fn test_site_path_is_internal() {
        assert!(!is_external_link("/guides/intro"));
    }

    #[test]
    fn test_empty_is_internal() {
        assert!(!is_external_link(""));
    }

    #[test]
    fn test_fragment_and_relative_are_internal() {
        assert!(!is_external_link("#usage"));
        assert!(!is_external_link("setup"));
        assert!(!is_external_link("./setup"));
    }

    #[test]
    fn test_scheme_without_separator_is_internal() {
        assert!(!is_external_link("httpbin"));
    }

    #[test]
    fn test_build_edit_link() {
        let link = EditLink::new("org/repo");

        assert_eq!(
            build_edit_link(&link, "/guides/intro"),
            "https://github.com/org/repo/edit/main/guides/intro.mdx"
        );
    }

    #[test]
    fn test_build_edit_link_without_leading_slash() {
        let link = EditLink::new("org/repo");

        assert_eq!(
            link.build("guides/intro"),
            "https://github.com/org/repo/edit/main/guides/intro.mdx"
        );
    }

    #[test]
    fn test_build_edit_link_with_overrides() {
        let link = EditLink::new("/team/docs/")
            .with_host("https://git.example.com/")
            .with_branch("develop")
            .with_extension(".md");

        assert_eq!(
            link.build("/setup"),
            "https://git.example.com/team/docs/edit/develop/setup.md"
        );
    }
}
