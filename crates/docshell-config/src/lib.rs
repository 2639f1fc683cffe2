//! Configuration management for docshell.
//!
//! A site is described by one `docshell.toml`: chrome, source layout, edit
//! links, and the route registry as `[[sections]]`. The file is found by
//! walking up from the working directory unless a path is given, and command
//! line overrides ([`CliSettings`]) win over file values.
//!
//! ## Example
//!
//! ```toml
//! [site]
//! title = "System props"
//!
//! [edit]
//! repo = "org/repo"
//!
//! [[sections]]
//! label = "Start"
//!
//! [[sections.pages]]
//! slug = "intro"
//! title = "Introduction"
//!
//! [[community]]
//! title = "GitHub"
//! href = "https://github.com/org/repo"
//! ```
//!
//! ## Environment variables
//!
//! `${VAR}` (required) and `${VAR:-default}` are expanded in:
//! - `site.title`
//! - `edit.host`
//! - `edit.repo`
//! - `edit.branch`
//! - `community.href`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Command line overrides. `None` keeps the file value.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override build output directory.
    pub output_dir: Option<PathBuf>,
    /// Override the branch used in edit links.
    pub edit_branch: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docshell.toml";

/// Default source file extension.
const DEFAULT_EXTENSION: &str = "mdx";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity shown in the shell header.
    pub site: SiteConfig,
    /// Documentation source configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Build output configuration (paths are relative strings from TOML).
    build: BuildConfigRaw,
    /// Edit link configuration (optional section).
    /// When present, `repo` is required.
    pub edit: Option<EditConfig>,
    /// Route registry sections in display order.
    pub sections: Vec<SectionConfig>,
    /// External links listed under the community group.
    pub community: Vec<CommunityConfig>,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site identity configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title used in `<title>` and the header.
    pub title: String,
    /// Accessible label of the home link.
    pub home_label: String,
    /// Visible content of the home link.
    pub logo: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            home_label: "Documentation homepage".to_owned(),
            logo: "📦".to_owned(),
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    extension: Option<String>,
}

/// Raw build configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    output_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for page markup files.
    pub source_dir: PathBuf,
    /// Output directory for the built site.
    pub output_dir: PathBuf,
    /// Source file extension without dot.
    pub extension: String,
}

/// Edit link configuration.
#[derive(Debug, Deserialize)]
pub struct EditConfig {
    /// Repository host URL.
    #[serde(default = "default_edit_host")]
    pub host: String,
    /// Repository path on the host (e.g., `org/repo`).
    pub repo: String,
    /// Branch to open the edit form against.
    #[serde(default = "default_edit_branch")]
    pub branch: String,
    /// Source file extension. Defaults to `docs.extension`.
    pub extension: Option<String>,
}

impl EditConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.host, "edit.host")?;
        require_http_url(&self.host, "edit.host")?;
        require_non_empty(self.repo.trim_matches('/'), "edit.repo")?;
        require_non_empty(&self.branch, "edit.branch")?;
        if let Some(ref extension) = self.extension {
            require_non_empty(extension.trim_start_matches('.'), "edit.extension")?;
        }
        Ok(())
    }
}

fn default_edit_host() -> String {
    "https://github.com".to_owned()
}

fn default_edit_branch() -> String {
    "main".to_owned()
}

/// Route registry section as written in TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionConfig {
    /// Section heading.
    pub label: String,
    /// Pages in display order.
    #[serde(default)]
    pub pages: Vec<PageConfig>,
}

/// Route registry page as written in TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    /// URL path segment without leading slash.
    pub slug: String,
    /// Display title.
    pub title: String,
}

/// Community link as written in TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct CommunityConfig {
    /// Display title.
    pub title: String,
    /// Absolute URL.
    pub href: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`edit.repo`").
        field: String,
        /// Error message (e.g., "${`DOCS_REPO`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load `config_path`, or the nearest `docshell.toml` above the working
    /// directory, then apply `cli_settings` on top.
    ///
    /// Without any file, defaults rooted at the working directory are used.
    /// Such a config has no sections, so building a site from it fails later
    /// with a "no pages" error rather than here.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for a missing explicit path, and parse,
    /// expansion or validation errors for a file that was found.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => Self::discover_config(),
        };

        let mut config = match path {
            Some(path) => Self::load_from_file(&path)?,
            None => {
                tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
                Self::default_with_cwd()
            }
        };
        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.docs_resolved.output_dir.clone_from(output_dir);
        }
        if let (Some(branch), Some(edit)) = (&settings.edit_branch, self.edit.as_mut()) {
            edit.branch.clone_from(branch);
        }
    }

    /// Edit link extension, falling back to the docs extension.
    #[must_use]
    pub fn edit_extension(&self) -> Option<&str> {
        self.edit.as_ref().map(|edit| {
            edit.extension
                .as_deref()
                .map_or(self.docs_resolved.extension.as_str(), |ext| {
                    ext.trim_start_matches('.')
                })
        })
    }

    /// Nearest `docshell.toml` in the working directory or its ancestors.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        cwd.ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }

    fn default_with_cwd() -> Self {
        Self::default_with_base(&std::env::current_dir().unwrap_or_default())
    }

    /// Defaults with `docs/` and `dist/` under `base`.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            build: BuildConfigRaw::default(),
            edit: None,
            sections: Vec::new(),
            community: Vec::new(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                output_dir: base.join("dist"),
                extension: DEFAULT_EXTENSION.to_owned(),
            },
            config_path: None,
        }
    }

    /// Parse, expand, resolve and validate one file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(&std::fs::read_to_string(path)?)?;

        // Expanded values may feed paths
        config.expand_env_vars()?;
        config.resolve_paths(path.parent().unwrap_or(Path::new(".")));
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            sections = config.sections.len(),
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Check field values. Runs on every loaded file.
    ///
    /// Slug format and uniqueness are left to the route registry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.docs_resolved.extension, "docs.extension")?;
        if let Some(ref edit) = self.edit {
            edit.validate()?;
        }
        for link in &self.community {
            require_non_empty(&link.title, "community.title")?;
            require_http_url(&link.href, "community.href")?;
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;

        if let Some(ref mut edit) = self.edit {
            edit.host = expand::expand_env(&edit.host, "edit.host")?;
            edit.repo = expand::expand_env(&edit.repo, "edit.repo")?;
            edit.branch = expand::expand_env(&edit.branch, "edit.branch")?;
        }

        for link in &mut self.community {
            link.href = expand::expand_env(&link.href, "community.href")?;
        }

        Ok(())
    }

    /// Anchor source and output directories at the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
            output_dir: resolve(self.build.output_dir.as_deref(), "dist"),
            extension: self
                .docs
                .extension
                .as_deref()
                .unwrap_or(DEFAULT_EXTENSION)
                .trim_start_matches('.')
                .to_owned(),
        };
    }
}
