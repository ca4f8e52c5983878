//! Editor configuration.
//!
//! The configuration is shipped to the browser as JSON (see `/config.json`
//! on the dev server) and embedded in the server's TOML file as the
//! `[editor]` table. Every field has a default so a partial document works.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::tree::FileFilter;

/// Runtime configuration of the editor controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Prefix prepended to every API path (e.g. `https://docs.example.com`).
    /// Empty means same origin.
    #[serde(default)]
    pub api_base: String,

    /// Which family of document endpoints to use.
    #[serde(default)]
    pub endpoint_style: EndpointStyle,

    /// How strictly the file tree filters leaves.
    #[serde(default)]
    pub tree_filter: TreeFilter,

    /// File extensions (without the dot) treated as Markdown.
    #[serde(default = "default_markdown_extensions")]
    pub markdown_extensions: Vec<String>,

    /// Route the browser is sent to when the session is missing or rejected.
    #[serde(default = "default_login_route")]
    pub login_route: String,

    /// Local storage key holding the bearer token.
    #[serde(default = "default_token_key")]
    pub token_key: String,

    /// Local storage key holding the theme preference.
    #[serde(default = "default_theme_key")]
    pub theme_key: String,

    /// How long transient status messages stay visible.
    #[serde(default = "default_status_delay_ms")]
    pub status_delay_ms: u64,

    /// How long the outcome of a save stays visible.
    #[serde(default = "default_save_status_delay_ms")]
    pub save_status_delay_ms: u64,
}

/// Document endpoint family exposed by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndpointStyle {
    /// `/api/v1/documents/...`
    Documents,
    /// `/api/v1/project-docs/...`
    #[default]
    ProjectDocs,
}

impl EndpointStyle {
    /// Path segment used under `/api/v1/`.
    pub fn segment(self) -> &'static str {
        match self {
            EndpointStyle::Documents => "documents",
            EndpointStyle::ProjectDocs => "project-docs",
        }
    }
}

/// File tree filtering strictness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeFilter {
    /// Only surface files with a Markdown extension.
    #[default]
    Strict,
    /// Surface every file node.
    Lenient,
}

fn default_markdown_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

fn default_login_route() -> String {
    "/login".to_string()
}

fn default_token_key() -> String {
    "docuhub_token".to_string()
}

fn default_theme_key() -> String {
    "docuhub_theme".to_string()
}

fn default_status_delay_ms() -> u64 {
    3000
}

fn default_save_status_delay_ms() -> u64 {
    4000
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            endpoint_style: EndpointStyle::default(),
            tree_filter: TreeFilter::default(),
            markdown_extensions: default_markdown_extensions(),
            login_route: default_login_route(),
            token_key: default_token_key(),
            theme_key: default_theme_key(),
            status_delay_ms: default_status_delay_ms(),
            save_status_delay_ms: default_save_status_delay_ms(),
        }
    }
}

impl EditorConfig {
    /// Delay before a transient status message clears.
    pub fn status_delay(&self) -> Duration {
        Duration::from_millis(self.status_delay_ms)
    }

    /// Delay before the outcome of a save clears.
    pub fn save_status_delay(&self) -> Duration {
        Duration::from_millis(self.save_status_delay_ms)
    }

    /// Build the leaf filter described by this configuration.
    pub fn file_filter(&self) -> FileFilter {
        match self.tree_filter {
            TreeFilter::Strict => FileFilter::markdown(&self.markdown_extensions),
            TreeFilter::Lenient => FileFilter::any(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.endpoint_style, EndpointStyle::ProjectDocs);
        assert_eq!(config.tree_filter, TreeFilter::Strict);
        assert_eq!(config.login_route, "/login");
        assert_eq!(config.token_key, "docuhub_token");
        assert_eq!(config.status_delay(), Duration::from_secs(3));
        assert_eq!(config.save_status_delay(), Duration::from_secs(4));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "endpoint_style": "documents", "tree_filter": "lenient" }"#;
        let config: EditorConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.endpoint_style, EndpointStyle::Documents);
        assert_eq!(config.tree_filter, TreeFilter::Lenient);
        assert_eq!(config.markdown_extensions, vec!["md".to_string()]);
        assert_eq!(config.theme_key, "docuhub_theme");
    }

    #[test]
    fn test_endpoint_segment() {
        assert_eq!(EndpointStyle::Documents.segment(), "documents");
        assert_eq!(EndpointStyle::ProjectDocs.segment(), "project-docs");
    }

    #[test]
    fn test_file_filter_follows_strictness() {
        let mut config = EditorConfig::default();
        assert!(!config.file_filter().accepts("image.png"));

        config.tree_filter = TreeFilter::Lenient;
        assert!(config.file_filter().accepts("image.png"));
    }
}
