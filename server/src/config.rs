//! Server configuration loaded from TOML.

use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use docuhub_core::{EditorConfig, TreeFilter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "docuhub.toml";

/// Errors raised while loading the server configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Well-formed but unusable settings.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Contents of `docuhub.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to listen on.
    #[serde(default = "default_site_addr")]
    pub site_addr: SocketAddr,

    /// Directory holding the built site (`index.html`, `pkg/`).
    #[serde(default = "default_site_root")]
    pub site_root: PathBuf,

    /// Served verbatim as `/config.json`.
    #[serde(default)]
    pub editor: EditorConfig,
}

fn default_site_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

fn default_site_root() -> PathBuf {
    PathBuf::from("target/site")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            site_addr: default_site_addr(),
            site_root: default_site_root(),
            editor: EditorConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load and validate the configuration at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Like [`ServerConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => {
                log::warn!("{} not found, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, addr: Option<SocketAddr>, site_root: Option<PathBuf>) -> Self {
        if let Some(addr) = addr {
            self.site_addr = addr;
        }
        if let Some(site_root) = site_root {
            self.site_root = site_root;
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let editor = &self.editor;
        if !editor.login_route.starts_with('/') && !editor.login_route.contains("://") {
            return Err(ConfigError::invalid(format!(
                "editor.login_route must be a path or URL, got {:?}",
                editor.login_route
            )));
        }
        if editor.login_route == "/" {
            return Err(ConfigError::invalid(
                "editor.login_route must not be the editor's own route",
            ));
        }
        if editor.token_key.is_empty() || editor.theme_key.is_empty() {
            return Err(ConfigError::invalid("editor storage keys must not be empty"));
        }
        if editor.tree_filter == TreeFilter::Strict && editor.markdown_extensions.is_empty() {
            return Err(ConfigError::invalid(
                "editor.markdown_extensions is empty, strict filtering would hide every file",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use docuhub_core::EndpointStyle;

    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let config = ServerConfig::from_toml_str("").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.site_addr.port(), 3000);
        assert_eq!(config.editor.login_route, "/login");
    }

    #[test]
    fn test_editor_table() {
        let config = ServerConfig::from_toml_str(
            r#"
site_addr = "0.0.0.0:8080"
site_root = "dist"

[editor]
api_base = "https://docs.example.com"
endpoint_style = "documents"
tree_filter = "lenient"
status_delay_ms = 1500
"#,
        )
        .unwrap();

        assert_eq!(config.site_addr.port(), 8080);
        assert_eq!(config.site_root, PathBuf::from("dist"));
        assert_eq!(config.editor.api_base, "https://docs.example.com");
        assert_eq!(config.editor.endpoint_style, EndpointStyle::Documents);
        assert_eq!(config.editor.tree_filter, TreeFilter::Lenient);
        assert_eq!(config.editor.status_delay_ms, 1500);
        assert_eq!(config.editor.save_status_delay_ms, 4000);
    }

    #[test]
    fn test_rejects_strict_filter_without_extensions() {
        let err = ServerConfig::from_toml_str("[editor]\nmarkdown_extensions = []\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_relative_login_route() {
        let err = ServerConfig::from_toml_str("[editor]\nlogin_route = \"login\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Invalid configuration:"));
    }

    #[test]
    fn test_rejects_root_login_route() {
        let err = ServerConfig::from_toml_str("[editor]\nlogin_route = \"/\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = ServerConfig::from_toml_str("site_addr = ").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docuhub.toml");

        let err = ServerConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
        assert_eq!(
            ServerConfig::load_or_default(&path).unwrap(),
            ServerConfig::default()
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docuhub.toml");
        std::fs::write(&path, "site_root = \"public\"\n").unwrap();

        let config = ServerConfig::load(&path).unwrap();
        assert_eq!(config.site_root, PathBuf::from("public"));
    }

    #[test]
    fn test_overrides() {
        let addr: SocketAddr = "127.0.0.1:4000".parse().unwrap();
        let config = ServerConfig::default().with_overrides(Some(addr), None);
        assert_eq!(config.site_addr, addr);
        assert_eq!(config.site_root, PathBuf::from("target/site"));
    }
}
