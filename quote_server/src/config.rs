//! Configuration loading.
//!
//! The application config is read once at startup from a TOML file. The
//! version and description strings are taken from the crate metadata at
//! compile time (`CARGO_PKG_VERSION` / `CARGO_PKG_DESCRIPTION`), so only the
//! deployment-specific values live in the file. There are no environment
//! variable overrides.

use std::path::Path;

use serde::Deserialize;

use crate::error::ServerError;

/// Application configuration file contents.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// The `[app]` table.
    pub app: AppSection,
}

/// Deployment-specific settings under `[app]`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
    /// Human-facing application title (used in the OpenAPI document).
    pub title: String,
    /// Public hostname substituted into the plugin descriptor and the
    /// OpenAPI `info.servers` field (e.g., "https://quotes.example.com").
    pub plugin_hostname: String,
    /// Default listening port (the `--port` flag overrides it).
    pub port: u16,
    /// Path to the semicolon-delimited quote dataset.
    pub quotes_file: String,
    /// Directory served verbatim under `/static`.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Path to the plugin descriptor template.
    #[serde(default = "default_plugin_manifest")]
    pub plugin_manifest: String,
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_plugin_manifest() -> String {
    "ai-plugin.json".to_string()
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ServerError> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[app]
title = "Quote Machine"
plugin_hostname = "https://quotes.example.com"
port = 9000
quotes_file = "data/quotes.txt"
static_dir = "assets"
plugin_manifest = "descriptor.json"
"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.app.title, "Quote Machine");
        assert_eq!(config.app.plugin_hostname, "https://quotes.example.com");
        assert_eq!(config.app.port, 9000);
        assert_eq!(config.app.quotes_file, "data/quotes.txt");
        assert_eq!(config.app.static_dir, "assets");
        assert_eq!(config.app.plugin_manifest, "descriptor.json");
    }

    #[test]
    fn defaults_static_dir_and_manifest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[app]
title = "Quote Machine"
plugin_hostname = "https://quotes.example.com"
port = 8080
quotes_file = "quotes.txt"
"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.app.static_dir, "static");
        assert_eq!(config.app.plugin_manifest, "ai-plugin.json");
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = AppConfig::load("no/such/plugin.toml").unwrap_err();
        assert!(matches!(err, ServerError::Io(_)));
    }

    #[test]
    fn malformed_toml_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[app\ntitle = ").unwrap();
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }
}
